//! `.goimpl.toml` configuration.
//!
//! Values here seed the generation options; command-line flags override
//! them.

mod core;
mod loader;

pub use self::core::{GenerateConfig, GoimplConfig};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
