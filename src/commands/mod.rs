//! Command implementations for the goimpl binary.
//!
//! - **generate**: resolve the interface and target type from a descriptor
//!   catalog and emit the stub implementation

pub mod generate;

pub use generate::{build_options, handle_generate, select_reformatter};
