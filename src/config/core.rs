use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::core::GenerationOptions;

/// Root configuration structure for goimpl (`.goimpl.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GoimplConfig {
    /// Generation defaults
    #[serde(default)]
    pub generate: Option<GenerateConfig>,

    /// Comments placed above generated methods, keyed by method name
    #[serde(default)]
    pub comments: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateConfig {
    /// Emit named return values
    #[serde(default)]
    pub named_returns: bool,

    /// Run goimports on the generated code
    #[serde(default = "default_goimports")]
    pub goimports: bool,

    /// Explicit goimports binary; looked up on PATH when unset
    #[serde(default)]
    pub goimports_path: Option<PathBuf>,

    /// Imports always added to the generated file
    #[serde(default)]
    pub extra_imports: Vec<String>,

    /// Methods that are never generated
    #[serde(default)]
    pub blacklist: BTreeSet<String>,
}

fn default_goimports() -> bool {
    true
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            named_returns: false,
            goimports: default_goimports(),
            goimports_path: None,
            extra_imports: Vec::new(),
            blacklist: BTreeSet::new(),
        }
    }
}

impl GoimplConfig {
    pub fn generate(&self) -> GenerateConfig {
        self.generate.clone().unwrap_or_default()
    }

    /// Generation options seeded from this configuration.
    pub fn seed_options(&self) -> GenerationOptions {
        let generate = self.generate();
        GenerationOptions {
            no_named_return_values: !generate.named_returns,
            no_go_imports: !generate.goimports,
            extra: generate.extra_imports,
            method_blacklist: generate.blacklist,
            comments: self.comments.clone().unwrap_or_default(),
            ..GenerationOptions::default()
        }
    }
}
