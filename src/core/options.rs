use std::collections::{BTreeMap, BTreeSet};

use super::signature::TypeDescriptor;

/// Code generation options for a single `generate` call.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Target package. Defaults to the interface's package.
    pub pkg_name: String,
    /// Type (struct) that implements the interface, possibly `*`-prefixed.
    pub impl_name: String,
    /// Existing type that should come to implement the interface. Excludes
    /// `pkg_name` and `impl_name`, which are derived from it.
    pub existing: Option<TypeDescriptor>,
    /// Emit result types only. The generated code may not compile then.
    pub no_named_return_values: bool,
    /// Methods that are never generated.
    pub method_blacklist: BTreeSet<String>,
    /// Comments placed above the generated methods.
    pub comments: BTreeMap<String, String>,
    /// Skip the external reformat / import-fixing pass.
    pub no_go_imports: bool,
    /// Imports always emitted after `"errors"`.
    pub extra: Vec<String>,
}

impl GenerationOptions {
    /// Options that generate `impl_name` into `pkg_name`.
    pub fn new(pkg_name: impl Into<String>, impl_name: impl Into<String>) -> Self {
        Self {
            pkg_name: pkg_name.into(),
            impl_name: impl_name.into(),
            ..Self::default()
        }
    }

    /// Options that complete an existing type.
    pub fn for_existing(existing: TypeDescriptor) -> Self {
        Self {
            existing: Some(existing),
            ..Self::default()
        }
    }
}
