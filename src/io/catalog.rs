//! Descriptor catalogs: the resolved types handed over by the external
//! introspection step, serialized as JSON.
//!
//! ```json
//! { "types": [
//!     { "package": "io", "name": "Closer", "methods": [
//!         { "name": "Close", "outputs": [ { "kind": "interface", "name": "error",
//!           "methods": [ { "name": "Error", "outputs": [ { "kind": "primitive", "name": "string" } ] } ] } ] }
//!     ] }
//! ] }
//! ```
//!
//! Interface entries list methods without receivers. Concrete types list
//! their method table, where each method's first input is the receiver.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Error, MethodSet, MethodSignature, Result, TypeDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub types: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub package: String,
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
    /// Method table of `*T`, when it differs from that of `T`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer_methods: Option<Vec<MethodSignature>>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::descriptor_in(format!("invalid catalog: {}", e), path.to_path_buf())
        })
    }

    fn find(&self, package: &str, name: &str) -> Option<&CatalogEntry> {
        self.types
            .iter()
            .find(|t| t.name == name && (package.is_empty() || t.package == package))
    }

    /// Looks up `package.name`; an empty package matches any package.
    pub fn resolve(&self, package: &str, name: &str, pointer: bool) -> Result<TypeDescriptor> {
        let entry = self.find(package, name).ok_or_else(|| {
            let wanted = if package.is_empty() {
                name.to_string()
            } else {
                format!("{}.{}", package, name)
            };
            Error::descriptor(format!("type {} not found in catalog", wanted))
        })?;

        let methods = match (&entry.pointer_methods, pointer) {
            (Some(pointer_methods), true) => pointer_methods.clone(),
            _ => entry.methods.clone(),
        };
        let methods = MethodSet::from_methods(methods).map_err(|e| {
            Error::descriptor(format!("{}.{}: {}", entry.package, entry.name, e))
        })?;

        let descriptor = TypeDescriptor::new(entry.package.clone(), entry.name.clone(), methods);
        Ok(if pointer {
            descriptor.as_pointer()
        } else {
            descriptor
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "types": [
            {
                "package": "fmt",
                "name": "Stringer",
                "methods": [
                    { "name": "String", "outputs": [ { "kind": "primitive", "name": "string" } ] }
                ]
            },
            {
                "package": "main",
                "name": "Name",
                "methods": [],
                "pointer_methods": [
                    {
                        "name": "String",
                        "inputs": [ { "kind": "pointer", "elem": { "kind": "named", "package": "main", "name": "Name" } } ],
                        "outputs": [ { "kind": "primitive", "name": "string" } ]
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_resolve_interface() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let stringer = catalog.resolve("fmt", "Stringer", false).unwrap();
        assert_eq!(stringer.qualified_name(), "fmt.Stringer");
        assert_eq!(stringer.methods.names().collect::<Vec<_>>(), vec!["String"]);
    }

    #[test]
    fn test_resolve_pointer_method_table() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let value = catalog.resolve("main", "Name", false).unwrap();
        assert!(value.methods.is_empty());
        let pointer = catalog.resolve("", "Name", true).unwrap();
        assert_eq!(pointer.impl_name(), "*Name");
        assert_eq!(pointer.methods.len(), 1);
    }

    #[test]
    fn test_unknown_type_is_a_descriptor_error() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let err = catalog.resolve("io", "Reader", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Descriptor error: type io.Reader not found in catalog"
        );
    }

    #[test]
    fn test_duplicate_methods_are_rejected() {
        let json = r#"{ "types": [ { "package": "p", "name": "I", "methods": [
            { "name": "M" }, { "name": "M" } ] } ] }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.resolve("p", "I", false).is_err());
    }
}
