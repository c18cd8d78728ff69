//! Method signatures, method sets and declared-type descriptors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Write};

use super::errors::{Error, Result};
use super::types::{write_tuple, TypeRef};

/// A method name with its ordered input and output types.
///
/// Inputs of methods taken from a concrete type's method table start with
/// the receiver; see [`MethodSignature::without_receiver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<TypeRef>,
    #[serde(default)]
    pub outputs: Vec<TypeRef>,
    /// The final input is declared `...T` (and described as `[]T`).
    #[serde(default)]
    pub variadic: bool,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, inputs: Vec<TypeRef>, outputs: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
            variadic: false,
        }
    }

    /// Marks the final input as variadic.
    pub fn into_variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Drops exactly the first input, the receiver of a method-table entry.
    pub fn without_receiver(&self) -> Self {
        Self {
            name: self.name.clone(),
            inputs: self.inputs.iter().skip(1).cloned().collect(),
            outputs: self.outputs.clone(),
            variadic: self.variadic,
        }
    }

    /// True when both signatures have the same name and the same canonical
    /// input and output types, position by position.
    pub fn same_shape(&self, other: &MethodSignature) -> bool {
        fn canonical(types: &[TypeRef]) -> Vec<String> {
            types.iter().map(TypeRef::qualified).collect()
        }
        self.name == other.name
            && self.variadic == other.variadic
            && canonical(&self.inputs) == canonical(&other.inputs)
            && canonical(&self.outputs) == canonical(&other.outputs)
    }

    /// Writes `(<inputs>) <outputs>`, the part of a method spec after its name.
    pub(crate) fn write_tail(&self, out: &mut impl Write, current: Option<&str>) -> fmt::Result {
        write_tuple(out, &self.inputs, &self.outputs, self.variadic, current)
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        self.write_tail(f, None)
    }
}

/// Methods keyed by name, iterated in name order (the order runtime type
/// inspection reports them in).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSet {
    methods: BTreeMap<String, MethodSignature>,
}

impl MethodSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set, rejecting empty and duplicate method names and variadic
    /// methods whose final input is not `[]T`.
    pub fn from_methods(methods: impl IntoIterator<Item = MethodSignature>) -> Result<Self> {
        let mut set = Self::new();
        for method in methods {
            set.insert(method)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, method: MethodSignature) -> Result<()> {
        if method.name.is_empty() {
            return Err(Error::descriptor("method with an empty name"));
        }
        if method.variadic && !matches!(method.inputs.last(), Some(TypeRef::Slice { .. })) {
            return Err(Error::descriptor(format!(
                "variadic method `{}` must end with a slice input",
                method.name
            )));
        }
        if self.methods.contains_key(&method.name) {
            return Err(Error::descriptor(format!(
                "duplicate method `{}`",
                method.name
            )));
        }
        self.methods.insert(method.name.clone(), method);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodSignature> {
        self.methods.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// The same set with the receiver stripped from every method.
    pub fn without_receivers(&self) -> Self {
        Self {
            methods: self
                .methods
                .iter()
                .map(|(name, m)| (name.clone(), m.without_receiver()))
                .collect(),
        }
    }
}

/// A declared type as resolved by the introspection step: the interface to
/// implement, or an existing type that should come to implement it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Package name (not import path) the type is declared in.
    pub package: String,
    pub name: String,
    /// Methods are taken from `*T` rather than `T`.
    pub pointer: bool,
    pub methods: MethodSet,
}

impl TypeDescriptor {
    pub fn new(package: impl Into<String>, name: impl Into<String>, methods: MethodSet) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            pointer: false,
            methods,
        }
    }

    pub fn as_pointer(mut self) -> Self {
        self.pointer = true;
        self
    }

    /// Receiver type name, `*`-prefixed for pointer descriptors.
    pub fn impl_name(&self) -> String {
        if self.pointer {
            format!("*{}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// `pkg.Name`, or just `Name` for universe types.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}
