//! Canonical, recursive description of Go types.
//!
//! A [`TypeRef`] is what the external introspection step hands us for every
//! parameter and result. It renders two ways:
//!
//! - [`TypeRef::render`] qualifies named types relative to the package the
//!   code is generated into (`Request` inside `rpc`, `rpc.Request` elsewhere).
//! - [`TypeRef::qualified`] always qualifies. This is the canonical string
//!   used when comparing signatures.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::signature::MethodSignature;

/// Go's predeclared basic kinds.
///
/// `byte` and `rune` are accepted as aliases but, like runtime type
/// information, always render as `uint8` and `int32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    #[serde(alias = "rune")]
    Int32,
    Int64,
    Uint,
    #[serde(alias = "byte")]
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    #[serde(rename = "unsafe.Pointer")]
    UnsafePointer,
}

impl BasicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
            BasicKind::UnsafePointer => "unsafe.Pointer",
        }
    }
}

/// Channel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChanDir {
    #[default]
    Both,
    Recv,
    Send,
}

impl ChanDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChanDir::Both => "chan",
            ChanDir::Recv => "<-chan",
            ChanDir::Send => "chan<-",
        }
    }
}

/// A field of an anonymous struct type. An empty name marks an embedded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    Primitive {
        name: BasicKind,
    },
    /// A declared, non-interface type. `methods` is its method set without
    /// receivers, as far as the introspection step reported it.
    Named {
        #[serde(default)]
        package: String,
        name: String,
        #[serde(default)]
        methods: Vec<MethodSignature>,
    },
    Pointer {
        elem: Box<TypeRef>,
    },
    Slice {
        elem: Box<TypeRef>,
    },
    Array {
        len: u64,
        elem: Box<TypeRef>,
    },
    Map {
        key: Box<TypeRef>,
        value: Box<TypeRef>,
    },
    Channel {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<TypeRef>,
    },
    Function {
        #[serde(default)]
        inputs: Vec<TypeRef>,
        #[serde(default)]
        outputs: Vec<TypeRef>,
        #[serde(default)]
        variadic: bool,
    },
    Struct {
        #[serde(default)]
        fields: Vec<StructField>,
    },
    /// Named (`error`, `context.Context`) or anonymous (`interface{}`)
    /// interface types. Anonymous interfaces have an empty `name`.
    Interface {
        #[serde(default)]
        package: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        methods: Vec<MethodSignature>,
    },
}

impl TypeRef {
    pub fn primitive(name: BasicKind) -> Self {
        TypeRef::Primitive { name }
    }

    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef::Named {
            package: package.into(),
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// A named type together with its (receiver-less) method set.
    pub fn named_with_methods(
        package: impl Into<String>,
        name: impl Into<String>,
        methods: Vec<MethodSignature>,
    ) -> Self {
        TypeRef::Named {
            package: package.into(),
            name: name.into(),
            methods,
        }
    }

    pub fn pointer(elem: TypeRef) -> Self {
        TypeRef::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeRef) -> Self {
        TypeRef::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u64, elem: TypeRef) -> Self {
        TypeRef::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn channel(dir: ChanDir, elem: TypeRef) -> Self {
        TypeRef::Channel {
            dir,
            elem: Box::new(elem),
        }
    }

    pub fn function(inputs: Vec<TypeRef>, outputs: Vec<TypeRef>) -> Self {
        TypeRef::Function {
            inputs,
            outputs,
            variadic: false,
        }
    }

    pub fn empty_struct() -> Self {
        TypeRef::Struct { fields: Vec::new() }
    }

    /// `interface{}`
    pub fn empty_interface() -> Self {
        TypeRef::Interface {
            package: String::new(),
            name: String::new(),
            methods: Vec::new(),
        }
    }

    pub fn interface(
        package: impl Into<String>,
        name: impl Into<String>,
        methods: Vec<MethodSignature>,
    ) -> Self {
        TypeRef::Interface {
            package: package.into(),
            name: name.into(),
            methods,
        }
    }

    /// The predeclared `error` interface.
    pub fn error() -> Self {
        TypeRef::interface(
            "",
            "error",
            vec![MethodSignature::new(
                "Error",
                vec![],
                vec![TypeRef::primitive(BasicKind::String)],
            )],
        )
    }

    /// Name of the type relative to `current_package`.
    pub fn render(&self, current_package: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_type(&mut out, Some(current_package));
        out
    }

    /// Fully package-qualified name of the type.
    pub fn qualified(&self) -> String {
        let mut out = String::new();
        let _ = self.write_type(&mut out, None);
        out
    }

    /// Package qualifier and local name of the type.
    ///
    /// Unnamed types have no package and use their qualified rendering as
    /// the name, e.g. `("", "map[string]*rpc.Request")`.
    pub fn package_and_name(&self) -> (String, String) {
        match self {
            TypeRef::Named { package, name, .. } => (package.clone(), name.clone()),
            TypeRef::Interface { package, name, .. } if !name.is_empty() => {
                (package.clone(), name.clone())
            }
            other => (String::new(), other.qualified()),
        }
    }

    /// Methods callable on a value of this type, without receivers.
    pub fn method_set(&self) -> &[MethodSignature] {
        match self {
            TypeRef::Named { methods, .. } | TypeRef::Interface { methods, .. } => methods,
            TypeRef::Pointer { elem } => match elem.as_ref() {
                TypeRef::Named { methods, .. } => methods,
                _ => &[],
            },
            _ => &[],
        }
    }

    pub(crate) fn write_type(&self, out: &mut impl Write, current: Option<&str>) -> fmt::Result {
        match self {
            TypeRef::Primitive { name } => out.write_str(name.as_str()),
            TypeRef::Named { package, name, .. } => write_name(out, package, name, current),
            TypeRef::Interface {
                package,
                name,
                methods,
            } => {
                if !name.is_empty() {
                    return write_name(out, package, name, current);
                }
                if methods.is_empty() {
                    return out.write_str("interface{}");
                }
                out.write_str("interface{ ")?;
                for (i, method) in methods.iter().enumerate() {
                    if i > 0 {
                        out.write_str("; ")?;
                    }
                    out.write_str(&method.name)?;
                    method.write_tail(out, current)?;
                }
                out.write_str(" }")
            }
            TypeRef::Pointer { elem } => {
                out.write_char('*')?;
                elem.write_type(out, current)
            }
            TypeRef::Slice { elem } => {
                out.write_str("[]")?;
                elem.write_type(out, current)
            }
            TypeRef::Array { len, elem } => {
                write!(out, "[{}]", len)?;
                elem.write_type(out, current)
            }
            TypeRef::Map { key, value } => {
                out.write_str("map[")?;
                key.write_type(out, current)?;
                out.write_char(']')?;
                value.write_type(out, current)
            }
            TypeRef::Channel { dir, elem } => {
                write!(out, "{} ", dir.as_str())?;
                // `chan (<-chan T)` needs the parentheses to bind the inner arrow.
                let needs_parens = *dir == ChanDir::Both
                    && matches!(
                        elem.as_ref(),
                        TypeRef::Channel {
                            dir: ChanDir::Recv,
                            ..
                        }
                    );
                if needs_parens {
                    out.write_char('(')?;
                    elem.write_type(out, current)?;
                    out.write_char(')')
                } else {
                    elem.write_type(out, current)
                }
            }
            TypeRef::Function {
                inputs,
                outputs,
                variadic,
            } => {
                out.write_str("func")?;
                write_tuple(out, inputs, outputs, *variadic, current)
            }
            TypeRef::Struct { fields } => {
                if fields.is_empty() {
                    return out.write_str("struct{}");
                }
                out.write_str("struct{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        out.write_str("; ")?;
                    }
                    if !field.name.is_empty() {
                        write!(out, "{} ", field.name)?;
                    }
                    field.ty.write_type(out, current)?;
                }
                out.write_str(" }")
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_type(f, None)
    }
}

fn write_name(
    out: &mut impl Write,
    package: &str,
    name: &str,
    current: Option<&str>,
) -> fmt::Result {
    if package.is_empty() || current == Some(package) {
        out.write_str(name)
    } else {
        write!(out, "{}.{}", package, name)
    }
}

/// Writes `(<inputs>)` followed by the results: nothing, ` T`, or ` (T, U)`.
pub(crate) fn write_tuple(
    out: &mut impl Write,
    inputs: &[TypeRef],
    outputs: &[TypeRef],
    variadic: bool,
    current: Option<&str>,
) -> fmt::Result {
    out.write_char('(')?;
    let last = inputs.len().saturating_sub(1);
    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_param_type(out, input, variadic && i == last, current)?;
    }
    out.write_char(')')?;
    match outputs {
        [] => Ok(()),
        [single] => {
            out.write_char(' ')?;
            single.write_type(out, current)
        }
        many => {
            out.write_str(" (")?;
            for (i, output) in many.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                output.write_type(out, current)?;
            }
            out.write_char(')')
        }
    }
}

/// Writes a parameter type; the final parameter of a variadic function is
/// declared as `[]T` and written as `...T`.
pub(crate) fn write_param_type(
    out: &mut impl Write,
    ty: &TypeRef,
    variadic: bool,
    current: Option<&str>,
) -> fmt::Result {
    match (variadic, ty) {
        (true, TypeRef::Slice { elem }) => {
            out.write_str("...")?;
            elem.write_type(out, current)
        }
        _ => ty.write_type(out, current),
    }
}
