// Export modules for library usage
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod common;
pub mod comparison;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod naming;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    BasicKind, Capability, ChanDir, Error, GenerationOptions, MethodSet, MethodSignature, Result,
    StructField, TypeDescriptor, TypeRef,
};

pub use crate::comparison::{diff, reconcile, Decision, Reconciliation};

pub use crate::naming::{name_arguments, receiver_name, ArgumentNames, Scope};

pub use crate::codegen::{assemble, render, StubDocument};

pub use crate::formatting::{GoImports, Passthrough, Reformatter};

pub use crate::io::{Catalog, CatalogEntry};

pub use crate::pipeline::{generate, generate_source};
