//! Data model: type descriptors, signatures, method sets and errors.

pub mod capability;
pub mod errors;
pub mod options;
pub mod signature;
pub mod types;

pub use capability::{context_type, Capability};
pub use errors::{Error, Result};
pub use options::GenerationOptions;
pub use signature::{MethodSet, MethodSignature, TypeDescriptor};
pub use types::{BasicKind, ChanDir, StructField, TypeRef};
