//! Structural interface satisfaction for the two capabilities the argument
//! namer cares about.

use super::signature::MethodSignature;
use super::types::{BasicKind, ChanDir, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `interface { Error() string }`
    Error,
    /// `context.Context`
    Context,
}

impl Capability {
    /// Methods a type must have to satisfy the capability.
    pub fn required_methods(&self) -> Vec<MethodSignature> {
        match self {
            Capability::Error => vec![MethodSignature::new(
                "Error",
                vec![],
                vec![TypeRef::primitive(BasicKind::String)],
            )],
            Capability::Context => vec![
                MethodSignature::new(
                    "Deadline",
                    vec![],
                    vec![
                        TypeRef::named("time", "Time"),
                        TypeRef::primitive(BasicKind::Bool),
                    ],
                ),
                MethodSignature::new(
                    "Done",
                    vec![],
                    vec![TypeRef::channel(ChanDir::Recv, TypeRef::empty_struct())],
                ),
                MethodSignature::new("Err", vec![], vec![TypeRef::error()]),
                MethodSignature::new(
                    "Value",
                    vec![TypeRef::empty_interface()],
                    vec![TypeRef::empty_interface()],
                ),
            ],
        }
    }

    /// True if `ty`'s method set contains every required method with an
    /// identical signature.
    pub fn is_satisfied_by(&self, ty: &TypeRef) -> bool {
        let methods = ty.method_set();
        self.required_methods()
            .iter()
            .all(|want| methods.iter().any(|have| have.same_shape(want)))
    }
}

/// `context.Context` as a named interface type.
pub fn context_type() -> TypeRef {
    TypeRef::interface("context", "Context", Capability::Context.required_methods())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_interface_satisfies_error() {
        assert!(Capability::Error.is_satisfied_by(&TypeRef::error()));
        assert!(!Capability::Context.is_satisfied_by(&TypeRef::error()));
    }

    #[test]
    fn test_concrete_error_type_through_pointer() {
        let path_error = TypeRef::named_with_methods(
            "fs",
            "PathError",
            vec![
                MethodSignature::new(
                    "Error",
                    vec![],
                    vec![TypeRef::primitive(BasicKind::String)],
                ),
                MethodSignature::new("Unwrap", vec![], vec![TypeRef::error()]),
            ],
        );
        assert!(Capability::Error.is_satisfied_by(&TypeRef::pointer(path_error)));
    }

    #[test]
    fn test_context_satisfies_context() {
        assert!(Capability::Context.is_satisfied_by(&context_type()));
    }

    #[test]
    fn test_wrong_result_type_does_not_satisfy() {
        let almost = TypeRef::named_with_methods(
            "pkg",
            "Almost",
            vec![MethodSignature::new(
                "Error",
                vec![],
                vec![TypeRef::primitive(BasicKind::Int)],
            )],
        );
        assert!(!Capability::Error.is_satisfied_by(&almost));
        assert!(!Capability::Error.is_satisfied_by(&TypeRef::empty_interface()));
    }
}
