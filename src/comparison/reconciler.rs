//! Matching the required method set against an existing implementation.

use std::collections::BTreeMap;
use tracing::debug;

use super::diff::diff;
use crate::core::{Error, GenerationOptions, MethodSet, Result};

/// What to do with one required method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Not implemented yet: generate it.
    Missing,
    /// Implemented with the wrong signature: regenerate it, explaining why.
    Mismatched { diff: String },
    /// Implemented correctly: never overwrite it.
    Satisfied,
}

/// Per-method decisions, keyed by method name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub decisions: BTreeMap<String, Decision>,
}

impl Reconciliation {
    pub fn decision(&self, name: &str) -> Option<&Decision> {
        self.decisions.get(name)
    }

    /// Satisfied methods go to the blacklist; mismatch descriptions are
    /// appended to the method's comment, after a space if one is already set.
    pub fn apply(&self, opts: &mut GenerationOptions) {
        for (name, decision) in &self.decisions {
            match decision {
                Decision::Missing => {}
                Decision::Satisfied => {
                    opts.method_blacklist.insert(name.clone());
                }
                Decision::Mismatched { diff } => {
                    let comment = opts.comments.entry(name.clone()).or_default();
                    if !comment.is_empty() {
                        comment.push(' ');
                    }
                    comment.push_str(diff);
                }
            }
        }
    }
}

/// Classifies every required method against `existing`.
///
/// `existing` is a method table of a concrete type, so each of its methods
/// starts with the receiver; exactly that first input is dropped before
/// comparing. Without an existing set nothing is decided and every required
/// method is generated.
pub fn reconcile(required: &MethodSet, existing: Option<&MethodSet>) -> Reconciliation {
    let Some(existing) = existing else {
        return Reconciliation::default();
    };
    let existing = existing.without_receivers();

    let decisions = required
        .iter()
        .map(|want| {
            let decision = match existing.get(&want.name) {
                None => Decision::Missing,
                Some(have) => {
                    let d = diff(have, want);
                    if d.is_empty() {
                        Decision::Satisfied
                    } else {
                        Decision::Mismatched { diff: d }
                    }
                }
            };
            debug!(method = %want.name, ?decision, "reconciled method");
            (want.name.clone(), decision)
        })
        .collect();

    Reconciliation { decisions }
}

/// Resolves the target package and type from `opts.existing`, if set,
/// folding the reconciliation result into the blacklist and comments.
///
/// An existing-type descriptor determines both the package and the
/// implementation name, so setting either explicitly as well is an error.
pub fn resolve_existing(
    opts: &mut GenerationOptions,
    required: &MethodSet,
) -> Result<Option<Reconciliation>> {
    let Some(existing) = opts.existing.as_ref() else {
        return Ok(None);
    };
    if !opts.impl_name.is_empty() {
        return Err(Error::config(
            "impl_name",
            "only one of ImplName and Existing should be set",
        ));
    }
    if !opts.pkg_name.is_empty() {
        return Err(Error::config(
            "pkg_name",
            "only one of PkgName and Existing should be set",
        ));
    }

    let reconciliation = reconcile(required, Some(&existing.methods));
    let pkg_name = existing.package.clone();
    let impl_name = existing.impl_name();

    reconciliation.apply(opts);
    opts.pkg_name = pkg_name;
    opts.impl_name = impl_name;
    Ok(Some(reconciliation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasicKind, MethodSignature, TypeDescriptor, TypeRef};
    use std::collections::BTreeSet;

    fn codec() -> TypeRef {
        TypeRef::named("goimpl", "AlmostClientCodec")
    }

    fn required() -> MethodSet {
        MethodSet::from_methods(vec![
            MethodSignature::new("Close", vec![], vec![TypeRef::error()]),
            MethodSignature::new(
                "ReadResponseBody",
                vec![TypeRef::empty_interface()],
                vec![TypeRef::error()],
            ),
            MethodSignature::new(
                "ReadResponseHeader",
                vec![TypeRef::pointer(TypeRef::named("rpc", "Response"))],
                vec![TypeRef::error()],
            ),
        ])
        .unwrap()
    }

    fn existing() -> MethodSet {
        MethodSet::from_methods(vec![
            MethodSignature::new(
                "Close",
                vec![codec(), TypeRef::primitive(BasicKind::Int)],
                vec![TypeRef::error()],
            ),
            MethodSignature::new(
                "ReadResponseHeader",
                vec![codec(), TypeRef::pointer(TypeRef::named("rpc", "Response"))],
                vec![TypeRef::error()],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_existing_set_decides_nothing() {
        let r = reconcile(&required(), None);
        assert!(r.decisions.is_empty());

        let mut opts = GenerationOptions::new("pkg", "Impl");
        opts.comments.insert("Close".into(), "keep me".into());
        r.apply(&mut opts);
        assert!(opts.method_blacklist.is_empty());
        assert_eq!(opts.comments.get("Close").map(String::as_str), Some("keep me"));
    }

    #[test]
    fn test_classifies_missing_mismatched_and_satisfied() {
        let r = reconcile(&required(), Some(&existing()));
        assert_eq!(
            r.decision("Close"),
            Some(&Decision::Mismatched {
                diff: "number of inputs: had 1, want 0".into()
            })
        );
        assert_eq!(r.decision("ReadResponseBody"), Some(&Decision::Missing));
        assert_eq!(r.decision("ReadResponseHeader"), Some(&Decision::Satisfied));
    }

    #[test]
    fn test_apply_appends_diff_to_existing_comment() {
        let r = reconcile(&required(), Some(&existing()));
        let mut opts = GenerationOptions::default();
        opts.comments.insert("Close".into(), "TODO(codec):".into());
        r.apply(&mut opts);
        assert_eq!(
            opts.comments.get("Close").map(String::as_str),
            Some("TODO(codec): number of inputs: had 1, want 0")
        );
        assert!(!opts.comments.contains_key("ReadResponseBody"));
        assert!(opts.method_blacklist.contains("ReadResponseHeader"));
        assert!(!opts.method_blacklist.contains("Close"));
    }

    #[test]
    fn test_resolve_existing_rejects_explicit_impl_name() {
        let mut opts = GenerationOptions::for_existing(TypeDescriptor::new(
            "goimpl",
            "AlmostClientCodec",
            existing(),
        ));
        opts.impl_name = "*Impl".into();
        let err = resolve_existing(&mut opts, &required()).unwrap_err();
        assert!(err.is_config_error());
        assert!(opts.method_blacklist.is_empty());
    }

    #[test]
    fn test_resolve_existing_rejects_explicit_pkg_name() {
        let mut opts = GenerationOptions::for_existing(TypeDescriptor::new(
            "goimpl",
            "AlmostClientCodec",
            existing(),
        ));
        opts.pkg_name = "pkg".into();
        assert!(resolve_existing(&mut opts, &required())
            .unwrap_err()
            .is_config_error());
    }

    #[test]
    fn test_resolve_existing_derives_names_from_pointer_descriptor() {
        let descriptor =
            TypeDescriptor::new("goimpl", "AlmostClientCodec", existing()).as_pointer();
        let mut opts = GenerationOptions::for_existing(descriptor);
        let r = resolve_existing(&mut opts, &required()).unwrap();
        assert!(r.is_some());
        assert_eq!(opts.pkg_name, "goimpl");
        assert_eq!(opts.impl_name, "*AlmostClientCodec");
    }

    #[test]
    fn test_fully_implemented_type_blacklists_every_method() {
        let receiver = TypeRef::pointer(codec());
        let complete = MethodSet::from_methods(required().iter().map(|m| {
            let mut inputs = vec![receiver.clone()];
            inputs.extend(m.inputs.iter().cloned());
            MethodSignature::new(m.name.clone(), inputs, m.outputs.clone())
        }))
        .unwrap();
        let descriptor = TypeDescriptor::new("goimpl", "AlmostClientCodec", complete).as_pointer();
        let mut opts = GenerationOptions::for_existing(descriptor);
        opts.comments.insert("Close".into(), "kept as is".into());
        let comments_before = opts.comments.clone();

        resolve_existing(&mut opts, &required()).unwrap();

        let expected: BTreeSet<String> = required().names().map(String::from).collect();
        assert_eq!(opts.method_blacklist, expected);
        assert_eq!(opts.comments, comments_before);

        let text = crate::codegen::assemble(&required(), &opts);
        assert!(!text.contains("func "));
    }

    #[test]
    fn test_resolve_without_existing_is_a_no_op() {
        let mut opts = GenerationOptions::new("pkg", "*Impl");
        assert!(resolve_existing(&mut opts, &required()).unwrap().is_none());
        assert_eq!(opts.impl_name, "*Impl");
    }
}
