//! Positional diff between two method signatures.
//!
//! Inputs and outputs are compared independently. A length mismatch is
//! reported on its own (`number of inputs: had 1, want 0`); otherwise every
//! differing position is reported (``inputs[0]: had `int` want `string` ``).
//! Findings are joined with `"; "`, inputs first, then outputs, then the
//! variadic flag.

use crate::core::{MethodSignature, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgList {
    Inputs,
    Outputs,
}

impl ArgList {
    fn label(&self) -> &'static str {
        match self {
            ArgList::Inputs => "inputs",
            ArgList::Outputs => "outputs",
        }
    }
}

/// Describes how `have` differs from `want`; empty if the signatures match.
///
/// Both signatures are expected to carry the same name and no receiver.
pub fn diff(have: &MethodSignature, want: &MethodSignature) -> String {
    if have.name != want.name {
        return format!("names are different: {} != {}", have.name, want.name);
    }
    let groups = [
        diff_list(ArgList::Inputs, &have.inputs, &want.inputs),
        diff_list(ArgList::Outputs, &have.outputs, &want.outputs),
        diff_variadic(have.variadic, want.variadic),
    ];
    groups
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

fn diff_list(list: ArgList, have: &[TypeRef], want: &[TypeRef]) -> String {
    if have.len() != want.len() {
        return format!(
            "number of {}: had {}, want {}",
            list.label(),
            have.len(),
            want.len()
        );
    }
    have.iter()
        .zip(want)
        .enumerate()
        .filter_map(|(i, (h, w))| {
            let (h, w) = (h.qualified(), w.qualified());
            (h != w).then(|| format!("{}[{}]: had `{}` want `{}`", list.label(), i, h, w))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

fn diff_variadic(have: bool, want: bool) -> String {
    if have == want {
        String::new()
    } else {
        format!("variadic: had {}, want {}", have, want)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BasicKind;

    fn int() -> TypeRef {
        TypeRef::primitive(BasicKind::Int)
    }

    fn request() -> TypeRef {
        TypeRef::pointer(TypeRef::named("rpc", "Request"))
    }

    #[test]
    fn test_identical_signatures_have_empty_diff() {
        let m = MethodSignature::new("Read", vec![int()], vec![int(), TypeRef::error()]);
        assert_eq!(diff(&m, &m), "");
    }

    #[test]
    fn test_input_count_mismatch() {
        let have = MethodSignature::new("Close", vec![int()], vec![TypeRef::error()]);
        let want = MethodSignature::new("Close", vec![], vec![TypeRef::error()]);
        assert_eq!(diff(&have, &want), "number of inputs: had 1, want 0");
    }

    #[test]
    fn test_swapped_inputs_cite_both_positions() {
        let have = MethodSignature::new(
            "WriteRequest",
            vec![TypeRef::empty_interface(), request()],
            vec![TypeRef::error()],
        );
        let want = MethodSignature::new(
            "WriteRequest",
            vec![request(), TypeRef::empty_interface()],
            vec![TypeRef::error()],
        );
        assert_eq!(
            diff(&have, &want),
            "inputs[0]: had `interface{}` want `*rpc.Request`; \
             inputs[1]: had `*rpc.Request` want `interface{}`"
        );
    }

    #[test]
    fn test_input_and_output_groups_are_joined() {
        let have = MethodSignature::new("Get", vec![int()], vec![int()]);
        let want = MethodSignature::new(
            "Get",
            vec![TypeRef::primitive(BasicKind::String)],
            vec![int(), TypeRef::error()],
        );
        assert_eq!(
            diff(&have, &want),
            "inputs[0]: had `int` want `string`; number of outputs: had 1, want 2"
        );
    }

    #[test]
    fn test_output_only_difference() {
        let have = MethodSignature::new("Len", vec![], vec![int()]);
        let want = MethodSignature::new("Len", vec![], vec![TypeRef::primitive(BasicKind::Int64)]);
        assert_eq!(diff(&have, &want), "outputs[0]: had `int` want `int64`");
    }

    #[test]
    fn test_variadic_mismatch_is_reported_last() {
        let args = vec![TypeRef::slice(TypeRef::empty_interface())];
        let have = MethodSignature::new("Printf", args.clone(), vec![]);
        let want = MethodSignature::new("Printf", args, vec![]).into_variadic();
        assert_eq!(diff(&have, &want), "variadic: had false, want true");
    }

    #[test]
    fn test_named_types_compare_fully_qualified() {
        let have = MethodSignature::new("Do", vec![TypeRef::named("a", "T")], vec![]);
        let want = MethodSignature::new("Do", vec![TypeRef::named("b", "T")], vec![]);
        assert_eq!(diff(&have, &want), "inputs[0]: had `a.T` want `b.T`");
    }
}
