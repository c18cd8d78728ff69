//! Short, unique parameter names for generated methods.
//!
//! Names follow Go conventions: the first letter of the type (`r *Request`),
//! `err` and `ctx` for errors and contexts, and short initialisms spelled out
//! (`id ID`, `ip net.IP`). Within one method every name is unique and none
//! shadows the receiver.

use std::collections::HashSet;

use crate::common::{first_letter_lower, is_go_keyword, lower_letters};
use crate::core::{Capability, MethodSignature, TypeRef};

/// Identifiers already taken inside one generated method.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    reserved: HashSet<String>,
}

impl Scope {
    /// A scope holding only the receiver's name.
    pub fn with_receiver(receiver: &str) -> Self {
        let mut scope = Self::default();
        scope.reserve(receiver);
        scope
    }

    pub fn reserve(&mut self, name: &str) {
        self.reserved.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Keywords can never be declared, so they count as taken.
    fn is_taken(&self, name: &str) -> bool {
        self.contains(name) || is_go_keyword(name)
    }

    /// Reserves `candidate`, or the first of `candidate1`, `candidate2`, ...
    /// that is still free, and returns it.
    pub fn claim(&mut self, candidate: &str) -> String {
        let mut name = candidate.to_string();
        let mut suffix = 1;
        while self.is_taken(&name) {
            name = format!("{}{}", candidate, suffix);
            suffix += 1;
        }
        self.reserve(&name);
        name
    }
}

/// Receiver variable for methods on `impl_name`, e.g. `i` for `*Impl`.
pub fn receiver_name(impl_name: &str) -> String {
    first_letter_lower(impl_name)
}

/// Preferred name for a parameter of type `ty`, before uniqueness.
pub fn candidate_name(ty: &TypeRef) -> String {
    let mut base = ty;
    while let TypeRef::Pointer { elem } | TypeRef::Slice { elem } = base {
        base = elem.as_ref();
    }
    let (package, name) = base.package_and_name();

    if Capability::Error.is_satisfied_by(ty) {
        return "err".to_string();
    }
    if Capability::Context.is_satisfied_by(ty) {
        return "ctx".to_string();
    }
    let (lower, clean) = lower_letters(&name);
    // Short initialisms such as ID or IP read better spelled out.
    if lower.chars().count() <= 3 && lower != clean && lower != package {
        return lower;
    }
    first_letter_lower(&name)
}

/// Names the next parameter of type `ty`, reserving the result in `scope`.
pub fn argument_name(ty: &TypeRef, scope: &mut Scope) -> String {
    scope.claim(&candidate_name(ty))
}

/// Parameter names for one method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentNames {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

/// Names all inputs, then all outputs, of `method` in declaration order.
pub fn name_arguments(method: &MethodSignature, receiver: &str) -> ArgumentNames {
    let mut scope = Scope::with_receiver(receiver);
    let inputs = method
        .inputs
        .iter()
        .map(|t| argument_name(t, &mut scope))
        .collect();
    let outputs = method
        .outputs
        .iter()
        .map(|t| argument_name(t, &mut scope))
        .collect();
    ArgumentNames { inputs, outputs }
}
