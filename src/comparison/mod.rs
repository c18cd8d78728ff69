//! Reconciliation of a required method set against an existing type.

pub mod diff;
pub mod reconciler;

pub use diff::diff;
pub use reconciler::{reconcile, resolve_existing, Decision, Reconciliation};
