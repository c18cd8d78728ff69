//! Common utilities shared across the goimpl codebase.
//!
//! Identifier and string-literal helpers used by both the argument namer
//! and the code assembler.

pub mod text;

pub use text::{
    first_letter_lower, go_quote, is_go_identifier, is_go_keyword, letters_only, lower_letters,
};
