//! Assembly of the stub document.
//!
//! The document is built straight from the method set and the generation
//! options, already laid out the way gofmt would print it:
//!
//! ```text
//! package pkg
//!
//! import (
//! 	"errors"
//! )
//!
//! type Impl struct{}
//!
//! func (i *Impl) Close() error {
//! 	panic(errors.New("*Impl.Close not implemented"))
//! }
//! ```
//!
//! [`render`] then parses the text once, so an invalid implementation name
//! surfaces as a render error carrying the assembled text instead of as
//! garbled output.

pub mod syntax;

use std::fmt::{self, Write};
use tracing::debug;

use crate::common::{go_quote, letters_only};
use crate::core::types::write_param_type;
use crate::core::{Error, GenerationOptions, MethodSet, MethodSignature, Result};
use crate::naming::{name_arguments, receiver_name};

pub use syntax::{check_source, SyntaxError};

/// A parameter or result: optional name and rendered type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubParam {
    pub name: Option<String>,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubMethod {
    pub comment: Option<String>,
    pub name: String,
    pub inputs: Vec<StubParam>,
    pub outputs: Vec<StubParam>,
}

/// Everything needed to print one stub file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubDocument {
    pub package: String,
    pub impl_name: String,
    pub receiver: String,
    pub imports: Vec<String>,
    pub methods: Vec<StubMethod>,
}

impl StubDocument {
    /// Lays out every method of `required` that is not blacklisted.
    pub fn build(required: &MethodSet, opts: &GenerationOptions) -> Self {
        let receiver = receiver_name(&opts.impl_name);
        let methods = required
            .iter()
            .filter(|m| !opts.method_blacklist.contains(&m.name))
            .map(|m| stub_method(m, &receiver, opts))
            .collect();

        let mut imports = vec!["errors".to_string()];
        for extra in &opts.extra {
            if !imports.contains(extra) {
                imports.push(extra.clone());
            }
        }

        Self {
            package: opts.pkg_name.clone(),
            impl_name: opts.impl_name.clone(),
            receiver,
            imports,
            methods,
        }
    }
}

fn stub_method(method: &MethodSignature, receiver: &str, opts: &GenerationOptions) -> StubMethod {
    let names = name_arguments(method, receiver);
    let last = method.inputs.len().saturating_sub(1);

    let inputs = method
        .inputs
        .iter()
        .zip(names.inputs)
        .enumerate()
        .map(|(i, (ty, name))| {
            let mut rendered = String::new();
            let _ = write_param_type(
                &mut rendered,
                ty,
                method.variadic && i == last,
                Some(opts.pkg_name.as_str()),
            );
            StubParam {
                name: Some(name),
                ty: rendered,
            }
        })
        .collect();

    let outputs = method
        .outputs
        .iter()
        .zip(names.outputs)
        .map(|(ty, name)| StubParam {
            name: (!opts.no_named_return_values).then_some(name),
            ty: ty.render(&opts.pkg_name),
        })
        .collect();

    let comment = opts
        .comments
        .get(&method.name)
        .filter(|c| !c.trim().is_empty())
        .cloned();

    debug!(method = %method.name, commented = comment.is_some(), "assembled stub");
    StubMethod {
        comment,
        name: method.name.clone(),
        inputs,
        outputs,
    }
}

impl fmt::Display for StubParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", name, self.ty),
            None => f.write_str(&self.ty),
        }
    }
}

fn write_params(f: &mut fmt::Formatter<'_>, params: &[StubParam]) -> fmt::Result {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", param)?;
    }
    Ok(())
}

impl StubDocument {
    fn write_method(&self, f: &mut fmt::Formatter<'_>, method: &StubMethod) -> fmt::Result {
        if let Some(comment) = &method.comment {
            for line in comment.lines().map(str::trim_end) {
                if line.is_empty() {
                    writeln!(f, "//")?;
                } else {
                    writeln!(f, "// {}", line)?;
                }
            }
        }
        write!(
            f,
            "func ({} {}) {}(",
            self.receiver, self.impl_name, method.name
        )?;
        write_params(f, &method.inputs)?;
        f.write_char(')')?;

        let named = method.outputs.iter().any(|p| p.name.is_some());
        match method.outputs.as_slice() {
            [] => {}
            [single] if !named => write!(f, " {}", single)?,
            outputs => {
                f.write_str(" (")?;
                write_params(f, outputs)?;
                f.write_char(')')?;
            }
        }

        let message = format!("{}.{} not implemented", self.impl_name, method.name);
        writeln!(f, " {{")?;
        writeln!(f, "\tpanic(errors.New({}))", go_quote(&message))?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for StubDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {}", self.package)?;
        writeln!(f)?;
        writeln!(f, "import (")?;
        for import in &self.imports {
            writeln!(f, "\t{}", go_quote(import))?;
        }
        writeln!(f, ")")?;
        writeln!(f)?;
        writeln!(f, "type {} struct{{}}", letters_only(&self.impl_name))?;
        for method in &self.methods {
            writeln!(f)?;
            self.write_method(f, method)?;
        }
        Ok(())
    }
}

/// Assembles the stub document without checking it.
pub fn assemble(required: &MethodSet, opts: &GenerationOptions) -> String {
    StubDocument::build(required, opts).to_string()
}

/// Assembles the stub document and confirms it parses as Go.
pub fn render(required: &MethodSet, opts: &GenerationOptions) -> Result<String> {
    let text = assemble(required, opts);
    match check_source(&text) {
        Ok(()) => Ok(text),
        Err(err) => Err(Error::Render {
            message: err.message,
            line: err.line,
            column: err.column,
            source_text: text,
        }),
    }
}
