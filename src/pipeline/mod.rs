//! The generation pipeline.
//!
//! One linear pass per request:
//! options check and reconciliation -> argument naming and assembly ->
//! well-formedness check -> optional reformat -> write.
//! The output sink only ever receives a complete document.

use std::io::Write;
use tracing::{debug, info, info_span};

use crate::codegen;
use crate::comparison::resolve_existing;
use crate::core::{GenerationOptions, Result, TypeDescriptor};
use crate::formatting::Reformatter;

/// Produces the stub document for `interface` without writing it anywhere.
///
/// `reformatter` is not consulted when `opts.no_go_imports` is set.
pub fn generate_source(
    interface: &TypeDescriptor,
    mut opts: GenerationOptions,
    reformatter: &dyn Reformatter,
) -> Result<String> {
    let _span = info_span!("generate", interface = %interface.qualified_name()).entered();
    let required = &interface.methods;

    if let Some(reconciliation) = resolve_existing(&mut opts, required)? {
        debug!(
            decided = reconciliation.decisions.len(),
            blacklisted = opts.method_blacklist.len(),
            "reconciled against existing type"
        );
    }
    if opts.pkg_name.is_empty() {
        opts.pkg_name = interface.package.clone();
    }

    let text = codegen::render(required, &opts)?;
    let text = if opts.no_go_imports {
        text
    } else {
        reformatter.reformat(&text)?
    };
    info!(
        package = %opts.pkg_name,
        implementation = %opts.impl_name,
        "generated stub"
    );
    Ok(text)
}

/// Generates the stub document and writes it to `out`.
///
/// Nothing is written unless every stage succeeds.
pub fn generate(
    interface: &TypeDescriptor,
    opts: GenerationOptions,
    reformatter: &dyn Reformatter,
    out: &mut dyn Write,
) -> Result<()> {
    let text = generate_source(interface, opts, reformatter)?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
