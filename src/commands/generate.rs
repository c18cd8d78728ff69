use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{Cli, TypeArg};
use crate::config::{load_config, load_config_from, GoimplConfig};
use crate::core::{Error, GenerationOptions};
use crate::formatting::{GoImports, Passthrough, Reformatter};
use crate::io::{self, Catalog};
use crate::pipeline;

/// Runs one generation request described by the command line.
pub fn handle_generate(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };

    let catalog = Catalog::load(&cli.catalog)
        .with_context(|| format!("Failed to load catalog {}", cli.catalog.display()))?;

    let targets = cli
        .targets()
        .ok_or_else(|| anyhow::anyhow!("expected an interface and a type"))?;
    let interface_arg = TypeArg::parse_interface(targets.interface).map_err(anyhow::Error::msg)?;
    let interface = catalog.resolve(&interface_arg.package, &interface_arg.name, false)?;

    let mut opts = build_options(cli, &config);
    opts.extra.extend(targets.imports.iter().cloned());

    let type_arg = TypeArg::parse(targets.impl_type, cli.existing).map_err(anyhow::Error::msg)?;
    if cli.existing {
        let existing = catalog.resolve(&type_arg.package, &type_arg.name, type_arg.pointer)?;
        debug!(existing = %existing.qualified_name(), "completing existing type");
        opts.existing = Some(existing);
    } else {
        opts.pkg_name = type_arg.package.clone();
        opts.impl_name = type_arg.impl_name();
    }

    let reformatter = select_reformatter(cli, &config, opts.no_go_imports)?;
    let text = pipeline::generate_source(&interface, opts, reformatter.as_ref())?;
    io::write_output(cli.output.as_deref(), &text)?;
    Ok(())
}

/// Options seeded from the configuration, with command-line flags applied on top.
pub fn build_options(cli: &Cli, config: &GoimplConfig) -> GenerationOptions {
    let mut opts = config.seed_options();
    if cli.named {
        opts.no_named_return_values = false;
    } else if cli.no_named {
        opts.no_named_return_values = true;
    }
    if cli.no_goimports {
        opts.no_go_imports = true;
    } else if cli.goimports {
        opts.no_go_imports = false;
    }
    opts
}

/// Picks the reformat pass: none, an explicit goimports binary, or the one on PATH.
pub fn select_reformatter(
    cli: &Cli,
    config: &GoimplConfig,
    no_go_imports: bool,
) -> Result<Box<dyn Reformatter>, Error> {
    if no_go_imports {
        return Ok(Box::new(Passthrough));
    }
    let explicit: Option<PathBuf> = cli
        .goimports_path
        .clone()
        .or_else(|| config.generate().goimports_path);
    match explicit {
        Some(program) => Ok(Box::new(GoImports::with_program(program))),
        None => Ok(Box::new(GoImports::locate()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["goimpl", "--catalog", "types.json"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_flags_override_config() {
        let config: GoimplConfig =
            toml::from_str("[generate]\nnamed_returns = false\ngoimports = true\n").unwrap();
        let opts = build_options(&cli(&["--named", "--no-goimports", "io.Closer", "C"]), &config);
        assert!(!opts.no_named_return_values);
        assert!(opts.no_go_imports);
    }

    #[test]
    fn test_negative_flags_override_config() {
        let config: GoimplConfig =
            toml::from_str("[generate]\nnamed_returns = true\ngoimports = false\n").unwrap();
        let opts = build_options(&cli(&["--no-named", "--goimports", "io.Closer", "C"]), &config);
        assert!(opts.no_named_return_values);
        assert!(!opts.no_go_imports);
    }

    #[test]
    fn test_config_applies_without_flags() {
        let config: GoimplConfig =
            toml::from_str("[generate]\nnamed_returns = true\nblacklist = [\"Close\"]\n").unwrap();
        let opts = build_options(&cli(&["io.Closer", "C"]), &config);
        assert!(!opts.no_named_return_values);
        assert!(opts.method_blacklist.contains("Close"));
    }

    #[test]
    fn test_explicit_goimports_path_is_used() {
        let config = GoimplConfig::default();
        let args = cli(&["--goimports-path", "/opt/go/bin/goimports", "io.Closer", "C"]);
        // Only checks selection; the program is not run.
        assert!(select_reformatter(&args, &config, false).is_ok());
    }

    #[test]
    fn test_no_goimports_selects_passthrough() {
        let reformatter =
            select_reformatter(&cli(&["io.Closer", "C"]), &GoimplConfig::default(), true).unwrap();
        assert_eq!(reformatter.reformat("package p\n").unwrap(), "package p\n");
    }
}
