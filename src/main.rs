use anyhow::Result;
use clap::Parser;
use goimpl::cli::Cli;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "GOIMPL_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    goimpl::commands::handle_generate(&cli).inspect_err(|err| {
        if cli.verbosity > 0 {
            print_source_text(err);
        }
    })
}

/// Logs go to stderr so stdout carries only the generated code.
fn init_logging(verbosity: u8) {
    let directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive));
    let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();

    let _ = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn print_source_text(err: &anyhow::Error) {
    let text = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<goimpl::Error>())
        .and_then(goimpl::Error::source_text)
        .filter(|text| !text.is_empty());
    if let Some(text) = text {
        eprintln!("--- generated source ---\n{}", text);
    }
}
