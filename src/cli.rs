use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goimpl")]
#[command(about = "Generate a stub implementation of a Go interface", long_about = None)]
#[command(version)]
#[command(after_help = "EXAMPLES:\n  \
    goimpl --catalog types.json io.ReadCloser *File\n  \
    goimpl --catalog types.json --existing net/rpc rpc.ClientCodec &main.codec\n  \
    goimpl --catalog types.json rpc.ClientCodec main.codec")]
pub struct Cli {
    /// JSON catalog of resolved type descriptors
    #[arg(long, env = "GOIMPL_CATALOG")]
    pub catalog: PathBuf,

    /// Generate named return values
    #[arg(long, overrides_with = "no_named")]
    pub named: bool,

    /// Generate result types only (overrides `named_returns` in the config)
    #[arg(long = "no-named", overrides_with = "named")]
    pub no_named: bool,

    /// Run goimports on the generated code (overrides `goimports = false`)
    #[arg(long, overrides_with = "no_goimports")]
    pub goimports: bool,

    /// Do not run goimports on the generated code
    #[arg(long = "no-goimports", overrides_with = "goimports")]
    pub no_goimports: bool,

    /// goimports binary to use (looked up on PATH by default)
    #[arg(long = "goimports-path")]
    pub goimports_path: Option<PathBuf>,

    /// Generate only the methods an existing type is missing or has wrong
    #[arg(long)]
    pub existing: bool,

    /// Configuration file (defaults to the nearest .goimpl.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    ///
    /// -v prints the rejected source when generation fails
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// [import...] <pkg.Interface> <[*|&][pkg.]Type>
    #[arg(value_name = "ARGS", num_args = 2.., required = true)]
    pub args: Vec<String>,
}

/// The positional arguments, split into their roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets<'a> {
    pub imports: &'a [String],
    pub interface: &'a str,
    pub impl_type: &'a str,
}

impl Cli {
    pub fn targets(&self) -> Option<Targets<'_>> {
        match self.args.as_slice() {
            [imports @ .., interface, impl_type] => Some(Targets {
                imports,
                interface,
                impl_type,
            }),
            _ => None,
        }
    }
}

/// A type argument of the form `[*|&][pkg.]Name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeArg {
    pub pointer: bool,
    pub package: String,
    pub name: String,
}

impl TypeArg {
    /// Parses a type argument. `&` is only accepted when `allow_ref` is set.
    pub fn parse(arg: &str, allow_ref: bool) -> Result<Self, String> {
        let trimmed = arg.trim();
        let (pointer, rest) = match trimmed.chars().next() {
            Some('*') => (true, &trimmed[1..]),
            Some('&') if allow_ref => (true, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let parts: Vec<&str> = rest.split('.').collect();
        let (package, name) = match parts.as_slice() {
            [name] => ("", *name),
            [package, name] => (*package, *name),
            _ => return Err(parse_failure(arg)),
        };
        if name.is_empty() {
            return Err(parse_failure(arg));
        }

        Ok(Self {
            pointer,
            package: package.to_string(),
            name: name.to_string(),
        })
    }

    /// Parses the interface argument, which never takes a pointer prefix.
    pub fn parse_interface(arg: &str) -> Result<Self, String> {
        let parsed = Self::parse(arg, false)?;
        if parsed.pointer {
            return Err(format!(
                "`{}` names an interface; interfaces take no `*` prefix",
                arg
            ));
        }
        Ok(parsed)
    }

    /// The implementation name handed to the generator, `*Name` for pointers.
    pub fn impl_name(&self) -> String {
        if self.pointer {
            format!("*{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

fn parse_failure(arg: &str) -> String {
    format!("failed to parse `{}`. Expected [package.]type.", arg)
}
