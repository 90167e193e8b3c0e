use clap::Parser;
use std::path::PathBuf;

use downlevel::{CommandRequest, FlagBag, SourceMapMode};

#[derive(Parser, Debug)]
#[command(
    name = "downlevel",
    version,
    about = "Transform JavaScript files, directory trees or stdin through a transform engine"
)]
pub struct CliArgs {
    /// Input file or directory (omit to read standard input)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Input file or directory, alternative to the positional INPUT
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (file input) or directory (directory input); stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Environments to support, e.g. chrome:58,node:8
    #[arg(short, long, value_name = "SPEC")]
    pub target: Option<String>,

    /// Comma-separated transforms to enable
    #[arg(short, long, value_name = "TRANSFORMS")]
    pub yes: Option<String>,

    /// Comma-separated transforms to disable (applied after --yes)
    #[arg(short, long, value_name = "TRANSFORMS")]
    pub no: Option<String>,

    /// Custom JSX pragma, e.g. h or React.createElement
    #[arg(long, value_name = "PRAGMA")]
    pub jsx: Option<String>,

    /// Custom JSX fragment name
    #[arg(long, value_name = "NAME")]
    pub jsx_fragment: Option<String>,

    /// Function used for object spread, e.g. Object.assign
    #[arg(long, value_name = "NAME")]
    pub object_assign: Option<String>,

    /// Keep names of function expressions (default: true)
    #[arg(long = "named-function-expr", value_name = "BOOL")]
    pub named_function_expr: Option<bool>,

    /// Do not keep names of function expressions
    #[arg(long, conflicts_with = "named_function_expr")]
    pub no_named_function_expr: bool,

    /// Generate a source map: `-m` writes <output>.map, `--sourcemap=inline` embeds it
    #[arg(
        short = 'm',
        long,
        value_name = "MODE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "file",
        value_parser = parse_sourcemap
    )]
    pub sourcemap: Option<SourceMapMode>,

    /// External transform engine program (default: pass code through unchanged)
    #[arg(long, env = "DOWNLEVEL_ENGINE", value_name = "PROGRAM")]
    pub engine: Option<PathBuf>,

    /// Extra argument for the engine program (repeatable)
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

fn parse_sourcemap(value: &str) -> Result<SourceMapMode, String> {
    match value {
        "inline" => Ok(SourceMapMode::Inline),
        "file" | "true" => Ok(SourceMapMode::File),
        "none" | "false" => Ok(SourceMapMode::None),
        other => Err(format!(
            "unknown source map mode `{}` (expected inline, file or none)",
            other
        )),
    }
}

impl CliArgs {
    pub fn flags(&self) -> FlagBag {
        let named_function_expr = if self.no_named_function_expr {
            Some(false)
        } else {
            self.named_function_expr
        };

        FlagBag {
            target: self.target.clone(),
            yes: self.yes.clone(),
            no: self.no.clone(),
            jsx: self.jsx.clone(),
            jsx_fragment: self.jsx_fragment.clone(),
            object_assign: self.object_assign.clone(),
            named_function_expr,
            sourcemap: self.sourcemap.unwrap_or_default(),
        }
    }

    /// Validate the input selection; touches no files.
    pub fn into_request(self) -> downlevel::Result<CommandRequest> {
        let flags = self.flags();
        CommandRequest::new(self.inputs, self.input, self.output, flags)
    }
}
