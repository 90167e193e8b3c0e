#![doc = r#"
downlevel — drive a source-to-source JavaScript transform over files, directory
trees or standard input.

downlevel does not parse or rewrite code. It resolves what needs transforming,
decides where each result goes, assembles the engine configuration from flags,
calls a [`TransformEngine`] once per input, and writes the code plus an optional
source map (inline data URL or `.map` sidecar).

Inputs and outputs
------------------
- A file with extension `.js`, `.jsm`, `.es6` or `.jsx` is transformed; any
  other extension is skipped silently. The output file always ends in `.js`.
- A directory is walked recursively and mirrored into the output directory,
  which is created if needed. A directory input without an output directory
  is an error.
- Without an input, all of standard input is transformed in one call.
- Without an output, code goes to standard output.

Compile a tree
--------------
```rust,no_run
use std::path::PathBuf;
use downlevel::{compile, CommandRequest, FlagBag, PassthroughEngine, SourceMapMode};

fn main() -> downlevel::Result<()> {
    let flags = FlagBag {
        target: Some("chrome:58,node:8".to_string()),
        no: Some("modules".to_string()),
        sourcemap: SourceMapMode::File,
        ..FlagBag::default()
    };
    let request = CommandRequest::new(
        vec![PathBuf::from("src")],
        None,
        Some(PathBuf::from("dist")),
        flags,
    )?;

    let report = compile(&request, &PassthroughEngine, std::io::empty(), &mut std::io::stdout())?;
    println!("compiled={} skipped={}", report.compiled, report.skipped);
    Ok(())
}
```

Plugging in an engine
---------------------
Anything implementing [`TransformEngine`] can be used. [`CommandEngine`] runs an
external program that speaks a small JSON protocol on stdin/stdout.

```rust
use downlevel::{Configuration, SourceMap, TransformEngine, TransformError, TransformResult};

struct Uppercase;

impl TransformEngine for Uppercase {
    fn transform(
        &self,
        source: &str,
        options: &Configuration,
    ) -> Result<TransformResult, TransformError> {
        let name = options.source.as_deref().unwrap_or("input.js");
        Ok(TransformResult {
            code: source.to_uppercase(),
            map: SourceMap::identity(name, options.file.as_deref(), source),
        })
    }
}
```

Error handling
--------------
All public functions return [`downlevel::Result<T>`](Result). Match on
[`Error`] to tell usage mistakes, filesystem failures and engine failures
apart; [`Error::code`] gives a stable string code for each.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — request validation, option assembly, path walking.
- [`engine`] — the engine trait and the bundled engines.
- [`io`] — stdin reading and result writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::FlagBag;
pub use crate::core::request::CommandRequest;
pub use error::{Error, Result};
pub use types::{Configuration, SourceMapMode, WorkItem};

// Engines
pub use engine::{
    CommandEngine, Location, PassthroughEngine, SourceMap, TransformEngine, TransformError,
    TransformResult,
};

// Building blocks
pub use crate::core::options::{assemble, parse_target};
pub use crate::core::walker::{PathWalker, WorkItems};
pub use io::write_result;

// High-level API re-exports
pub use api::{CompileReport, STDIN_LABEL, compile, compile_item, compile_path, compile_stdin};
