//! Persist transform results: code to a file or standard output, source maps
//! inline or as `.map` sidecars.
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::engine::TransformResult;
use crate::error::{Error, Result};
use crate::types::SourceMapMode;

pub mod sourcemap;

pub use sourcemap::{EOL, sidecar_path};

/// Emit one result.
///
/// An external map needs an output path to sit next to; without one this
/// fails with [`Error::MissingOutputFile`] before anything is written.
/// Without an output path the code goes to `stdout` followed by a newline.
pub fn write_result<W: Write>(
    result: TransformResult,
    output: Option<&Path>,
    mode: SourceMapMode,
    stdout: &mut W,
) -> Result<()> {
    let TransformResult { mut code, map } = result;

    match mode {
        SourceMapMode::Inline => sourcemap::append_inline_comment(&mut code, &map),
        SourceMapMode::File => {
            let output = output.ok_or(Error::MissingOutputFile)?;
            sourcemap::write_sidecar(&mut code, &map, output)?;
        }
        SourceMapMode::None => {}
    }

    match output {
        Some(path) => {
            std::fs::write(path, &code).map_err(|e| Error::fs(path, e))?;
            debug!("Wrote {} bytes to {:?}", code.len(), path);
        }
        None => {
            writeln!(stdout, "{}", code)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
