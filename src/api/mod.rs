//! High-level entry points: run a validated [`CommandRequest`] end to end, or
//! compile a single path or source text with an already assembled
//! configuration. The CLI is a thin layer over [`compile`].
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::core::options::assemble;
use crate::core::request::CommandRequest;
use crate::core::walker::PathWalker;
use crate::engine::TransformEngine;
use crate::error::{Error, Result};
use crate::io::{read_source, write_result};
use crate::types::{Configuration, SourceMapMode, WorkItem};

/// Source label used for text read from standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Outcome of a successful run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompileReport {
    /// Transform calls made (and results written)
    pub compiled: usize,
    /// Files passed over because of their extension
    pub skipped: usize,
}

/// Run one request: assemble options, then compile the input path or, when
/// no input was given, the whole of `stdin`.
///
/// Stops at the first failure; nothing after it is read or written.
pub fn compile<E, R, W>(
    request: &CommandRequest,
    engine: &E,
    stdin: R,
    stdout: &mut W,
) -> Result<CompileReport>
where
    E: TransformEngine + ?Sized,
    R: Read,
    W: Write,
{
    let config = assemble(&request.flags)?;
    let mode = request.flags.sourcemap;

    match request.input.as_deref() {
        Some(input) => compile_path(
            input,
            request.output.as_deref(),
            &config,
            mode,
            engine,
            stdout,
        ),
        None => {
            compile_stdin(stdin, request.output.as_deref(), &config, mode, engine, stdout)?;
            Ok(CompileReport {
                compiled: 1,
                skipped: 0,
            })
        }
    }
}

/// Compile a file or directory tree. A directory requires `output`.
pub fn compile_path<E, W>(
    input: &Path,
    output: Option<&Path>,
    config: &Configuration,
    mode: SourceMapMode,
    engine: &E,
    stdout: &mut W,
) -> Result<CompileReport>
where
    E: TransformEngine + ?Sized,
    W: Write,
{
    let walker = PathWalker::new(input, output)?;
    let mut items = walker.iter();
    let mut report = CompileReport::default();

    for item in items.by_ref() {
        compile_item(&item?, config, mode, engine, stdout)?;
        report.compiled += 1;
    }
    report.skipped = items.skipped();

    info!(
        "Compiled {} file(s) from {:?}, skipped {}",
        report.compiled,
        walker.input(),
        report.skipped
    );
    Ok(report)
}

/// Read, transform and write one work item.
pub fn compile_item<E, W>(
    item: &WorkItem,
    config: &Configuration,
    mode: SourceMapMode,
    engine: &E,
    stdout: &mut W,
) -> Result<()>
where
    E: TransformEngine + ?Sized,
    W: Write,
{
    let source = std::fs::read_to_string(&item.input).map_err(|e| Error::fs(&item.input, e))?;
    let options = config.with_labels(
        item.input.to_string_lossy(),
        item.output
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned()),
    );

    let result = engine.transform(&source, &options)?;
    write_result(result, item.output.as_deref(), mode, stdout)?;

    match &item.output {
        Some(output) => info!("{:?} -> {:?}", item.input, output),
        None => debug!("{:?} -> stdout", item.input),
    }
    Ok(())
}

/// Transform everything readable from `stdin` in one call, even when empty.
/// `output` is used exactly as given.
pub fn compile_stdin<E, R, W>(
    stdin: R,
    output: Option<&Path>,
    config: &Configuration,
    mode: SourceMapMode,
    engine: &E,
    stdout: &mut W,
) -> Result<()>
where
    E: TransformEngine + ?Sized,
    R: Read,
    W: Write,
{
    let source = read_source(stdin)?;
    debug!("Read {} bytes from standard input", source.len());

    let options = config.with_labels(
        STDIN_LABEL,
        output.map(|p| p.to_string_lossy().into_owned()),
    );
    let result = engine.transform(&source, &options)?;
    write_result(result, output, mode, stdout)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use super::*;
    use crate::core::params::FlagBag;
    use crate::engine::{PassthroughEngine, TransformError, TransformResult};

    /// Passthrough engine that records every call and can be told to fail on
    /// sources containing a marker.
    #[derive(Default)]
    struct RecordingEngine {
        calls: RefCell<Vec<(String, Configuration)>>,
        fail_on: Option<&'static str>,
    }

    impl TransformEngine for RecordingEngine {
        fn transform(
            &self,
            source: &str,
            options: &Configuration,
        ) -> std::result::Result<TransformResult, TransformError> {
            self.calls
                .borrow_mut()
                .push((source.to_string(), options.clone()));
            if let Some(marker) = self.fail_on {
                if source.contains(marker) {
                    return Err(TransformError::new("Unexpected token").with_code("PARSE_ERROR"));
                }
            }
            PassthroughEngine.transform(source, options)
        }
    }

    fn request(input: Option<PathBuf>, output: Option<PathBuf>, flags: FlagBag) -> CommandRequest {
        CommandRequest {
            input,
            output,
            flags,
        }
    }

    fn write(path: &Path, text: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn empty_stdin_still_transforms_once() {
        let engine = RecordingEngine::default();
        let mut out: Vec<u8> = Vec::new();
        let report = compile(
            &request(None, None, FlagBag::default()),
            &engine,
            std::io::empty(),
            &mut out,
        )
        .unwrap();

        assert_eq!(report.compiled, 1);
        let calls = engine.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "");
        assert_eq!(calls[0].1.source.as_deref(), Some(STDIN_LABEL));
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn stdin_output_path_is_used_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("bundle.mjs");
        let engine = RecordingEngine::default();
        let mut out: Vec<u8> = Vec::new();

        compile(
            &request(None, Some(output.clone()), FlagBag::default()),
            &engine,
            &b"a();"[..],
            &mut out,
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "a();");
        assert_eq!(
            engine.calls.borrow()[0].1.file.as_deref(),
            output.to_str()
        );
        assert!(out.is_empty());
    }

    #[test]
    fn stdin_with_external_map_and_no_output_is_rejected() {
        let engine = RecordingEngine::default();
        let flags = FlagBag {
            sourcemap: SourceMapMode::File,
            ..FlagBag::default()
        };
        let mut out: Vec<u8> = Vec::new();
        let err = compile(&request(None, None, flags), &engine, &b"a();"[..], &mut out)
            .unwrap_err();
        assert_eq!(err.code(), "MISSING_OUTPUT_FILE");
        assert!(out.is_empty());
    }

    #[test]
    fn bad_target_is_rejected_before_any_transform() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("a.js");
        write(&input, "a();");
        let engine = RecordingEngine::default();
        let flags = FlagBag {
            target: Some("chrome".into()),
            ..FlagBag::default()
        };

        let err = compile(
            &request(Some(input), None, flags),
            &engine,
            std::io::empty(),
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "BAD_TARGET");
        assert!(engine.calls.borrow().is_empty());
    }

    #[test]
    fn directory_compile_mirrors_tree_with_labels() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dist = tmp.path().join("dist");
        write(&src.join("a.jsx"), "a();");
        write(&src.join("lib/b.es6"), "b();");
        write(&src.join("lib/readme.md"), "# hi");
        let engine = RecordingEngine::default();
        let flags = FlagBag {
            target: Some("node:8".into()),
            ..FlagBag::default()
        };

        let report = compile(
            &request(Some(src.clone()), Some(dist.clone()), flags),
            &engine,
            std::io::empty(),
            &mut std::io::sink(),
        )
        .unwrap();

        assert_eq!(report, CompileReport { compiled: 2, skipped: 1 });
        assert_eq!(std::fs::read_to_string(dist.join("a.js")).unwrap(), "a();");
        assert_eq!(std::fs::read_to_string(dist.join("lib/b.js")).unwrap(), "b();");
        assert!(!dist.join("lib/readme.md").exists());

        let calls = engine.calls.borrow();
        let (_, first) = &calls[0];
        assert_eq!(first.source.as_deref(), src.join("a.jsx").to_str());
        assert_eq!(first.file.as_deref(), dist.join("a.js").to_str());
        assert_eq!(first.target["node"], "8");
    }

    #[test]
    fn directory_without_output_reads_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        write(&src.join("a.js"), "a();");
        let engine = RecordingEngine::default();

        let err = compile(
            &request(Some(src), None, FlagBag::default()),
            &engine,
            std::io::empty(),
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert_eq!(err.code(), "MISSING_OUTPUT_DIR");
        assert!(engine.calls.borrow().is_empty());
    }

    #[test]
    fn one_failing_file_aborts_the_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dist = tmp.path().join("dist");
        write(&src.join("a.js"), "a();");
        write(&src.join("b.js"), "BROKEN");
        write(&src.join("c.js"), "c();");
        let engine = RecordingEngine {
            fail_on: Some("BROKEN"),
            ..RecordingEngine::default()
        };

        let err = compile(
            &request(Some(src), Some(dist.clone()), FlagBag::default()),
            &engine,
            std::io::empty(),
            &mut std::io::sink(),
        )
        .unwrap_err();

        match err {
            Error::Transform(e) => assert_eq!(e.code.as_deref(), Some("PARSE_ERROR")),
            other => panic!("expected transform error, got {other:?}"),
        }
        assert_eq!(engine.calls.borrow().len(), 2);
        assert!(dist.join("a.js").exists());
        assert!(!dist.join("b.js").exists());
        assert!(!dist.join("c.js").exists());
    }

    #[test]
    fn recompiling_into_existing_directory_keeps_other_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dist = tmp.path().join("dist");
        write(&src.join("a.js"), "a();");
        write(&dist.join("unrelated.txt"), "keep me");
        let engine = RecordingEngine::default();
        let req = request(Some(src), Some(dist.clone()), FlagBag::default());

        compile(&req, &engine, std::io::empty(), &mut std::io::sink()).unwrap();
        compile(&req, &engine, std::io::empty(), &mut std::io::sink()).unwrap();

        assert_eq!(std::fs::read_to_string(dist.join("unrelated.txt")).unwrap(), "keep me");
        assert_eq!(engine.calls.borrow().len(), 2);
    }

    #[test]
    fn single_file_to_stdout_with_inline_map() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("a.js");
        write(&input, "a();");
        let flags = FlagBag {
            sourcemap: SourceMapMode::Inline,
            ..FlagBag::default()
        };
        let mut out: Vec<u8> = Vec::new();

        compile(&request(Some(input), None, flags), &PassthroughEngine, std::io::empty(), &mut out)
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("a();"));
        assert!(text.contains("sourceMappingURL=data:application/json"));
    }

    #[test]
    fn single_file_output_gets_js_extension_and_sidecar() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("a.jsx");
        write(&input, "a();");
        let flags = FlagBag {
            sourcemap: SourceMapMode::File,
            ..FlagBag::default()
        };

        compile(
            &request(Some(input), Some(tmp.path().join("out.txt")), flags),
            &PassthroughEngine,
            std::io::empty(),
            &mut std::io::sink(),
        )
        .unwrap();

        assert!(tmp.path().join("out.js").exists());
        assert!(tmp.path().join("out.js.map").exists());
        assert!(!tmp.path().join("out.txt").exists());
    }
}
