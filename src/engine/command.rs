//! Runs an external program as the transform engine.
//!
//! Protocol: one JSON request `{"source": ..., "options": ...}` on the
//! program's standard input, one JSON response on its standard output, either
//! `{"code": ..., "map": {...}}` or `{"error": {"message": ..., ...}}`.
//! The request is written from its own thread while stdout and stderr are
//! drained, so the program may log freely before reading it.
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{TransformEngine, TransformError, TransformResult};
use crate::types::Configuration;

#[derive(Serialize)]
struct EngineRequest<'a> {
    source: &'a str,
    options: &'a Configuration,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EngineResponse {
    Failed { error: TransformError },
    Done(TransformResult),
}

#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn unavailable(&self, e: impl std::fmt::Display) -> TransformError {
        TransformError::new(format!(
            "transform engine {:?} could not be run: {}",
            self.program, e
        ))
        .with_code("ENGINE_UNAVAILABLE")
    }
}

impl TransformEngine for CommandEngine {
    fn transform(
        &self,
        source: &str,
        options: &Configuration,
    ) -> Result<TransformResult, TransformError> {
        let request = serde_json::to_vec(&EngineRequest { source, options })
            .map_err(|e| TransformError::new(format!("could not encode engine request: {}", e)))?;

        debug!("Running transform engine {:?} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.unavailable(e))?;

        let writer = child.stdin.take().map(|mut stdin| {
            std::thread::spawn(move || stdin.write_all(&request))
        });

        let output = child.wait_with_output().map_err(|e| self.unavailable(e))?;

        if let Some(writer) = writer {
            match writer.join() {
                // A broken pipe means the engine exited early; its output explains why.
                Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(self.unavailable(e));
                }
                Ok(_) => {}
                Err(_) => return Err(self.unavailable("request writer panicked")),
            }
        }

        let response = serde_json::from_slice::<EngineResponse>(&output.stdout);
        match (response, output.status.success()) {
            (Ok(EngineResponse::Failed { error }), _) => Err(error),
            (Ok(EngineResponse::Done(result)), true) => Ok(result),
            (_, false) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(TransformError::new(format!(
                    "transform engine {:?} failed ({}): {}",
                    self.program,
                    output.status,
                    stderr.trim()
                ))
                .with_code("ENGINE_FAILED"))
            }
            (Err(e), true) => Err(TransformError::new(format!(
                "transform engine {:?} returned an unreadable response: {}",
                self.program, e
            ))
            .with_code("ENGINE_PROTOCOL")),
        }
    }
}
