//! The transform engine seam.
//!
//! downlevel does not rewrite code itself; it hands each source text and the
//! run [`Configuration`] to a [`TransformEngine`] and persists whatever comes
//! back. [`PassthroughEngine`] copies code through with an identity source
//! map, [`CommandEngine`] delegates to an external program over JSON.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Configuration;

pub mod command;
pub mod passthrough;
pub mod sourcemap;
mod vlq;

pub use command::CommandEngine;
pub use passthrough::PassthroughEngine;
pub use sourcemap::SourceMap;

/// Output of one transform call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    pub code: String,
    pub map: SourceMap,
}

/// Position of a transform failure in the input text (1-based line, 0-based column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Structured failure reported by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct TransformError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
    /// Code frame around `loc`, if the engine provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            loc: None,
            snippet: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

pub trait TransformEngine {
    /// Transform one source text. `options.source`/`options.file` carry the
    /// labels for the current input.
    fn transform(
        &self,
        source: &str,
        options: &Configuration,
    ) -> Result<TransformResult, TransformError>;
}

impl<T: TransformEngine + ?Sized> TransformEngine for Box<T> {
    fn transform(
        &self,
        source: &str,
        options: &Configuration,
    ) -> Result<TransformResult, TransformError> {
        (**self).transform(source, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_error_deserializes_partial_payloads() {
        let err: TransformError =
            serde_json::from_str(r#"{"message":"Unexpected token"}"#).unwrap();
        assert_eq!(err, TransformError::new("Unexpected token"));

        let err: TransformError = serde_json::from_str(
            r#"{"message":"x","code":"PARSE_ERROR","loc":{"line":3,"column":4},"snippet":"3 : let"}"#,
        )
        .unwrap();
        assert_eq!(err.code.as_deref(), Some("PARSE_ERROR"));
        assert_eq!(err.loc, Some(Location { line: 3, column: 4 }));
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn boxed_engines_delegate() {
        let engine: Box<dyn TransformEngine> = Box::new(PassthroughEngine);
        let result = engine
            .transform("a;", &Configuration::default())
            .unwrap();
        assert_eq!(result.code, "a;");
    }
}
