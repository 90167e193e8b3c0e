//! Shared types used across downlevel.
//! Includes the assembled `Configuration` handed to transform engines,
//! `SourceMapMode`, and the `WorkItem` pairs produced by directory traversal.
use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How source maps are emitted next to the transformed code.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    #[default]
    None,
    /// Sidecar `<output>.map` file referenced by a trailing comment
    File,
    /// Data URL embedded in the trailing comment
    Inline,
}

impl std::fmt::Display for SourceMapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceMapMode::None => "none",
            SourceMapMode::File => "file",
            SourceMapMode::Inline => "inline",
        };
        write!(f, "{}", s)
    }
}

/// Options passed to the transform engine for one input.
///
/// Built once per run by [`crate::core::options::assemble`]; only the
/// `source`/`file` labels change per input, via [`Configuration::with_labels`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Engine name -> minimum version, e.g. `chrome -> 58`
    pub target: BTreeMap<String, String>,
    /// Transform name -> enabled
    pub transforms: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx_fragment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_assign: Option<String>,
    pub named_function_expressions: bool,
    /// Logical input label, used for diagnostics and source map `sources`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Logical output label, used for source map `file`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            target: BTreeMap::new(),
            transforms: BTreeMap::new(),
            jsx: None,
            jsx_fragment: None,
            object_assign: None,
            named_function_expressions: true,
            source: None,
            file: None,
        }
    }
}

impl Configuration {
    /// Copy of this configuration labelled for a single input/output pair.
    pub fn with_labels(&self, source: impl Into<String>, file: Option<String>) -> Self {
        Self {
            source: Some(source.into()),
            file,
            ..self.clone()
        }
    }
}

/// One resolved file to transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub input: PathBuf,
    /// `None` sends the result to standard output
    pub output: Option<PathBuf>,
}
