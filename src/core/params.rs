use serde::{Deserialize, Serialize};

use crate::types::SourceMapMode;

/// Raw flag values as given on the command line, before validation.
/// Consumed by [`crate::core::options::assemble`]; independent of clap so the
/// library can be driven programmatically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagBag {
    /// `name:version[,name:version...]`
    pub target: Option<String>,
    /// Comma-separated transforms to enable
    pub yes: Option<String>,
    /// Comma-separated transforms to disable
    pub no: Option<String>,
    pub jsx: Option<String>,
    pub jsx_fragment: Option<String>,
    pub object_assign: Option<String>,
    /// None means "not given", which keeps named function expressions
    pub named_function_expr: Option<bool>,
    pub sourcemap: SourceMapMode,
}
