use tracing::debug;

use super::{SourceMap, TransformEngine, TransformError, TransformResult};
use crate::types::Configuration;

/// Label used in source maps when the configuration carries no source name.
const UNNAMED_SOURCE: &str = "input.js";

/// Engine that returns the source unchanged with a line-identity source map.
/// Used when no external engine program is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEngine;

impl TransformEngine for PassthroughEngine {
    fn transform(
        &self,
        source: &str,
        options: &Configuration,
    ) -> Result<TransformResult, TransformError> {
        let source_name = options.source.as_deref().unwrap_or(UNNAMED_SOURCE);
        debug!("Passing {} through unchanged ({} bytes)", source_name, source.len());
        Ok(TransformResult {
            code: source.to_string(),
            map: SourceMap::identity(source_name, options.file.as_deref(), source),
        })
    }
}
