use std::fmt;

use serde::{Deserialize, Serialize};

use super::vlq::encode_segment;

const DATA_URL_PREFIX: &str = "data:application/json;charset=utf-8;base64,";

/// Source map v3 as produced by a transform engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources_content: Vec<Option<String>>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub mappings: String,
}

impl SourceMap {
    /// Map where every generated line `n` points at column 0 of source line `n`.
    pub fn identity(source_name: &str, file: Option<&str>, content: &str) -> Self {
        let lines = content.split('\n').count();
        let mut segments = Vec::with_capacity(lines);
        for line in 0..lines {
            let delta = if line == 0 { 0 } else { 1 };
            segments.push(encode_segment(&[0, 0, delta, 0]));
        }

        Self {
            version: 3,
            file: file.map(str::to_string),
            sources: vec![source_name.to_string()],
            sources_content: vec![Some(content.to_string())],
            names: Vec::new(),
            mappings: segments.join(";"),
        }
    }

    /// Base64 data URL suitable for an inline `sourceMappingURL` comment.
    pub fn to_url(&self) -> String {
        format!("{}{}", DATA_URL_PREFIX, base64::encode(self.to_string()))
    }
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
