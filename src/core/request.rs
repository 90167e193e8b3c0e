use std::path::PathBuf;

use crate::core::params::FlagBag;
use crate::error::{Error, Result};

/// A validated invocation: at most one input, an optional output, and the
/// raw flags for the option assembler.
#[derive(Debug, Clone, Default)]
pub struct CommandRequest {
    /// `None` reads source text from standard input
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub flags: FlagBag,
}

impl CommandRequest {
    /// Resolve the single input from positional arguments and `--input`.
    /// Performs no filesystem access.
    pub fn new(
        positional: Vec<PathBuf>,
        input_flag: Option<PathBuf>,
        output: Option<PathBuf>,
        flags: FlagBag,
    ) -> Result<Self> {
        if positional.len() > 1 {
            return Err(Error::OneAtATime {
                count: positional.len(),
            });
        }

        let input = match (positional.into_iter().next(), input_flag) {
            (Some(positional), Some(flag)) => {
                return Err(Error::DuplicateImportOptions { positional, flag });
            }
            (Some(path), None) | (None, Some(path)) => Some(path),
            (None, None) => None,
        };

        Ok(Self {
            input,
            output,
            flags,
        })
    }
}
