//! Resolves an input path into [`WorkItem`]s.
//!
//! Files are classified by extension; directories are walked depth-first in
//! sorted name order, mirroring each entry into the output directory. The
//! walk is lazy: output directories are created as they are reached and
//! nothing is read until the caller asks for the next item.
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::WorkItem;

/// Extensions accepted as transform input (case-sensitive).
pub const INPUT_EXTENSIONS: [&str; 4] = ["js", "jsm", "es6", "jsx"];

/// Extension every output file is given.
pub const OUTPUT_EXTENSION: &str = "js";

pub fn is_eligible(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext))
}

/// Replace whatever extension `output` has with the canonical one.
pub fn output_path_for(output: &Path) -> PathBuf {
    output.with_extension(OUTPUT_EXTENSION)
}

/// A resolved input root. Iterate it with [`PathWalker::iter`]; every call
/// starts a fresh walk.
#[derive(Debug, Clone)]
pub struct PathWalker {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl PathWalker {
    pub fn new(input: &Path, output: Option<&Path>) -> Result<Self> {
        let input = std::path::absolute(input).map_err(|e| Error::fs(input, e))?;
        let output = output
            .map(|o| std::path::absolute(o).map_err(|e| Error::fs(o, e)))
            .transpose()?;
        Ok(Self { input, output })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn iter(&self) -> WorkItems {
        WorkItems {
            pending: vec![(self.input.clone(), self.output.clone())],
            output_root: None,
            skipped: 0,
        }
    }
}

/// Lazy sequence of work items. Stops after the first error.
pub struct WorkItems {
    pending: Vec<(PathBuf, Option<PathBuf>)>,
    /// Canonical output root, resolved once it exists on disk
    output_root: Option<PathBuf>,
    skipped: usize,
}

impl WorkItems {
    /// Files passed over so far because of their extension.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn enter_dir(&mut self, from: &Path, to: Option<PathBuf>) -> Result<()> {
        let to = to.ok_or_else(|| Error::MissingOutputDir {
            input: from.to_path_buf(),
        })?;

        // create_dir_all treats an existing directory as success
        fs::create_dir_all(&to).map_err(|e| Error::fs(&to, e))?;
        debug!("Output directory ready: {:?}", to);

        // The first directory entered is the output root itself.
        if self.output_root.is_none() {
            self.output_root = Some(fs::canonicalize(&to).map_err(|e| Error::fs(&to, e))?);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(from).map_err(|e| Error::fs(from, e))? {
            let entry = entry.map_err(|e| Error::fs(from, e))?;
            names.push(entry.file_name());
        }
        names.sort();

        // Reverse so the stack pops entries in name order.
        for name in names.into_iter().rev() {
            let child = from.join(&name);
            if self.is_output_root(&child) {
                debug!("Not descending into output directory {:?}", child);
                continue;
            }
            self.pending.push((child, Some(to.join(&name))));
        }
        Ok(())
    }

    /// Compares resolved paths, so `..` segments and symlinks in either root
    /// cannot hide the output directory inside the input tree.
    fn is_output_root(&self, child: &Path) -> bool {
        match (&self.output_root, fs::canonicalize(child)) {
            (Some(root), Ok(resolved)) => resolved == *root,
            _ => false,
        }
    }

    fn step(&mut self, from: PathBuf, to: Option<PathBuf>) -> Result<Option<WorkItem>> {
        let meta = fs::metadata(&from).map_err(|e| Error::fs(&from, e))?;

        if meta.is_dir() {
            self.enter_dir(&from, to)?;
            return Ok(None);
        }

        if !is_eligible(&from) {
            debug!("Skipping {:?}: not a script extension", from);
            self.skipped += 1;
            return Ok(None);
        }

        Ok(Some(WorkItem {
            output: to.as_deref().map(output_path_for),
            input: from,
        }))
    }
}

impl Iterator for WorkItems {
    type Item = Result<WorkItem>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((from, to)) = self.pending.pop() {
            match self.step(from, to) {
                Ok(Some(item)) => return Some(Ok(item)),
                Ok(None) => continue,
                Err(e) => {
                    self.pending.clear();
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
