//! Turns raw flag values into the immutable [`Configuration`] shared by every
//! transform call of a run.
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::params::FlagBag;
use crate::error::{Error, Result};
use crate::types::Configuration;

// ASCII only: `\w` and `\d` would also admit non-Latin letters and digits.
static TARGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9_]+:[0-9.]+,)*[A-Za-z0-9_]+:[0-9.]+$").unwrap()
});

/// Build the run configuration. Fails only on a malformed target.
///
/// Transform toggles are applied enable-first, then disable, so a name listed
/// in both `yes` and `no` ends up disabled.
pub fn assemble(flags: &FlagBag) -> Result<Configuration> {
    let target = match flags.target.as_deref() {
        Some(spec) => parse_target(spec)?,
        None => BTreeMap::new(),
    };

    let mut transforms = BTreeMap::new();
    if let Some(yes) = flags.yes.as_deref() {
        apply_toggles(&mut transforms, yes, true);
    }
    if let Some(no) = flags.no.as_deref() {
        apply_toggles(&mut transforms, no, false);
    }

    let config = Configuration {
        target,
        transforms,
        jsx: flags.jsx.clone(),
        jsx_fragment: flags.jsx_fragment.clone(),
        object_assign: flags.object_assign.clone(),
        named_function_expressions: flags.named_function_expr != Some(false),
        source: None,
        file: None,
    };
    debug!(
        "Assembled configuration: {} target(s), {} transform toggle(s)",
        config.target.len(),
        config.transforms.len()
    );
    Ok(config)
}

/// Parse `name:version[,name:version...]`. Later duplicates win.
pub fn parse_target(spec: &str) -> Result<BTreeMap<String, String>> {
    if !TARGET_RE.is_match(spec) {
        return Err(Error::BadTarget {
            value: spec.to_string(),
        });
    }

    let mut target = BTreeMap::new();
    for pair in spec.split(',') {
        if let Some((name, version)) = pair.split_once(':') {
            target.insert(name.to_string(), version.to_string());
        }
    }
    Ok(target)
}

fn apply_toggles(transforms: &mut BTreeMap<String, bool>, list: &str, enabled: bool) {
    for name in list.split(',').filter(|n| !n.is_empty()) {
        transforms.insert(name.to_string(), enabled);
    }
}
