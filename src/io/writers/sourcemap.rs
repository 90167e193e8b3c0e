use std::path::{Path, PathBuf};

use crate::engine::SourceMap;
use crate::error::{Error, Result};

#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

/// Path of the sidecar map for `output`: the full output name plus `.map`.
pub fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_os_string();
    name.push(".map");
    PathBuf::from(name)
}

/// Append a `sourceMappingURL` comment carrying the whole map as a data URL.
pub fn append_inline_comment(code: &mut String, map: &SourceMap) {
    code.push_str(EOL);
    code.push_str("//# sourceMappingURL=");
    code.push_str(&map.to_url());
}

/// Write the map next to `output` and point `code` at it by base name.
pub fn write_sidecar(code: &mut String, map: &SourceMap, output: &Path) -> Result<()> {
    let sidecar = sidecar_path(output);
    let reference = sidecar
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    code.push_str(EOL);
    code.push_str("//# sourceMappingURL=");
    code.push_str(&reference);

    std::fs::write(&sidecar, map.to_string()).map_err(|e| Error::fs(&sidecar, e))
}
