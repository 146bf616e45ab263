//! Bundle manifest resolver
//!
//! Reads the top-level bundle file line by line, extracts the paths named
//! by `@import url(...)` directives, and inlines the contents of every
//! referenced file that exists on disk.

use std::fs;
use std::path::Path;

use crate::error::{CinchError, CinchResult};

/// Directive keyword that marks an import line
const IMPORT_KEYWORD: &str = "@import";

/// Marker that opens a URL token within an import line
const URL_MARKER: &str = "url(";

/// Extract the referenced path from a single manifest line.
///
/// Returns `None` for blank lines, lines that do not start with `@import`,
/// and import lines without a `url(` token. None of these are errors; the
/// manifest may freely mix directives with other CSS.
///
/// The path is everything between `url(` and the next `)` (to end of line
/// when the closing parenthesis is missing), with surrounding whitespace
/// and quote characters stripped.
///
/// # Example
/// ```
/// use cinch::manifest::parse_import;
///
/// let path = parse_import("@import url('layout/grid.css');");
/// assert_eq!(path.as_deref(), Some("layout/grid.css"));
/// ```
pub fn parse_import(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || !line.starts_with(IMPORT_KEYWORD) {
        return None;
    }

    let (_, rest) = line.split_once(URL_MARKER)?;
    let token = match rest.find(')') {
        Some(end) => &rest[..end],
        None => rest,
    };

    let path = token.trim().trim_matches(|c| c == '\'' || c == '"');
    Some(path.to_string())
}

/// Resolve every import in the manifest to its file contents.
///
/// Contents are returned in manifest order. Paths resolve relative to the
/// manifest's parent directory. An import whose target does not exist is
/// skipped; nothing in the output distinguishes it from a resolved one.
///
/// Fails only when the manifest itself is missing.
pub fn resolve_imports(manifest_path: &Path) -> CinchResult<Vec<String>> {
    if !manifest_path.exists() {
        return Err(CinchError::ManifestNotFound {
            path: manifest_path.to_path_buf(),
        });
    }

    let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let content = fs::read_to_string(manifest_path)?;
    log::debug!("read manifest {}", manifest_path.display());

    let mut parts = Vec::new();
    for line in content.lines() {
        let Some(import) = parse_import(line) else {
            continue;
        };

        let target = base.join(&import);
        if !target.exists() {
            continue;
        }

        parts.push(fs::read_to_string(&target)?);
    }

    log::debug!("inlined {} imports", parts.len());
    Ok(parts)
}
