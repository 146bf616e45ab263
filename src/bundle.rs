//! Bundle build orchestration
//!
//! Runs the whole pipeline for one invocation: resolve the manifest's
//! imports, join them, minify, write the output file.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::CinchResult;
use crate::manifest;
use crate::minify;

/// Options for a single build run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Report what would be written without touching the output file
    pub dry_run: bool,
}

/// Result of a build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// Output path, joined onto the project root
    pub output: PathBuf,
    /// Byte length of the minified text
    pub bytes: usize,
    /// Number of imports that were inlined
    pub imports: usize,
}

/// Build the minified bundle for a project root.
///
/// The output is a pure function of the manifest and the referenced files:
/// rerunning with unchanged inputs writes byte-identical content.
pub fn build(root: &Path, config: &Config, options: &BuildOptions) -> CinchResult<BundleReport> {
    let manifest_path = root.join(&config.bundle.manifest);
    let parts = manifest::resolve_imports(&manifest_path)?;
    let imports = parts.len();

    let combined = parts.join("\n");
    let minified = minify::minify(&combined);

    let output = root.join(&config.bundle.output);
    if !options.dry_run {
        if config.write.atomic {
            write_atomic(&output, &minified)?;
        } else {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, &minified)?;
        }
        log::debug!("wrote {}", output.display());
    }

    Ok(BundleReport {
        output,
        bytes: minified.len(),
        imports,
    })
}

/// Write content through a temp file in the target directory, then rename.
fn write_atomic(path: &Path, content: &str) -> CinchResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
