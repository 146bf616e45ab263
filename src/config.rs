//! Configuration module for Cinch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CINCH_*)
//! 3. Project config (cinch.toml in the project root)
//! 4. User config (~/.config/cinch/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CinchResult;

/// Bundle path configuration
///
/// Paths are interpreted relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleConfig {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            output: default_output(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("css/app.bundle.css")
}

fn default_output() -> PathBuf {
    PathBuf::from("css/app.bundle.min.css")
}

/// Output write behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteConfig {
    /// Write via temp file + rename instead of in place
    #[serde(default = "default_true")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self { atomic: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub bundle: BundleConfig,

    #[serde(default)]
    pub write: WriteConfig,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CinchResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CinchResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| crate::error::CinchError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: &Path) -> Self {
        let project_config = project_root.join("cinch.toml");
        if project_config.exists() {
            if let Ok(config) = Self::load(&project_config) {
                return config.with_env_overrides();
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("cinch/config.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return config.with_env_overrides();
                }
            }
        }

        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (CINCH_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(manifest) = std::env::var("CINCH_MANIFEST") {
            self.bundle.manifest = PathBuf::from(manifest);
        }

        if let Ok(output) = std::env::var("CINCH_OUTPUT") {
            self.bundle.output = PathBuf::from(output);
        }

        if let Ok(val) = std::env::var("CINCH_ATOMIC_WRITES") {
            self.write.atomic = val.to_lowercase() != "false" && val != "0";
        }

        self
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["bundle", "manifest", "output", "write", "atomic"];

    let best = CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)?;

    match best {
        (candidate, dist) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut row = vec![i + 1];
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            let val = (prev[j + 1] + 1).min(row[j] + 1).min(prev[j] + cost);
            row.push(val);
        }
        prev = row;
    }

    prev[b_chars.len()]
}
