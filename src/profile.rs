//! Scan profile definitions.
//!
//! A profile defines which files a scan covers and where the rendered
//! catalog goes. Profiles are optional: the built-in defaults match a
//! conventional C/C++ tree.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default source/header extensions, lowercase, without dots.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "ipp"];

/// Directory names skipped during traversal by default.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["Docs", "tools", ".git"];

/// Errors from loading or validating a profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("reading profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing profile: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid excluded_paths pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: globset::Error,
    },
    #[error("extensions must not be empty")]
    NoExtensions,
}

/// Top-level profile definition.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    /// File extensions to scan (lowercase, dots optional).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names skipped wherever they appear in the tree.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    /// Glob patterns for paths to exclude (e.g. "**/third_party/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Where the markdown catalog is written when `--output` is not given.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            version: String::new(),
            name: String::new(),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            excluded_paths: Vec::new(),
            output: None,
        }
    }
}

impl Profile {
    /// Parse a profile from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path.as_ref())?;
        let profile: Profile = serde_yaml::from_str(&content)?;
        Ok(profile)
    }

    /// True if the extension is in the profile's set (case-insensitive,
    /// tolerating a leading dot in profile entries).
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    /// True if the directory name is excluded.
    pub fn is_dir_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Check a path against the excluded_paths glob patterns.
    /// Invalid patterns are skipped here; `validate` reports them up front.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Validate a profile: extensions present and every glob compiles.
pub fn validate(profile: &Profile) -> Result<(), ProfileError> {
    if profile.extensions.is_empty() {
        return Err(ProfileError::NoExtensions);
    }

    for pattern in &profile.excluded_paths {
        globset::Glob::new(pattern).map_err(|source| ProfileError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let yaml = r#"
version: "1"
name: "engine sources"
extensions:
  - cpp
  - hpp
excluded_dirs:
  - third_party
output: Docs/function_signature_catalog.md
"#;
        let profile: Profile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(profile.name, "engine sources");
        assert_eq!(profile.extensions, vec!["cpp", "hpp"]);
        assert_eq!(profile.excluded_dirs, vec!["third_party"]);
        assert_eq!(
            profile.output.as_deref(),
            Some(Path::new("Docs/function_signature_catalog.md"))
        );
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let profile: Profile = serde_yaml::from_str("name: minimal\n").unwrap();
        assert_eq!(profile.extensions, default_extensions());
        assert_eq!(profile.excluded_dirs, default_excluded_dirs());
        assert!(profile.excluded_paths.is_empty());
        assert!(profile.output.is_none());
    }

    #[test]
    fn test_matches_extension() {
        let profile = Profile::default();
        assert!(profile.matches_extension("cpp"));
        assert!(profile.matches_extension("HPP"));
        assert!(!profile.matches_extension("rs"));

        let dotted: Profile = serde_yaml::from_str("extensions: ['.cc']\n").unwrap();
        assert!(dotted.matches_extension("cc"));
    }

    #[test]
    fn test_path_exclusion_globs() {
        let profile: Profile =
            serde_yaml::from_str("excluded_paths:\n  - \"**/generated/**\"\n").unwrap();
        assert!(profile.is_path_excluded(Path::new("src/generated/bindings.cpp")));
        assert!(!profile.is_path_excluded(Path::new("src/core/engine.cpp")));
    }

    #[test]
    fn test_validate_rejects_empty_extensions() {
        let profile: Profile = serde_yaml::from_str("extensions: []\n").unwrap();
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::NoExtensions)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_glob() {
        let profile: Profile =
            serde_yaml::from_str("excluded_paths:\n  - \"[unclosed\"\n").unwrap();
        assert!(matches!(
            validate(&profile),
            Err(ProfileError::Pattern { .. })
        ));
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate(&Profile::default()).is_ok());
    }
}
