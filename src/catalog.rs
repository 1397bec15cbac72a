//! Catalog aggregation across files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::scan::{scan_source, Category, FileSignatures};

/// Per-file categorized declaration snippets for a whole source tree.
///
/// Built fresh per invocation; no persisted state.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Files that produced at least one snippet, keyed by path relative to
    /// the scan root (absolute when outside it).
    pub files: BTreeMap<PathBuf, FileSignatures>,
    /// Number of files actually read and scanned.
    pub scanned: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total snippet count in a category across all files.
    pub fn category_count(&self, category: Category) -> usize {
        self.files.values().map(|s| s.get(category).len()).sum()
    }

    /// True if no file produced any snippet.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scans a set of files into a catalog.
pub struct Scanner {
    base_dir: PathBuf,
}

impl Scanner {
    /// Create a new scanner rooted at the given directory.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Scan every file and collect non-empty results into a catalog.
    ///
    /// Files are processed in parallel; each file's scan is a pure function
    /// of its text, so the only synchronization point is the final merge.
    /// Unreadable files are skipped rather than failing the run, and
    /// undecodable bytes are substituted rather than aborting the file.
    pub fn run(&self, files: &[PathBuf]) -> Catalog {
        let scanned = AtomicUsize::new(0);

        let results: Vec<(PathBuf, FileSignatures)> = files
            .par_iter()
            .filter_map(|path| {
                let bytes = std::fs::read(path).ok()?;
                let text = String::from_utf8_lossy(&bytes);
                scanned.fetch_add(1, Ordering::Relaxed);

                let signatures = scan_source(&text);
                if signatures.is_empty() {
                    None
                } else {
                    Some((self.relative(path), signatures))
                }
            })
            .collect();

        Catalog {
            files: results.into_iter().collect(),
            scanned: scanned.into_inner(),
        }
    }

    /// Path relative to the scan root when possible.
    fn relative(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.base_dir) {
            Ok(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => path.to_path_buf(),
        }
    }
}
