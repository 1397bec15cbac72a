//! Per-file scan orchestration.

use super::classes::{find_class_bodies, inline_members};
use super::classify::classify;
use super::comments::strip_comments;
use super::scope::top_level_candidates;
use super::types::{Category, FileSignatures};

/// Scan one file's raw text into categorized declaration snippets.
///
/// Strips comments, classifies every top-level candidate span, then folds in
/// inline constructors and destructors found in class bodies. Pure function
/// of the text: it never fails, and unclassifiable spans are silently
/// dropped.
pub fn scan_source(text: &str) -> FileSignatures {
    let stripped = strip_comments(text);
    let mut signatures = FileSignatures::new();

    for candidate in top_level_candidates(&stripped) {
        if let Some(category) = classify(&candidate) {
            signatures.insert(category, candidate);
        }
    }

    for class in find_class_bodies(&stripped) {
        let (constructors, destructors) = inline_members(&class.name, &class.body);
        signatures.extend(Category::Constructor, constructors);
        signatures.extend(Category::Destructor, destructors);
    }

    signatures
}
