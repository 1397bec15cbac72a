//! Class body extraction and inline member scanning.
//!
//! This pass is decoupled from the top-level scope walk: inline constructors
//! and destructors must be found even inside classes the walk intentionally
//! skipped (nested in namespaces, preceded by preprocessor noise, and so on).

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::comments::collapse_whitespace;

lazy_static! {
    /// `class`/`struct` header through its opening brace, capturing the name.
    static ref CLASS_BODY_HEADER: Regex = Regex::new(
        r"(?s)\b(?:class|struct)\s+([A-Za-z_]\w*)(?:\s*<[^>]*>)?(?:\s*[^;{]+)?\{"
    )
    .unwrap();
}

/// A class or struct body located by brace matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBody {
    pub name: String,
    /// Body text from the opening `{` through the matching `}` inclusive.
    /// An unterminated body extends to end of input.
    pub body: String,
}

/// Locate every `class`/`struct` body in comment-free source.
///
/// Each header match is followed by a standalone brace walk starting at
/// depth 1 to find the matching closing brace. The scan resumes after the
/// body, so nested classes surface only through the outer body text.
pub fn find_class_bodies(text: &str) -> Vec<ClassBody> {
    let mut bodies = Vec::new();
    let mut index = 0;

    while let Some(caps) = CLASS_BODY_HEADER.captures_at(text, index) {
        let (whole, name) = match (caps.get(0), caps.get(1)) {
            (Some(w), Some(n)) => (w, n),
            _ => break,
        };

        // The header pattern ends at the opening brace.
        let body_start = whole.end() - 1;
        let bytes = text.as_bytes();
        let mut depth: i32 = 1;
        let mut cursor = body_start + 1;
        while cursor < bytes.len() && depth > 0 {
            match bytes[cursor] {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
            cursor += 1;
        }

        bodies.push(ClassBody {
            name: name.as_str().to_string(),
            body: text[body_start..cursor].to_string(),
        });
        index = cursor;
    }

    bodies
}

/// Find inline constructor and destructor declarations in a class body.
///
/// Matches heads of the form `Name(...)` or `~Name(...)` up to a `;`, `{`,
/// or `}` terminator at any nesting depth within the body. Nested classes
/// are not excluded; the over-approximation is intentional.
pub fn inline_members(class_name: &str, body: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut constructors = BTreeSet::new();
    let mut destructors = BTreeSet::new();

    // The boundary sits after the optional tilde: `~` is a non-word
    // character, so `\b~` can never match after whitespace.
    let pattern = format!(
        r"(?s)(~?\b{})\s*\(([^;{{}}]*)\)[^;{{}}]*[;{{}}]",
        regex::escape(class_name)
    );
    let member = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return (constructors, destructors),
    };

    for m in member.find_iter(body) {
        let snippet = collapse_whitespace(m.as_str());
        let head = snippet.split('(').next().unwrap_or("");
        if snippet.starts_with(class_name) && !head.contains('~') {
            constructors.insert(snippet.clone());
        }
        if snippet.starts_with('~') && snippet[1..].starts_with(class_name) {
            destructors.insert(snippet);
        }
    }

    (constructors, destructors)
}
