//! Classification of top-level candidate spans.

use lazy_static::lazy_static;
use regex::Regex;

use super::scope::is_control_structure;
use super::types::Category;

lazy_static! {
    /// Qualified-name pattern: `Qualifier::Qualifier::...::Member(`.
    static ref QUALIFIED_NAME: Regex =
        Regex::new(r"([A-Za-z_]\w*(?:::[A-Za-z_]\w*)*)\s*::\s*(~?[A-Za-z_]\w*)\s*\(").unwrap();
}

/// Decide what kind of declaration a candidate span is.
///
/// Returns `None` for spans that are not declarations: control structures,
/// class headers, variable statements, call expressions. The decision
/// sequence is first-match-wins, and operator detection runs before
/// qualified-name dissection because operator names may themselves contain
/// `::` and parenthesis-like tokens.
pub fn classify(snippet: &str) -> Option<Category> {
    if !snippet.contains('(') {
        return None;
    }
    let stripped = snippet.trim_start();
    if stripped.starts_with("class ")
        || stripped.starts_with("struct ")
        || stripped.starts_with("union ")
    {
        return None;
    }
    if is_control_structure(snippet) {
        return None;
    }
    if snippet.contains("static_assert") || snippet.starts_with('#') {
        return None;
    }

    let prefix = snippet.split('(').next().unwrap_or(snippet);
    if !prefix.contains("::") {
        // Assignment or initializer, not a declaration.
        if prefix.contains('=') {
            return None;
        }
        // Call expression through a member access.
        if prefix.contains("->") || prefix.contains('.') {
            return None;
        }
        // Bare call with no return type, e.g. a macro invocation.
        if !prefix.contains(char::is_whitespace) {
            return None;
        }
    }

    if snippet.contains("operator") {
        return Some(Category::Operator);
    }

    if let Some(caps) = QUALIFIED_NAME.captures(snippet) {
        let qualifier = &caps[1];
        let member = &caps[2];
        let base = qualifier.rsplit("::").next().unwrap_or(qualifier);
        if member == base {
            return Some(Category::Constructor);
        }
        if member.strip_prefix('~') == Some(base) {
            return Some(Category::Destructor);
        }
        // A qualified member that is neither constructor nor destructor must
        // carry a return type before its first qualifier segment; otherwise
        // the span is a constructor-initializer artifact or similar.
        let before_qualifier = prefix.split("::").next().unwrap_or(prefix);
        if !before_qualifier.contains(char::is_whitespace) {
            return None;
        }
    }

    Some(Category::Function)
}
