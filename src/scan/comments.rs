//! Comment stripping for C/C++ source text.
//!
//! Stripping runs before any structural scanning so that braces and
//! semicolons inside comments never reach the scope walk. String and
//! character literals are not special-cased: a literal containing `/*` or an
//! unbalanced brace can still desynchronize downstream depth tracking. This
//! is a documented limitation of the heuristic approach, not a crash risk.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `/* ... */` spans, possibly crossing newlines.
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();

    /// `// ...` to end of line.
    static ref LINE_COMMENT: Regex = Regex::new(r"//[^\n]*").unwrap();
}

/// Remove block and line comments from raw source text.
///
/// The output is equal or shorter in length; indentation and literal content
/// are otherwise preserved.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

/// Trim a fragment and fold every whitespace run into a single space.
pub fn collapse_whitespace(fragment: &str) -> String {
    fragment.split_whitespace().collect::<Vec<_>>().join(" ")
}
