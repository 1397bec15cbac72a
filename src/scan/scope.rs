//! Scope-aware extraction of top-level candidate spans.
//!
//! Walks comment-free source one character at a time, maintaining a brace
//! depth counter and a stack of open lexical scopes. Plain brace counting
//! cannot tell "the class body to skip" from "a top-level function to
//! record"; the tagged frame stack carries exactly enough structural memory
//! to make that distinction without a real grammar.

use lazy_static::lazy_static;
use phf::phf_set;
use regex::Regex;

use super::comments::collapse_whitespace;

/// Keywords that open control structures or non-declaration statements.
/// Checked against the first identifier token of a candidate only.
static CONTROL_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "if",
    "for",
    "while",
    "switch",
    "catch",
    "return",
    "else",
    "sizeof",
    "throw",
    "do",
    "static_assert",
    "using",
    "typedef",
    "namespace",
};

lazy_static! {
    /// Leading identifier token of a candidate.
    static ref HEAD_TOKEN: Regex = Regex::new(r"^([A-Za-z_]\w*)").unwrap();

    /// `class`/`struct`/`union` header, optionally template-prefixed.
    static ref CLASS_HEADER: Regex =
        Regex::new(r"^(?:template\s*<[^>]+>\s*)?(?:class|struct|union)\b").unwrap();

    /// `namespace` header, optionally template-prefixed.
    static ref NAMESPACE_HEADER: Regex =
        Regex::new(r"^(?:template\s*<[^>]+>\s*)?namespace\b").unwrap();
}

/// Kind of lexical scope a frame represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    ClassOrNamespace,
    FunctionBody,
}

/// A currently-open scope and the brace depth at which it closes.
#[derive(Debug, Clone, Copy)]
struct ScopeFrame {
    kind: ScopeKind,
    closes_at: i32,
}

/// True if the candidate's first identifier token is a control keyword.
pub fn is_control_structure(candidate: &str) -> bool {
    match HEAD_TOKEN.captures(candidate.trim_start()) {
        Some(caps) => CONTROL_KEYWORDS.contains(&caps[1]),
        None => false,
    }
}

/// True if the candidate reads like the prefix of a function definition.
fn is_function_definition(candidate: &str) -> bool {
    let stripped = candidate.trim_start();
    if !stripped.contains('(') {
        return false;
    }
    if is_control_structure(stripped) {
        return false;
    }
    !(stripped.starts_with("class ")
        || stripped.starts_with("struct ")
        || stripped.starts_with("union ")
        || stripped.starts_with("namespace "))
}

/// True if any open class/namespace frame covers the given depth.
fn in_class_scope(stack: &[ScopeFrame], depth: i32) -> bool {
    stack
        .iter()
        .any(|f| f.kind == ScopeKind::ClassOrNamespace && depth >= f.closes_at)
}

/// True if any open frame of either kind covers the given depth.
fn in_any_scope(stack: &[ScopeFrame], depth: i32) -> bool {
    stack.iter().any(|f| depth >= f.closes_at)
}

/// Extract every top-level candidate span from comment-free source.
///
/// Candidates are whitespace-collapsed spans delimited by `{` or `;` that
/// occur at depth <= 1 outside any open class, namespace, or function-body
/// scope. Spans ending in `{` inside a function body are still emitted when
/// only a function frame covers them (the classifier rejects the resulting
/// control-structure spans); spans ending in `;` are suppressed by frames of
/// either kind. Depth is signed so that stray closing braces in malformed
/// input keep the single forward pass going instead of wrapping.
pub fn top_level_candidates(text: &str) -> Vec<String> {
    let mut depth: i32 = 0;
    let mut buffer = String::new();
    let mut stack: Vec<ScopeFrame> = Vec::new();
    let mut candidates = Vec::new();

    for ch in text.chars() {
        match ch {
            '{' => {
                let candidate = buffer.trim().to_string();
                if !candidate.is_empty() && depth <= 1 && !in_class_scope(&stack, depth) {
                    candidates.push(collapse_whitespace(&candidate));
                }
                if CLASS_HEADER.is_match(&candidate) || NAMESPACE_HEADER.is_match(&candidate) {
                    stack.push(ScopeFrame {
                        kind: ScopeKind::ClassOrNamespace,
                        closes_at: depth + 1,
                    });
                } else if is_function_definition(&candidate) {
                    stack.push(ScopeFrame {
                        kind: ScopeKind::FunctionBody,
                        closes_at: depth + 1,
                    });
                }
                depth += 1;
                buffer.clear();
            }
            ';' => {
                if depth <= 1 && !in_any_scope(&stack, depth) {
                    let candidate = buffer.trim();
                    if !candidate.is_empty() {
                        candidates.push(collapse_whitespace(candidate));
                    }
                }
                buffer.clear();
            }
            '}' => {
                depth -= 1;
                while stack.last().is_some_and(|f| depth < f.closes_at) {
                    stack.pop();
                }
                buffer.clear();
            }
            _ => buffer.push(ch),
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_keyword_heads() {
        assert!(is_control_structure("if (x > 0)"));
        assert!(is_control_structure("  while (true)"));
        assert!(is_control_structure("return compute()"));
        assert!(is_control_structure("namespace util"));
        assert!(!is_control_structure("int main()"));
        assert!(!is_control_structure("~Foo()"));
        assert!(!is_control_structure(""));
    }

    #[test]
    fn test_top_level_function_definition() {
        let candidates = top_level_candidates("int add(int a, int b) {\n    return a + b;\n}\n");
        assert_eq!(candidates, vec!["int add(int a, int b)".to_string()]);
    }

    #[test]
    fn test_top_level_declaration_statement() {
        let candidates = top_level_candidates("void helper(int value);\n");
        assert_eq!(candidates, vec!["void helper(int value)".to_string()]);
    }

    #[test]
    fn test_function_body_statements_suppressed() {
        let text = "void run() {\n    this->helper();\n    other();\n}\n";
        let candidates = top_level_candidates(text);
        assert_eq!(candidates, vec!["void run()".to_string()]);
    }

    #[test]
    fn test_class_body_members_suppressed() {
        let text = "class Foo {\npublic:\n    void method();\n    int field;\n};\n";
        let candidates = top_level_candidates(text);
        // The header span itself is recorded; nothing inside the body is.
        assert_eq!(candidates, vec!["class Foo".to_string()]);
    }

    #[test]
    fn test_namespace_contents_suppressed() {
        let text = "namespace util {\nvoid helper();\nint parse(const char *text) {\n    return 0;\n}\n}\n";
        let candidates = top_level_candidates(text);
        assert_eq!(candidates, vec!["namespace util".to_string()]);
    }

    #[test]
    fn test_template_class_header_opens_scope() {
        let text = "template <typename T> class Box {\n    T value;\n};\n";
        let candidates = top_level_candidates(text);
        assert_eq!(candidates, vec!["template <typename T> class Box".to_string()]);
    }

    #[test]
    fn test_control_spans_inside_function_still_emitted() {
        // Only class frames suppress `{`-delimited spans; the classifier is
        // responsible for rejecting these downstream.
        let text = "void f() {\n    if (x) {\n        g();\n    }\n}\n";
        let candidates = top_level_candidates(text);
        assert_eq!(
            candidates,
            vec!["void f()".to_string(), "if (x)".to_string()]
        );
    }

    #[test]
    fn test_candidates_are_whitespace_collapsed() {
        let text = "static  int\n\tcompute(int value)  {\n}\n";
        let candidates = top_level_candidates(text);
        assert_eq!(candidates, vec!["static int compute(int value)".to_string()]);
    }

    #[test]
    fn test_unterminated_trailing_statement_dropped() {
        let candidates = top_level_candidates("void f();\nint trailing_garbage(");
        assert_eq!(candidates, vec!["void f()".to_string()]);
    }

    #[test]
    fn test_stray_closing_braces_do_not_wrap() {
        let candidates = top_level_candidates("}\n}\nvoid f();\n");
        assert_eq!(candidates, vec!["void f()".to_string()]);
    }

    #[test]
    fn test_successive_scopes_pop_cleanly() {
        let text = "class A {\n    int x;\n};\nvoid after();\n";
        let candidates = top_level_candidates(text);
        assert_eq!(
            candidates,
            vec!["class A".to_string(), "void after()".to_string()]
        );
    }
}
