//! Output formatting for scan results.
//!
//! Supports three output formats:
//! - Markdown: the signature catalog document itself
//! - JSON: structured output for programmatic consumption
//! - Pretty: colored terminal summary for human readability

use std::path::Path;

use colored::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::scan::Category;

// =============================================================================
// Markdown Catalog Document
// =============================================================================

/// Placeholder rendered for a category with no entries in any file.
const EMPTY_SECTION_MARKER: &str = "_None yet recorded._";

/// Render the catalog as the markdown signature document.
///
/// Categories appear in fixed order, files in sorted path order, snippets in
/// sorted lexicographic order. A category with zero entries across all files
/// renders a placeholder rather than being omitted.
pub fn render_markdown(catalog: &Catalog) -> String {
    let mut lines: Vec<String> = vec![
        "# Function Signature Catalog".to_string(),
        String::new(),
        format!("Generated by `{}`.", env!("CARGO_PKG_NAME")),
        String::new(),
        "The catalog lists the function declarations and definitions that appear in the \
         C/C++ sources so maintainers can quickly find overloads, constructors, destructors, \
         and other helpers without reading every file manually."
            .to_string(),
        String::new(),
    ];

    for category in Category::ALL {
        lines.push(format!("## {}", category.title()));
        lines.push(String::new());

        let mut entries_exist = false;
        for (path, signatures) in &catalog.files {
            let entries = signatures.get(category);
            if entries.is_empty() {
                continue;
            }
            entries_exist = true;
            lines.push(format!("### {}", display_path(path)));
            lines.push(String::new());
            for snippet in entries {
                lines.push(format!("- `{}`", snippet));
            }
            lines.push(String::new());
        }

        if !entries_exist {
            lines.push(EMPTY_SECTION_MARKER.to_string());
            lines.push(String::new());
        }
    }

    lines.push(format!(
        "Document regenerated via `{}`.",
        env!("CARGO_PKG_NAME")
    ));
    lines.join("\n")
}

/// Render a path with forward slashes regardless of platform.
fn display_path(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        text.into_owned()
    } else {
        text.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub profile: String,
    pub files_scanned: usize,
    pub files: Vec<JsonFileEntry>,
}

/// Per-file snippet lists, one array per category.
#[derive(Serialize, Deserialize)]
pub struct JsonFileEntry {
    pub path: String,
    pub functions: Vec<String>,
    pub constructors: Vec<String>,
    pub destructors: Vec<String>,
    pub operators: Vec<String>,
}

/// Render the catalog as pretty-printed JSON.
pub fn render_json(path: &str, profile_path: &str, catalog: &Catalog) -> anyhow::Result<String> {
    let files: Vec<JsonFileEntry> = catalog
        .files
        .iter()
        .map(|(file_path, signatures)| JsonFileEntry {
            path: display_path(file_path),
            functions: snippets(signatures.get(Category::Function)),
            constructors: snippets(signatures.get(Category::Constructor)),
            destructors: snippets(signatures.get(Category::Destructor)),
            operators: snippets(signatures.get(Category::Operator)),
        })
        .collect();

    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        profile: profile_path.to_string(),
        files_scanned: catalog.scanned,
        files,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

fn snippets(set: &std::collections::BTreeSet<String>) -> Vec<String> {
    set.iter().cloned().collect()
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write the colored terminal summary.
pub fn write_pretty(path: &str, profile_path: &str, catalog: &Catalog, written_to: Option<&Path>) {
    // Header
    println!();
    print!("  ");
    print!("{}", env!("CARGO_PKG_NAME").cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Scan info
    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    print!("  {}", "Profile:  ".dimmed());
    println!("{}", profile_path);
    println!();

    // Per-category counts
    println!(
        "  {} ({} of {} scanned files with declarations):",
        "Signatures".bold(),
        catalog.files.len(),
        catalog.scanned
    );
    println!();
    for category in Category::ALL {
        let count = catalog.category_count(category);
        let value = if count == 0 {
            count.to_string().dimmed()
        } else {
            count.to_string().green()
        };
        println!("    {:<20} {:>6}", category.title(), value);
    }
    println!();

    if let Some(out) = written_to {
        print!("  {}", "Catalog written to ".dimmed());
        println!("{}", out.display().to_string().blue());
        println!();
    }
}
