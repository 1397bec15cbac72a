//! Command-line interface for sigscan.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::catalog::Scanner;
use crate::profile::{self, Profile};
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Default profile file names to search for.
const DEFAULT_PROFILE_NAMES: &[&str] = &["sigscan.yaml", ".sigscan.yaml"];

/// Heuristic C/C++ declaration scanner and signature catalog builder.
///
/// sigscan walks a source tree, locates function, constructor, destructor,
/// and operator-overload declarations with comment-stripping and
/// regular-expression heuristics - no compiler front end - and renders a
/// per-file signature catalog.
#[derive(Parser)]
#[command(name = "sigscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a source tree and build the signature catalog
    #[command(visible_alias = "catalog")]
    Scan(ScanArgs),
    /// Create a new scan profile from a template
    Init(InitArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Path to profile YAML file (default: auto-discover, then built-in defaults)
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Output format: pretty, markdown, or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Write the rendered catalog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "sigscan.yaml")]
    pub output: PathBuf,

    /// Template to use
    #[arg(short, long, default_value = "default")]
    pub template: String,

    /// List available templates
    #[arg(short, long)]
    pub list: bool,
}

/// Available profile templates.
struct Template {
    name: &'static str,
    description: &'static str,
    content: &'static str,
}

/// All available templates.
static TEMPLATES: &[Template] = &[
    Template {
        name: "default",
        description: "Conventional C/C++ tree - sources and headers, Docs and tools excluded",
        content: include_str!("templates/default.yaml"),
    },
    Template {
        name: "headers",
        description: "Header-only scan - declarations in .h/.hh/.hpp/.ipp files",
        content: include_str!("templates/headers.yaml"),
    },
];

/// Discover a profile file in the current directory.
fn discover_profile() -> Option<PathBuf> {
    DEFAULT_PROFILE_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Collect source files to scan under a root directory.
fn collect_files(root: &Path, profile: &Profile) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories
            if e.file_type().is_dir() && name.starts_with('.') && e.depth() > 0 {
                return false;
            }
            // Skip profile-excluded directories
            if e.file_type().is_dir() && profile.is_dir_excluded(&name) {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !profile.matches_extension(ext) {
            continue;
        }
        if profile.is_path_excluded(path) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "markdown" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'markdown', or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Resolve profile: explicit flag, discovered file, or built-in defaults
    let (profile, profile_desc) = match args.profile.clone().or_else(discover_profile) {
        Some(path) => {
            let profile = match Profile::parse_file(&path) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing profile: {}", e);
                    return Ok(EXIT_ERROR);
                }
            };
            if let Err(e) = profile::validate(&profile) {
                eprintln!("Error: invalid profile: {}", e);
                return Ok(EXIT_ERROR);
            }
            (profile, path.display().to_string())
        }
        None => (Profile::default(), "(built-in defaults)".to_string()),
    };

    // Resolve path
    let abs_path = match args.path.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = match std::fs::metadata(&abs_path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    // Collect files to scan
    let files = if metadata.is_dir() {
        collect_files(&abs_path, &profile)?
    } else {
        vec![abs_path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_SUCCESS);
    }

    // Scan (single files are rooted at their parent directory)
    let base_dir = if metadata.is_dir() {
        abs_path.as_path()
    } else {
        abs_path.parent().unwrap_or(abs_path.as_path())
    };
    let scanner = Scanner::new(base_dir);
    let catalog = scanner.run(&files);

    // Output results
    let output = args.output.clone().or_else(|| profile.output.clone());
    let path_str = args.path.to_string_lossy().to_string();

    match args.format.as_str() {
        "markdown" => {
            let document = report::render_markdown(&catalog);
            emit(&document, output.as_deref())?;
        }
        "json" => {
            let document = report::render_json(&path_str, &profile_desc, &catalog)?;
            emit(&document, output.as_deref())?;
        }
        _ => {
            if let Some(out) = &output {
                let document = report::render_markdown(&catalog);
                write_document(&document, out)?;
            }
            report::write_pretty(&path_str, &profile_desc, &catalog, output.as_deref());
        }
    }

    Ok(EXIT_SUCCESS)
}

/// Print a rendered document to stdout or write it to a file.
fn emit(document: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => write_document(document, path),
        None => {
            println!("{}", document);
            Ok(())
        }
    }
}

/// Write a rendered document, creating parent directories as needed.
fn write_document(document: &str, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, document)?;
    Ok(())
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // List mode
    if args.list {
        return list_templates();
    }

    // Find template
    let template = match TEMPLATES.iter().find(|t| t.name == args.template) {
        Some(t) => t,
        None => {
            eprintln!("Error: unknown template {:?}", args.template);
            eprintln!("Run 'sigscan init --list' to see available templates");
            return Ok(EXIT_ERROR);
        }
    };

    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Write profile file
    if let Err(e) = std::fs::write(&args.output, template.content) {
        eprintln!("Error: failed to write profile: {}", e);
        return Ok(EXIT_ERROR);
    }

    // Success message
    println!(
        "Created {} from template '{}'",
        args.output.display(),
        template.name
    );
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit {} to customize for your project",
        args.output.display()
    );
    println!(
        "  2. Run: sigscan scan . --profile {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}

/// List available templates.
fn list_templates() -> anyhow::Result<i32> {
    println!("Available templates:");
    println!();

    for template in TEMPLATES {
        let name = if template.name == "default" {
            format!("{} (default)", template.name)
        } else {
            template.name.to_string()
        };
        println!("  {:<20} {}", name, template.description);
    }

    println!();
    println!("Usage:");
    println!("  sigscan init --template <name>");

    Ok(EXIT_SUCCESS)
}
