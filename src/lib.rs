//! sigscan - heuristic C/C++ declaration scanner and signature catalog builder.
//!
//! sigscan locates every top-level function, constructor, destructor, and
//! operator-overload declaration or definition in C/C++-family source text -
//! including members written inline inside class bodies and out-of-line
//! definitions with qualified names - without a compiler front end. The
//! engine strips comments, tracks brace depth through a stack of tagged
//! scope frames, and applies a regular-expression classification grammar to
//! each top-level candidate span.
//!
//! # Architecture
//!
//! - `scan`: the analysis engine (comment stripping, scope walk, class body
//!   extraction, candidate classification)
//! - `catalog`: parallel per-file scanning and result aggregation
//! - `profile`: YAML scan-profile schema (extensions, exclusions, output)
//! - `report`: output formatting (markdown catalog, JSON, pretty terminal)
//! - `cli`: command-line interface
//!
//! Scanning is best-effort: no AST, no symbol table, no
//! preprocessor evaluation. String literals containing comment-like
//! sequences or unbalanced braces can desynchronize depth tracking; these
//! are documented limitations, not errors.

pub mod catalog;
pub mod cli;
pub mod profile;
pub mod report;
pub mod scan;

pub use catalog::{Catalog, Scanner};
pub use profile::{Profile, ProfileError};
pub use scan::{classify, scan_source, Category, FileSignatures};
