//! Heuristic declaration scanning engine for C/C++ source text.
//!
//! The engine locates top-level function, constructor, destructor, and
//! operator-overload declarations without a compiler front end. It works in
//! four stages, each a pure function of text:
//!
//! - `comments`: strip block and line comments
//! - `scope`: walk braces and semicolons with a stack of tagged scope frames,
//!   yielding top-level candidate spans
//! - `classify`: decide what kind of declaration a candidate is
//! - `classes`: independently extract class bodies and their inline
//!   constructors and destructors
//!
//! `file::scan_source` ties the stages together for one file.

mod classes;
mod classify;
mod comments;
mod file;
mod scope;
mod types;

pub use classes::{find_class_bodies, inline_members, ClassBody};
pub use classify::classify;
pub use comments::{collapse_whitespace, strip_comments};
pub use file::scan_source;
pub use scope::{is_control_structure, top_level_candidates};
pub use types::{Category, FileSignatures};
