//! commitinfo - git commit metadata parsing and rendering
//!
//! Parses the raw metadata block git emits for one commit and renders it as
//! an escaped header/body pair for commit detail views.
//!
//! This library provides:
//! - [`git`]: git command execution, parsing, and the [`git::CommitSource`] seam
//! - [`lookup`]: commit and branch lookup with user-visible fallbacks
//! - [`model`]: Domain models
//! - [`render`]: Header/body rendering

pub mod git;
pub mod lookup;
pub mod model;
pub mod render;
