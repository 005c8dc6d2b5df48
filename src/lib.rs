//! shiplog - A CLI tool that turns conventional commits into a release-notes changelog.
//!
//! # Overview
//!
//! shiplog walks a range of git commits, buckets conventional-commit subjects
//! into human-readable categories, and writes the result as a Markdown
//! section to CHANGELOG.md (overwriting the previous contents).

pub mod changelog;
pub mod classify;
pub mod error;
pub mod git;

// Re-export commonly used types
pub use changelog::{render_changelog, write_changelog};
pub use classify::{classify, Category, ClassifyOptions, CommitType, Sections};
pub use error::{ChangelogError, GitError};
pub use git::{CommitRecord, RevRange};
