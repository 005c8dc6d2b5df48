//! Error types for shiplog modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),
}

/// Errors from changelog file operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}
