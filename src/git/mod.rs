//! Git operations using git2-rs.

pub mod commits;
pub mod range;

pub use commits::{fetch_commits, CommitRecord};
pub use range::{resolve_range, RevRange};
