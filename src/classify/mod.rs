//! Commit classification into changelog categories.

pub mod category;
pub mod classifier;

pub use category::{Category, CommitType};
pub use classifier::{classify, ClassifyOptions, Sections};
