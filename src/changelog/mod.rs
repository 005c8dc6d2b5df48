//! Changelog rendering and writing.

pub mod render;
pub mod writer;

pub use render::render_changelog;
pub use writer::{generate_summary, write_changelog};
