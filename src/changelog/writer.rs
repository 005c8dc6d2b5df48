//! Write the rendered changelog and summarize what was written.

use std::path::Path;

use crate::classify::Sections;
use crate::error::ChangelogError;

/// Write the changelog document, overwriting any previous contents.
pub fn write_changelog(path: &Path, content: &str) -> Result<(), ChangelogError> {
    std::fs::write(path, content).map_err(ChangelogError::WriteFailed)
}

/// Generate a summary message for the user.
pub fn generate_summary(sections: &Sections, path: &Path) -> String {
    let total = sections.len();

    let details: Vec<String> = sections
        .iter()
        .map(|(category, bullets)| format!("{}: {}", category.as_str(), bullets.len()))
        .collect();

    let entry_word = if total == 1 { "entry" } else { "entries" };

    format!(
        "Wrote {} {} ({}) to {}",
        total,
        entry_word,
        details.join(", "),
        path.display()
    )
}
