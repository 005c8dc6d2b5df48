//! Render classified sections as a Markdown document.

use crate::classify::Sections;

/// Render the changelog document for a version.
///
/// Returns `None` when no category received any commit, so the caller can
/// skip the write instead of producing a heading with nothing under it.
/// Output is deterministic for a given input.
pub fn render_changelog(version_title: &str, sections: &Sections) -> Option<String> {
    if sections.is_empty() {
        return None;
    }

    let mut document = format!("## {}\n\n", version_title);

    for (category, bullets) in sections.iter() {
        document.push_str(&format!("### {}\n\n", category.as_str()));
        document.push_str(&bullets.join("\n"));
        document.push_str("\n\n");
    }

    Some(document)
}
