//! Commit-to-bullet classification.

use std::collections::BTreeMap;

use tracing::debug;

use crate::git::CommitRecord;

use super::category::{Category, CommitType, EXCLUDED_PREFIXES};

/// Per-run classification configuration.
///
/// The author-attribution toggle covers the CI variant that renders bare
/// descriptions; everything else in the tables is fixed.
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub attribute_authors: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            attribute_authors: true,
        }
    }
}

/// Bullet lines bucketed by category, in rendering priority order.
///
/// Within a category, bullets keep commit order (most recent first).
#[derive(Debug, Clone, Default)]
pub struct Sections {
    bullets: BTreeMap<Category, Vec<String>>,
}

impl Sections {
    /// Iterate non-empty categories in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.bullets
            .iter()
            .filter(|(_, bullets)| !bullets.is_empty())
            .map(|(category, bullets)| (*category, bullets.as_slice()))
    }

    /// Total number of bullets across all categories.
    pub fn len(&self) -> usize {
        self.bullets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: Category, bullet: String) {
        self.bullets.entry(category).or_default().push(bullet);
    }
}

/// Classify commits into changelog sections.
///
/// Conventional subjects (`type(scope): description`) map through the
/// fixed type table; maintenance types and merge commits are dropped;
/// everything else lands in Other with the full subject as description.
pub fn classify(commits: &[CommitRecord], options: &ClassifyOptions) -> Sections {
    // type(scope)?: description, colon-space per the commit convention
    let subject_re = regex_lite::Regex::new(r"^(\w+)(?:\(([^)]+)\))?: (.*)").unwrap();

    let mut sections = Sections::default();

    for commit in commits {
        let (category, description) = match subject_re.captures(&commit.subject) {
            Some(caps) => {
                let type_str = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                let description = caps.get(3).map(|m| m.as_str()).unwrap_or("");

                match type_str.parse::<CommitType>() {
                    Ok(commit_type) => match commit_type.category() {
                        Some(category) => (category, description),
                        None => {
                            debug!(hash = %commit.hash, "Dropping maintenance commit");
                            continue;
                        }
                    },
                    // Well-formed subject with an unrecognized type
                    Err(_) => (Category::Other, description),
                }
            }
            None => {
                if is_excluded_subject(&commit.subject) {
                    debug!(hash = %commit.hash, "Dropping excluded or merge commit");
                    continue;
                }
                (Category::Other, commit.subject.as_str())
            }
        };

        let bullet = if options.attribute_authors {
            format!("- {} (@{})", description, commit.author)
        } else {
            format!("- {}", description)
        };

        sections.push(category, bullet);
    }

    sections
}

/// Non-conventional subjects that are still maintenance noise: merge
/// commits and excluded prefixes missing the space after the colon.
fn is_excluded_subject(subject: &str) -> bool {
    if subject.starts_with("Merge ") {
        return true;
    }

    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| subject.starts_with(&format!("{}:", prefix)))
}
