//! Commit fetching over a resolved range.

use git2::Repository;
use tracing::{debug, warn};

use super::range::RevRange;

/// A commit as the classifier sees it: subject line plus attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub subject: String,
    pub author: String,
}

/// Fetch commits in a range, most recent first.
///
/// Walk failures are not fatal: a range that cannot be walked yields the
/// commits collected so far (possibly none), matching `git log` on an
/// empty or broken range.
pub fn fetch_commits(repo: &Repository, range: &RevRange) -> Vec<CommitRecord> {
    let mut revwalk = match repo.revwalk() {
        Ok(walk) => walk,
        Err(e) => {
            warn!("Could not start commit walk: {}", e);
            return Vec::new();
        }
    };

    if let Err(e) = revwalk.push(range.to) {
        warn!("Could not push range end onto walk: {}", e);
        return Vec::new();
    }

    if let Some(from) = range.from {
        if let Err(e) = revwalk.hide(from) {
            warn!("Could not hide range start {}: {}", from, e);
            return Vec::new();
        }
    }

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = match oid_result {
            Ok(oid) => oid,
            Err(e) => {
                warn!("Commit walk stopped early: {}", e);
                break;
            }
        };

        let commit = match repo.find_commit(oid) {
            Ok(commit) => commit,
            Err(e) => {
                warn!("Skipping unreadable commit {}: {}", oid, e);
                continue;
            }
        };

        // Non-UTF-8 subjects cannot be classified; skip the record.
        let Some(subject) = commit.summary() else {
            debug!("Skipping commit {} with non-UTF-8 subject", oid);
            continue;
        };

        let author = commit.author().name().unwrap_or("unknown").to_string();

        commits.push(CommitRecord {
            hash: oid.to_string(),
            subject: subject.to_string(),
            author,
        });
    }

    commits
}
