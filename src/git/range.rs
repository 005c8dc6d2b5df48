//! Commit range resolution.

use git2::{Oid, Repository};
use tracing::{debug, warn};

use crate::error::GitError;

/// Resolved revision range: exclusive start, inclusive end.
///
/// `from = None` means the entire history reachable from `to`.
#[derive(Debug, Clone)]
pub struct RevRange {
    pub from: Option<Oid>,
    pub from_ref: String,
    pub to: Oid,
}

/// Resolve the revision range to collect commits from.
///
/// If `previous` is given and resolves, the range starts there (exclusive).
/// An invalid `previous` falls back to the root commit with a warning; a
/// missing root degrades to the entire history. Resolution never fails,
/// it only broadens.
///
/// Returns `None` when the repository has no HEAD (nothing to log).
pub fn resolve_range(repo: &Repository, previous: Option<&str>) -> Option<RevRange> {
    let to = match repo.head().ok().and_then(|head| head.target()) {
        Some(oid) => oid,
        None => {
            debug!("Repository has no HEAD, nothing to log");
            return None;
        }
    };

    let (from, from_ref) = match previous {
        Some(reference) => match resolve_reference(repo, reference) {
            Some(oid) => (Some(oid), reference.to_string()),
            None => {
                warn!(
                    reference,
                    "Previous reference does not resolve, comparing from the first commit"
                );
                root_fallback(repo, to)
            }
        },
        None => root_fallback(repo, to),
    };

    Some(RevRange { from, from_ref, to })
}

/// Resolve a reference (tag, branch, commit hash) to a commit OID.
fn resolve_reference(repo: &Repository, reference: &str) -> Option<Oid> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Some(oid);
        }
    }

    // Try as a reference (branch or tag)
    let obj = repo.revparse_single(reference).ok()?;
    Some(obj.peel_to_commit().ok()?.id())
}

/// Root commit of the history reachable from `to`, or the entire history
/// when the walk cannot complete.
fn root_fallback(repo: &Repository, to: Oid) -> (Option<Oid>, String) {
    match find_root_commit(repo, to) {
        Ok(root) => (Some(root), "root".to_string()),
        Err(e) => {
            warn!(
                "Could not resolve the first commit ({}), using entire history",
                e
            );
            (None, "start".to_string())
        }
    }
}

/// Find the root commit reachable from the given OID.
fn find_root_commit(repo: &Repository, to: Oid) -> Result<Oid, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;
    revwalk.push(to).map_err(GitError::RevwalkError)?;

    let mut root_oid = to;

    for oid_result in revwalk {
        match oid_result {
            Ok(oid) => root_oid = oid,
            Err(e) => {
                warn!(
                    "Error during revwalk traversal: {}. Continuing with last valid commit.",
                    e
                );
            }
        }
    }

    Ok(root_oid)
}
