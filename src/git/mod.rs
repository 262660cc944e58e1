//! Commit source abstraction layer
//!
//! This module provides a trait-based abstraction over the repository that
//! supplies commits and tags, allowing the changelog to be built from a real
//! Git repository or from an in-memory mock in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [CommitSource] trait. Implementations:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Reading from a source is kept apart from building the changelog:
//! [collect_history] is the only fallible step and returns plain values that
//! [crate::changelog::build_changelog] consumes.
//!
//! ```no_run
//! # use changelog_gen::git::{collect_history, Git2Repository};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let history = {
//!     let repo = Git2Repository::open(".")?;
//!     collect_history(&repo, None)?
//! };
//! println!("{}: {} commits", history.branch, history.commits.len());
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{Commit, Tag};
use crate::error::{ChangelogError, Result};

/// Read-only access to the branches, commits and tags of a repository
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to [crate::error::ChangelogError]
/// variants; a missing branch is always [ChangelogError::BranchNotFound].
pub trait CommitSource {
    /// Branch names in a stable order; the first one is the primary branch
    fn branch_names(&self) -> Result<Vec<String>>;

    /// Every commit reachable from the tip of `branch`
    fn commits(&self, branch: &str) -> Result<Vec<Commit>>;

    /// Every tag, resolved to the commit it marks, in lookup order
    fn tags(&self) -> Result<Vec<Tag>>;
}

/// Commits and tags of one branch, fully materialised
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    pub branch: String,
    /// Ordered by descending authoring timestamp
    pub commits: Vec<Commit>,
    pub tags: Vec<Tag>,
}

/// Read the history of `branch` (or of the primary branch when `None`).
///
/// Commits are sorted newest first by authoring timestamp; commits with equal
/// timestamps keep the order the source reported them in.
///
/// # Errors
/// * [ChangelogError::BranchNotFound] - If the named branch does not exist
/// * [ChangelogError::NoBranches] - If no branch was named and the source has none
pub fn collect_history<S: CommitSource + ?Sized>(
    source: &S,
    branch: Option<&str>,
) -> Result<History> {
    let branches = source.branch_names()?;
    debug!(?branches, "Available branches");

    let branch = match branch {
        Some(name) => branches
            .into_iter()
            .find(|candidate| candidate == name)
            .ok_or_else(|| ChangelogError::BranchNotFound(name.to_string()))?,
        None => branches
            .into_iter()
            .next()
            .ok_or(ChangelogError::NoBranches)?,
    };

    let started = Instant::now();
    let mut commits = source.commits(&branch)?;
    let tags = source.tags()?;
    commits.sort_by(|a, b| b.authored.cmp(&a.authored));

    info!(
        "{} commits {} tags {} ({:.2?})",
        branch,
        commits.len(),
        tags.len(),
        started.elapsed()
    );

    Ok(History {
        branch,
        commits,
        tags,
    })
}
