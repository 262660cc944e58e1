//! Bucket builder - partitions a commit stream into tag-keyed buckets
//!
//! Commits are consumed newest first. A commit targeted by a tag opens a
//! bucket named after that tag and dated at the commit; every following
//! commit joins it until the next tag match. Commits seen before any tag
//! match land in the [`UNTAGGED`](crate::domain::UNTAGGED) bucket.

pub mod tag_index;

pub use tag_index::TagIndex;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Bucket, BucketKey, ChangeLog, Commit, Tag};
use crate::warnings::ChangelogWarning;

/// A built changelog together with the warnings raised while building it
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutcome {
    pub changelog: ChangeLog,
    pub warnings: Vec<ChangelogWarning>,
}

/// Build the changelog for `branch`.
///
/// `commits` must be ordered by descending authoring timestamp. Buckets in
/// the result are ordered by descending date; buckets sharing a date keep
/// the order in which they were opened.
///
/// # Example
/// ```ignore
/// let outcome = build_changelog("main", &commits, &tags);
/// for bucket in outcome.changelog.buckets() {
///     println!("{} ({} commits)", bucket.key.name, bucket.messages.len());
/// }
/// ```
pub fn build_changelog(branch: &str, commits: &[Commit], tags: &[Tag]) -> BuildOutcome {
    let index = TagIndex::new(tags);
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut positions: HashMap<BucketKey, usize> = HashMap::new();
    let mut warnings = Vec::new();
    let mut current: Option<BucketKey> = None;

    for commit in commits {
        if let Some(warning) = index.ambiguity(&commit.id) {
            warn!("{}", warning);
            warnings.push(warning);
        }

        let key = match (index.tag_for(&commit.id), current.take()) {
            (Some(name), _) => BucketKey::new(name, commit.date()),
            (None, Some(key)) => key,
            (None, None) => BucketKey::untagged(commit.date()),
        };

        let slot = *positions.entry(key.clone()).or_insert_with(|| {
            buckets.push(Bucket::new(key.clone()));
            buckets.len() - 1
        });
        buckets[slot].messages.push(commit.message.clone());

        current = Some(key);
    }

    // Stable: equal dates keep insertion order
    buckets.sort_by(|a, b| b.key.date.cmp(&a.key.date));

    debug!(
        branch,
        commits = commits.len(),
        tags = index.len(),
        buckets = buckets.len(),
        "Built changelog"
    );

    BuildOutcome {
        changelog: ChangeLog::new(branch, buckets),
        warnings,
    }
}
