use chrono::NaiveDate;

/// Reserved bucket name for commits seen before the first tag match
pub const UNTAGGED: &str = "Untagged";

/// Grouping key of a bucket: display name plus the date of the commit
/// that opened it. Equality and hashing are by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub name: String,
    pub date: NaiveDate,
}

impl BucketKey {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        BucketKey {
            name: name.into(),
            date,
        }
    }

    pub fn untagged(date: NaiveDate) -> Self {
        BucketKey::new(UNTAGGED, date)
    }

    pub fn is_untagged(&self) -> bool {
        self.name == UNTAGGED
    }
}

/// A bucket key and its commit messages, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: BucketKey,
    pub messages: Vec<String>,
}

impl Bucket {
    pub fn new(key: BucketKey) -> Self {
        Bucket {
            key,
            messages: Vec::new(),
        }
    }
}

/// The aggregated changelog of one branch.
///
/// Built once by [`crate::changelog::build_changelog`]; buckets are held in
/// descending date order and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeLog {
    branch: String,
    buckets: Vec<Bucket>,
}

impl ChangeLog {
    pub(crate) fn new(branch: impl Into<String>, buckets: Vec<Bucket>) -> Self {
        ChangeLog {
            branch: branch.into(),
            buckets,
        }
    }

    /// Name of the branch the changelog was built from
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Buckets ordered by descending date
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of messages across all buckets
    pub fn message_count(&self) -> usize {
        self.buckets.iter().map(|b| b.messages.len()).sum()
    }
}
