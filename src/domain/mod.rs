//! Domain types - plain values independent of git operations

pub mod bucket;
pub mod commit;
pub mod tag;

pub use bucket::{Bucket, BucketKey, ChangeLog, UNTAGGED};
pub use commit::Commit;
pub use tag::Tag;
