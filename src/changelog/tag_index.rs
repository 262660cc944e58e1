use std::collections::HashMap;

use crate::domain::Tag;
use crate::warnings::ChangelogWarning;

/// Tags grouped by the commit they point at.
///
/// Names keep their lookup order, so the first tag listed for a commit is
/// the one that names its bucket.
#[derive(Debug, Default)]
pub struct TagIndex {
    by_target: HashMap<String, Vec<String>>,
}

impl TagIndex {
    pub fn new(tags: &[Tag]) -> Self {
        let mut by_target: HashMap<String, Vec<String>> = HashMap::new();
        for tag in tags {
            by_target
                .entry(tag.target.clone())
                .or_default()
                .push(tag.name.clone());
        }
        TagIndex { by_target }
    }

    /// Name of the tag that marks `commit_id`, if any
    pub fn tag_for(&self, commit_id: &str) -> Option<&str> {
        self.by_target
            .get(commit_id)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    /// Warning for a commit carrying more than one tag
    pub fn ambiguity(&self, commit_id: &str) -> Option<ChangelogWarning> {
        match self.by_target.get(commit_id) {
            Some(names) if names.len() > 1 => Some(ChangelogWarning::AmbiguousTag {
                commit: commit_id.to_string(),
                chosen: names[0].clone(),
                ignored: names[1..].to_vec(),
            }),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.by_target.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_target.is_empty()
    }
}
