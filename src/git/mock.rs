use crate::domain::{Commit, Tag};
use crate::error::{ChangelogError, Result};
use crate::git::CommitSource;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    branches: Vec<String>,
    commits: HashMap<String, Vec<Commit>>,
    tags: Vec<Tag>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            branches: Vec::new(),
            commits: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// Add a branch with its commits; branches are reported in insertion order
    pub fn add_branch(&mut self, name: impl Into<String>, commits: Vec<Commit>) {
        let name = name.into();
        if !self.branches.contains(&name) {
            self.branches.push(name.clone());
        }
        self.commits.insert(name, commits);
    }

    /// Add a tag pointing at a commit id
    pub fn add_tag(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.tags.push(Tag::new(name, target));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitSource for MockRepository {
    fn branch_names(&self) -> Result<Vec<String>> {
        Ok(self.branches.clone())
    }

    fn commits(&self, branch: &str) -> Result<Vec<Commit>> {
        self.commits
            .get(branch)
            .cloned()
            .ok_or_else(|| ChangelogError::BranchNotFound(branch.to_string()))
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }
}
