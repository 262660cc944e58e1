use crate::domain::{Commit, Tag};
use crate::error::{ChangelogError, Result};
use crate::git::CommitSource;
use chrono::{FixedOffset, TimeZone};
use git2::{Branch, BranchType, ErrorCode, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Find a local branch, falling back to a remote-tracking one
    fn find_branch(&self, branch_name: &str) -> Result<Branch<'_>> {
        match self.repo.find_branch(branch_name, BranchType::Local) {
            Ok(branch) => Ok(branch),
            Err(e) if e.code() == ErrorCode::NotFound => self
                .repo
                .find_branch(branch_name, BranchType::Remote)
                .map_err(|e| {
                    if e.code() == ErrorCode::NotFound {
                        ChangelogError::BranchNotFound(branch_name.to_string())
                    } else {
                        ChangelogError::Git(e)
                    }
                }),
            Err(e) => Err(e.into()),
        }
    }

    /// Name of the branch HEAD points at, if HEAD is on a branch
    fn head_branch(&self) -> Option<String> {
        let head = self.repo.head().ok()?;
        if !head.is_branch() {
            return None;
        }
        head.shorthand().map(str::to_string)
    }
}

impl CommitSource for Git2Repository {
    fn branch_names(&self) -> Result<Vec<String>> {
        let mut local = Vec::new();
        let mut remote = Vec::new();

        for entry in self.repo.branches(None)? {
            let (branch, kind) = entry?;
            let Some(name) = branch.name()? else {
                continue;
            };

            match kind {
                BranchType::Local => local.push(name.to_string()),
                // origin/HEAD is a symbolic alias, not a branch of its own
                BranchType::Remote if name.ends_with("/HEAD") => {}
                BranchType::Remote => remote.push(name.to_string()),
            }
        }

        local.sort();
        remote.sort();

        if let Some(head) = self.head_branch() {
            if let Some(pos) = local.iter().position(|name| *name == head) {
                let primary = local.remove(pos);
                local.insert(0, primary);
            }
        }

        local.extend(remote);
        Ok(local)
    }

    fn commits(&self, branch_name: &str) -> Result<Vec<Commit>> {
        let tip = self.find_branch(branch_name)?.get().peel_to_commit()?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(tip)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(to_domain_commit(&commit)?);
        }

        Ok(commits)
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;

            // Annotated tags peel through the tag object to the commit
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(Tag::new(name, commit.id().to_string())),
                Err(e) => debug!("Skipping tag '{}': {}", name, e),
            }
        }

        Ok(tags)
    }
}

fn to_domain_commit(commit: &git2::Commit<'_>) -> Result<Commit> {
    let when = commit.author().when();
    let authored = FixedOffset::east_opt(when.offset_minutes() * 60)
        .and_then(|offset| offset.timestamp_opt(when.seconds(), 0).single())
        .ok_or_else(|| ChangelogError::InvalidTimestamp {
            id: commit.id().to_string(),
            seconds: when.seconds(),
        })?;

    let message = String::from_utf8_lossy(commit.message_bytes());

    Ok(Commit::new(commit.id().to_string(), authored, &message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Signature, Time};
    use tempfile::TempDir;

    fn commit_at(repo: &Git2Repo, message: &str, seconds: i64, offset_minutes: i32) -> git2::Oid {
        let sig = Signature::new("Test User", "test@example.com", &Time::new(seconds, offset_minutes))
            .unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap()],
            Err(_) => vec![],
        };
        let parent_refs: Vec<_> = parents.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    #[test]
    fn test_reads_commits_with_author_offset() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let oid = commit_at(&repo, "first\n", 1_700_000_000, 120);

        let source = Git2Repository::from_git2(repo);
        let branch = source.branch_names().unwrap().remove(0);
        let commits = source.commits(&branch).unwrap();

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, oid.to_string());
        assert_eq!(commits[0].message, "first");
        assert_eq!(commits[0].authored.offset().local_minus_utc(), 7200);
        assert_eq!(commits[0].authored.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_branch_order_and_remote_lookup() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        repo.set_head("refs/heads/main").unwrap();
        let oid = commit_at(&repo, "first", 1_700_000_000, 0);

        {
            let head = repo.find_commit(oid).unwrap();
            repo.branch("aaa", &head, false).unwrap();
            repo.reference("refs/remotes/origin/zzz", oid, false, "fetch")
                .unwrap();
            repo.reference_symbolic(
                "refs/remotes/origin/HEAD",
                "refs/remotes/origin/zzz",
                false,
                "fetch",
            )
            .unwrap();
        }

        let source = Git2Repository::from_git2(repo);
        assert_eq!(
            source.branch_names().unwrap(),
            vec!["main", "aaa", "origin/zzz"]
        );

        let history = crate::git::collect_history(&source, Some("origin/zzz")).unwrap();
        assert_eq!(history.branch, "origin/zzz");
        assert_eq!(history.commits.len(), 1);
    }

    #[test]
    fn test_missing_branch() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        commit_at(&repo, "first", 1_700_000_000, 0);

        let source = Git2Repository::from_git2(repo);
        let err = source.commits("does-not-exist").unwrap_err();
        assert!(matches!(err, ChangelogError::BranchNotFound(_)));
    }

    #[test]
    fn test_annotated_and_lightweight_tags_resolve_to_commits() {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        let first = commit_at(&repo, "first", 1_700_000_000, 0);
        let second = commit_at(&repo, "second", 1_700_086_400, 0);

        {
            let sig = Signature::now("Test User", "test@example.com").unwrap();
            let first_obj = repo.find_object(first, None).unwrap();
            let second_obj = repo.find_object(second, None).unwrap();
            repo.tag("v1.0", &first_obj, &sig, "release 1.0", false)
                .unwrap();
            repo.tag_lightweight("v2.0", &second_obj, false).unwrap();
        }

        let source = Git2Repository::from_git2(repo);
        let tags = source.tags().unwrap();

        assert_eq!(
            tags,
            vec![
                Tag::new("v1.0", first.to_string()),
                Tag::new("v2.0", second.to_string()),
            ]
        );
    }
}
