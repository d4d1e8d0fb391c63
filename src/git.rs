//! Local git repository: remote inspection, remote update and push
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use git2::Repository;
use log::{debug, info};
use tokio::process::Command;

use crate::{
    errors::{ErrorKind, MoverError},
    platform::{BoxFuture, PushRefs, Pusher, RemoteInspector},
};

/// Refspecs pushing every branch and tag
const ALL_REFSPECS: [&str; 2] = ["refs/heads/*:refs/heads/*", "refs/tags/*:refs/tags/*"];

/// Git repository on disk
#[derive(Debug, Clone)]
pub struct LocalGit {
    /// Path the repository is discovered from
    path: PathBuf,
}

impl LocalGit {
    /// Repository containing `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open the repository
    fn open(&self, kind: ErrorKind) -> Result<Repository, MoverError> {
        Repository::discover(&self.path).map_err(|e| {
            MoverError::new(kind).with_text(format!(
                "no git repository in path: {} ({})",
                self.path.display(),
                e.message()
            ))
        })
    }

    /// Directory `git push` runs in
    fn workdir(&self) -> Result<PathBuf, MoverError> {
        let repo = self.open(ErrorKind::Push)?;
        Ok(repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf())
    }
}

impl RemoteInspector for LocalGit {
    fn push_url(&self, remote: &str) -> Result<String, MoverError> {
        let repo = self.open(ErrorKind::NoRepository)?;
        let found = repo.find_remote(remote).map_err(|e| {
            MoverError::new(ErrorKind::NoRepository).with_text(format!(
                "no remote '{remote}' in {}: {}",
                self.path.display(),
                e.message()
            ))
        })?;
        let url = found
            .pushurl()
            .or_else(|| found.url())
            .map(str::trim)
            .unwrap_or_default();
        if url.is_empty() {
            return Err(MoverError::new(ErrorKind::NoRepository)
                .with_text(format!("remote '{remote}' has no URL")));
        }
        debug!("Remote '{remote}' pushes to {url}");
        Ok(url.to_string())
    }

    fn default_branch(&self) -> Option<String> {
        let repo = Repository::discover(&self.path).ok()?;
        let head = repo.head().ok()?;
        if !head.is_branch() {
            return None;
        }
        head.shorthand().map(str::to_string)
    }
}

impl Pusher for LocalGit {
    fn set_remote_url(&self, remote: &str, url: &str) -> Result<(), MoverError> {
        let update_error = |e: git2::Error| MoverError::new(ErrorKind::RemoteUpdate).with_source(e);
        let repo = self.open(ErrorKind::RemoteUpdate)?;
        let has_push_url = repo.find_remote(remote).map_err(update_error)?.pushurl().is_some();
        repo.remote_set_url(remote, url).map_err(update_error)?;
        if has_push_url {
            repo.remote_set_pushurl(remote, Some(url)).map_err(update_error)?;
        }
        info!("Remote '{remote}' now points to {url}");
        Ok(())
    }

    fn push<'a>(&'a self, remote: &'a str, refs: &'a PushRefs) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            if let PushRefs::Branch(branch) = refs {
                if branch.starts_with('-') {
                    return Err(MoverError::new(ErrorKind::Push)
                        .with_text(format!("invalid branch name '{branch}'")));
                }
            }
            let workdir = self.workdir()?;
            let mut args = vec!["push", remote];
            match refs {
                PushRefs::Branch(branch) => args.extend([branch.as_str(), "--tags"]),
                PushRefs::AllBranches => args.extend(ALL_REFSPECS),
            }
            info!("Running git {}", args.join(" "));
            let output = Command::new("git")
                .args(&args)
                .current_dir(&workdir)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .await
                .map_err(|e| MoverError::new(ErrorKind::Push).with_source(e))?;
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !output.status.success() {
                return Err(MoverError::new(ErrorKind::Push).with_text(stderr.trim()));
            }
            debug!("git push: {}", stderr.trim());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    const CODECOMMIT_URL: &str = "https://git-codecommit.us-east-1.amazonaws.com/v1/repos/foo";

    /// Repository with one commit on `main` and a `v1` tag
    fn repo_with_commit() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        {
            let sig = Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let commit = repo
                .commit(Some("refs/heads/main"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
            repo.set_head("refs/heads/main").unwrap();
            let object = repo.find_object(commit, None).unwrap();
            repo.tag_lightweight("v1", &object, false).unwrap();
        }
        (dir, repo)
    }

    #[test]
    fn push_url_of_remote() {
        let (dir, repo) = repo_with_commit();
        repo.remote("origin", CODECOMMIT_URL).unwrap();
        let git = LocalGit::new(dir.path());
        assert_eq!(git.push_url("origin").unwrap(), CODECOMMIT_URL);
    }

    #[test]
    fn push_url_prefers_pushurl() {
        let (dir, repo) = repo_with_commit();
        repo.remote("origin", "https://example.com/fetch.git").unwrap();
        repo.remote_set_pushurl("origin", Some(CODECOMMIT_URL)).unwrap();
        let git = LocalGit::new(dir.path());
        assert_eq!(git.push_url("origin").unwrap(), CODECOMMIT_URL);
    }

    #[test]
    fn push_url_from_subdirectory() {
        let (dir, repo) = repo_with_commit();
        repo.remote("origin", CODECOMMIT_URL).unwrap();
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        assert_eq!(LocalGit::new(&sub).push_url("origin").unwrap(), CODECOMMIT_URL);
    }

    #[test]
    fn missing_remote_is_no_repository() {
        let (dir, _repo) = repo_with_commit();
        let err = LocalGit::new(dir.path()).push_url("origin").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRepository);
    }

    #[test]
    fn outside_repository_is_no_repository() {
        let dir = TempDir::new().unwrap();
        let err = LocalGit::new(dir.path().join("missing"))
            .push_url("origin")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRepository);
    }

    #[test]
    fn default_branch_follows_head() {
        let (dir, _repo) = repo_with_commit();
        assert_eq!(
            LocalGit::new(dir.path()).default_branch().as_deref(),
            Some("main")
        );
    }

    #[test]
    fn set_remote_url_updates_url_and_pushurl() {
        let (dir, repo) = repo_with_commit();
        repo.remote("origin", CODECOMMIT_URL).unwrap();
        repo.remote("upstream", CODECOMMIT_URL).unwrap();
        repo.remote_set_pushurl("upstream", Some(CODECOMMIT_URL)).unwrap();
        let git = LocalGit::new(dir.path());
        let dest = "git@github.com:acme/foo.git";

        git.set_remote_url("origin", dest).unwrap();
        git.set_remote_url("upstream", dest).unwrap();

        let origin = repo.find_remote("origin").unwrap();
        assert_eq!(origin.url(), Some(dest));
        assert_eq!(origin.pushurl(), None);
        let upstream = repo.find_remote("upstream").unwrap();
        assert_eq!(upstream.url(), Some(dest));
        assert_eq!(upstream.pushurl(), Some(dest));
    }

    #[test]
    fn set_remote_url_outside_repository() {
        let dir = TempDir::new().unwrap();
        let err = LocalGit::new(dir.path())
            .set_remote_url("origin", "git@github.com:acme/foo.git")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RemoteUpdate);
    }

    #[tokio::test]
    async fn push_branch_and_tags_to_bare_repository() {
        let (dir, repo) = repo_with_commit();
        let target = TempDir::new().unwrap();
        let bare = Repository::init_bare(target.path()).unwrap();
        repo.remote("origin", target.path().to_str().unwrap()).unwrap();

        let git = LocalGit::new(dir.path());
        git.push("origin", &PushRefs::Branch("main".to_string()))
            .await
            .unwrap();

        assert!(bare.find_reference("refs/heads/main").is_ok());
        assert!(bare.find_reference("refs/tags/v1").is_ok());
    }

    #[tokio::test]
    async fn push_all_branches() {
        let (dir, repo) = repo_with_commit();
        {
            let head = repo.head().unwrap().peel_to_commit().unwrap();
            repo.branch("feature", &head, false).unwrap();
        }
        let target = TempDir::new().unwrap();
        let bare = Repository::init_bare(target.path()).unwrap();
        repo.remote("origin", target.path().to_str().unwrap()).unwrap();

        LocalGit::new(dir.path())
            .push("origin", &PushRefs::AllBranches)
            .await
            .unwrap();

        assert!(bare.find_reference("refs/heads/main").is_ok());
        assert!(bare.find_reference("refs/heads/feature").is_ok());
        assert!(bare.find_reference("refs/tags/v1").is_ok());
    }

    #[tokio::test]
    async fn branch_looking_like_an_option_is_rejected() {
        let (dir, repo) = repo_with_commit();
        let target = TempDir::new().unwrap();
        let bare = Repository::init_bare(target.path()).unwrap();
        repo.remote("origin", target.path().to_str().unwrap()).unwrap();

        let err = LocalGit::new(dir.path())
            .push("origin", &PushRefs::Branch("--mirror".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Push);
        assert!(err.to_string().contains("invalid branch name '--mirror'"));
        assert!(bare.find_reference("refs/heads/main").is_err());
    }

    #[tokio::test]
    async fn push_to_missing_remote_fails() {
        let (dir, _repo) = repo_with_commit();
        let err = LocalGit::new(dir.path())
            .push("origin", &PushRefs::Branch("main".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Push);
    }
}
