//! Capabilities the migration needs from git, CodeCommit and GitHub
use std::{future::Future, pin::Pin};

use crate::{
    codecommit::repo::SourceRemote,
    errors::MoverError,
    github::config::Namespace,
    utils::{CreateRepoRequest, CreatedRepo, SourceRepository},
};

/// Boxed future returned by the async capabilities
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, MoverError>> + Send + 'a>>;

/// Reads the remotes of the local repository
pub trait RemoteInspector {
    /// Push URL of the named remote
    /// # Errors
    /// `NoRepository` if there is no repository, no such remote or no URL
    fn push_url(&self, remote: &str) -> Result<String, MoverError>;

    /// Branch to push when none is given on the command line
    fn default_branch(&self) -> Option<String>;
}

/// Reads repository metadata from the source provider
pub trait RepositoryReader: Sync + Send {
    /// Fetch the repository a remote points at
    /// # Errors
    /// `SourceApi` on any transport or not-found error
    fn get_repo<'a>(&'a self, remote: &'a SourceRemote) -> BoxFuture<'a, SourceRepository>;
}

/// Creates repositories on the destination provider
pub trait RepositoryCreator: Sync + Send {
    /// Create a repository under the namespace
    /// # Errors
    /// `DestinationApi` on any transport, auth or conflict error
    fn create_repo<'a>(
        &'a self,
        namespace: &'a Namespace,
        request: &'a CreateRepoRequest,
    ) -> BoxFuture<'a, CreatedRepo>;
}

/// What a push sends to the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushRefs {
    /// One branch plus all tags
    Branch(String),

    /// Every local branch plus all tags
    AllBranches,
}

/// Repoints a remote and pushes to it
pub trait Pusher: Sync + Send {
    /// Set the URL of the named remote
    /// # Errors
    /// `RemoteUpdate` if git rejects the change
    fn set_remote_url(&self, remote: &str, url: &str) -> Result<(), MoverError>;

    /// Push refs to the named remote
    /// # Errors
    /// `Push` if the push fails
    fn push<'a>(&'a self, remote: &'a str, refs: &'a PushRefs) -> BoxFuture<'a, ()>;
}
