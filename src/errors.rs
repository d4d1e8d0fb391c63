//! Error handling for the codecommit-mover crate.
use std::{error::Error as StdError, fmt};

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Error type for the codecommit-mover crate.
#[derive(Debug)]
pub struct MoverError {
    /// Inner error.
    inner: Box<Inner>,
}

/// Inner error type for the codecommit-mover crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: ErrorKind,

    /// Source error.
    source: Option<BoxError>,
}

/// Every way a migration can fail. All of them abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No git repository, no such remote, or the remote has no URL.
    NoRepository,

    /// The remote does not point at AWS CodeCommit.
    NotSourceProvider,

    /// The CodeCommit API call failed.
    SourceApi,

    /// No GitHub token was given.
    MissingCredentials,

    /// The GitHub API call failed.
    DestinationApi,

    /// The remote URL could not be changed.
    RemoteUpdate,

    /// `git push` failed.
    Push,
}

impl ErrorKind {
    /// Short description of the error class
    fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NoRepository => "no git repository",
            ErrorKind::NotSourceProvider => "not an AWS CodeCommit repository",
            ErrorKind::SourceApi => "CodeCommit API error",
            ErrorKind::MissingCredentials => "missing GitHub credentials",
            ErrorKind::DestinationApi => "GitHub API error",
            ErrorKind::RemoteUpdate => "unable to update the git remote",
            ErrorKind::Push => "git push failed",
        }
    }
}

impl MoverError {
    /// Create a new error.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    /// Attach a text message as the source.
    pub(crate) fn with_text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text.as_ref().to_string())));
        self
    }

    /// Attach an underlying error as the source.
    pub(crate) fn with_source<E: Into<BoxError>>(mut self, source: E) -> Self {
        self.inner.source = Some(source.into());
        self
    }

    /// The class of this error.
    pub fn kind(&self) -> ErrorKind {
        self.inner.kind
    }
}

impl fmt::Display for MoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.source {
            Some(source) => write!(f, "{}: {source}", self.inner.kind.as_str()),
            None => write!(f, "{}", self.inner.kind.as_str()),
        }
    }
}

impl StdError for MoverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}
