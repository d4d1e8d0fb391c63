//! Github configuration
use std::fmt;

use super::GITHUB_TOKEN_HELP;
use crate::errors::{ErrorKind, MoverError};

/// Account a new repository is created under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    /// The authenticated user
    User,

    /// An organization
    Organization(String),
}

impl Namespace {
    /// Organization if a non-empty name is given, the user otherwise
    pub fn resolve(organization: Option<&str>) -> Self {
        match organization {
            Some(org) if !org.is_empty() => Namespace::Organization(org.to_string()),
            _ => Namespace::User,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::User => write!(f, "the authenticated user"),
            Namespace::Organization(org) => write!(f, "organization '{org}'"),
        }
    }
}

/// Check that a GitHub token was given
/// # Errors
/// `MissingCredentials` if the token is empty
pub fn require_token(token: &str) -> Result<&str, MoverError> {
    if token.trim().is_empty() {
        return Err(MoverError::new(ErrorKind::MissingCredentials).with_text(format!(
            "a GitHub personal access token is required (--token), see {GITHUB_TOKEN_HELP}"
        )));
    }
    Ok(token)
}
