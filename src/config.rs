//! Configuration handling
use std::path::PathBuf;

use crate::{cli::MoverCli, codecommit::config::CredentialSource, github::GITHUB_API_URL};

/// Everything a migration run needs, fixed once parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Path of the local repository
    pub source_path: PathBuf,

    /// GitHub token, empty if not given
    pub auth_token: String,

    /// Remote to migrate
    pub remote_name: String,

    /// Organization to create the repository in
    pub organization: Option<String>,

    /// Create a public repository
    pub make_public: bool,

    /// AWS credentials for the CodeCommit API
    pub credentials: CredentialSource,

    /// Print metadata and result
    pub verbose: bool,

    /// Don't create nor push anything
    pub dry_run: bool,

    /// Branch to push, when chosen explicitly
    pub branch: Option<String>,

    /// Push every branch instead of a single one
    pub all_branches: bool,

    /// Use the HTTPS URL of the new repository
    pub use_https: bool,

    /// GitHub API base URL
    pub api_url: String,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("."),
            auth_token: String::new(),
            remote_name: "origin".to_string(),
            organization: None,
            make_public: false,
            credentials: CredentialSource::Default,
            verbose: false,
            dry_run: false,
            branch: None,
            all_branches: false,
            use_https: false,
            api_url: GITHUB_API_URL.to_string(),
        }
    }
}

impl From<MoverCli> for MigrationOptions {
    fn from(cli: MoverCli) -> Self {
        Self {
            source_path: cli.path.unwrap_or_else(|| PathBuf::from(".")),
            auth_token: cli.token.unwrap_or_default(),
            remote_name: cli.remote,
            organization: cli.organization.filter(|o| !o.is_empty()),
            make_public: cli.public,
            credentials: CredentialSource::from_profile(cli.aws_profile.as_deref()),
            verbose: cli.verbose > 0,
            dry_run: cli.dry,
            branch: cli.branch.filter(|b| !b.is_empty()),
            all_branches: cli.all_branches,
            use_https: cli.https,
            api_url: cli.api_url,
        }
    }
}
