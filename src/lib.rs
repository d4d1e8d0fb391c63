//! # codecommit-mover
//!
//! Move an AWS CodeCommit repository to GitHub
//!
//! Reads the CodeCommit remote of a local repository, creates the same
//! repository on GitHub, points the remote at it and pushes.
//!
//! ## Usage
//!
//! ```txt
//! Usage: codecommit-mover [OPTIONS] [PATH]
//!
//! Arguments:
//!   [PATH]  Path of the repository to migrate (default: current directory)
//!
//! Options:
//!   -t, --token <TOKEN>              GitHub personal access token
//!   -r, --remote <REMOTE>            Remote name to migrate [default: origin]
//!   -o, --organization <ORGANIZATION>
//!                                    Organization to create the repository in instead of the user
//!   -p, --public                     Make the GitHub repository public (private by default)
//!   -a, --aws-profile <AWS_PROFILE>  AWS profile name (default: the default credential chain)
//!   -v, --verbose...                 Verbose output (-v, -vv)
//!   -d, --dry                        Perform a dry run
//!       --branch <BRANCH>            Branch to push (default: the CodeCommit default branch, then HEAD)
//!       --all-branches               Push every branch instead of only one
//!       --https                      Push over HTTPS instead of SSH
//!       --api-url <API_URL>          GitHub API URL [default: https://api.github.com]
//!   -h, --help                       Print help
//!   -V, --version                    Print version
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod git;
pub(crate) mod migrate;
pub(crate) mod platform;
pub(crate) mod utils;

mod codecommit;
mod github;

pub use cli::{mover_main, run, MoverCli};
pub use codecommit::{config::CredentialSource, platform::CodeCommitPlatform, repo::SourceRemote};
pub use config::MigrationOptions;
pub use errors::{ErrorKind, MoverError};
pub use git::LocalGit;
pub use github::{config::Namespace, platform::GithubPlatform};
pub use migrate::{inspect_source, migrate, mirror_push, provision_destination};
pub use platform::{
    BoxFuture, PushRefs, Pusher, RemoteInspector, RepositoryCreator, RepositoryReader,
};
pub use utils::{CreateRepoRequest, CreatedRepo, SourceRepository};
