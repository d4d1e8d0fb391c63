//! Records passed between the migration steps
use std::{fmt::Debug, io::Write};

use aws_sdk_codecommit::types::RepositoryMetadata;
use log::warn;
use serde::{Deserialize, Serialize};

/// Repository read from the source provider
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRepository {
    /// Remote URL the repository was found at
    pub remote_url: String,

    /// Region (or host) the repository lives in
    pub region: String,

    /// Name of the repository
    pub name: String,

    /// Description of the repository
    pub description: Option<String>,

    /// Default branch, when the provider reports one
    pub default_branch: Option<String>,

    /// Full metadata as returned by CodeCommit
    pub metadata: Option<RepositoryMetadata>,
}

/// Body of a create-repository call
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateRepoRequest {
    /// Name of the repository
    pub name: String,

    /// Description of the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,
}

impl CreateRepoRequest {
    /// Build the request mirroring a source repository
    pub fn from_source(source: &SourceRepository, public: bool) -> Self {
        Self {
            name: source.name.clone(),
            description: source.description.clone(),
            private: !public,
        }
    }
}

/// Repository created on the destination provider
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct CreatedRepo {
    /// Name of the repository
    pub name: String,

    /// Owner and name, e.g. `acme/foo`
    pub full_name: Option<String>,

    /// Description of the repository
    pub description: Option<String>,

    /// Whether the repository is private
    pub private: bool,

    /// Web page of the repository
    pub html_url: Option<String>,

    /// SSH push URL
    pub ssh_url: Option<String>,

    /// HTTPS push URL
    pub clone_url: Option<String>,

    /// Full body returned by GitHub
    #[serde(skip)]
    pub response: Option<serde_json::Value>,
}

impl From<CreateRepoRequest> for CreatedRepo {
    /// Stand-in result used by dry runs: carries the request, no URLs.
    fn from(request: CreateRepoRequest) -> Self {
        CreatedRepo {
            name: request.name,
            description: request.description,
            private: request.private,
            ..Default::default()
        }
    }
}

/// Pretty-print a structure to the verbose output
pub(crate) fn dump<T: Debug>(out: &mut dyn Write, value: &T) {
    if let Err(e) = writeln!(out, "{value:#?}") {
        warn!("Unable to write verbose output: {e}");
    }
}

/// Print the created repository, as GitHub returned it when possible
pub(crate) fn dump_created(out: &mut dyn Write, created: &CreatedRepo) {
    let Some(response) = &created.response else {
        return dump(out, created);
    };
    match serde_json::to_string_pretty(response) {
        Ok(json) => {
            if let Err(e) = writeln!(out, "{json}") {
                warn!("Unable to write verbose output: {e}");
            }
        }
        Err(e) => {
            warn!("Unable to format the GitHub response: {e}");
            dump(out, created);
        }
    }
}
