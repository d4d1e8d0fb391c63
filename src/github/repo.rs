//! Github Repo struct and conversion to CreatedRepo struct
use crate::utils::CreatedRepo;
use serde::{Deserialize, Serialize};

/// Github Repo
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct RepoGithub {
    /// Repository ID
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Owner and name
    pub full_name: String,

    /// Repository description
    pub description: Option<String>,

    /// Repository private status
    pub private: bool,

    /// Repository URL
    pub html_url: String,

    /// SSH URL
    pub ssh_url: String,

    /// HTTPS URL
    pub clone_url: String,
}

impl From<RepoGithub> for CreatedRepo {
    fn from(repo: RepoGithub) -> Self {
        CreatedRepo {
            name: repo.name,
            full_name: Some(repo.full_name),
            description: repo.description,
            private: repo.private,
            html_url: Some(repo.html_url),
            ssh_url: Some(repo.ssh_url),
            clone_url: Some(repo.clone_url),
            response: None,
        }
    }
}
