//! CodeCommit remote URLs and repository metadata
use aws_sdk_codecommit::types::RepositoryMetadata;
use url::Url;
use urlencoding::decode;

use super::{AWS_DOMAINS, CODECOMMIT_HOST_LABELS, GRC_PREFIX};
use crate::{
    errors::{ErrorKind, MoverError},
    utils::SourceRepository,
};

/// A git remote pointing at a CodeCommit repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRemote {
    /// URL as configured on the remote
    pub url: String,

    /// AWS region taken from the URL
    pub region: String,

    /// Repository name, the last path segment
    pub name: String,

    /// Profile embedded in a git-remote-codecommit URL
    pub profile: Option<String>,
}

impl SourceRemote {
    /// Parse a remote URL
    /// # Errors
    /// `NotSourceProvider` if the URL is not a CodeCommit URL
    pub fn parse(remote_url: &str) -> Result<Self, MoverError> {
        let remote_url = remote_url.trim();
        if let Some(rest) = remote_url.strip_prefix(GRC_PREFIX) {
            return Self::parse_grc(remote_url, rest);
        }
        let not_codecommit = || {
            MoverError::new(ErrorKind::NotSourceProvider)
                .with_text(format!("'{remote_url}' is not a CodeCommit URL"))
        };
        let url = Url::parse(remote_url).map_err(|_| not_codecommit())?;
        let host = url.host_str().ok_or_else(not_codecommit)?;
        let labels: Vec<&str> = host.split('.').collect();
        let region = match labels.as_slice() {
            [first, region, domain @ ..]
                if CODECOMMIT_HOST_LABELS.contains(first) && AWS_DOMAINS.contains(&domain) =>
            {
                *region
            }
            _ => return Err(not_codecommit()),
        };
        let name = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(|s| decode(s).map(|n| n.into_owned()).unwrap_or_else(|_| s.to_string()))
            .unwrap_or_default();
        Self::build(remote_url, region, name, None)
    }

    /// Parse `codecommit::<region>://[<profile>@]<name>`
    fn parse_grc(remote_url: &str, rest: &str) -> Result<Self, MoverError> {
        let (region, target) = rest.split_once("://").ok_or_else(|| {
            MoverError::new(ErrorKind::NotSourceProvider)
                .with_text(format!("'{remote_url}' has no region"))
        })?;
        let (profile, name) = match target.split_once('@') {
            Some((profile, name)) => (Some(profile.to_string()), name),
            None => (None, target),
        };
        Self::build(remote_url, region, name.trim_end_matches('/').to_string(), profile)
    }

    /// Check the parts and assemble the remote
    fn build(
        url: &str,
        region: &str,
        name: String,
        profile: Option<String>,
    ) -> Result<Self, MoverError> {
        if region.is_empty() {
            return Err(MoverError::new(ErrorKind::NotSourceProvider)
                .with_text(format!("'{url}' has no region")));
        }
        if name.is_empty() {
            return Err(MoverError::new(ErrorKind::NotSourceProvider)
                .with_text(format!("'{url}' has no repository name")));
        }
        Ok(Self {
            url: url.to_string(),
            region: region.to_string(),
            name,
            profile: profile.filter(|p| !p.is_empty()),
        })
    }

    /// Combine the remote with the metadata returned by the API
    pub(crate) fn with_metadata(&self, metadata: &RepositoryMetadata) -> SourceRepository {
        let name = metadata
            .repository_name()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name);
        SourceRepository {
            remote_url: self.url.clone(),
            region: self.region.clone(),
            name: name.to_string(),
            description: metadata
                .repository_description()
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            default_branch: metadata.default_branch().map(str::to_string),
            metadata: Some(metadata.clone()),
        }
    }
}
