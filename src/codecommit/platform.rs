//! CodeCommit Platform
use aws_sdk_codecommit::{config::Builder, error::DisplayErrorContext, Client};
use log::{debug, info};

use super::{config::CredentialSource, repo::SourceRemote};
use crate::{
    errors::{ErrorKind, MoverError},
    platform::{BoxFuture, RepositoryReader},
    utils::SourceRepository,
};

/// Reads repositories through the CodeCommit API
#[derive(Debug, Clone, Default)]
pub struct CodeCommitPlatform {
    /// Credentials handed to every client
    credentials: CredentialSource,

    /// Endpoint replacing the regional CodeCommit one
    endpoint_url: Option<String>,
}

impl CodeCommitPlatform {
    /// Create a new CodeCommitPlatform
    pub fn new(credentials: CredentialSource) -> Self {
        Self {
            credentials,
            endpoint_url: None,
        }
    }

    /// Create a new CodeCommitPlatform talking to another endpoint
    pub fn with_endpoint_url<S: Into<String>>(credentials: CredentialSource, url: S) -> Self {
        Self {
            credentials,
            endpoint_url: Some(url.into()),
        }
    }

    /// Client for the remote's region
    async fn client(&self, remote: &SourceRemote) -> Client {
        let credentials = self.credentials.or_profile(remote.profile.as_deref());
        let config = credentials.load(&remote.region).await;
        let mut builder = Builder::from(&config);
        if let Some(url) = &self.endpoint_url {
            debug!("Using CodeCommit endpoint {url}");
            builder = builder.endpoint_url(url);
        }
        Client::from_conf(builder.build())
    }
}

impl RepositoryReader for CodeCommitPlatform {
    fn get_repo<'a>(&'a self, remote: &'a SourceRemote) -> BoxFuture<'a, SourceRepository> {
        Box::pin(async move {
            let client = self.client(remote).await;
            info!(
                "Fetching CodeCommit repository '{}' in {}",
                remote.name, remote.region
            );
            let output = client
                .get_repository()
                .repository_name(&remote.name)
                .send()
                .await
                .map_err(|e| {
                    MoverError::new(ErrorKind::SourceApi)
                        .with_text(DisplayErrorContext(&e).to_string())
                })?;
            debug!("GetRepository output: {output:?}");
            let metadata = output.repository_metadata().ok_or_else(|| {
                MoverError::new(ErrorKind::SourceApi)
                    .with_text(format!("no metadata returned for '{}'", remote.name))
            })?;
            Ok(remote.with_metadata(metadata))
        })
    }
}
