//! AWS credential selection
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_codecommit::config::Credentials;
use log::debug;

/// Where the CodeCommit client takes its credentials from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CredentialSource {
    /// The SDK's default provider chain
    #[default]
    Default,

    /// A named profile from the shared AWS config files
    Profile(String),

    /// Fixed access keys
    Static(Credentials),
}

impl CredentialSource {
    /// Credential source for an optional profile name, empty meaning none
    pub fn from_profile(profile: Option<&str>) -> Self {
        match profile {
            Some(name) if !name.is_empty() => CredentialSource::Profile(name.to_string()),
            _ => CredentialSource::Default,
        }
    }

    /// Use `profile` when no profile was chosen explicitly
    pub fn or_profile(&self, profile: Option<&str>) -> Self {
        match self {
            CredentialSource::Default => Self::from_profile(profile),
            explicit => explicit.clone(),
        }
    }

    /// Load the SDK configuration for a region
    pub(crate) async fn load(&self, region: &str) -> SdkConfig {
        let loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()));
        let loader = match self {
            CredentialSource::Default => loader,
            CredentialSource::Profile(name) => {
                debug!("Using AWS profile '{name}'");
                loader.profile_name(name)
            }
            CredentialSource::Static(credentials) => {
                debug!("Using static AWS credentials");
                loader.credentials_provider(credentials.clone())
            }
        };
        loader.load().await
    }
}
