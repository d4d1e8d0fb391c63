//! AWS CodeCommit, the source provider.
pub(crate) mod config;
pub(crate) mod platform;
pub(crate) mod repo;

/// First label of a CodeCommit git host, e.g. `git-codecommit.us-east-1.amazonaws.com`
const CODECOMMIT_HOST_LABELS: [&str; 2] = ["git-codecommit", "git-codecommit-fips"];

/// AWS domains following the region: `amazonaws.com`, `amazonaws.com.cn`
const AWS_DOMAINS: [&[&str]; 2] = [&["amazonaws", "com"], &["amazonaws", "com", "cn"]];

/// Scheme prefix of git-remote-codecommit URLs, e.g. `codecommit::us-east-1://repo`
const GRC_PREFIX: &str = "codecommit::";
