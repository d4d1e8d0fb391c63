//! Command line options for the codecommit-mover tool
use crate::{
    codecommit::platform::CodeCommitPlatform, config::MigrationOptions, errors::MoverError,
    git::LocalGit, github::platform::GithubPlatform, github::GITHUB_API_URL, migrate::migrate,
    utils::CreatedRepo,
};
use clap::Parser;
use std::path::PathBuf;

/// codecommit-mover - Move an AWS CodeCommit repository to GitHub
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct MoverCli {
    /// Path of the repository to migrate (default: current directory)
    pub path: Option<PathBuf>,

    /// GitHub personal access token
    #[arg(short, long)]
    pub token: Option<String>,

    /// Remote name to migrate
    #[arg(short, long, default_value = "origin")]
    pub remote: String,

    /// Organization to create the repository in instead of the user
    #[arg(short, long)]
    pub organization: Option<String>,

    /// Make the GitHub repository public (private by default)
    #[arg(short, long)]
    pub public: bool,

    /// AWS profile name (default: the default credential chain)
    #[arg(short, long = "aws-profile")]
    pub aws_profile: Option<String>,

    /// Verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Perform a dry run
    #[arg(short, long)]
    pub dry: bool,

    /// Branch to push (default: the CodeCommit default branch, then HEAD)
    #[arg(long, value_parser = parse_branch)]
    pub branch: Option<String>,

    /// Push every branch instead of only one
    #[arg(long)]
    pub all_branches: bool,

    /// Push over HTTPS instead of SSH
    #[arg(long)]
    pub https: bool,

    /// GitHub API URL
    #[arg(long, default_value = GITHUB_API_URL)]
    pub api_url: String,
}

/// Branch names are handed to `git push`, so they cannot look like options
fn parse_branch(value: &str) -> Result<String, String> {
    if value.starts_with('-') {
        return Err(format!("branch name cannot start with '-': {value}"));
    }
    Ok(value.to_string())
}

impl MoverCli {
    /// Log level matching the verbosity
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Run a migration with the production git, CodeCommit and GitHub clients
/// # Errors
/// Error if any step of the migration fails
pub async fn run(options: &MigrationOptions) -> Result<CreatedRepo, MoverError> {
    let git = LocalGit::new(&options.source_path);
    let codecommit = CodeCommitPlatform::new(options.credentials.clone());
    let github = GithubPlatform::with_api_url(options.auth_token.clone(), &options.api_url);
    let mut stdout = std::io::stdout();
    migrate(options, &git, &codecommit, &github, &git, &mut stdout).await
}

/// Run the codecommit-mover tool with parsed command line options
/// # Errors
/// Error if the migration fails
pub async fn mover_main(cli: MoverCli) -> Result<CreatedRepo, MoverError> {
    let options = MigrationOptions::from(cli);
    run(&options).await
}
