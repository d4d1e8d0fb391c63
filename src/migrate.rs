//! Move one repository from CodeCommit to GitHub
use std::io::Write;

use log::info;

use crate::{
    codecommit::repo::SourceRemote,
    config::MigrationOptions,
    errors::{ErrorKind, MoverError},
    github::config::{require_token, Namespace},
    platform::{PushRefs, Pusher, RemoteInspector, RepositoryCreator, RepositoryReader},
    utils::{dump, dump_created, CreateRepoRequest, CreatedRepo, SourceRepository},
};

/// Branch pushed when nothing else names one
const FALLBACK_BRANCH: &str = "master";

/// Run the whole migration: inspect, create, repoint, push.
///
/// With `verbose`, the source metadata is written to `out` before the
/// destination is touched and the created repository once the push is done.
/// # Errors
/// The first failing step aborts the run; nothing is rolled back.
pub async fn migrate<I, R, C, P>(
    options: &MigrationOptions,
    inspector: &I,
    reader: &R,
    creator: &C,
    pusher: &P,
    out: &mut dyn Write,
) -> Result<CreatedRepo, MoverError>
where
    I: RemoteInspector + ?Sized,
    R: RepositoryReader + ?Sized,
    C: RepositoryCreator + ?Sized,
    P: Pusher + ?Sized,
{
    let source = inspect_source(options, inspector, reader).await?;
    if options.verbose {
        dump(out, &source);
    }
    let created = provision_destination(options, &source, creator).await?;
    mirror_push(options, &source, &created, inspector, pusher).await?;
    if options.verbose {
        dump_created(out, &created);
    }
    Ok(created)
}

/// Find the CodeCommit repository behind the remote and fetch its metadata
/// # Errors
/// `NoRepository`, `NotSourceProvider` or `SourceApi`
pub async fn inspect_source<I, R>(
    options: &MigrationOptions,
    inspector: &I,
    reader: &R,
) -> Result<SourceRepository, MoverError>
where
    I: RemoteInspector + ?Sized,
    R: RepositoryReader + ?Sized,
{
    info!(
        "Reading remote '{}' in {}",
        options.remote_name,
        options.source_path.display()
    );
    let url = inspector.push_url(&options.remote_name)?;
    let remote = SourceRemote::parse(&url)?;
    reader.get_repo(&remote).await
}

/// Create the GitHub repository, or only describe it in a dry run
/// # Errors
/// `MissingCredentials` before any call, `DestinationApi` from the call
pub async fn provision_destination<C>(
    options: &MigrationOptions,
    source: &SourceRepository,
    creator: &C,
) -> Result<CreatedRepo, MoverError>
where
    C: RepositoryCreator + ?Sized,
{
    require_token(&options.auth_token)?;
    let namespace = Namespace::resolve(options.organization.as_deref());
    let request = CreateRepoRequest::from_source(source, options.make_public);
    if options.dry_run {
        info!("Dry run: not creating '{}' for {namespace}", request.name);
        if options.verbose {
            info!("Dry run request: {request:?}");
        }
        return Ok(request.into());
    }
    creator.create_repo(&namespace, &request).await
}

/// Point the remote at the new repository and push to it
/// # Errors
/// `RemoteUpdate` or `Push`
pub async fn mirror_push<I, P>(
    options: &MigrationOptions,
    source: &SourceRepository,
    created: &CreatedRepo,
    inspector: &I,
    pusher: &P,
) -> Result<(), MoverError>
where
    I: RemoteInspector + ?Sized,
    P: Pusher + ?Sized,
{
    if options.dry_run {
        info!(
            "Dry run: remote '{}' left unchanged, nothing pushed",
            options.remote_name
        );
        return Ok(());
    }
    let url = if options.use_https {
        created.clone_url.as_deref()
    } else {
        created.ssh_url.as_deref()
    }
    .filter(|u| !u.is_empty())
    .ok_or_else(|| {
        MoverError::new(ErrorKind::RemoteUpdate)
            .with_text(format!("no push URL for '{}'", created.name))
    })?;
    let refs = if options.all_branches {
        PushRefs::AllBranches
    } else {
        let branch = options
            .branch
            .clone()
            .or_else(|| source.default_branch.clone())
            .or_else(|| inspector.default_branch())
            .unwrap_or_else(|| FALLBACK_BRANCH.to_string());
        if branch.starts_with('-') {
            return Err(MoverError::new(ErrorKind::Push)
                .with_text(format!("invalid branch name '{branch}'")));
        }
        PushRefs::Branch(branch)
    };
    info!("Pushing to new repository: {url}");
    pusher.set_remote_url(&options.remote_name, url)?;
    pusher.push(&options.remote_name, &refs).await
}
