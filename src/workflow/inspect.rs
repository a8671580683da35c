use std::path::Path;

use tracing::{info, warn};

use crate::domain::repository::RepoSnapshot;
use crate::error::{AppError, AppResult};
use crate::services::GitExecutor;
use crate::workflow::probe;

const AUTH_FAILURE_MARKER: &str = "Authentication failed";

/// Remote URL and current branch, or `None` if either cannot be read.
pub async fn get_repo_snapshot(
    git: &dyn GitExecutor,
    path: &Path,
    remote: &str,
) -> Option<RepoSnapshot> {
    let key = format!("remote.{remote}.url");
    let output = git.run(Some(path), &["config", "--get", key.as_str()]).await.ok()?;
    let remote_url = output.value().filter(|url| !url.is_empty())?.to_string();
    let branch = probe::current_branch(git, path).await?;

    Some(RepoSnapshot { remote_url, branch })
}

pub async fn add_remote(git: &dyn GitExecutor, path: &Path, name: &str, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    match git.run(Some(path), &["remote", "add", name, url]).await {
        Ok(output) if output.success => {
            info!(remote = name, url, "added remote");
            true
        }
        Ok(output) => {
            warn!(remote = name, stderr = %output.stderr.trim(), "failed to add remote");
            false
        }
        Err(err) => {
            warn!(remote = name, error = %err, "failed to add remote");
            false
        }
    }
}

/// Lists the remote's refs to confirm it is reachable with the current
/// credentials. Git is never allowed to prompt here.
pub async fn test_remote_auth(git: &dyn GitExecutor, path: &Path, url: &str) -> AppResult<()> {
    let output = git
        .run_non_interactive(Some(path), &["ls-remote", url])
        .await
        .map_err(|err| {
            AppError::NetworkOrRemoteIssue(format!("Error while testing remote access: {err}"))
        })?;

    if output.success {
        return Ok(());
    }
    if output.stderr.contains(AUTH_FAILURE_MARKER) {
        return Err(AppError::AuthenticationFailed(
            "Authentication failed. Check your credentials (SSH keys or credential helper)."
                .to_string(),
        ));
    }
    Err(AppError::NetworkOrRemoteIssue(format!(
        "Unable to contact the remote. Git output:\n{}",
        output.stderr.trim()
    )))
}
