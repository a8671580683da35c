use std::path::Path;

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::services::GitExecutor;
use crate::workflow::probe;

pub const DEFAULT_REMOTE: &str = "origin";

const AUTH_FAILURE_MARKER: &str = "Authentication failed";
const INSTALL_MESSAGE: &str = "Git doesn't seem to be installed. Please install Git and try again: https://git-scm.com/downloads";
const NOT_A_REPOSITORY_MESSAGE: &str = "This folder doesn't look like a Git repository yet. Please commit your changes locally first (Save changes locally).";
const NO_BRANCH_MESSAGE: &str =
    "Could not determine the current branch. Are you in a Git repository?";
const PUSH_HINT: &str = "Check that the remote exists, your network connection is active, and your credentials are set up (SSH keys or credential helper).";
const PUSHED_MESSAGE: &str = "Success: your changes have been pushed to the remote repository.";

/// Pushes the current branch to `remote`, setting upstream tracking. A failed
/// push is reported once and never retried.
pub async fn push_changes(git: &dyn GitExecutor, path: &Path, remote: &str) -> AppResult<String> {
    if !probe::is_tool_installed(git).await {
        return Err(AppError::ToolNotInstalled(INSTALL_MESSAGE.to_string()));
    }
    if !probe::is_repository(git, path).await {
        return Err(AppError::NotARepository(NOT_A_REPOSITORY_MESSAGE.to_string()));
    }
    let Some(branch) = probe::current_branch(git, path).await else {
        return Err(AppError::NotARepository(NO_BRANCH_MESSAGE.to_string()));
    };

    info!(remote, branch = branch.as_str(), "pushing");
    let output = git
        .run(Some(path), &["push", "-u", remote, branch.as_str()])
        .await?;

    if output.success {
        return Ok(PUSHED_MESSAGE.to_string());
    }

    warn!(stderr = %output.stderr.trim(), "push failed");
    if output.stderr.contains(AUTH_FAILURE_MARKER) {
        Err(AppError::AuthenticationFailed(format!(
            "Push failed: authentication was rejected.\n{PUSH_HINT}"
        )))
    } else {
        Err(AppError::NetworkOrRemoteIssue(format!("Push failed.\n{PUSH_HINT}")))
    }
}
