use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::domain::branch::BranchName;
use crate::error::{AppError, AppResult};
use crate::services::GitExecutor;

pub const IGNORE_FILE_NAME: &str = ".gitignore";
const REPOSITORY_MARKER: &str = ".git";

pub async fn is_tool_installed(git: &dyn GitExecutor) -> bool {
    match git.run(None, &["--version"]).await {
        Ok(output) => output.success,
        Err(err) => {
            debug!(error = %err, "git is not available");
            false
        }
    }
}

/// Checks for a `.git` directory first and only asks git when it is absent.
pub async fn is_repository(git: &dyn GitExecutor, path: &Path) -> bool {
    if path.join(REPOSITORY_MARKER).is_dir() {
        return true;
    }

    match git
        .run(Some(path), &["rev-parse", "--is-inside-work-tree"])
        .await
    {
        Ok(output) => output.value() == Some("true"),
        Err(_) => false,
    }
}

/// Writes the ignore file, then runs `git init` in `path`.
pub async fn initialize_repository(
    git: &dyn GitExecutor,
    path: &Path,
    ignore_patterns: &[String],
) -> AppResult<()> {
    fs::write(path.join(IGNORE_FILE_NAME), ignore_patterns.join("\n")).await?;

    let output = git.run(Some(path), &["init"]).await?;
    if !output.success {
        return Err(AppError::CommandFailed(output.stderr.trim().to_string()));
    }

    info!(path = %path.display(), "initialized repository");
    Ok(())
}

pub async fn current_branch(git: &dyn GitExecutor, path: &Path) -> Option<BranchName> {
    let output = git
        .run(Some(path), &["rev-parse", "--abbrev-ref", "HEAD"])
        .await
        .ok()?;
    output.value().and_then(BranchName::parse)
}
