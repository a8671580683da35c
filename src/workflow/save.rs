use std::path::Path;

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::services::GitExecutor;
use crate::workflow::{changes, probe};

pub const DEFAULT_COMMIT_MESSAGE: &str = "Update";

const INSTALL_MESSAGE: &str =
    "Git is not installed. Please install Git: https://git-scm.com/downloads";
const INIT_FAILED_MESSAGE: &str =
    "Failed to initialize a Git repository. Try running 'git init' manually.";
const COMMIT_FAILED_MESSAGE: &str =
    "Commit failed: maybe there are no new changes in your files.";
const SAVED_MESSAGE: &str = "Saved locally: changes committed.";

/// Stages and commits everything in `path`, creating a repository first when
/// needed. Steps stop at the first failure.
pub async fn save_changes(
    git: &dyn GitExecutor,
    path: &Path,
    commit_message: &str,
    ignore_patterns: &[String],
) -> AppResult<String> {
    if !probe::is_tool_installed(git).await {
        return Err(AppError::ToolNotInstalled(INSTALL_MESSAGE.to_string()));
    }

    let mut initialized = false;
    if !probe::is_repository(git, path).await {
        info!(
            path = %path.display(),
            "folder is not a Git repository, initializing a new one"
        );
        if let Err(err) = probe::initialize_repository(git, path, ignore_patterns).await {
            warn!(error = %err, "repository initialization failed");
            return Err(AppError::CommandFailed(INIT_FAILED_MESSAGE.to_string()));
        }
        initialized = true;
    }

    let report = changes::detect_changes(git, path).await;
    if !report.has_changes {
        return Err(AppError::NoChangesToCommit(report.summary));
    }
    info!(files = report.files_changed, "committing changes");

    let message = match commit_message.trim() {
        "" => DEFAULT_COMMIT_MESSAGE,
        message => message,
    };

    // `git commit` can still refuse (e.g. only ignored files changed), so its
    // result is checked separately from the status query above.
    for args in [["add", "."].as_slice(), ["commit", "-m", message].as_slice()] {
        let output = git.run(Some(path), args).await?;
        if !output.success {
            warn!(?args, stderr = %output.stderr.trim(), "save step failed");
            return Err(AppError::CommandFailed(COMMIT_FAILED_MESSAGE.to_string()));
        }
    }

    if initialized {
        Ok(format!("Created a new Git repository. {SAVED_MESSAGE}"))
    } else {
        Ok(SAVED_MESSAGE.to_string())
    }
}
