use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::workflow::publish::DEFAULT_REMOTE;
use crate::workflow::save::DEFAULT_COMMIT_MESSAGE;

const DEFAULT_IGNORE_PATTERNS: &[&str] = &["*.exe"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub workspace_root: PathBuf,
    pub remote_name: String,
    pub default_commit_message: String,
    pub ignore_patterns: Vec<String>,
}

impl AppConfig {
    /// Resolves the working folder once at start-up. Everything downstream
    /// receives this path explicitly.
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        let workspace_root = workspace_hint.canonicalize().map_err(|err| {
            AppError::Configuration(format!(
                "cannot use '{}' as the working folder: {err}",
                workspace_hint.display()
            ))
        })?;
        if !workspace_root.is_dir() {
            return Err(AppError::Configuration(format!(
                "'{}' is not a folder",
                workspace_root.display()
            )));
        }

        Ok(Self::for_workspace(workspace_root))
    }

    pub fn for_workspace(workspace_root: PathBuf) -> Self {
        Self {
            workspace_root,
            remote_name: DEFAULT_REMOTE.to_string(),
            default_commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
        }
    }
}
