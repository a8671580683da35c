use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::{GitExecutor, GitOutput};

/// Shells out to the system `git` binary with an explicit argument list.
pub struct GitCli {
    program: PathBuf,
    envs: Vec<(String, String)>,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// Adds an environment variable to every invocation.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    async fn execute(
        &self,
        dir: Option<&Path>,
        args: &[&str],
        interactive: bool,
    ) -> AppResult<GitOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);

        if let Some(dir) = dir {
            // A missing working directory surfaces as NotFound from spawn, which
            // would otherwise read as a missing executable.
            if !dir.is_dir() {
                return Err(AppError::CommandFailed(format!(
                    "The folder '{}' does not exist.",
                    dir.display()
                )));
            }
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if !interactive {
            cmd.env("GIT_TERMINAL_PROMPT", "0");
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        debug!(?args, dir = ?dir, "spawning git");

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(AppError::ToolNotInstalled(format!(
                    "'{}' could not be found: {err}",
                    self.program.display()
                )));
            }
            Err(err) => {
                return Err(AppError::CommandFailed(format!(
                    "failed to start '{}': {err}",
                    self.program.display()
                )));
            }
        };

        let result = GitOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            ?args,
            code = ?result.code,
            stderr = %result.stderr.trim(),
            "git finished"
        );

        Ok(result)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GitExecutor for GitCli {
    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> AppResult<GitOutput> {
        self.execute(dir, args, true).await
    }

    async fn run_non_interactive(&self, dir: Option<&Path>, args: &[&str]) -> AppResult<GitOutput> {
        self.execute(dir, args, false).await
    }
}
