use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

/// Captured result of one finished git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Trimmed stdout, only for successful runs.
    pub fn value(&self) -> Option<&str> {
        self.success.then(|| self.stdout.trim())
    }
}

/// Runs the external version-control tool.
///
/// A non-zero exit is an `Ok(GitOutput)` with `success == false`; `Err` is
/// reserved for invocations that never ran (missing executable, bad working
/// directory).
#[async_trait]
pub trait GitExecutor: Send + Sync {
    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> AppResult<GitOutput>;

    /// Same as [`GitExecutor::run`], but the tool must not block on credential
    /// prompts.
    async fn run_non_interactive(&self, dir: Option<&Path>, args: &[&str]) -> AppResult<GitOutput> {
        self.run(dir, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_trimmed_stdout_on_success() {
        assert_eq!(GitOutput::ok("main\n").value(), Some("main"));
    }

    #[test]
    fn value_is_absent_on_failure() {
        let output = GitOutput {
            stdout: "partial".to_string(),
            ..GitOutput::failed(1, "fatal: not a git repository")
        };
        assert_eq!(output.value(), None);
    }
}
