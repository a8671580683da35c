use std::path::Path;

use tracing::debug;

use crate::domain::change::ChangeReport;
use crate::services::GitExecutor;

/// A failed status query is reported as "no changes" so callers simply skip
/// committing.
pub async fn detect_changes(git: &dyn GitExecutor, path: &Path) -> ChangeReport {
    match git.run(Some(path), &["status", "--porcelain"]).await {
        Ok(output) if output.success => ChangeReport::from_porcelain(&output.stdout),
        Ok(output) => {
            debug!(stderr = %output.stderr.trim(), "status query failed");
            ChangeReport::unavailable()
        }
        Err(err) => {
            debug!(error = %err, "status query failed");
            ChangeReport::unavailable()
        }
    }
}
