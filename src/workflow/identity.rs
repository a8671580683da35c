use tracing::{info, warn};

use crate::domain::identity::Identity;
use crate::services::GitExecutor;

const NAME_KEY: &str = "user.name";
const EMAIL_KEY: &str = "user.email";

/// Reads the global author identity. `None` when either key is unset or blank.
pub async fn get_global_identity(git: &dyn GitExecutor) -> Option<Identity> {
    let name = read_global(git, NAME_KEY).await?;
    let email = read_global(git, EMAIL_KEY).await?;
    Identity::new(&name, &email)
}

/// Writes both global identity keys. Blank values are rejected before git runs.
pub async fn set_global_identity(git: &dyn GitExecutor, name: &str, email: &str) -> bool {
    let Some(identity) = Identity::new(name, email) else {
        warn!("refusing to write a blank identity");
        return false;
    };

    for (key, value) in [
        (NAME_KEY, identity.name.as_str()),
        (EMAIL_KEY, identity.email.as_str()),
    ] {
        match git.run(None, &["config", "--global", key, value]).await {
            Ok(output) if output.success => {}
            Ok(output) => {
                warn!(key, stderr = %output.stderr.trim(), "failed to write global config");
                return false;
            }
            Err(err) => {
                warn!(key, error = %err, "failed to write global config");
                return false;
            }
        }
    }

    info!(user = %identity.name, email = %identity.email, "updated global identity");
    true
}

async fn read_global(git: &dyn GitExecutor, key: &str) -> Option<String> {
    let output = git.run(None, &["config", "--global", key]).await.ok()?;
    output.value().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::GitOutput;
    use crate::test_support::FakeGit;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let git = FakeGit::new();
        assert!(set_global_identity(&git, "Jane Doe", "jane@example.com").await);

        let identity = get_global_identity(&git).await.unwrap();
        assert_eq!(
            identity,
            Identity {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn missing_email_means_unset() {
        let git = FakeGit::new().with_config("global.user.name", "Jane Doe");
        assert_eq!(get_global_identity(&git).await, None);
    }

    #[tokio::test]
    async fn blank_configured_value_means_unset() {
        let git = FakeGit::new()
            .with_config("global.user.name", "Jane Doe")
            .with_config("global.user.email", "   ");
        assert_eq!(get_global_identity(&git).await, None);
    }

    #[tokio::test]
    async fn unavailable_tool_means_unset() {
        assert_eq!(get_global_identity(&FakeGit::missing()).await, None);
    }

    #[tokio::test]
    async fn blank_input_never_touches_config() {
        let git = FakeGit::new();
        assert!(!set_global_identity(&git, "Jane Doe", "").await);
        assert!(git.calls().is_empty());
    }

    #[tokio::test]
    async fn write_failure_returns_false() {
        let git = FakeGit::new().respond(
            &["config", "--global", "user.name", "Jane Doe"],
            GitOutput::failed(255, "error: could not lock config file"),
        );
        assert!(!set_global_identity(&git, "Jane Doe", "jane@example.com").await);
        assert!(!git.invoked(&["config", "--global", "user.email"]));
    }
}
