use crate::context::AppContext;
use crate::domain::identity::Identity;
use crate::error::AppResult;
use crate::workflow::{identity, inspect, publish, save};

/// Only prompt failures propagate; operation failures are printed.
pub async fn save_locally(ctx: &AppContext) -> AppResult<()> {
    let message = ctx
        .prompter
        .ask_text(
            "Enter commit message:",
            Some(ctx.config.default_commit_message.as_str()),
        )
        .await?;

    let outcome = save::save_changes(
        ctx.git.as_ref(),
        ctx.workspace(),
        &message,
        &ctx.config.ignore_patterns,
    )
    .await;
    ctx.prompter.show(&format!("\n{}", render(outcome)));
    Ok(())
}

pub async fn push_changes(ctx: &AppContext) -> AppResult<()> {
    let outcome =
        publish::push_changes(ctx.git.as_ref(), ctx.workspace(), &ctx.config.remote_name).await;
    ctx.prompter.show(&format!("\n{}", render(outcome)));
    Ok(())
}

pub async fn check_identity(ctx: &AppContext) -> AppResult<()> {
    if let Some(current) = identity::get_global_identity(ctx.git.as_ref()).await {
        ctx.prompter.show(&format!(
            "Great, your Git global user is configured:\n  Name : {}\n  Email: {}\n\nYou're all set to make commits that identify you correctly.",
            current.name, current.email
        ));
        return Ok(());
    }

    ctx.prompter.show(
        "It looks like your global Git username and/or email are not configured. This information is used to identify you in commits.",
    );
    if ctx
        .prompter
        .ask_confirm("Would you like to set them now?", true)
        .await?
    {
        set_identity(ctx).await?;
    }
    Ok(())
}

pub async fn set_identity(ctx: &AppContext) -> AppResult<()> {
    let name = ctx
        .prompter
        .ask_text(
            "Please enter your full name for Git commits (e.g., Jane Doe):",
            None,
        )
        .await?;
    let email = ctx
        .prompter
        .ask_text(
            "Please enter your email address for Git commits (e.g., jane@example.com):",
            None,
        )
        .await?;

    if Identity::new(&name, &email).is_none() {
        ctx.prompter
            .show("\nBoth a name and an email are required. Your Git config was not changed.");
        return Ok(());
    }

    if identity::set_global_identity(ctx.git.as_ref(), &name, &email).await {
        ctx.prompter
            .show("\nThanks! Your global Git user info was updated.");
    } else {
        ctx.prompter.show(
            "\nUnable to set global Git user info. Please ensure Git is installed and you have permission to update global config.",
        );
    }
    Ok(())
}

pub async fn check_repository(ctx: &AppContext) -> AppResult<()> {
    match inspect::get_repo_snapshot(ctx.git.as_ref(), ctx.workspace(), &ctx.config.remote_name)
        .await
    {
        Some(snapshot) => ctx.prompter.show(&format!(
            "Repository information:\n  Remote URL    : {}\n  Current branch: {}\n\nNice, your repository looks correctly configured.",
            snapshot.remote_url,
            snapshot.branch.as_str()
        )),
        None => ctx.prompter.show(
            "I couldn't find a Git repository with a remote here, or Git isn't available. Try running 'git status' to check the folder.",
        ),
    }
    Ok(())
}

pub async fn set_remote(ctx: &AppContext) -> AppResult<()> {
    let url = ctx
        .prompter
        .ask_text(
            "Enter the remote repository URL (e.g., git@github.com:you/repo.git):",
            None,
        )
        .await?;
    let url = url.trim();
    if url.is_empty() {
        return Ok(());
    }

    if !inspect::add_remote(
        ctx.git.as_ref(),
        ctx.workspace(),
        &ctx.config.remote_name,
        url,
    )
    .await
    {
        ctx.prompter.show(
            "\nFailed to add remote. Make sure this folder is a Git repository and the remote does not already exist.",
        );
        return Ok(());
    }

    ctx.prompter
        .show("\nRemote repository added. You can now push your changes to this remote.");
    if ctx
        .prompter
        .ask_confirm("Test access to this remote now?", false)
        .await?
    {
        let outcome = inspect::test_remote_auth(ctx.git.as_ref(), ctx.workspace(), url)
            .await
            .map(|()| "The remote is reachable and your credentials were accepted.".to_string());
        ctx.prompter.show(&render(outcome));
    }
    Ok(())
}

fn render(outcome: AppResult<String>) -> String {
    match outcome {
        Ok(message) => message,
        Err(err) => err.to_string(),
    }
}
