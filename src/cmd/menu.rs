use tracing::debug;

use crate::cmd::actions;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::services::Prompter;

pub const BANNER: &str = "\
-------------------------------------------
 Welcome to gitmate
 Check/set your Git user info, save changes locally, and push to a remote.
 Choose an action from the menu below.
-------------------------------------------";
pub const GOODBYE_MESSAGE: &str = "Goodbye, happy coding!";
pub const INTERRUPTED_MESSAGE: &str = "Interrupted, exiting. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    SaveLocal,
    PushRemote,
    CheckIdentity,
    Utilities,
    Exit,
}

const MAIN_MENU: [(MainAction, &str); 5] = [
    (MainAction::SaveLocal, "Save changes locally (commit)"),
    (MainAction::PushRemote, "Submit / Push changes to remote"),
    (MainAction::CheckIdentity, "Check Git user info"),
    (MainAction::Utilities, "Utilities / other actions"),
    (MainAction::Exit, "Exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UtilityAction {
    CheckRepository,
    SetIdentity,
    SetRemote,
    Back,
}

const UTILITY_MENU: [(UtilityAction, &str); 4] = [
    (UtilityAction::CheckRepository, "Check repo info"),
    (UtilityAction::SetIdentity, "Set global Git user"),
    (UtilityAction::SetRemote, "Set remote repository"),
    (UtilityAction::Back, "Back to main menu"),
];

enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the operator exits or input closes.
pub async fn run(ctx: &AppContext) -> AppResult<()> {
    ctx.prompter.show(BANNER);

    loop {
        match step(ctx).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                ctx.prompter.show(&format!("\n{GOODBYE_MESSAGE}"));
                return Ok(());
            }
            Err(AppError::Interrupted) => {
                ctx.prompter.show(&format!("\n{INTERRUPTED_MESSAGE}"));
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}

async fn step(ctx: &AppContext) -> AppResult<Flow> {
    let action = choose(ctx.prompter.as_ref(), "What would you like to do?", &MAIN_MENU).await?;
    debug!(?action, "main menu");

    match action {
        MainAction::SaveLocal => actions::save_locally(ctx).await?,
        MainAction::PushRemote => actions::push_changes(ctx).await?,
        MainAction::CheckIdentity => actions::check_identity(ctx).await?,
        MainAction::Utilities => {
            let utility =
                choose(ctx.prompter.as_ref(), "Utilities - choose an action:", &UTILITY_MENU)
                    .await?;
            debug!(?utility, "utilities menu");
            match utility {
                UtilityAction::CheckRepository => actions::check_repository(ctx).await?,
                UtilityAction::SetIdentity => actions::set_identity(ctx).await?,
                UtilityAction::SetRemote => actions::set_remote(ctx).await?,
                UtilityAction::Back => {}
            }
        }
        MainAction::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

async fn choose<T: Copy>(
    prompter: &dyn Prompter,
    message: &str,
    entries: &[(T, &str)],
) -> AppResult<T> {
    let labels = entries.iter().map(|(_, label)| *label).collect::<Vec<_>>();
    let index = prompter.ask_choice(message, &labels).await?;
    entries
        .get(index)
        .map(|(action, _)| *action)
        .ok_or_else(|| AppError::Configuration(format!("menu option {index} does not exist")))
}
