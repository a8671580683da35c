use async_trait::async_trait;

use crate::error::AppResult;

/// Operator input and output for the interactive menus.
///
/// Implementations return [`crate::error::AppError::Interrupted`] once input
/// is closed.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Returns the index of the selected option.
    async fn ask_choice(&self, message: &str, options: &[&str]) -> AppResult<usize>;
    async fn ask_text(&self, message: &str, default: Option<&str>) -> AppResult<String>;
    async fn ask_confirm(&self, message: &str, default: bool) -> AppResult<bool>;
    fn show(&self, message: &str);
}
