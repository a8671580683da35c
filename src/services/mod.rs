pub mod prompt;
pub mod version_control;

pub use prompt::Prompter;
pub use version_control::{GitExecutor, GitOutput};
