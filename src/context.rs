use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{GitExecutor, Prompter};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub git: Arc<dyn GitExecutor>,
    pub prompter: Arc<dyn Prompter>,
}

impl AppContext {
    pub fn new(config: AppConfig, git: Arc<dyn GitExecutor>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            config,
            git,
            prompter,
        }
    }

    pub fn workspace(&self) -> &Path {
        &self.config.workspace_root
    }
}
