//! In-memory stand-ins for the external collaborators, shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::services::{GitExecutor, GitOutput, Prompter};

/// Records every invocation and answers from scripted rules first, then from a
/// small built-in model of `config`, `remote add`, `init` and `--version`.
pub struct FakeGit {
    installed: bool,
    rules: Vec<(Vec<String>, GitOutput)>,
    config: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self {
            installed: true,
            rules: Vec::new(),
            config: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every invocation fails as if the executable were absent.
    pub fn missing() -> Self {
        Self {
            installed: false,
            ..Self::new()
        }
    }

    /// Answers any invocation whose arguments start with `prefix`. Later rules
    /// take precedence.
    pub fn respond(mut self, prefix: &[&str], output: GitOutput) -> Self {
        self.rules.push((
            prefix.iter().map(|arg| arg.to_string()).collect(),
            output,
        ));
        self
    }

    pub fn with_config(self, key: &str, value: &str) -> Self {
        self.config
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn invoked(&self, prefix: &[&str]) -> bool {
        self.calls().iter().any(|call| starts_with(call, prefix))
    }

    fn builtin(&self, dir: Option<&Path>, args: &[&str]) -> GitOutput {
        let mut config = self.config.lock().unwrap();
        match args {
            ["--version"] => GitOutput::ok("git version 2.43.0\n"),
            ["config", "--global", key] => lookup(&config, &format!("global.{key}")),
            ["config", "--global", key, value] => {
                config.insert(format!("global.{key}"), value.to_string());
                GitOutput::ok("")
            }
            ["config", "--get", key] => lookup(&config, key),
            ["remote", "add", name, url] => {
                let key = format!("remote.{name}.url");
                if config.contains_key(&key) {
                    GitOutput::failed(3, format!("error: remote {name} already exists.\n"))
                } else {
                    config.insert(key, url.to_string());
                    GitOutput::ok("")
                }
            }
            ["init"] => {
                if let Some(dir) = dir {
                    fs::create_dir_all(dir.join(".git")).unwrap();
                }
                GitOutput::ok("Initialized empty Git repository\n")
            }
            _ => GitOutput::ok(""),
        }
    }
}

fn lookup(config: &HashMap<String, String>, key: &str) -> GitOutput {
    match config.get(key) {
        Some(value) => GitOutput::ok(format!("{value}\n")),
        None => GitOutput::failed(1, ""),
    }
}

fn starts_with(call: &[String], prefix: &[&str]) -> bool {
    call.len() >= prefix.len() && call.iter().zip(prefix).all(|(arg, want)| arg == want)
}

#[async_trait]
impl GitExecutor for FakeGit {
    async fn run(&self, dir: Option<&Path>, args: &[&str]) -> AppResult<GitOutput> {
        if !self.installed {
            return Err(AppError::ToolNotInstalled("git not found".to_string()));
        }

        let call = args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>();
        self.calls.lock().unwrap().push(call.clone());

        let scripted = self
            .rules
            .iter()
            .rev()
            .find(|(prefix, _)| {
                let prefix = prefix.iter().map(String::as_str).collect::<Vec<_>>();
                starts_with(&call, &prefix)
            })
            .map(|(_, output)| output.clone());

        Ok(scripted.unwrap_or_else(|| self.builtin(dir, args)))
    }
}

#[derive(Debug)]
pub enum Answer {
    Choice(usize),
    Text(&'static str),
    Confirm(bool),
}

/// Replays queued answers; an empty queue behaves like closed input.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    shown: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn output(&self) -> String {
        self.shown.lock().unwrap().join("\n")
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self) -> AppResult<Answer> {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(AppError::Interrupted)
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask_choice(&self, _message: &str, options: &[&str]) -> AppResult<usize> {
        match self.next()? {
            Answer::Choice(index) if index < options.len() => Ok(index),
            other => panic!("expected a choice among {options:?}, got {other:?}"),
        }
    }

    async fn ask_text(&self, _message: &str, default: Option<&str>) -> AppResult<String> {
        match self.next()? {
            Answer::Text("") => Ok(default.unwrap_or_default().to_string()),
            Answer::Text(text) => Ok(text.to_string()),
            other => panic!("expected text, got {other:?}"),
        }
    }

    async fn ask_confirm(&self, _message: &str, _default: bool) -> AppResult<bool> {
        match self.next()? {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected a confirmation, got {other:?}"),
        }
    }

    fn show(&self, message: &str) {
        self.shown.lock().unwrap().push(message.to_string());
    }
}
