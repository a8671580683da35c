use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use crate::services::Prompter;

/// Line-based prompts on stdin/stdout.
pub struct TerminalPrompter {
    input: Mutex<BufReader<Stdin>>,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(io::stdin())),
        }
    }

    async fn read_answer(&self, question: &str) -> AppResult<String> {
        let mut stdout = io::stdout();
        stdout.write_all(question.as_bytes()).await?;
        stdout.flush().await?;

        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Err(AppError::Interrupted);
        }
        Ok(line.trim().to_string())
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn ask_choice(&self, message: &str, options: &[&str]) -> AppResult<usize> {
        let mut menu = format!("\n{message}\n");
        for (index, option) in options.iter().enumerate() {
            menu.push_str(&format!("  {}) {option}\n", index + 1));
        }
        self.show(&menu);

        loop {
            let answer = self.read_answer(&format!("Choose [1-{}]: ", options.len())).await?;
            match parse_choice(&answer, options.len()) {
                Some(index) => return Ok(index),
                None => self.show(&format!(
                    "Please enter a number between 1 and {}.",
                    options.len()
                )),
            }
        }
    }

    async fn ask_text(&self, message: &str, default: Option<&str>) -> AppResult<String> {
        let question = match default {
            Some(value) => format!("{message} [{value}]: "),
            None => format!("{message} "),
        };
        let answer = self.read_answer(&question).await?;
        match default {
            Some(value) if answer.is_empty() => Ok(value.to_string()),
            _ => Ok(answer),
        }
    }

    async fn ask_confirm(&self, message: &str, default: bool) -> AppResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            let answer = self.read_answer(&format!("{message} [{hint}]: ")).await?;
            match parse_confirm(&answer, default) {
                Some(value) => return Ok(value),
                None => self.show("Please answer 'y' or 'n'."),
            }
        }
    }

    fn show(&self, message: &str) {
        println!("{message}");
    }
}

/// Maps a 1-based menu entry to an option index.
fn parse_choice(input: &str, options: usize) -> Option<usize> {
    let number = input.trim().parse::<usize>().ok()?;
    (1..=options).contains(&number).then(|| number - 1)
}

fn parse_confirm(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
