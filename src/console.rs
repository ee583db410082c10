//! Console interaction capability
//!
//! All prompting and output goes through the `Console` trait instead of a
//! process-wide singleton, so the menu controller, launcher, and auth gate
//! can be driven by a scripted console in tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use colored::*;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::error::{ArmoryError, Result};

/// Capability object for user interaction
pub trait Console {
    /// Write one line of (possibly pre-styled) output
    fn say(&mut self, line: &str);

    /// Ask a question and read one line of input, trimmed
    fn prompt(&mut self, question: &str) -> Result<String>;

    /// Ask for a secret without echoing it
    fn prompt_hidden(&mut self, question: &str) -> Result<String>;

    /// Clear the screen
    fn clear(&mut self);

    /// Echo a command line the way a terminal session would show it
    fn command_echo(&mut self, command: &str, note: &str) {
        self.say(command);
        if !note.is_empty() {
            self.say(note);
        }
    }
}

/// Terminal-backed console with a kali-style prompt
pub struct StdConsole {
    user: String,
    hostname: String,
    current_dir: String,
}

impl StdConsole {
    pub fn new(user: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            hostname: hostname.into(),
            current_dir: "~/armory".to_string(),
        }
    }

    fn shell_prompt(&self) -> String {
        format!(
            "{}{}{}{}",
            format!("{}@{}", self.user, self.hostname).green().bold(),
            ":".white(),
            self.current_dir.blue().bold(),
            " # ".red().bold()
        )
    }

    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let bytes = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ArmoryError::Console(format!("stdin read failed: {}", e)))?;

        // EOF on stdin is treated as a request to leave
        if bytes == 0 {
            return Ok("exit".to_string());
        }
        Ok(line.trim().to_string())
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new("kali", "armory")
    }
}

impl Console for StdConsole {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        if !question.is_empty() {
            println!("{}", format!("❓ {}", question).yellow().bold());
        }
        print!("{}", self.shell_prompt());
        std::io::stdout()
            .flush()
            .map_err(|e| ArmoryError::Console(format!("stdout flush failed: {}", e)))?;
        self.read_line()
    }

    fn prompt_hidden(&mut self, question: &str) -> Result<String> {
        print!("{}", format!("🔒 {} ", question).yellow().bold());
        std::io::stdout()
            .flush()
            .map_err(|e| ArmoryError::Console(format!("stdout flush failed: {}", e)))?;

        enable_raw_mode().map_err(|e| ArmoryError::Console(format!("raw mode failed: {}", e)))?;
        let result = read_hidden();
        disable_raw_mode().map_err(|e| ArmoryError::Console(format!("raw mode failed: {}", e)))?;
        println!();
        result
    }

    fn clear(&mut self) {
        // ANSI clear + cursor home; works in any terminal we care about
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().flush();
    }

    fn command_echo(&mut self, command: &str, note: &str) {
        println!("{}{}", self.shell_prompt(), command);
        if !note.is_empty() {
            println!("{}", note);
        }
    }
}

/// Accumulate key events until Enter, without echoing
fn read_hidden() -> Result<String> {
    let mut secret = String::new();
    loop {
        let ev = event::read().map_err(|e| ArmoryError::Console(format!("key read failed: {}", e)))?;
        if let Event::Key(key) = ev {
            match key.code {
                KeyCode::Enter => return Ok(secret),
                KeyCode::Backspace => {
                    secret.pop();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Err(ArmoryError::Console("interrupted".to_string()));
                }
                KeyCode::Char(c) => secret.push(c),
                _ => {}
            }
        }
    }
}

/// Scripted console for tests: canned input lines, recorded output
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
            clears: 0,
        }
    }

    /// Everything said so far, one entry per line
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// True if any output line contains the given text
    pub fn said(&self, text: &str) -> bool {
        self.output.iter().any(|line| line.contains(text))
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        self.output.push(format!("? {}", question));
        self.inputs
            .pop_front()
            .ok_or_else(|| ArmoryError::Console("script exhausted".to_string()))
    }

    fn prompt_hidden(&mut self, question: &str) -> Result<String> {
        self.prompt(question)
    }

    fn clear(&mut self) {
        self.clears += 1;
    }
}
