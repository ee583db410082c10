//! Tool launching
//!
//! Resolves a tool record to an invocation strategy, substitutes runtime
//! parameters, and runs the external process. A tool whose target path does
//! not exist is not an error: the launcher emits a demo-mode run and reports
//! `SimulatedSuccess`, so a catalog full of placeholder entries remains
//! navigable end-to-end.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::Utc;
use colored::*;
use rand::Rng;

use crate::console::Console;
use crate::error::Result;
use crate::interrupt;

use super::registry::{self, LaunchMethod, LaunchStrategy};
use crate::catalog::ToolRecord;

/// Result of a launch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The external process ran and exited successfully
    Success,
    /// The target path was absent; a demo-mode run was emitted instead
    SimulatedSuccess,
    /// The launch could not be carried out
    Failure(LaunchFailure),
}

/// Why a launch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchFailure {
    /// The tool's file type has no registered launch strategy
    UnsupportedType(String),
    /// The process failed to spawn or exited with failure
    Process(String),
}

impl fmt::Display for LaunchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType(t) => write!(f, "unsupported tool type: {}", t),
            Self::Process(detail) => write!(f, "process error: {}", detail),
        }
    }
}

/// Launches catalog tools relative to a fixed project root
#[derive(Debug, Clone)]
pub struct Launcher {
    project_root: PathBuf,
}

impl Launcher {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Launch a tool, blocking until the process (or simulation) completes.
    ///
    /// The working directory is switched to the target's parent before
    /// invocation and restored before this returns, on every path.
    pub fn launch(&self, tool: &ToolRecord, console: &mut dyn Console) -> Result<LaunchOutcome> {
        let abs_path = self.resolve_path(&tool.path);

        let Some(strategy) = registry::resolve(&tool.file_type, tool.launch_method.as_deref())
        else {
            log::warn!("No launch strategy for tool type '{}'", tool.file_type);
            return Ok(LaunchOutcome::Failure(LaunchFailure::UnsupportedType(
                tool.file_type.clone(),
            )));
        };

        console.say(&format!(
            "{}",
            format!(
                "🚀 Launching {} ({} {} program)",
                tool.name,
                strategy.icon,
                tool.file_type.to_uppercase()
            )
            .green()
            .bold()
        ));
        console.command_echo(
            &format!("chmod +x {}", abs_path.display()),
            "[ ✓ ] execute permission set",
        );

        let parameters = self.substitute_parameters(tool, console)?;
        let command_line = Self::render_command_line(strategy, &abs_path, &parameters);
        console.command_echo(&command_line, "starting...");

        let saved_cwd = std::env::current_dir().ok();
        let changed = self.enter_tool_dir(&abs_path);

        let outcome = if abs_path.exists() {
            self.run_process(tool, strategy, &abs_path, &parameters, console)
        } else {
            self.simulate(tool, &abs_path, console);
            LaunchOutcome::SimulatedSuccess
        };

        if changed {
            if let Some(cwd) = saved_cwd {
                if let Err(e) = std::env::set_current_dir(&cwd) {
                    log::warn!("Failed to restore working directory {}: {}", cwd.display(), e);
                }
            }
        }

        Ok(outcome)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Fill the `{url}` placeholder, prompting the user for the value.
    /// The reply is substituted verbatim; any substring is accepted.
    fn substitute_parameters(&self, tool: &ToolRecord, console: &mut dyn Console) -> Result<String> {
        let parameters = tool.parameters.clone().unwrap_or_default();
        if parameters.contains("{url}") {
            let url = console.prompt("Target URL:")?;
            Ok(parameters.replace("{url}", &url))
        } else {
            Ok(parameters)
        }
    }

    fn render_command_line(strategy: &LaunchStrategy, abs_path: &Path, parameters: &str) -> String {
        let mut line = String::new();
        if !strategy.command.is_empty() {
            line.push_str(strategy.command);
            line.push(' ');
        }
        line.push_str(&abs_path.display().to_string());
        if !parameters.is_empty() {
            line.push(' ');
            line.push_str(parameters);
        }
        line
    }

    /// Switch to the target's directory; relative paths used by the launched
    /// program resolve against it. Returns whether the switch happened.
    fn enter_tool_dir(&self, abs_path: &Path) -> bool {
        let Some(dir) = abs_path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return false;
        };
        match std::env::set_current_dir(dir) {
            Ok(()) => true,
            Err(e) => {
                // Missing tool dir is the normal demo-catalog case
                log::debug!("Could not enter {}: {}", dir.display(), e);
                false
            }
        }
    }

    fn run_process(
        &self,
        tool: &ToolRecord,
        strategy: &LaunchStrategy,
        abs_path: &Path,
        parameters: &str,
        console: &mut dyn Console,
    ) -> LaunchOutcome {
        let args: Vec<&str> = parameters.split_whitespace().collect();

        let mut command = match strategy.method {
            LaunchMethod::Direct => {
                let mut c = Command::new(abs_path);
                c.args(&args);
                c
            }
            LaunchMethod::Command => {
                let tokens: Vec<&str> = strategy.command.split_whitespace().collect();
                match tokens.split_first() {
                    Some((program, rest)) => {
                        let mut c = Command::new(program);
                        c.args(rest).arg(abs_path).args(&args);
                        c
                    }
                    None => {
                        // Empty command token list: shell-interpreted launch
                        let mut c = Command::new("sh");
                        c.arg("-c")
                            .arg(format!("{} {}", abs_path.display(), parameters));
                        c
                    }
                }
            }
        };

        log::info!("Launching {} via {:?}", tool.name, command);
        interrupt::set_child_active(true);
        let status = command.status();
        interrupt::set_child_active(false);

        match status {
            Ok(status) if status.success() => {
                console.say(&format!("{}", format!("✅ {} finished", tool.name).green().bold()));
                LaunchOutcome::Success
            }
            Ok(status) => {
                log::warn!("{} exited with {}", tool.name, status);
                LaunchOutcome::Failure(LaunchFailure::Process(format!(
                    "{} exited with {}",
                    tool.name, status
                )))
            }
            Err(e) => {
                log::warn!("Failed to spawn {}: {}", tool.name, e);
                LaunchOutcome::Failure(LaunchFailure::Process(format!(
                    "failed to start {}: {}",
                    tool.name, e
                )))
            }
        }
    }

    /// Demo-mode run for absent targets: a fixed sequence of status lines
    /// with a pseudo-random open-port count. No process is created.
    fn simulate(&self, tool: &ToolRecord, abs_path: &Path, console: &mut dyn Console) {
        console.say(&format!(
            "{}",
            format!(
                "⚠️  Target not found: {} (demo environment, simulating {})",
                abs_path.display(),
                tool.name
            )
            .yellow()
        ));
        console.say(&format!("{}", format!("✅ {} started", tool.name).green().bold()));

        let ports = rand::rng().random_range(3..=15);
        let report = format!("report_{}.txt", Utc::now().timestamp());
        let lines = [
            format!("{} v{} running...", tool.name, tool.version_label()),
            "Scanning target...".to_string(),
            format!("Discovered {} open ports", ports),
            "Analyzing results...".to_string(),
            format!("Report written: {}", report),
        ];
        for line in &lines {
            console.say(&format!("{}", line.dimmed()));
        }

        console.say(&format!("{}", format!("✅ {} finished", tool.name).green().bold()));
    }
}
