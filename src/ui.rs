//! Decorative rendering: banners, listing tables, detail view, summaries
//!
//! Everything here is presentation only; it writes through the Console
//! capability and holds no state of its own.

use chrono::{DateTime, Local};
use colored::*;

use crate::catalog::{Catalog, Category, ToolRecord};
use crate::console::Console;
use crate::launch::{LaunchOutcome, resolve};

fn width() -> usize {
    crossterm::terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

/// Terminal-style banner: ruled title line with an optional subtitle
pub fn banner(console: &mut dyn Console, title: &str, subtitle: &str) {
    let w = width();
    let rule = "=".repeat(w).blue().bold().to_string();
    console.say(&rule);
    console.say(&center(title, w).blue().bold().to_string());
    if !subtitle.is_empty() {
        console.say(&center(subtitle, w).blue().italic().to_string());
    }
    console.say(&rule);
    console.say("");
}

fn center(text: &str, w: usize) -> String {
    let len = text.chars().count();
    if len >= w {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((w - len) / 2), text)
}

/// Category listing with a trailing exit entry
pub fn render_categories(console: &mut dyn Console, catalog: &Catalog) {
    banner(console, "Tool Categories", "Pick a category by number");

    for (i, category) in catalog.categories().iter().enumerate() {
        let first = category
            .tools
            .first()
            .map(|t| t.description.as_str())
            .unwrap_or("");
        console.say(&format!(
            "  {}  {:<24} {}",
            format!("{:>2}.", i + 1).cyan(),
            category.name.green(),
            format!("{} tools ({}...)", category.tools.len(), first).yellow()
        ));
    }
    console.say(&format!(
        "  {}  {:<24} {}",
        format!("{:>2}.", catalog.len() + 1).cyan(),
        "Exit".green(),
        "Leave the program".yellow()
    ));
    console.say("");
}

/// Tool listing for one category with a trailing back entry
pub fn render_tools(console: &mut dyn Console, category: &Category) {
    banner(console, &format!("{} Tools", category.name), "Pick a tool by number");

    for (i, tool) in category.tools.iter().enumerate() {
        console.say(&format!(
            "  {}  {:<6} {:<20} {:<36} {}",
            format!("{:>2}.", i + 1).cyan(),
            tool.file_type.to_uppercase().bright_black(),
            tool.name.green(),
            tool.description.yellow(),
            tool.version_label().blue()
        ));
    }
    console.say(&format!(
        "  {}  {:<6} {:<20} {}",
        format!("{:>2}.", category.tools.len() + 1).cyan(),
        "",
        "Back".green(),
        "Return to category list".yellow()
    ));
    console.say("");
}

/// Full detail view for one tool, with the launch options hint
pub fn render_tool_detail(console: &mut dyn Console, tool: &ToolRecord) {
    banner(
        console,
        &format!("{} v{}", tool.name, tool.version_label()),
        "Tool details",
    );

    let icon = resolve(&tool.file_type, tool.launch_method.as_deref())
        .map(|s| s.icon)
        .unwrap_or("📄");

    let row = |label: &str, value: &str| {
        format!("  {:<12} {}", label.cyan().bold(), value.yellow())
    };
    console.say(&row("Name", &tool.name));
    console.say(&row("Version", tool.version_label()));
    console.say(&row(
        "Type",
        &format!("{} {}", icon, tool.file_type.to_uppercase()),
    ));
    console.say(&row("Description", &tool.description));
    console.say(&row("Author", tool.author.as_deref().unwrap_or("unknown")));
    console.say(&row("Website", tool.website.as_deref().unwrap_or("n/a")));
    console.say(&row(
        "Usage",
        tool.usage.as_deref().unwrap_or("no usage notes"),
    ));
    console.say("");
    console.say(&"Options:".dimmed().to_string());
    console.say(&format!("  {} - launch the tool", "Enter".green()));
    console.say(&format!("  {}     - back to tool list", "b".yellow()));
    console.say(&format!("  {}     - exit", "x".red()));
    console.say("");
}

/// Report a launch outcome back to the user
pub fn render_outcome(console: &mut dyn Console, tool: &ToolRecord, outcome: &LaunchOutcome) {
    match outcome {
        LaunchOutcome::Success => {
            console.say(&format!("✅ {} completed", tool.name).green().bold().to_string());
        }
        LaunchOutcome::SimulatedSuccess => {
            console.say(
                &format!("✅ {} completed (demo mode)", tool.name)
                    .green()
                    .to_string(),
            );
        }
        LaunchOutcome::Failure(reason) => {
            console.say(&format!("❌ Launch failed: {}", reason).red().bold().to_string());
        }
    }
}

/// Welcome header shown before authentication
pub fn welcome(console: &mut dyn Console, version: &str, started_at: DateTime<Local>) {
    banner(console, "Armory", "Terminal launcher for security tools");
    console.say(&format!(
        "  {:<14} {}",
        "Version".green(),
        version.yellow()
    ));
    console.say(&format!(
        "  {:<14} {}",
        "Started".green(),
        started_at.format("%Y-%m-%d %H:%M:%S").to_string().yellow()
    ));
    console.say("");
}

/// Session summary printed on every exit path
pub fn exit_summary(console: &mut dyn Console, started_at: DateTime<Local>) {
    let ended_at = Local::now();
    let elapsed = ended_at.signed_duration_since(started_at);
    let runtime = format!(
        "{:02}:{:02}:{:02}",
        elapsed.num_hours(),
        elapsed.num_minutes() % 60,
        elapsed.num_seconds() % 60
    );

    banner(console, "Session ended", "Goodbye");
    console.say(&format!(
        "  {:<14} {}",
        "Started".green(),
        started_at.format("%Y-%m-%d %H:%M:%S")
    ));
    console.say(&format!(
        "  {:<14} {}",
        "Ended".green(),
        ended_at.format("%Y-%m-%d %H:%M:%S")
    ));
    console.say(&format!("  {:<14} {}", "Runtime".green(), runtime));
    console.say("");
    console.command_echo("exit", "logging out...");
}

/// Help shown when the user types `help` at any prompt
pub fn help_text() -> &'static str {
    "Available commands:\n  \
     clear/cls  - clear the screen\n  \
     exit/quit  - leave the program\n  \
     help       - show this help\n  \
     <number>   - pick the matching entry"
}
