//! Session controller
//!
//! Drives the navigation state machine against the console: renders each
//! screen, reads input, applies the pure transitions from `state`, and hands
//! launch decisions to the Launcher. The catalog is reloaded at the top of
//! every category and tool listing so mid-session edits show up immediately.

use chrono::{DateTime, Local};
use colored::*;

use crate::catalog::CatalogStore;
use crate::console::Console;
use crate::error::Result;
use crate::interrupt;
use crate::launch::Launcher;
use crate::ui;

use super::state::{
    DetailStep, NavState, PostLaunchStep, Step, transition_category_list, transition_post_launch,
    transition_tool_detail, transition_tool_list,
};

pub struct MenuController<'a> {
    store: &'a CatalogStore,
    launcher: &'a Launcher,
    console: &'a mut dyn Console,
    started_at: DateTime<Local>,
}

impl<'a> MenuController<'a> {
    pub fn new(store: &'a CatalogStore, launcher: &'a Launcher, console: &'a mut dyn Console) -> Self {
        Self {
            store,
            launcher,
            console,
            started_at: Local::now(),
        }
    }

    /// Run the session loop until the user (or an interrupt) ends it
    pub fn run(&mut self) -> Result<()> {
        let mut state = NavState::CategoryList;
        loop {
            if interrupt::requested() {
                log::info!("Interrupt requested, shutting down");
                state = NavState::Terminated;
            }
            state = match state {
                NavState::CategoryList => self.category_screen()?,
                NavState::ToolList(category) => self.tool_list_screen(&category)?,
                NavState::ToolDetail { category, tool } => {
                    self.tool_detail_screen(category, tool)?
                }
                NavState::Terminated => {
                    self.console.clear();
                    ui::exit_summary(self.console, self.started_at);
                    return Ok(());
                }
            };
        }
    }

    fn category_screen(&mut self) -> Result<NavState> {
        self.console.clear();
        let catalog = self.store.load();
        ui::render_categories(self.console, &catalog);
        let names: Vec<&str> = catalog.category_names();

        // Explicit validate-and-retry loop; invalid input never advances
        loop {
            let raw = self.read_input("Select a category")?;
            if interrupt::requested() {
                return Ok(NavState::Terminated);
            }
            match transition_category_list(&raw, &names) {
                Step::To(next) => return Ok(next),
                Step::Stay(msg) => self.report_invalid(msg),
            }
        }
    }

    fn tool_list_screen(&mut self, category_name: &str) -> Result<NavState> {
        self.console.clear();
        let catalog = self.store.load();

        // The catalog may have changed under us since the category was picked
        let Some(category) = catalog.category(category_name) else {
            log::warn!("Category '{}' disappeared from the catalog", category_name);
            self.console
                .say(&format!("Category '{}' is gone, returning", category_name).yellow().to_string());
            return Ok(NavState::CategoryList);
        };

        ui::render_tools(self.console, category);

        loop {
            let raw = self.read_input("Select a tool")?;
            if interrupt::requested() {
                return Ok(NavState::Terminated);
            }
            match transition_tool_list(&raw, category_name, &category.tools) {
                Step::To(next) => return Ok(next),
                Step::Stay(msg) => self.report_invalid(msg),
            }
        }
    }

    fn tool_detail_screen(
        &mut self,
        category: String,
        tool: crate::catalog::ToolRecord,
    ) -> Result<NavState> {
        self.console.clear();
        ui::render_tool_detail(self.console, &tool);

        loop {
            let raw = self.read_input("Choose an action")?;
            if interrupt::requested() {
                return Ok(NavState::Terminated);
            }
            match transition_tool_detail(&raw) {
                DetailStep::Launch => {
                    log::info!("Launching tool '{}' from category '{}'", tool.name, category);
                    let outcome = self.launcher.launch(&tool, self.console)?;
                    ui::render_outcome(self.console, &tool, &outcome);
                    return self.post_launch_prompt();
                }
                DetailStep::BackToTools => return Ok(NavState::ToolList(category)),
                DetailStep::Exit => return Ok(NavState::Terminated),
                DetailStep::Stay => self.report_invalid("Press Enter to launch, b to go back, x to exit"),
            }
        }
    }

    fn post_launch_prompt(&mut self) -> Result<NavState> {
        self.console.say("");
        let raw = self.read_input("Press Enter to return to the main menu, or x to exit")?;
        if interrupt::requested() {
            return Ok(NavState::Terminated);
        }
        match transition_post_launch(&raw) {
            PostLaunchStep::MainMenu => Ok(NavState::CategoryList),
            PostLaunchStep::Exit => Ok(NavState::Terminated),
        }
    }

    /// Prompt once, intercepting the special commands (`clear`/`cls`,
    /// `help`) before the caller sees the input. `exit`/`quit` pass through;
    /// every transition function understands them.
    fn read_input(&mut self, question: &str) -> Result<String> {
        loop {
            let raw = self.console.prompt(question)?;
            match raw.to_lowercase().as_str() {
                "clear" | "cls" => self.console.clear(),
                "help" => self.console.say(&ui::help_text().cyan().to_string()),
                _ => return Ok(raw),
            }
        }
    }

    fn report_invalid(&mut self, msg: &str) {
        if !msg.is_empty() {
            log::debug!("Invalid menu input: {}", msg);
            self.console.say(&msg.red().bold().to_string());
        }
    }
}
