//! Armory - an interactive, categorized launcher for external tools
//!
//! Armory presents a catalog of external executables/scripts grouped by
//! category, lets the user drill from categories to tools to a detail view,
//! and launches the selected tool with type-appropriate invocation semantics.
//! Tools whose target path is absent are "launched" in demo mode instead of
//! failing, so a demonstration catalog stays usable end-to-end.

pub mod auth;
pub mod catalog;
pub mod console;
pub mod error;
pub mod interrupt;
pub mod launch;
pub mod menu;
pub mod ui;

pub use error::{ArmoryError, Result};
