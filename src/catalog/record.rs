//! Catalog record types
//!
//! A catalog is an ordered list of categories, each holding an ordered list
//! of tool records. Order is presentation order and nothing more.

use serde::{Deserialize, Serialize};

/// A single catalog entry describing one external program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Display name (e.g., "Nmap")
    pub name: String,
    /// One-line description shown in listings
    #[serde(default)]
    pub description: String,
    /// Target path, relative to the project root
    pub path: String,
    /// File-type identifier ("exe", "py", ...). Resolved against the launch
    /// registry at dispatch time; unknown types fail dispatch, not parsing.
    #[serde(rename = "type")]
    pub file_type: String,
    /// Version string, "unknown" when absent
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Free-text usage notes shown in the detail view
    #[serde(default)]
    pub usage: Option<String>,
    /// Parameter string; may contain a `{url}` placeholder filled at launch
    #[serde(default)]
    pub parameters: Option<String>,
    /// Strategy hint for multi-strategy types: "direct" | "command"
    #[serde(default)]
    pub launch_method: Option<String>,
}

impl ToolRecord {
    /// Create a minimal record; optional metadata starts empty
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        path: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            path: path.into(),
            file_type: file_type.into(),
            version: None,
            author: None,
            website: None,
            usage: None,
            parameters: None,
            launch_method: None,
        }
    }

    /// Version for display, defaulting to "unknown"
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or("unknown")
    }
}

/// A named, ordered grouping of tool records
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub tools: Vec<ToolRecord>,
}

impl Category {
    pub fn new(name: impl Into<String>, tools: Vec<ToolRecord>) -> Self {
        Self {
            name: name.into(),
            tools,
        }
    }
}

/// An ordered collection of categories, as loaded from the catalog source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Categories in presentation order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names in presentation order
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
