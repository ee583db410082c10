//! Catalog loading from a JSON source with a built-in fallback
//!
//! The on-disk format is a JSON object mapping category name to an array of
//! tool objects. Key order is preserved (serde_json `preserve_order`) since
//! category order is presentation order. Any read or parse failure replaces
//! the whole catalog with the built-in default; there is no partial-failure
//! mode, so the launcher stays operable with zero external configuration.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ArmoryError, Result};

use super::record::{Catalog, Category, ToolRecord};

/// Loads the catalog fresh on every call.
///
/// There is deliberately no caching: each menu render re-reads the source,
/// so catalog edits are picked up mid-session.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog, substituting the default on any failure
    pub fn load(&self) -> Catalog {
        match Self::load_from_file(&self.path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!(
                    "Failed to load catalog from {}: {}; using built-in default",
                    self.path.display(),
                    e
                );
                Self::default_catalog()
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Catalog> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ArmoryError::Catalog(format!("Failed to read catalog file: {}", e)))?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(content: &str) -> Result<Catalog> {
        let root: Value = serde_json::from_str(content)
            .map_err(|e| ArmoryError::Catalog(format!("Failed to parse catalog JSON: {}", e)))?;

        let map = root
            .as_object()
            .ok_or_else(|| ArmoryError::Catalog("Catalog root must be a JSON object".to_string()))?;

        let mut categories = Vec::with_capacity(map.len());
        for (name, tools_value) in map {
            let tools: Vec<ToolRecord> = serde_json::from_value(tools_value.clone()).map_err(|e| {
                ArmoryError::Catalog(format!("Invalid tool list for category '{}': {}", name, e))
            })?;
            categories.push(Category::new(name.clone(), tools));
        }

        Ok(Catalog::new(categories))
    }

    /// The built-in demonstration catalog used when the source is unusable.
    /// The paths point at nonexistent targets on purpose; launching them
    /// exercises the simulated-execution branch.
    pub fn default_catalog() -> Catalog {
        let tool = |name: &str, desc: &str, path: &str, file_type: &str| {
            ToolRecord::new(name, desc, path, file_type)
        };

        Catalog::new(vec![
            Category::new(
                "Reconnaissance",
                vec![
                    tool("Nmap", "Network scanner", "tools/nmap.exe", "exe"),
                    tool("Whois Lookup", "Domain registration lookup", "tools/whois.py", "py"),
                ],
            ),
            Category::new(
                "Vulnerability Scanning",
                vec![
                    tool("OpenVAS", "Open-source vulnerability scanner", "tools/openvas.bat", "bat"),
                    tool("SQLMap", "SQL injection tester", "tools/sqlmap.py", "py"),
                ],
            ),
            Category::new(
                "Exploitation",
                vec![
                    tool("Metasploit", "Penetration testing framework", "tools/msf.bat", "bat"),
                    tool("ExploitPack", "Exploit collection", "tools/exploit.jar", "jar"),
                ],
            ),
            Category::new(
                "Packet Capture",
                vec![
                    tool("Wireshark", "Network protocol analyzer", "tools/wireshark.exe", "exe"),
                    tool("Burp Suite", "Web application security testing", "tools/burp.vbs", "vbs"),
                ],
            ),
        ])
    }
}
