use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub auth: AuthConfig,
    pub paths: PathsConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Plaintext demo password; this gate is not a security boundary
    pub password: String,
    pub max_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password: "admin123".to_string(),
            max_attempts: 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root that relative tool paths resolve against; defaults to the
    /// current directory
    pub project_root: Option<PathBuf>,
    /// Catalog file, relative to the project root
    pub catalog: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            catalog: PathBuf::from("data/tools.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub user: String,
    pub hostname: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "kali".to_string(),
            hostname: "armory".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            auth: AuthConfig::default(),
            paths: PathsConfig::default(),
            terminal: TerminalConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Resolve the project root, falling back to the current directory
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.paths.project_root {
            Some(root) => Ok(root.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.auth.password, "admin123");
        assert_eq!(config.auth.max_attempts, 3);
        assert_eq!(config.paths.catalog, PathBuf::from("data/tools.json"));
        assert_eq!(config.terminal.user, "kali");
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "auth:\n  password: s3cret\n  max_attempts: 5\npaths:\n  catalog: other/tools.json\n"
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.auth.password, "s3cret");
        assert_eq!(config.auth.max_attempts, 5);
        assert_eq!(config.paths.catalog, PathBuf::from("other/tools.json"));
        // Unspecified sections keep their defaults
        assert_eq!(config.terminal.hostname, "armory");
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/armory.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_project_root_explicit() {
        let mut config = Config::default();
        config.paths.project_root = Some(PathBuf::from("/opt/armory"));
        assert_eq!(config.project_root().unwrap(), PathBuf::from("/opt/armory"));
    }
}
