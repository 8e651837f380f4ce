use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub target_directory: PathBuf,
    pub source_extension: String,
    pub excluded_files: Vec<String>,
    pub ignore_patterns: Vec<String>,
    pub max_file_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_directory: PathBuf::from("."),
            source_extension: "java".to_string(),
            excluded_files: vec!["package-info.java".to_string()],
            ignore_patterns: vec![
                ".git".to_string(),
                "target".to_string(),
                "build".to_string(),
                "generated".to_string(),
            ],
            max_file_size: 1024 * 1024, // 1MB
        }
    }
}

impl Config {
    /// Get the default config file path (~/.depscan.toml)
    pub fn default_config_path() -> crate::Result<PathBuf> {
        let home_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join(".depscan.toml"))
    }

    /// Load config from the default path, falling back to defaults if the
    /// file doesn't exist
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            println!("📝 Loading configuration from: {}", config_path.display());
            Self::from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific file path
    pub fn from_file(path: &PathBuf) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn to_file(&self, path: &PathBuf) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create a config file with all available options documented
    pub fn create_documented_config() -> String {
        r#"# depscan configuration file

# Root source directory to analyze (usually overridden on the command line)
target_directory = "."

# File extension that marks a source unit
source_extension = "java"

# File names excluded by exact match (generated marker files)
excluded_files = ["package-info.java"]

# Path patterns to skip during file discovery
ignore_patterns = [
    ".git",
    "target",
    "build",
    "generated",
]

# Maximum file size to analyze (in bytes, default 1MB)
max_file_size = 1048576
"#
        .to_string()
    }
}
