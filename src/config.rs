use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
}

/// Analysis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// File name suffixes treated as headers and excluded from scoring
    pub header_suffixes: Vec<String>,
    /// Path prefixes treated as system locations and excluded from scoring
    pub system_prefixes: Vec<PathBuf>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Destination path for the report artifact
    pub path: PathBuf,
    /// Emit per-function remarks during analysis
    pub notices: bool,
}

/// Output format for the persisted report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            description: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include: vec![
                "**/*.c".to_string(),
                "**/*.cc".to_string(),
                "**/*.cpp".to_string(),
                "**/*.cxx".to_string(),
            ],
            exclude: vec![
                "build/**".to_string(),
                "cmake-build-*/**".to_string(),
                "third_party/**".to_string(),
                "vendor/**".to_string(),
                ".git/**".to_string(),
            ],
            header_suffixes: vec![".h".to_string(), ".hpp".to_string()],
            system_prefixes: vec![
                PathBuf::from("/usr/include"),
                PathBuf::from("/usr/local/include"),
            ],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            path: PathBuf::from("results.cy"),
            notices: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        exclude: Vec<String>,
        format: Option<String>,
        no_notices: bool,
    ) {
        if let Some(out) = output {
            self.output.path = out;
        }

        if !exclude.is_empty() {
            self.analysis.exclude.extend(exclude);
        }

        if let Some(fmt) = format {
            self.output.format = match fmt.as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Text,
            };
        }

        if no_notices {
            self.output.notices = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.analysis.include.is_empty() {
            return Err(Error::config_validation(
                "at least one include pattern required",
            ));
        }

        if self.analysis.header_suffixes.is_empty() {
            return Err(Error::config_validation(
                "header_suffixes must not be empty",
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(Error::config_validation("output path must not be empty"));
        }

        Ok(())
    }
}
