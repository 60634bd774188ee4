use crate::utils::error::{EmbedError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{MAX_HEIGHT, MIN_HEIGHT};

/// Optional TOML page config; every section and value may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub page: Option<PageSection>,
    pub embed: Option<EmbedSection>,
    pub assets: Option<AssetsSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSection {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedSection {
    pub height: Option<u32>,
    pub scrolling: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsSection {
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EmbedError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EmbedError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` references with environment values before parsing.
    /// Unresolvable variables are left verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = self.assets.as_ref().and_then(|a| a.dir.as_deref()) {
            validation::validate_path("assets.dir", dir)?;
        }

        if let Some(path) = self.output.as_ref().and_then(|o| o.path.as_deref()) {
            validation::validate_path("output.path", path)?;
        }

        if let Some(height) = self.embed.as_ref().and_then(|e| e.height) {
            validation::validate_range("embed.height", height, MIN_HEIGHT, MAX_HEIGHT)?;
        }

        if let Some(title) = self.page.as_ref().and_then(|p| p.title.as_deref()) {
            validation::validate_non_empty_string("page.title", title)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
