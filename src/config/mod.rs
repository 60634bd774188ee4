pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_ASSETS_DIR: &str = ".";
pub const DEFAULT_OUTPUT_PATH: &str = "./demo.html";
pub const DEFAULT_HEIGHT: u32 = 900;
pub const DEFAULT_TITLE: &str = "MentePyme Demo";
pub const DEFAULT_DESCRIPTION: &str =
    "Demo interactivo de la PWA MentePyme, empaquetada como una sola página.";

pub const MIN_HEIGHT: u32 = 1;
pub const MAX_HEIGHT: u32 = 10_000;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pwa-embed")]
#[command(about = "Inlines a PWA's stylesheet and script into one embeddable demo page")]
pub struct CliConfig {
    #[arg(long, help = "Directory holding index.html, style.css and app.js")]
    pub assets_dir: Option<String>,

    #[arg(long, help = "Where to write the assembled demo page")]
    pub out: Option<String>,

    #[arg(long, help = "Embed frame height in pixels")]
    pub height: Option<u32>,

    #[arg(long, help = "Disable scrolling inside the embed frame")]
    pub no_scrolling: bool,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, help = "Optional TOML page-config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fill values left unset on the command line from a TOML page config.
    /// Command-line values always win.
    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if self.assets_dir.is_none() {
            self.assets_dir = file.assets.as_ref().and_then(|a| a.dir.clone());
        }
        if self.out.is_none() {
            self.out = file.output.as_ref().and_then(|o| o.path.clone());
        }
        if self.height.is_none() {
            self.height = file.embed.as_ref().and_then(|e| e.height);
        }
        if !self.no_scrolling {
            if let Some(false) = file.embed.as_ref().and_then(|e| e.scrolling) {
                self.no_scrolling = true;
            }
        }
        if self.title.is_none() {
            self.title = file.page.as_ref().and_then(|p| p.title.clone());
        }
        if self.description.is_none() {
            self.description = file.page.as_ref().and_then(|p| p.description.clone());
        }
    }

    pub fn assets_dir(&self) -> &str {
        self.assets_dir.as_deref().unwrap_or(DEFAULT_ASSETS_DIR)
    }

    pub fn output_path(&self) -> &str {
        self.out.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn page_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn page_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }

    pub fn scrolling(&self) -> bool {
        !self.no_scrolling
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn assets_dir(&self) -> &str {
        self.assets_dir()
    }

    fn output_path(&self) -> &str {
        self.output_path()
    }

    fn page_title(&self) -> &str {
        self.page_title()
    }

    fn page_description(&self) -> &str {
        self.page_description()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn scrolling(&self) -> bool {
        self.scrolling()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("assets_dir", self.assets_dir())?;
        validation::validate_path("out", self.output_path())?;
        validation::validate_range("height", self.height(), MIN_HEIGHT, MAX_HEIGHT)?;
        validation::validate_non_empty_string("title", self.page_title())?;
        Ok(())
    }
}
