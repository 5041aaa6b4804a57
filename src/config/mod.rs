//! Site configuration management for `inkpress.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Site metadata (title, description, url)        |
//! | `[build]`   | Content, output and image directories          |
//! | `[content]` | Collection directories, URL prefix, series tag |
//! | `[image]`   | Placeholder image canvas                       |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//!
//! [content]
//! blog_prefix = "/blog"
//! series_marker = "$series"
//!
//! [image]
//! width = 1200
//! height = 630
//! ```

mod base;
mod build;
mod content;
pub mod defaults;
mod error;

pub use content::{ContentConfig, ImageConfig};

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing inkpress.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Content collection settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Placeholder image settings
    #[serde(default)]
    pub image: ImageConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { clean } = &cli.command {
            self.build.clear |= *clean;
        }

        self.update_path_with_root(&root);
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration values that the pipeline relies on
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        let prefix = &self.content.blog_prefix;
        if !prefix.starts_with('/') || prefix.ends_with('/') {
            bail!(ConfigError::Validation(format!(
                "[content.blog_prefix] `{prefix}` must start with `/` and must not end with `/`, e.g. `/blog`"
            )));
        }

        if self.content.series_marker.is_empty() {
            bail!(ConfigError::Validation(
                "[content.series_marker] must not be empty".into()
            ));
        }

        if self.build.images_dir.is_absolute() {
            bail!(ConfigError::Validation(
                "[build.images_dir] must be relative to [build.output]".into()
            ));
        }

        let image = &self.image;
        if image.width == 0 || image.height == 0 {
            bail!(ConfigError::Validation(
                "[image.width] and [image.height] must be greater than 0".into()
            ));
        }
        if image.cell_size == 0 {
            bail!(ConfigError::Validation(
                "[image.cell_size] must be greater than 0".into()
            ));
        }
        if !(0.0..=1.0).contains(&image.variance) {
            bail!(ConfigError::Validation(
                "[image.variance] must be between 0.0 and 1.0".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
