//! `[build]` section configuration.
//!
//! Contains the directories the pipeline reads from and writes to.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in inkpress.toml - input and output locations.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"            # Source directory
/// output = "public"              # Output directory
/// images_dir = "images/generated"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory (Markdown files).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Placeholder image directory, relative to `output`.
    /// Also used as the URL path of the generated images.
    #[serde(default = "defaults::build::images_dir")]
    #[educe(Default = defaults::build::images_dir())]
    pub images_dir: PathBuf,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clear: bool,
}

impl BuildConfig {
    /// Absolute directory the placeholder images are written to.
    pub fn images_output(&self) -> PathBuf {
        self.output.join(&self.images_dir)
    }

    /// Directory for the exported JSON collections.
    pub fn data_output(&self) -> PathBuf {
        self.output.join("_data")
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("[base]").unwrap();

        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.images_dir, PathBuf::from("images/generated"));
        assert!(!config.build.clear);
    }

    #[test]
    fn test_build_output_paths() {
        let config: SiteConfig = toml::from_str(
            r#"
            [build]
            output = "dist"
            images_dir = "img"
        "#,
        )
        .unwrap();

        assert_eq!(config.build.images_output(), PathBuf::from("dist/img"));
        assert_eq!(config.build.data_output(), PathBuf::from("dist/_data"));
    }
}
