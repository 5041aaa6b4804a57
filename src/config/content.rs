//! `[content]` and `[image]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[content]` section - collection layout and URL conventions.
///
/// # Example
/// ```toml
/// [content]
/// posts = "blog"
/// blog_prefix = "/blog"
/// series_marker = "$series"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Blog post directory, relative to `[build.content]`.
    #[serde(default = "defaults::content::posts")]
    #[educe(Default = defaults::content::posts())]
    pub posts: String,

    /// Series directory, relative to `[build.content]`.
    #[serde(default = "defaults::content::series")]
    #[educe(Default = defaults::content::series())]
    pub series: String,

    /// Tag directory, relative to `[build.content]`.
    #[serde(default = "defaults::content::tags")]
    #[educe(Default = defaults::content::tags())]
    pub tags: String,

    /// URL prefix of every blog post path. Starts with `/`, no trailing `/`.
    #[serde(default = "defaults::content::blog_prefix")]
    #[educe(Default = defaults::content::blog_prefix())]
    pub blog_prefix: String,

    /// Directory-name prefix that assigns posts to a series,
    /// e.g. `blog/$series-backend/post.md` belongs to `backend`.
    #[serde(default = "defaults::content::series_marker")]
    #[educe(Default = defaults::content::series_marker())]
    pub series_marker: String,

    /// Create a `Tag` node for every tag a post references without a tag file.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub create_missing_tags: bool,
}

/// `[image]` section - placeholder image canvas.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    /// Canvas width in pixels.
    #[serde(default = "defaults::image::width")]
    #[educe(Default = defaults::image::width())]
    pub width: u32,

    /// Canvas height in pixels.
    #[serde(default = "defaults::image::height")]
    #[educe(Default = defaults::image::height())]
    pub height: u32,

    /// Approximate edge length of a mosaic cell.
    #[serde(default = "defaults::image::cell_size")]
    #[educe(Default = defaults::image::cell_size())]
    pub cell_size: u32,

    /// How far grid points may drift, as a fraction of `cell_size` (0.0 - 1.0).
    #[serde(default = "defaults::image::variance")]
    #[educe(Default = defaults::image::variance())]
    pub variance: f64,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.posts, "blog");
        assert_eq!(config.content.series, "series");
        assert_eq!(config.content.tags, "tags");
        assert_eq!(config.content.blog_prefix, "/blog");
        assert_eq!(config.content.series_marker, "$series");
        assert!(config.content.create_missing_tags);
    }

    #[test]
    fn test_image_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.image.width, 1200);
        assert_eq!(config.image.height, 630);
        assert_eq!(config.image.cell_size, 75);
        assert_eq!(config.image.variance, 0.75);
    }

    #[test]
    fn test_content_config_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            [content]
            posts = "posts"
            blog_prefix = "/articles"
            series_marker = "@"
            create_missing_tags = false

            [image]
            width = 800
            cell_size = 40
        "#,
        )
        .unwrap();

        assert_eq!(config.content.posts, "posts");
        assert_eq!(config.content.blog_prefix, "/articles");
        assert_eq!(config.content.series_marker, "@");
        assert!(!config.content.create_missing_tags);
        assert_eq!(config.image.width, 800);
        assert_eq!(config.image.height, 630);
        assert_eq!(config.image.cell_size, 40);
    }
}
