//! Deterministic placeholder images.
//!
//! Every key (a post title, a series id, a route path) maps to one SVG
//! mosaic and one file name, so rebuilding the site reproduces the same
//! files byte for byte. The `[image]` parameters are part of the file name:
//! changing the canvas yields new files instead of reusing stale ones.
//!
//! ```text
//! key ──► StringHash ──► seed ──► Mulberry32 ──► render_svg()
//!  │                                                 │
//!  └──► blake3(key, [image]) ──► <hex16>.svg ◄───────┘
//! ```

mod pattern;
mod seed;

use seed::{Mulberry32, seed_for};

use crate::{
    config::{ImageConfig, SiteConfig},
    content::{Image, Node},
    pipeline::PipelineError,
};
use std::{cell::Cell, fs, path::PathBuf};

const IMAGE_EXTENSION: &str = "svg";

/// A rendered placeholder image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub file_name: String,
    pub svg: String,
}

/// Render the placeholder for `key` without touching the file system.
pub fn render(key: &str, config: &ImageConfig) -> Placeholder {
    let seed = seed_for(key);
    let file_name = if key.is_empty() {
        format!("random-{seed:08x}.{IMAGE_EXTENSION}")
    } else {
        image_file_name(key, config)
    };
    let svg = pattern::render_svg(&mut Mulberry32::new(seed), config);
    Placeholder { file_name, svg }
}

/// File name for `key` rendered with `config`: first 16 hex digits of a
/// BLAKE3 hash over the key and the canvas parameters.
pub fn image_file_name(key: &str, config: &ImageConfig) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(key.as_bytes());
    hasher.update(&[0]);
    hasher.update(&config.width.to_le_bytes());
    hasher.update(&config.height.to_le_bytes());
    hasher.update(&config.cell_size.to_le_bytes());
    hasher.update(&config.variance.to_bits().to_le_bytes());
    let hash = hasher.finalize();
    format!("{}.{IMAGE_EXTENSION}", &hex::encode(hash.as_bytes())[..16])
}

/// Writes placeholder images below the output directory and hands out their URL paths.
///
/// A dry-run store renders images but never writes them.
#[derive(Debug)]
pub struct ImageStore {
    /// `None` in dry-run mode.
    output: Option<PathBuf>,
    url_dir: String,
    config: ImageConfig,
    written: Cell<usize>,
}

impl ImageStore {
    pub fn new(config: &SiteConfig) -> Self {
        Self::with_output(Some(config.build.images_output()), config)
    }

    pub fn dry_run(config: &SiteConfig) -> Self {
        Self::with_output(None, config)
    }

    fn with_output(output: Option<PathBuf>, config: &SiteConfig) -> Self {
        let url_dir = config
            .build
            .images_dir
            .to_string_lossy()
            .replace('\\', "/")
            .trim_matches('/')
            .to_owned();

        Self {
            output,
            url_dir,
            config: config.image.clone(),
            written: Cell::new(0),
        }
    }

    /// URL path under which `file_name` is served.
    pub fn url_for(&self, file_name: &str) -> String {
        if self.url_dir.is_empty() {
            format!("/{file_name}")
        } else {
            format!("/{}/{file_name}", self.url_dir)
        }
    }

    /// Generate and persist the image for `key`, returning its URL path.
    ///
    /// Existing files are left alone: the same key always renders the same bytes.
    pub fn save(&self, key: &str) -> Result<String, PipelineError> {
        let placeholder = render(key, &self.config);

        if let Some(dir) = &self.output {
            let path = dir.join(&placeholder.file_name);
            if !path.exists() {
                fs::create_dir_all(dir).map_err(|err| PipelineError::Io(dir.clone(), err))?;
                fs::write(&path, placeholder.svg.as_bytes())
                    .map_err(|err| PipelineError::Io(path.clone(), err))?;
                self.written.set(self.written.get() + 1);
            }
        }

        Ok(self.url_for(&placeholder.file_name))
    }

    /// Number of image files written so far.
    pub fn written(&self) -> usize {
        self.written.get()
    }
}

/// Attach a placeholder image to `node` unless it already has one.
///
/// Also defaults a missing description to the empty string.
pub fn ensure_image(node: &mut Node, key: &str, images: &ImageStore) -> Result<(), PipelineError> {
    if node.image.as_ref().is_some_and(|image| !image.path.is_empty()) {
        return Ok(());
    }
    node.description.get_or_insert_with(String::new);
    node.image = Some(Image {
        path: images.save(key)?,
    });
    Ok(())
}
