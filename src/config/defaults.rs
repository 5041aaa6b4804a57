//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn images_dir() -> PathBuf {
        "images/generated".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    pub fn posts() -> String {
        "blog".into()
    }

    pub fn series() -> String {
        "series".into()
    }

    pub fn tags() -> String {
        "tags".into()
    }

    pub fn blog_prefix() -> String {
        "/blog".into()
    }

    pub fn series_marker() -> String {
        "$series".into()
    }
}

// ============================================================================
// [image] Section Defaults
// ============================================================================

pub mod image {
    pub fn width() -> u32 {
        1200
    }

    pub fn height() -> u32 {
        630
    }

    pub fn cell_size() -> u32 {
        75
    }

    pub fn variance() -> f64 {
        0.75
    }
}
