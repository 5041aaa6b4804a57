//! Enriched content export.
//!
//! Each collection is written as a pretty JSON array below `<output>/_data/`,
//! next to the `[base]` site metadata:
//!
//! | File | Contents |
//! |------|----------|
//! | `site.json` | `[base]` title, description, url |
//! | `posts.json` | BlogPost |
//! | `series.json` | Series |
//! | `tags.json` | Tag |

use crate::{
    config::SiteConfig,
    content::{ContentStore, NodeType},
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

const SITE_FILE: &str = "site.json";

const EXPORTS: [(NodeType, &str); 3] = [
    (NodeType::BlogPost, "posts.json"),
    (NodeType::Series, "series.json"),
    (NodeType::Tag, "tags.json"),
];

/// Serialize one collection to JSON.
pub fn collection_json(store: &ContentStore, type_name: NodeType) -> Result<String> {
    serde_json::to_string_pretty(store.get_collection(type_name).data())
        .with_context(|| format!("Failed to serialize {type_name} collection"))
}

/// Write site metadata and all collections into `[build.output]/_data`.
pub fn write_data(store: &ContentStore, config: &SiteConfig) -> Result<()> {
    let dir = config.build.data_output();
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create data directory {}", dir.display()))?;

    let site = serde_json::to_string_pretty(&config.base).context("Failed to serialize site metadata")?;
    write_file(&dir, SITE_FILE, site)?;

    for (type_name, file_name) in EXPORTS {
        write_file(&dir, file_name, collection_json(store, type_name)?)?;
        log!("data"; "{file_name} ({} nodes)", store.get_collection(type_name).len());
    }

    Ok(())
}

fn write_file(dir: &Path, file_name: &str, json: String) -> Result<()> {
    let path = dir.join(file_name);
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
}
