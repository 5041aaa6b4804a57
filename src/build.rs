//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── load_content()          read raw nodes from the content directory
//!     ├── on_create_node()        per-node pass, then insert into ContentStore
//!     ├── aggregate()             series membership and tag counts
//!     ├── plan_routes()           page declarations
//!     ├── pregenerate_images()    one image per route path
//!     └── write_routes() / write_data()
//! ```
//!
//! In dry-run mode (`check`) every pass runs but nothing is written.

use crate::{
    config::SiteConfig,
    content::{ContentStore, NodeType, load_content},
    data::write_data,
    image::ImageStore,
    log,
    pipeline::{Enricher, aggregate},
    routes::{plan_routes, pregenerate_images, write_routes},
};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;

/// Counts reported after a build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub posts: usize,
    pub series: usize,
    pub tags: usize,
    pub routes: usize,
    pub images_written: usize,
}

/// Run the full pipeline. With `dry_run`, nothing touches the output directory.
pub fn build_site(config: &SiteConfig, dry_run: bool) -> Result<BuildReport> {
    let output = &config.build.output;

    if !dry_run && config.build.clear && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }

    let images = if dry_run {
        ImageStore::dry_run(config)
    } else {
        ImageStore::new(config)
    };

    // ========================================================================
    // Load + per-node pass
    // ========================================================================
    let nodes = load_content(config).context("Failed to load content")?;
    log!("content"; "loaded {} nodes", nodes.len());

    let enricher = Enricher::new(config, &images, Utc::now());
    let mut store = ContentStore::new();
    for node in nodes {
        let origin = node.internal.origin.clone();
        let node = enricher
            .on_create_node(node)
            .with_context(|| format!("Failed to process {origin}"))?;
        store.insert(node)?;
    }
    if store.get_collection(NodeType::BlogPost).is_empty() {
        log!("warn"; "no blog posts found in {}", config.build.content.display());
    }

    // ========================================================================
    // Aggregation
    // ========================================================================
    let summary = aggregate(&mut store)?;
    log!("tags"; "{} tags referenced, {} series with posts", summary.tag_counts.len(), summary.series_with_posts);
    for tag in &summary.unreferenced_tags {
        log!("warn"; "tag `{tag}` is not referenced by any post");
    }

    // ========================================================================
    // Routes, images, data
    // ========================================================================
    let routes = plan_routes(store.get_collection(NodeType::BlogPost));
    let keyed = pregenerate_images(&routes, &images)?;
    log!("image"; "{keyed} route images ready");

    if !dry_run {
        write_routes(&routes, output)?;
        write_data(&store, config)?;
    }

    let report = BuildReport {
        posts: store.get_collection(NodeType::BlogPost).len(),
        series: store.get_collection(NodeType::Series).len(),
        tags: store.get_collection(NodeType::Tag).len(),
        routes: routes.len(),
        images_written: images.written(),
    };
    log!(
        "build";
        "done: {} posts, {} series, {} tags, {} pages, {} new images",
        report.posts, report.series, report.tags, report.routes, report.images_written
    );

    Ok(report)
}
