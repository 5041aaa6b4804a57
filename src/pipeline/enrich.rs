//! Per-node pass: runs once for every node as it is created.
//!
//! Order is fixed for all nodes: [`pre_create`] → kind handler → [`post_create`].

use super::PipelineError;
use crate::{
    config::{ContentConfig, SiteConfig},
    content::{Node, NodeKind},
    image::{ImageStore, ensure_image},
    utils::{
        date::DateInfo,
        slug::{fallback_slug, first_slug},
    },
};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Path segment rewritten to the real slug in [`post_create`].
const SLUG_PLACEHOLDER: &str = "slug";

/// Derives per-node fields. Holds everything the handlers need.
pub struct Enricher<'a> {
    content: &'a ContentConfig,
    images: &'a ImageStore,
    /// Build instant `isFuture` is measured against.
    now: DateTime<Utc>,
}

impl<'a> Enricher<'a> {
    pub fn new(config: &'a SiteConfig, images: &'a ImageStore, now: DateTime<Utc>) -> Self {
        Self {
            content: &config.content,
            images,
            now,
        }
    }

    /// Run the complete per-node pass and hand the enriched node back.
    pub fn on_create_node(&self, mut node: Node) -> Result<Node, PipelineError> {
        pre_create(&mut node);
        match node.kind {
            NodeKind::BlogPost(_) => self.on_blog_post(&mut node)?,
            NodeKind::Series(_) => self.on_series(&mut node)?,
            NodeKind::Tag(_) => on_tag(&mut node),
        }
        post_create(&mut node);
        Ok(node)
    }

    fn on_blog_post(&self, node: &mut Node) -> Result<(), PipelineError> {
        node.description.get_or_insert_with(String::new);

        let slug = node.slug.clone().unwrap_or_default();
        let prefix = &self.content.blog_prefix;
        node.path = Some(match &node.date_info {
            Some(info) => format!("{prefix}{}{slug}", info.path),
            None => format!("{prefix}/{slug}"),
        });

        let key = node
            .title
            .clone()
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| slug.clone());
        ensure_image(node, &key, self.images)?;

        let is_future = node.date.is_some_and(|date| date > self.now);
        let series = series_from_origin(&node.internal.origin, &self.content.series_marker);
        if let Some(post) = node.blog_post_mut() {
            post.is_future = is_future;
            if series.is_some() {
                post.series = series;
            }
        }
        Ok(())
    }

    fn on_series(&self, node: &mut Node) -> Result<(), PipelineError> {
        if let Some(stem) = Path::new(&node.internal.origin).file_stem() {
            node.id = stem.to_string_lossy().into_owned();
        }

        let key = node.id.clone();
        ensure_image(node, &key, self.images)?;

        if let Some(series) = node.series_mut() {
            series.has_posts = false;
            series.last_post = Some(DateTime::<Utc>::UNIX_EPOCH);
        }
        Ok(())
    }
}

/// Provisional count; the aggregation pass writes the real one.
fn on_tag(node: &mut Node) {
    if let Some(tag) = node.tag_mut() {
        tag.count = 1;
    }
}

/// Type-agnostic pre-pass: `dateInfo` from `date`, slug from title, name or id.
pub fn pre_create(node: &mut Node) {
    if let Some(date) = node.date {
        node.date_info = Some(DateInfo::new(date));
    }

    if node.slug.as_deref().is_none_or(str::is_empty) {
        let slug = first_slug([
            node.title.as_deref(),
            node.name.as_deref(),
            Some(node.id.as_str()),
        ])
        .unwrap_or_else(|| fallback_slug(&node.id));
        node.slug = Some(slug);
    }
}

/// Post-pass: substitute every whole `slug` path segment with the real slug.
///
/// Only complete segments match, so `/blog/slugs-and-snails` is left alone.
pub fn post_create(node: &mut Node) {
    if let (Some(path), Some(slug)) = (&node.path, &node.slug) {
        let resolved = path
            .split('/')
            .enumerate()
            .map(|(i, segment)| if i > 0 && segment == SLUG_PLACEHOLDER { slug.as_str() } else { segment })
            .collect::<Vec<_>>()
            .join("/");
        node.path = Some(resolved);
    }
}

/// Series id encoded in a post's origin path, e.g. `blog/$series-backend/post.md` → `backend`.
///
/// Segments are split on `/`, `\` and `|`; the first one starting with `marker`
/// wins, with the marker and one optional leading `-` removed.
pub fn series_from_origin(origin: &str, marker: &str) -> Option<String> {
    origin
        .split(['/', '\\', '|'])
        .find_map(|segment| segment.strip_prefix(marker))
        .map(|rest| rest.strip_prefix('-').unwrap_or(rest).to_owned())
}
