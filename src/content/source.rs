//! File-system content source.
//!
//! Reads `*.md` files from the post, series and tag directories below
//! `[build.content]` and turns each into a raw [`Node`]. Raw nodes still need
//! the per-node pass before they enter the store.

use super::front_matter::{self, FrontMatter};
use super::node::{BlogPost, Image, Node, NodeKind, NodeType, Series, Tag};
use crate::{config::SiteConfig, pipeline::PipelineError, utils::date::parse_date};
use chrono::{DateTime, Utc};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

const CONTENT_EXTENSION: &str = "md";

/// Load every content node: series first, then tags, then blog posts.
///
/// With `[content].create_missing_tags`, a `Tag` node is appended for each
/// tag id a post references without a matching tag file.
pub fn load_content(config: &SiteConfig) -> Result<Vec<Node>, PipelineError> {
    let mut nodes = Vec::new();

    for node_type in [NodeType::Series, NodeType::Tag, NodeType::BlogPost] {
        for path in collect_files(&collection_dir(config, node_type)) {
            nodes.push(read_node(&path, node_type)?);
        }
    }

    if config.content.create_missing_tags {
        let missing = missing_tags(&nodes);
        nodes.extend(missing);
    }

    Ok(nodes)
}

/// Directory holding the files of one collection.
pub fn collection_dir(config: &SiteConfig, node_type: NodeType) -> PathBuf {
    let content = &config.content;
    let dir = match node_type {
        NodeType::BlogPost => &content.posts,
        NodeType::Series => &content.series,
        NodeType::Tag => &content.tags,
    };
    config.build.content.join(dir)
}

/// Content files below `dir`, sorted by path. A missing directory yields nothing.
fn collect_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == CONTENT_EXTENSION))
        .collect()
}

/// Read one content file into a raw node of the given type.
pub fn read_node(path: &Path, node_type: NodeType) -> Result<Node, PipelineError> {
    let text = fs::read_to_string(path).map_err(|err| PipelineError::Io(path.to_path_buf(), err))?;
    let (fm, body) = front_matter::parse(&text).map_err(|source| PipelineError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let origin = path.to_string_lossy().into_owned();
    let timestamp = modified_time(path);
    let date = fm
        .date
        .as_ref()
        .map(|value| parse_date(&front_matter::date_text(value)))
        .transpose()?;

    let kind = match node_type {
        NodeType::BlogPost => {
            if date.is_none() {
                return Err(PipelineError::MissingDate(origin));
            }
            NodeKind::BlogPost(BlogPost {
                tags: fm.tags.clone().unwrap_or_default(),
                series: fm.series.clone(),
                is_future: false,
            })
        }
        NodeType::Series => NodeKind::Series(Series::default()),
        NodeType::Tag => NodeKind::Tag(Tag::default()),
    };

    let id = fm.id.clone().unwrap_or_else(|| file_stem(path));
    let mut node = Node::new(id, origin, timestamp, kind);
    apply_front_matter(&mut node, fm);
    node.date = date;
    node.content = body.to_owned();
    Ok(node)
}

fn apply_front_matter(node: &mut Node, fm: FrontMatter) {
    node.title = fm.title;
    node.name = fm.name;
    node.slug = fm.slug.filter(|slug| !slug.is_empty());
    node.path = fm.path;
    node.description = fm.description;
    node.image = fm.image.map(|path| Image { path });
}

/// Tag nodes for ids referenced by posts that have no tag file.
fn missing_tags(nodes: &[Node]) -> Vec<Node> {
    let mut known: HashSet<&str> = nodes
        .iter()
        .filter(|n| n.node_type() == NodeType::Tag)
        .map(|n| n.id.as_str())
        .collect();

    let mut created = Vec::new();
    for node in nodes {
        let Some(post) = node.blog_post() else {
            continue;
        };
        for tag in &post.tags {
            if known.insert(tag.as_str()) {
                let mut tag_node = Node::new(
                    tag.clone(),
                    node.internal.origin.clone(),
                    node.internal.timestamp,
                    NodeKind::Tag(Tag::default()),
                );
                tag_node.title = Some(tag.clone());
                created.push(tag_node);
            }
        }
    }
    created
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn modified_time(path: &Path) -> DateTime<Utc> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}
