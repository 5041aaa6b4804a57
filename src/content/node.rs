//! Content node types.
//!
//! Every node shares the fields read by the type-agnostic passes (slug, path,
//! dates, image) and carries its kind-specific data in [`NodeKind`].

use crate::utils::date::DateInfo;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Discriminator of the closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NodeType {
    BlogPost,
    Series,
    Tag,
}

impl NodeType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::BlogPost => "BlogPost",
            Self::Series => "Series",
            Self::Tag => "Tag",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bookkeeping set by the content source.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Internal {
    pub type_name: NodeType,
    /// Source file path the node was read from.
    pub origin: String,
    /// Creation time (source file modification time).
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Referenced tag ids, in front-matter order.
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub is_future: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub has_posts: bool,
    pub last_post: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeKind {
    BlogPost(BlogPost),
    Series(Series),
    Tag(Tag),
}

impl NodeKind {
    pub const fn node_type(&self) -> NodeType {
        match self {
            Self::BlogPost(_) => NodeType::BlogPost,
            Self::Series(_) => NodeType::Series,
            Self::Tag(_) => NodeType::Tag,
        }
    }
}

/// A unit of content in the site graph.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_info: Option<DateInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Markdown body following the front matter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub internal: Internal,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// Create a bare node; every optional field starts empty.
    pub fn new(
        id: impl Into<String>,
        origin: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: NodeKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: None,
            name: None,
            slug: None,
            path: None,
            description: None,
            date: None,
            date_info: None,
            image: None,
            content: String::new(),
            internal: Internal {
                type_name: kind.node_type(),
                origin: origin.into(),
                timestamp,
            },
            kind,
        }
    }

    pub const fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn blog_post(&self) -> Option<&BlogPost> {
        match &self.kind {
            NodeKind::BlogPost(post) => Some(post),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn series(&self) -> Option<&Series> {
        match &self.kind {
            NodeKind::Series(series) => Some(series),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn tag(&self) -> Option<&Tag> {
        match &self.kind {
            NodeKind::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn blog_post_mut(&mut self) -> Option<&mut BlogPost> {
        match &mut self.kind {
            NodeKind::BlogPost(post) => Some(post),
            _ => None,
        }
    }

    pub fn series_mut(&mut self) -> Option<&mut Series> {
        match &mut self.kind {
            NodeKind::Series(series) => Some(series),
            _ => None,
        }
    }

    pub fn tag_mut(&mut self) -> Option<&mut Tag> {
        match &mut self.kind {
            NodeKind::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}
