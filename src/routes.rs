//! Page route planning.
//!
//! Declares one page per published blog post plus the static listing pages,
//! and writes the declarations to `routes.json` for the front end.
//!
//! # Output Format
//!
//! ```json
//! [
//!   {
//!     "path": "/blog/2024/03/05/hello-world",
//!     "component": "blog/Post",
//!     "context": {},
//!     "queryVariables": { "id": "hello", "prev": null, "next": "second" }
//!   },
//!   { "path": "/series/", "component": "series/Summary", "context": {} }
//! ]
//! ```

use crate::{content::Collection, image::ImageStore, log};
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::{fs, path::Path};

// ============================================================================
// Constants
// ============================================================================

const ROUTES_FILE: &str = "routes.json";

const POST_COMPONENT: &str = "blog/Post";

/// Listing pages that exist regardless of content.
const STATIC_PAGES: &[(&str, &str)] = &[
    ("/series/", "series/Summary"),
    ("/blog/", "blog/List"),
    ("/tags/", "tags/List"),
];

// ============================================================================
// Types
// ============================================================================

/// A single page declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRoute {
    pub path: String,
    pub component: &'static str,
    pub context: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_variables: Option<PostVariables>,
}

/// Query variables of a post page: the post and its published neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostVariables {
    pub id: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl PageRoute {
    fn listing(path: &str, component: &'static str) -> Self {
        Self {
            path: path.to_owned(),
            component,
            context: Map::new(),
            query_variables: None,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Plan every page of the site from the enriched blog posts.
///
/// Future posts get no page and are skipped when linking neighbours.
pub fn plan_routes(posts: &Collection) -> Vec<PageRoute> {
    let mut published: Vec<_> = posts
        .data()
        .iter()
        .filter(|node| node.blog_post().is_some_and(|post| !post.is_future))
        .collect();
    published.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

    let mut routes = Vec::with_capacity(published.len() + STATIC_PAGES.len());
    for (i, node) in published.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| published[j].id.clone());
        let next = published.get(i + 1).map(|n| n.id.clone());

        routes.push(PageRoute {
            path: node.path.clone().unwrap_or_default(),
            component: POST_COMPONENT,
            context: Map::new(),
            query_variables: Some(PostVariables {
                id: node.id.clone(),
                prev,
                next,
            }),
        });
    }

    routes.extend(
        STATIC_PAGES
            .iter()
            .map(|&(path, component)| PageRoute::listing(path, component)),
    );
    routes
}

/// Generate the placeholder image of every route, keyed by route path.
///
/// Returns the number of images processed.
pub fn pregenerate_images(routes: &[PageRoute], images: &ImageStore) -> Result<usize> {
    for route in routes {
        images
            .save(&route.path)
            .with_context(|| format!("Failed to generate image for {}", route.path))?;
    }
    Ok(routes.len())
}

/// Write `routes.json` into the output directory.
pub fn write_routes(routes: &[PageRoute], output: &Path) -> Result<()> {
    let path = output.join(ROUTES_FILE);
    let json = serde_json::to_string_pretty(routes).context("Failed to serialize routes")?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    fs::write(&path, json).with_context(|| format!("Failed to write routes to {}", path.display()))?;

    log!("routes"; "{} pages -> {ROUTES_FILE}", routes.len());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{BlogPost, Node, NodeKind, NodeType};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn post(id: &str, day: u32, is_future: bool) -> Node {
        let date = Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap();
        let mut node = Node::new(
            id,
            format!("content/blog/{id}.md"),
            date,
            NodeKind::BlogPost(BlogPost {
                is_future,
                ..BlogPost::default()
            }),
        );
        node.date = Some(date);
        node.path = Some(format!("/blog/2024/03/{day:02}/{id}"));
        node
    }

    fn posts(nodes: Vec<Node>) -> Collection {
        let mut collection = Collection::new(NodeType::BlogPost);
        for node in nodes {
            collection.insert(node).unwrap();
        }
        collection
    }

    #[test]
    fn test_posts_sorted_with_neighbours() {
        let routes = plan_routes(&posts(vec![post("c", 9, false), post("a", 1, false), post("b", 5, false)]));

        let vars: Vec<_> = routes.iter().filter_map(|r| r.query_variables.as_ref()).collect();
        assert_eq!(vars.len(), 3);
        assert_eq!(vars[0].id, "a");
        assert_eq!(vars[0].prev, None);
        assert_eq!(vars[0].next.as_deref(), Some("b"));
        assert_eq!(vars[1].prev.as_deref(), Some("a"));
        assert_eq!(vars[1].next.as_deref(), Some("c"));
        assert_eq!(vars[2].next, None);
        assert_eq!(routes[0].path, "/blog/2024/03/01/a");
        assert_eq!(routes[0].component, "blog/Post");
    }

    #[test]
    fn test_future_posts_excluded() {
        let routes = plan_routes(&posts(vec![post("a", 1, false), post("later", 2, true), post("b", 3, false)]));

        let vars: Vec<_> = routes.iter().filter_map(|r| r.query_variables.as_ref()).collect();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].next.as_deref(), Some("b"));
        assert!(routes.iter().all(|r| !r.path.ends_with("/later")));
    }

    #[test]
    fn test_static_pages_always_present() {
        let routes = plan_routes(&Collection::new(NodeType::BlogPost));
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/series/", "/blog/", "/tags/"]);
        assert!(routes.iter().all(|r| r.query_variables.is_none()));
    }

    #[test]
    fn test_route_json_shape() {
        let routes = plan_routes(&posts(vec![post("a", 1, false)]));
        let json = serde_json::to_value(&routes).unwrap();

        assert_eq!(json[0]["queryVariables"]["id"], "a");
        assert!(json[0]["queryVariables"]["prev"].is_null());
        assert_eq!(json[0]["context"], serde_json::json!({}));
        assert!(json[1].get("queryVariables").is_none());
    }

    #[test]
    fn test_write_routes() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("public");
        let routes = plan_routes(&posts(vec![post("a", 1, false)]));

        write_routes(&routes, &output).unwrap();

        let text = fs::read_to_string(output.join(ROUTES_FILE)).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_pregenerate_images_per_route() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.image.width = 60;
        config.image.height = 30;
        config.image.cell_size = 30;
        let images = ImageStore::new(&config);

        let routes = plan_routes(&posts(vec![post("a", 1, false)]));
        assert_eq!(pregenerate_images(&routes, &images).unwrap(), 4);
        assert_eq!(images.written(), 4);
    }
}
