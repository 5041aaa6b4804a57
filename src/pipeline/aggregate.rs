//! Cross-collection pass: series membership and tag counts.

use super::PipelineError;
use crate::content::{Collection, ContentStore, Node};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// What the aggregation pass changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    /// Number of series that contain at least one post.
    pub series_with_posts: usize,
    /// Per-tag post counts, ordered by tag id.
    pub tag_counts: BTreeMap<String, usize>,
    /// Tags no post references; their count is reset to 0.
    pub unreferenced_tags: Vec<String>,
}

/// Update series and tag nodes from the blog posts that reference them.
///
/// Fails on the first tag id (in id order) that has no Tag node. Tag ids are
/// checked before anything is written, so a failed pass leaves the store as it was.
pub fn aggregate(store: &mut ContentStore) -> Result<AggregateSummary, PipelineError> {
    let (posts, series, tags) = store.split_for_aggregation();

    let tag_counts = count_tags(posts);
    if let Some(tag) = tag_counts.keys().find(|tag| tags.get_node_by_id(tag).is_none()) {
        return Err(PipelineError::UnknownTag { tag: tag.clone() });
    }

    let series_with_posts = update_series(posts, series);
    for (tag, &count) in &tag_counts {
        if let Some(data) = tags.get_node_by_id_mut(tag).and_then(Node::tag_mut) {
            data.count = count;
        }
    }

    let mut unreferenced_tags = Vec::new();
    for node in tags.iter_mut() {
        if tag_counts.contains_key(&node.id) {
            continue;
        }
        if let Some(data) = node.tag_mut() {
            data.count = 0;
        }
        unreferenced_tags.push(node.id.clone());
    }

    Ok(AggregateSummary {
        series_with_posts,
        tag_counts,
        unreferenced_tags,
    })
}

/// Set `hasPosts` and `lastPost` on every series; returns how many have posts.
fn update_series(posts: &Collection, series: &mut Collection) -> usize {
    let mut latest: BTreeMap<&str, Option<DateTime<Utc>>> = BTreeMap::new();
    for post in posts.data() {
        let Some(id) = post.blog_post().and_then(|data| data.series.as_deref()) else {
            continue;
        };
        let entry = latest.entry(id).or_default();
        *entry = (*entry).max(post.date);
    }

    let mut with_posts = 0;
    for node in series.iter_mut() {
        let found = latest.get(node.id.as_str()).copied();
        if let Some(data) = node.series_mut() {
            data.has_posts = found.is_some();
            data.last_post = found.flatten();
        }
        if found.is_some() {
            with_posts += 1;
        }
    }
    with_posts
}

/// Occurrences of each tag id across all posts.
fn count_tags(posts: &Collection) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for tag in posts.data().iter().filter_map(|post| post.blog_post()).flat_map(|data| &data.tags) {
        *counts.entry(tag.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, NodeKind, NodeType, Series, Tag};
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
    }

    fn post(id: &str, tags: &[&str], series: Option<&str>, day: u32) -> Node {
        let mut node = Node::new(
            id,
            format!("content/blog/{id}.md"),
            date(1),
            NodeKind::BlogPost(BlogPost {
                tags: tags.iter().map(|t| (*t).to_owned()).collect(),
                series: series.map(str::to_owned),
                is_future: false,
            }),
        );
        node.date = Some(date(day));
        node
    }

    fn tag(id: &str) -> Node {
        Node::new(id, format!("content/tags/{id}.md"), date(1), NodeKind::Tag(Tag { count: 1 }))
    }

    fn series(id: &str) -> Node {
        Node::new(
            id,
            format!("content/series/{id}.md"),
            date(1),
            NodeKind::Series(Series {
                has_posts: false,
                last_post: Some(DateTime::<Utc>::UNIX_EPOCH),
            }),
        )
    }

    fn store(nodes: Vec<Node>) -> ContentStore {
        let mut store = ContentStore::new();
        for node in nodes {
            store.insert(node).unwrap();
        }
        store
    }

    fn tag_count(store: &ContentStore, id: &str) -> usize {
        store
            .get_collection(NodeType::Tag)
            .get_node_by_id(id)
            .and_then(Node::tag)
            .map(|t| t.count)
            .unwrap()
    }

    #[test]
    fn test_tag_counts() {
        let mut store = store(vec![
            tag("go"),
            tag("rust"),
            post("a", &["go", "rust"], None, 1),
            post("b", &["go"], None, 2),
            post("c", &["rust", "go"], None, 3),
        ]);

        let summary = aggregate(&mut store).unwrap();

        assert_eq!(tag_count(&store, "go"), 3);
        assert_eq!(tag_count(&store, "rust"), 2);
        assert_eq!(summary.tag_counts.get("go"), Some(&3));
        assert!(summary.unreferenced_tags.is_empty());
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let mut store = store(vec![tag("go"), post("a", &["go", "zig"], None, 1)]);
        let err = aggregate(&mut store).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownTag { tag } if tag == "zig"));
    }

    #[test]
    fn test_unknown_tag_leaves_store_untouched() {
        let mut store = store(vec![
            series("backend"),
            tag("go"),
            post("a", &["go", "zig"], Some("backend"), 1),
        ]);
        assert!(aggregate(&mut store).is_err());

        assert_eq!(tag_count(&store, "go"), 1);
        let backend = store
            .get_collection(NodeType::Series)
            .get_node_by_id("backend")
            .and_then(Node::series)
            .unwrap();
        assert!(!backend.has_posts);
    }

    #[test]
    fn test_unreferenced_tag_reset_to_zero() {
        let mut store = store(vec![tag("go"), tag("haskell"), post("a", &["go"], None, 1)]);
        let summary = aggregate(&mut store).unwrap();

        assert_eq!(tag_count(&store, "haskell"), 0);
        assert_eq!(summary.unreferenced_tags, vec!["haskell".to_owned()]);
    }

    #[test]
    fn test_series_last_post_is_max_date() {
        let mut store = store(vec![
            series("backend"),
            series("empty"),
            post("a", &[], Some("backend"), 4),
            post("b", &[], Some("backend"), 9),
            post("c", &[], Some("backend"), 2),
            post("d", &[], None, 20),
        ]);

        let summary = aggregate(&mut store).unwrap();
        assert_eq!(summary.series_with_posts, 1);

        let collection = store.get_collection(NodeType::Series);
        let backend = collection.get_node_by_id("backend").and_then(Node::series).unwrap();
        assert!(backend.has_posts);
        assert_eq!(backend.last_post, Some(date(9)));

        let empty = collection.get_node_by_id("empty").and_then(Node::series).unwrap();
        assert!(!empty.has_posts);
        assert_eq!(empty.last_post, None);
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let mut store = store(vec![
            series("backend"),
            tag("go"),
            post("a", &["go"], Some("backend"), 3),
        ]);
        let first = aggregate(&mut store).unwrap();
        let second = aggregate(&mut store).unwrap();
        assert_eq!(first, second);
        assert_eq!(tag_count(&store, "go"), 1);
    }

    #[test]
    fn test_empty_store() {
        let summary = aggregate(&mut ContentStore::new()).unwrap();
        assert_eq!(summary, AggregateSummary::default());
    }
}
