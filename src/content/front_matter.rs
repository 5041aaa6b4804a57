//! TOML front matter parsing.
//!
//! ```text
//! +++
//! title = "Hello World"
//! date = 2024-03-05T00:00:00Z
//! tags = ["go", "rust"]
//! +++
//! Body in Markdown.
//! ```

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// `+++` delimited block at the very start of a file, then the body.
static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\+\+\+[ \t]*\r?\n(?:(.*?)\r?\n)?\+\+\+[ \t]*(?:\r?\n|\z)(.*)\z")
        .expect("front matter pattern is valid")
});

/// Recognised front-matter keys.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    /// TOML datetime, TOML date, or a string parsed later.
    pub date: Option<toml::Value>,
    pub tags: Option<Vec<String>>,
    pub series: Option<String>,
    /// Explicit image path; suppresses placeholder generation.
    pub image: Option<String>,
}

/// Split a document into front matter and body.
///
/// Documents without a leading `+++` block have empty front matter.
pub fn parse(text: &str) -> Result<(FrontMatter, &str), toml::de::Error> {
    let Some(caps) = FRONT_MATTER.captures(text) else {
        return Ok((FrontMatter::default(), text));
    };

    let raw = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    Ok((toml::from_str(raw)?, body))
}

/// Render a front-matter date value as text for [`crate::utils::date::parse_date`].
pub fn date_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(text) => text.clone(),
        toml::Value::Datetime(datetime) => datetime.to_string(),
        other => other.to_string(),
    }
}
