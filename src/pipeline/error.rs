//! Pipeline error types.

use crate::content::NodeType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, enriching or aggregating content.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{path}`")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date `{value}`")]
    InvalidDate { value: String },

    #[error("blog post `{0}` has no date")]
    MissingDate(String),

    #[error("duplicate {type_name} node `{id}`")]
    DuplicateNode { type_name: NodeType, id: String },

    #[error("tag `{tag}` is referenced by a blog post but no such tag exists")]
    UnknownTag { tag: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::UnknownTag { tag: "rust".into() };
        assert!(err.to_string().contains("`rust`"));

        let err = PipelineError::DuplicateNode {
            type_name: NodeType::Series,
            id: "backend".into(),
        };
        assert_eq!(err.to_string(), "duplicate Series node `backend`");

        let err = PipelineError::InvalidDate {
            value: "not-a-date".into(),
        };
        assert!(err.to_string().contains("not-a-date"));
    }
}
