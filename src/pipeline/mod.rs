//! Content enrichment passes.
//!
//! ```text
//! load_content() ──► Enricher::on_create_node() ──► ContentStore ──► aggregate()
//!                    (one node at a time)                            (all collections)
//! ```

mod aggregate;
mod enrich;
mod error;

pub use aggregate::{AggregateSummary, aggregate};
pub use enrich::Enricher;
pub use error::PipelineError;
