//! Content graph: node types, the file-system source and the collection store.
//!
//! # Layout
//!
//! ```text
//! content/
//! ├── blog/
//! │   ├── hello-world.md              BlogPost
//! │   └── $series-backend/
//! │       └── connection-pools.md     BlogPost in series `backend`
//! ├── series/
//! │   └── backend.md                  Series `backend`
//! └── tags/
//!     └── rust.md                     Tag `rust`
//! ```

pub mod front_matter;
mod node;
pub mod source;
mod store;

pub use node::{BlogPost, Image, Node, NodeKind, NodeType, Series, Tag};
pub use source::load_content;
pub use store::{Collection, ContentStore};
