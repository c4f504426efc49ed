//! File-based document store for snapfeed.
//!
//! Each collection is a directory of JSON documents, one file per document,
//! named by a generated document id:
//!
//! ```text
//! .snapfeed/
//!   posts/
//!     k3j9x2m1q8w7e6r5t4y0.json
//!   users/
//!     a1s2d3f4g5h6j7k8l9z0.json
//! ```
//!
//! Queries are full scans with equality filters applied by the typed
//! repositories. There is no locking and no optimistic-concurrency check:
//! concurrent read-modify-write of the same document can lose one writer's
//! update, matching the semantics of the upstream system.
//!
//! ## Components
//!
//! - [`Collection`]: generic JSON document collection (add, replace, scan)
//! - [`PostRepository`]: post queries keyed by author
//! - [`UserRepository`]: user lookup, listing, and document replacement

mod collection;
mod posts;
mod users;

pub use collection::Collection;
pub use posts::PostRepository;
pub use users::UserRepository;
