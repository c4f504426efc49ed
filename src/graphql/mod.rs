//! GraphQL schema, resolvers, and HTTP server for snapfeed.
//!
//! Exposes the feed over a single `/graphql` endpoint using the standard
//! GraphQL-over-HTTP JSON envelope. `GET /graphql` serves GraphiQL.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server
//! snapfeed --port 8080
//!
//! # Query it
//! curl -s localhost:8080/graphql \
//!   -H 'content-type: application/json' \
//!   -d '{"query": "{ getUserPosts(userId: \"u1\") { description postedTime } }"}'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getUserPosts`, `getFollowersPosts`, `getCurrentUser`,
//!   `getFollowers`, `getSuggestUsers`
//! - **Mutations**: `createPost`, `createUser`, `updateUserProfilePic`,
//!   `addFollower`, `removeFollower`
//!
//! Resolvers distinguish "not found" (a null or empty result) from a store
//! failure (a GraphQL execution error); the two are never conflated.

mod schema;
mod server;
mod types;

pub use schema::{AppState, SnapfeedSchema, build_schema};
pub use server::run_server;
pub use types::*;
