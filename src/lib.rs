//! # Snapfeed - a GraphQL API backend for a small social feed
//!
//! Snapfeed exposes social posts, users, and follow relationships over a
//! single GraphQL endpoint. Persistence is a flat-file document store: each
//! collection is a directory of JSON documents with generated ids, queried
//! by full scans with equality filters.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port
//! snapfeed
//!
//! # Pick a port and data directory explicitly
//! snapfeed --port 8080 --data-dir /var/lib/snapfeed
//! ```
//!
//! Then point a GraphQL client (or the built-in GraphiQL page) at
//! `http://localhost:8080/graphql`.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, and HTTP server
//! - [`model`]: Data models (Post, User, Follower, Mention)
//! - [`store`]: File-based document collections and typed repositories

/// Configuration loading and management.
///
/// Handles the optional `snapfeed.yml` configuration file.
pub mod config;

/// Error types and result aliases.
///
/// Defines `SnapfeedError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and HTTP server.
///
/// Provides the async-graphql schema and the axum transport.
pub mod graphql;

/// Data models for the social feed.
///
/// Includes `Post`, `User`, `Follower`, and `Mention`.
pub mod model;

/// File-based document store.
///
/// Generic JSON collections plus the typed post/user repositories.
pub mod store;

pub mod logging;
