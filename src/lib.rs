//! # Bookshelf - an in-memory GraphQL book catalog
//!
//! Bookshelf serves a small relational catalog of authors and books over a
//! single GraphQL endpoint. Everything lives in process memory: the store is
//! two ordered record sequences, mutations append to them, and all data is
//! gone on restart. That makes it handy for API prototyping, GraphQL client
//! testing, and demos.
//!
//! ## Features
//!
//! - **Queries**: look up a book or author by id, or list all of either
//! - **Mutations**: `addBook` and `addAuthor`, with ids assigned by the store
//! - **Derived relationships**: `Book.author` and `Author.books` are resolved
//!   by id lookup at query time, never denormalized
//! - **GraphiQL**: interactive explorer served on GET at the endpoint
//! - **Seed files**: pre-populate the catalog from JSON
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the built-in sample catalog on port 4000
//! bookshelf serve --sample
//!
//! # Run a query without a server
//! bookshelf query '{ authors { name books { name } } }' --sample
//!
//! # Add a record
//! bookshelf mutate 'addBook(name: "Dune", authorId: 1) { id }' --sample
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: command-line interface definitions
//! - [`config`]: server settings
//! - [`error`]: error types and result aliases
//! - [`graphql`]: schema, resolvers, and the HTTP transport
//! - [`model`]: the `Author` and `Book` records
//! - [`storage`]: the in-memory store and seed-file loading
//! - [`validation`]: record validation at the seed boundary

/// Command-line interface definitions using clap.
pub mod cli;

/// Server settings (host, port, endpoint path, GraphiQL toggle).
pub mod config;

/// Error types and result aliases.
///
/// Defines the `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers, and the HTTP transport.
pub mod graphql;

/// Data models: `Author` and `Book`.
pub mod model;

/// In-memory storage layer.
///
/// The `Library` store plus JSON seed-file loading.
pub mod storage;

pub mod logging;

/// Record validation used when ingesting seed files.
pub mod validation;
