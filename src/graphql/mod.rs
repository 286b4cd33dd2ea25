//! GraphQL schema and resolvers for the book catalog.
//!
//! Declares the `Author` and `Book` object shapes, the root query fields,
//! and the root mutation fields; binds each field to a resolver over the
//! in-memory [`Library`](crate::storage::Library). Query parsing,
//! validation, and response shaping come from `async-graphql`.
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server with the built-in sample catalog
//! bookshelf serve --sample
//!
//! # Execute a query from the CLI
//! bookshelf query '{ books { id name author { name } } }' --sample
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addAuthor(name: "Octavia E. Butler") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book(id)`, `books`, `author(id)`, `authors`
//! - **Mutations**: `addBook(name, authorId)`, `addAuthor(name)`
//!
//! Lookups that miss resolve to null; they never raise errors. Missing or
//! mistyped required arguments are rejected by the schema layer before any
//! resolver runs.

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::run_server;
pub use types::*;
