//! Data models for the book catalog.
//!
//! This module defines the two record types:
//!
//! - [`Author`]: a writer, related to zero or more books
//! - [`Book`]: a title, attributed to exactly one author via `author_id`
//!
//! Records are plain data. Relationships are never stored; they are derived
//! by id lookup at query time, so a `Book.author_id` with no matching author
//! is representable (and resolves to nothing rather than failing).

mod author;
mod book;

pub use author::Author;
pub use book::Book;
