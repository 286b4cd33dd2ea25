//! In-memory storage layer for the catalog.
//!
//! Nothing is persisted: the whole "backend" is two ordered record
//! sequences owned by a [`Library`], and every record is gone when the
//! process exits. Mutations are append-only; there is no update or delete.
//!
//! ## Components
//!
//! - [`Library`]: the record store; lookups, ordered snapshots, appends
//! - [`SeedData`]: JSON seed-file loading for initial records

mod library;
mod seed;

pub use library::Library;
pub use seed::SeedData;
