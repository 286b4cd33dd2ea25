//! JSON seed files for pre-populating the catalog.
//!
//! A seed file carries the same camelCase record shapes the API serves:
//!
//! ```json
//! {
//!   "authors": [{ "id": 1, "name": "Frank Herbert" }],
//!   "books": [{ "id": 1, "name": "Dune", "authorId": 1 }]
//! }
//! ```
//!
//! Either key may be omitted. Ids must be positive and unique within their
//! sequence; a book's `authorId` may reference a missing author (it will
//! resolve to null, same as one created through the API).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BookshelfError, Result};
use crate::model::{Author, Book};
use crate::validation;

use super::Library;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl SeedData {
    /// Read and validate a seed file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed: SeedData = serde_json::from_str(&content)?;
        seed.validate()?;
        tracing::debug!(
            path = %path.display(),
            authors = seed.authors.len(),
            books = seed.books.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// Build a library from the seed records.
    pub fn into_library(self) -> Library {
        Library::with_records(self.authors, self.books)
    }

    fn validate(&self) -> Result<()> {
        let mut author_ids = HashSet::new();
        for author in &self.authors {
            validation::validate_id(author.id)?;
            validation::validate_name(&author.name)?;
            if !author_ids.insert(author.id) {
                return Err(BookshelfError::Seed(format!(
                    "Duplicate author id: {}",
                    author.id
                )));
            }
        }

        let mut book_ids = HashSet::new();
        for book in &self.books {
            validation::validate_id(book.id)?;
            validation::validate_name(&book.name)?;
            if !book_ids.insert(book.id) {
                return Err(BookshelfError::Seed(format!(
                    "Duplicate book id: {}",
                    book.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_seed(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_seed() {
        let file = write_seed(
            r#"{
                "authors": [{ "id": 1, "name": "Frank Herbert" }],
                "books": [{ "id": 1, "name": "Dune", "authorId": 1 }]
            }"#,
        );

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.authors.len(), 1);
        assert_eq!(seed.books[0].author_id, 1);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let file = write_seed("{}");
        let seed = SeedData::load(file.path()).unwrap();
        assert!(seed.authors.is_empty());
        assert!(seed.books.is_empty());
    }

    #[test]
    fn test_dangling_author_id_is_accepted() {
        let file = write_seed(r#"{ "books": [{ "id": 1, "name": "Orphan", "authorId": 9 }] }"#);
        assert!(SeedData::load(file.path()).is_ok());
    }

    #[test]
    fn test_duplicate_author_id_is_rejected() {
        let file = write_seed(
            r#"{ "authors": [
                { "id": 1, "name": "Frank Herbert" },
                { "id": 1, "name": "Isaac Asimov" }
            ] }"#,
        );

        let err = SeedData::load(file.path()).unwrap_err();
        assert!(matches!(err, BookshelfError::Seed(_)));
    }

    #[test]
    fn test_duplicate_ids_across_sequences_are_fine() {
        let file = write_seed(
            r#"{
                "authors": [{ "id": 1, "name": "Frank Herbert" }],
                "books": [{ "id": 1, "name": "Dune", "authorId": 1 }]
            }"#,
        );
        assert!(SeedData::load(file.path()).is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let file = write_seed(r#"{ "authors": [{ "id": 1, "name": "" }] }"#);
        assert!(matches!(
            SeedData::load(file.path()),
            Err(BookshelfError::Validation(_))
        ));
    }

    #[test]
    fn test_non_positive_id_is_rejected() {
        let file = write_seed(r#"{ "authors": [{ "id": 0, "name": "Frank Herbert" }] }"#);
        assert!(matches!(
            SeedData::load(file.path()),
            Err(BookshelfError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let file = write_seed("{ not json");
        assert!(matches!(
            SeedData::load(file.path()),
            Err(BookshelfError::Json(_))
        ));
    }

    #[test]
    fn test_into_library_resumes_counters() {
        let file = write_seed(
            r#"{
                "authors": [{ "id": 3, "name": "Frank Herbert" }],
                "books": [{ "id": 8, "name": "Dune", "authorId": 3 }]
            }"#,
        );

        let library = SeedData::load(file.path()).unwrap().into_library();
        assert_eq!(library.add_author("Isaac Asimov".to_string()).id, 4);
        assert_eq!(library.add_book("Foundation".to_string(), 4).id, 9);
    }
}
