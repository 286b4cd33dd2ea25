use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Author, Book};

/// The records behind the lock: two ordered sequences plus the id counters.
///
/// Ids come from the counters, never from sequence length, so they stay
/// unique even if records are ever removed.
struct Catalog {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: i32,
    next_book_id: i32,
}

impl Catalog {
    fn empty() -> Self {
        Self {
            authors: Vec::new(),
            books: Vec::new(),
            next_author_id: 1,
            next_book_id: 1,
        }
    }
}

/// The in-memory record store.
///
/// Owns the author and book sequences for the lifetime of the process.
/// Reads hand out snapshots; mutations are append-only and take effect
/// immediately for every holder of the same `Library`. Lookups that miss
/// return `None` rather than an error.
///
/// A single `RwLock` guards the sequences and the id counters together, so
/// "assign id + append" is one atomic step under concurrent requests. The
/// lock is only ever held for the duration of a synchronous read or append.
pub struct Library {
    catalog: RwLock<Catalog>,
}

impl Library {
    /// Create an empty library. Ids start at 1.
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog::empty()),
        }
    }

    /// Create a library pre-populated with the given records, preserving
    /// their order. Id counters resume above the highest seeded id.
    pub fn with_records(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            catalog: RwLock::new(Catalog {
                authors,
                books,
                next_author_id,
                next_book_id,
            }),
        }
    }

    /// A small built-in catalog for demos and tests.
    pub fn sample() -> Self {
        let authors = vec![
            Author::new(1, "Frank Herbert".to_string()),
            Author::new(2, "Ursula K. Le Guin".to_string()),
            Author::new(3, "Isaac Asimov".to_string()),
        ];
        let books = vec![
            Book::new(1, "Dune".to_string(), 1),
            Book::new(2, "Dune Messiah".to_string(), 1),
            Book::new(3, "Children of Dune".to_string(), 1),
            Book::new(4, "A Wizard of Earthsea".to_string(), 2),
            Book::new(5, "The Left Hand of Darkness".to_string(), 2),
            Book::new(6, "The Dispossessed".to_string(), 2),
            Book::new(7, "Foundation".to_string(), 3),
            Book::new(8, "The Caves of Steel".to_string(), 3),
        ];
        Self::with_records(authors, books)
    }

    /// Look up an author by exact id.
    pub fn author(&self, id: i32) -> Option<Author> {
        self.read().authors.iter().find(|a| a.id == id).cloned()
    }

    /// All authors, in insertion order.
    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.clone()
    }

    /// Look up a book by exact id.
    pub fn book(&self, id: i32) -> Option<Book> {
        self.read().books.iter().find(|b| b.id == id).cloned()
    }

    /// All books, in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.read().books.clone()
    }

    /// All books attributed to the given author, preserving book order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn author_count(&self) -> usize {
        self.read().authors.len()
    }

    pub fn book_count(&self) -> usize {
        self.read().books.len()
    }

    /// Append a new author and return it.
    pub fn add_author(&self, name: String) -> Author {
        let mut catalog = self.write();
        let author = Author::new(catalog.next_author_id, name);
        catalog.next_author_id += 1;
        tracing::info!(id = author.id, name = %author.name, "Added author");
        catalog.authors.push(author.clone());
        author
    }

    /// Append a new book and return it. The author id is recorded as given;
    /// it is not required to match an existing author.
    pub fn add_book(&self, name: String, author_id: i32) -> Book {
        let mut catalog = self.write();
        let book = Book::new(catalog.next_book_id, name, author_id);
        catalog.next_book_id += 1;
        tracing::info!(id = book.id, name = %book.name, author_id, "Added book");
        catalog.books.push(book.clone());
        book
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_authors_three_books() -> Library {
        Library::with_records(
            vec![
                Author::new(1, "Frank Herbert".to_string()),
                Author::new(2, "Ursula K. Le Guin".to_string()),
            ],
            vec![
                Book::new(1, "Dune".to_string(), 1),
                Book::new(2, "A Wizard of Earthsea".to_string(), 2),
                Book::new(3, "Dune Messiah".to_string(), 1),
            ],
        )
    }

    #[test]
    fn test_new_library_is_empty() {
        let library = Library::new();
        assert!(library.authors().is_empty());
        assert!(library.books().is_empty());
    }

    #[test]
    fn test_lookup_by_exact_id() {
        let library = two_authors_three_books();
        assert_eq!(library.book(2).unwrap().name, "A Wizard of Earthsea");
        assert_eq!(library.author(1).unwrap().name, "Frank Herbert");
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let library = two_authors_three_books();
        assert!(library.book(99).is_none());
        assert!(library.author(99).is_none());
    }

    #[test]
    fn test_books_preserve_insertion_order() {
        let library = two_authors_three_books();
        let ids: Vec<i32> = library.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_books_by_author_filters_in_order() {
        let library = two_authors_three_books();
        let names: Vec<String> = library
            .books_by_author(1)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Dune", "Dune Messiah"]);
    }

    #[test]
    fn test_books_by_unknown_author_is_empty() {
        let library = two_authors_three_books();
        assert!(library.books_by_author(99).is_empty());
    }

    #[test]
    fn test_add_author_assigns_sequential_ids() {
        let library = Library::new();
        let first = library.add_author("Octavia E. Butler".to_string());
        let second = library.add_author("Isaac Asimov".to_string());
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_add_author_appends_to_author_sequence() {
        let library = two_authors_three_books();
        let created = library.add_author("Octavia E. Butler".to_string());

        let authors = library.authors();
        assert_eq!(authors.len(), 3);
        assert_eq!(authors.last().unwrap(), &created);
    }

    #[test]
    fn test_add_author_leaves_books_untouched() {
        let library = two_authors_three_books();
        library.add_author("Octavia E. Butler".to_string());
        assert_eq!(library.book_count(), 3);
    }

    #[test]
    fn test_add_book_returns_the_appended_record() {
        let library = two_authors_three_books();
        let created = library.add_book("Children of Dune".to_string(), 1);

        assert_eq!(created.id, 4);
        assert_eq!(created.name, "Children of Dune");
        assert_eq!(created.author_id, 1);
        assert_eq!(library.book(4).as_ref(), Some(&created));
        assert_eq!(library.books().last(), Some(&created));
    }

    #[test]
    fn test_add_book_allows_dangling_author_id() {
        let library = Library::new();
        let orphan = library.add_book("Orphan".to_string(), 42);
        assert_eq!(orphan.author_id, 42);
        assert!(library.author(42).is_none());
    }

    #[test]
    fn test_counters_resume_above_seeded_ids() {
        let library = Library::with_records(
            vec![Author::new(7, "Frank Herbert".to_string())],
            vec![Book::new(5, "Dune".to_string(), 7)],
        );
        assert_eq!(library.add_author("Isaac Asimov".to_string()).id, 8);
        assert_eq!(library.add_book("Foundation".to_string(), 8).id, 6);
    }

    #[test]
    fn test_sample_catalog_is_internally_consistent() {
        let library = Library::sample();
        for book in library.books() {
            assert!(
                library.author(book.author_id).is_some(),
                "sample book {} has no author",
                book.name
            );
        }
        assert_eq!(library.add_author("Octavia E. Butler".to_string()).id, 4);
        assert_eq!(library.add_book("Kindred".to_string(), 4).id, 9);
    }
}
