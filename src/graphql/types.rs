use async_graphql::{ComplexObject, Context, SimpleObject};

use crate::model;

use super::schema::library;

/// A writer in the catalog.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// All books attributed to this author, in catalog order.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        library(ctx)
            .books_by_author(self.id)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<model::Author> for Author {
    fn from(author: model::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

/// A title in the catalog.
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book is attributed to, or null when `authorId` does
    /// not match any author.
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        library(ctx).author(self.author_id).map(Into::into)
    }
}

impl From<model::Book> for Book {
    fn from(book: model::Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author_id: book.author_id,
        }
    }
}
