use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::storage::Library;

use super::types::{Author, Book};

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with a shared library handle as context data.
///
/// Every resolver reads or appends through this one handle, so mutations
/// are visible to all subsequent queries against the same schema instance.
pub fn build_schema(library: Arc<Library>) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(crate) fn library<'a>(ctx: &'a Context<'_>) -> &'a Arc<Library> {
    ctx.data_unchecked::<Arc<Library>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by id. Omitting the id yields null, never the
    /// first book.
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        id.and_then(|id| library(ctx).book(id)).map(Into::into)
    }

    /// List all books in insertion order.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        library(ctx).books().into_iter().map(Into::into).collect()
    }

    /// Get a single author by id. Same lookup semantics as `book`.
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        id.and_then(|id| library(ctx).author(id)).map(Into::into)
    }

    /// List all authors in insertion order.
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        library(ctx).authors().into_iter().map(Into::into).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book to the catalog and return it. The author id is recorded
    /// as given, without checking it against existing authors; a dangling
    /// reference resolves the book's `author` field to null.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        #[graphql(validator(min_length = 1))] name: String,
        author_id: i32,
    ) -> Book {
        library(ctx).add_book(name, author_id).into()
    }

    /// Add an author to the catalog and return it.
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        #[graphql(validator(min_length = 1))] name: String,
    ) -> Author {
        library(ctx).add_author(name).into()
    }
}
