//! Catalog service: categories, authors and books

use crate::{
    api::ApiClient,
    error::AppResult,
    models::{
        book::{
            Author, Book, BookQuery, Category, CreateAuthor, CreateBook, CreateCategory,
            UpdateAuthor, UpdateBook, UpdateCategory,
        },
        StatusResponse,
    },
};

#[derive(Clone)]
pub struct CatalogService {
    api: ApiClient,
}

impl CatalogService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List categories, newest first
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.api.get("/api/books/categories").await
    }

    pub async fn create_category(&self, data: &CreateCategory) -> AppResult<Category> {
        self.api.post("/api/books/categories", data).await
    }

    pub async fn update_category(&self, id: i64, data: &UpdateCategory) -> AppResult<Category> {
        self.api.put(&format!("/api/books/categories/{}", id), data).await
    }

    pub async fn delete_category(&self, id: i64) -> AppResult<StatusResponse> {
        self.api.delete(&format!("/api/books/categories/{}", id)).await
    }

    /// List authors, newest first
    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.api.get("/api/books/authors").await
    }

    pub async fn create_author(&self, data: &CreateAuthor) -> AppResult<Author> {
        self.api.post("/api/books/authors", data).await
    }

    pub async fn update_author(&self, id: i64, data: &UpdateAuthor) -> AppResult<Author> {
        self.api.put(&format!("/api/books/authors/{}", id), data).await
    }

    pub async fn delete_author(&self, id: i64) -> AppResult<StatusResponse> {
        self.api.delete(&format!("/api/books/authors/{}", id)).await
    }

    /// List all books, newest first
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.search_books(&BookQuery::default()).await
    }

    /// List books filtered by category and/or a search term
    pub async fn search_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.api
            .get_with_query("/api/books/books", query.pairs())
            .await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.api.get(&format!("/api/books/books/{}", id)).await
    }

    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        self.api.post("/api/books/books", data).await
    }

    pub async fn update_book(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        self.api.put(&format!("/api/books/books/{}", id), data).await
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<StatusResponse> {
        self.api.delete(&format!("/api/books/books/{}", id)).await
    }
}
