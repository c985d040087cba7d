//! HTTP client wrapper for the library REST API
//!
//! [`Transport`] performs one raw call against the configured base URL;
//! [`ApiClient`] adds the typed decode of response bodies. Errors travel
//! back to the caller unchanged: no retry, no timeout override, no mapping.

pub mod client;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub use client::ReqwestTransport;

/// Query string parameters, encoded by the transport
pub type QueryPairs = Vec<(String, String)>;

/// One HTTP exchange with the API: method, path relative to the base URL,
/// query parameters and optional JSON body in, decoded JSON body out.
///
/// An empty success body is returned as `Value::Null`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: QueryPairs,
        body: Option<Value>,
    ) -> AppResult<Value>;
}

/// Typed front over a [`Transport`]
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.call(Method::GET, path, Vec::new(), None).await
    }

    /// GET with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryPairs,
    ) -> AppResult<T> {
        self.call(Method::GET, path, query, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.call(Method::POST, path, Vec::new(), Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.call(Method::PUT, path, Vec::new(), Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.call(Method::DELETE, path, Vec::new(), None).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: QueryPairs,
        body: Option<Value>,
    ) -> AppResult<T> {
        let value = self.transport.send(method, path, query, body).await?;
        serde_json::from_value(value).map_err(|source| AppError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use reqwest::StatusCode;
    use serde_json::json;

    fn client(mock: MockTransport) -> ApiClient {
        ApiClient::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_get_decodes_body() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|method, path, _, body| {
                *method == Method::GET && path == "/api/books/categories" && body.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(json!([{ "id_cat": 1, "nom_cat": "Informatique", "champ": "Tech" }]))
            });

        let categories: Vec<Category> = client(mock).get("/api/books/categories").await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].nom_cat.as_deref(), Some("Informatique"));
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|method, path, _, body| {
                *method == Method::POST
                    && path == "/api/books/authors"
                    && body.as_ref() == Some(&json!({ "nom_auteur": "Martin", "prenom_auteur": "Robert" }))
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(json!({ "id_auteur": 4, "nom_auteur": "Martin", "prenom_auteur": "Robert" }))
            });

        let body = json!({ "nom_auteur": "Martin", "prenom_auteur": "Robert" });
        let created: Value = client(mock).post("/api/books/authors", &body).await.unwrap();
        assert_eq!(created["id_auteur"], 4);
    }

    #[tokio::test]
    async fn test_http_error_propagates_unchanged() {
        let mut mock = MockTransport::new();
        mock.expect_send().times(1).returning(|_, _, _, _| {
            Err(AppError::Http {
                status: StatusCode::NOT_FOUND,
                body: Some(json!({ "error": "Book not found" })),
            })
        });

        let err = client(mock)
            .delete::<Value>("/api/books/books/9")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.display_message(), "Book not found");
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_a_decode_error() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_, _, _, _| Ok(json!({ "unexpected": true })));

        let err = client(mock)
            .get::<Vec<Category>>("/api/books/categories")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode { ref path, .. } if path == "/api/books/categories"));
    }
}
