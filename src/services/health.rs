//! API health check

use crate::{api::ApiClient, error::AppResult, models::StatusResponse};

#[derive(Clone)]
pub struct HealthService {
    api: ApiClient,
}

impl HealthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Ask the API whether it is up
    pub async fn check(&self) -> AppResult<StatusResponse> {
        self.api.get("/api/health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTransport;
    use reqwest::Method;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_check_reads_status() {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|method, path, _, body| {
                *method == Method::GET && path == "/api/health" && body.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| Ok(json!({ "status": "ok" })));

        let service = HealthService::new(ApiClient::new(Arc::new(mock)));
        assert_eq!(service.check().await.unwrap().status, "ok");
    }
}
