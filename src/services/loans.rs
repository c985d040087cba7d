//! Loan management service

use chrono::NaiveDate;

use crate::{
    api::ApiClient,
    error::AppResult,
    models::loan::{CreateLoan, Loan, ReturnLoan, UpdateLoan},
};

#[derive(Clone)]
pub struct LoansService {
    api: ApiClient,
}

impl LoansService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List all loans, oldest first
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        self.api.get("/api/loans/").await
    }

    /// Create a new loan (borrow a book). The server decrements the stock.
    pub async fn create(&self, data: &CreateLoan) -> AppResult<Loan> {
        self.api.post("/api/loans/", data).await
    }

    /// Record the return of a borrowed book
    pub async fn return_loan(&self, id: i64, date_retour: NaiveDate) -> AppResult<Loan> {
        self.api
            .post(&format!("/api/loans/{}/return", id), &ReturnLoan { date_retour })
            .await
    }

    /// Update a loan. Stock is not adjusted by the server.
    pub async fn update(&self, id: i64, data: &UpdateLoan) -> AppResult<Loan> {
        self.api.put(&format!("/api/loans/{}", id), data).await
    }
}
