//! Loans page: borrow and return books

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use super::table::{cell, Table};
use super::{render_header, View, ViewState};
use crate::guard::Route;
use crate::models::{loan::CreateLoan, Book, Loan, Member};
use crate::services::Services;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanForm {
    pub book: Option<i64>,
    pub member: Option<i64>,
    pub date_emprunt: NaiveDate,
}

impl Default for LoanForm {
    fn default() -> Self {
        Self {
            book: None,
            member: None,
            date_emprunt: today(),
        }
    }
}

/// Today's date in UTC, the calendar the API stores loan dates in
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub struct LoansView {
    services: Services,
    books: Vec<Book>,
    members: Vec<Member>,
    loans: Vec<Loan>,
    pub form: LoanForm,
    state: ViewState,
}

impl LoansView {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            books: Vec::new(),
            members: Vec::new(),
            loans: Vec::new(),
            form: LoanForm::default(),
            state: ViewState::default(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Fetch books, members and loans together
    pub async fn load_all(&mut self) {
        self.state.begin();
        let fetched = tokio::try_join!(
            self.services.catalog.list_books(),
            self.services.users.list_members(),
            self.services.loans.list(),
        );
        match fetched {
            Ok((books, members, loans)) => {
                self.books = books;
                self.members = members;
                self.loans = loans;

                if self.form.book.is_none() {
                    self.form.book = self.books.first().map(|b| b.id_livre);
                }
                if self.form.member.is_none() {
                    self.form.member = self.members.first().map(|m| m.id_mbre);
                }
                self.state.loaded();
            }
            Err(e) => self.state.fail("Loading loans", &e),
        }
    }

    /// Lend the selected book to the selected member
    pub async fn create_loan(&mut self) {
        self.state.begin();
        let request = CreateLoan {
            // No selection goes out as id 0, which the server rejects
            livre_id: self.form.book.unwrap_or_default(),
            membre_id: self.form.member.unwrap_or_default(),
            date_emprunt: self.form.date_emprunt,
        };
        match self.services.loans.create(&request).await {
            Ok(loan) => {
                tracing::info!("Loan {} created", loan.id_emprunt);
                self.load_all().await;
            }
            Err(e) => self.state.fail("Creating loan", &e),
        }
    }

    /// Record the return of loan `id` today (UTC)
    pub async fn return_loan(&mut self, id: i64) {
        self.return_loan_on(id, today()).await;
    }

    pub async fn return_loan_on(&mut self, id: i64, date_retour: NaiveDate) {
        self.state.begin();
        match self.services.loans.return_loan(id, date_retour).await {
            Ok(_) => {
                tracing::info!("Loan {} returned", id);
                self.load_all().await;
            }
            Err(e) => self.state.fail("Returning loan", &e),
        }
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new(
            &["ID", "Book", "Member", "Date", "Returned", "Action"],
            "No loans found.",
        );
        for l in &self.loans {
            let book = match &l.livre {
                Some(livre) => format!("{} (#{})", cell(livre.titre.as_deref()), livre.id_livre),
                None => format!("#{}", cell(l.livre_id)),
            };
            let member = match &l.membre {
                Some(membre) => membre.full_name(),
                None => format!("#{}", cell(l.membre_id)),
            };
            let action = if l.is_open() { "Return" } else { "Done" };
            table.push(vec![
                l.id_emprunt.to_string(),
                book,
                member,
                cell(l.date_emprunt),
                cell(l.date_retour),
                action.to_string(),
            ]);
        }
        table
    }
}

#[async_trait]
impl View for LoansView {
    fn route(&self) -> Route {
        Route::Loans
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    async fn mount(&mut self) {
        self.load_all().await;
    }

    fn render(&self) -> String {
        let mut out = render_header("Loans", &self.state);
        out.push_str("Loans list\n");
        out.push_str(&self.table().render());
        out
    }
}
