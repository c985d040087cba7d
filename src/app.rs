//! Command dispatcher: guard check, view lifecycle, rendered screen

use std::sync::Arc;

use crate::{
    api::{ApiClient, ReqwestTransport},
    cli::{Command, USAGE},
    config::AppConfig,
    guard::{Access, Route, RouteGuard},
    models::User,
    repository::{FileSessionRepository, SessionRepository},
    services::Services,
    views::{
        books::{AuthorForm, CategoryForm},
        members::MemberForm,
        navbar, BooksView, DashboardView, LoansView, LoginView, MembersView, View,
    },
};

/// Text to print and whether the command went through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    fn failed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

#[derive(Clone)]
pub struct App {
    services: Services,
    guard: RouteGuard,
}

impl App {
    pub fn new(services: Services, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            services,
            guard: RouteGuard::new(sessions),
        }
    }

    /// Wire the HTTP transport and the file session store from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let transport = ReqwestTransport::new(config.api.base_url.clone());
        let sessions: Arc<dyn SessionRepository> =
            Arc::new(FileSessionRepository::new(config.session_dir()));
        let services = Services::new(ApiClient::new(Arc::new(transport)), sessions.clone());
        Self::new(services, sessions)
    }

    pub async fn execute(&self, command: Command) -> Outcome {
        match command {
            Command::Help => Outcome::ok(USAGE),
            Command::Health => match self.services.health.check().await {
                Ok(health) => Outcome::ok(format!("API status: {}", health.status)),
                Err(e) => Outcome::failed(format!("API unreachable: {}", e.display_message())),
            },
            Command::Login { login, password } => self.login(login, password).await,
            Command::Logout => {
                let route = navbar::logout(&self.services.auth);
                let view = self.view_for(route, None);
                let mut outcome = screen(None, view.as_ref());
                outcome.output = format!("Logged out.\n{}", outcome.output);
                outcome
            }
            command => {
                let route = command.route().unwrap_or(Route::Dashboard);
                match self.guard.authorize(route) {
                    Access::Redirect(to) => {
                        let view = LoginView::new(self.services.auth.clone());
                        let mut outcome = screen(None, &view);
                        outcome.output = format!(
                            "Not logged in, redirected to {}. Run `library-admin login` first.\n{}",
                            to, outcome.output
                        );
                        outcome.success = false;
                        outcome
                    }
                    Access::Render { user, .. } => self.run(command, user).await,
                }
            }
        }
    }

    async fn login(&self, login: Option<String>, password: Option<String>) -> Outcome {
        let mut view = LoginView::new(self.services.auth.clone());
        if let Some(login) = login {
            view.form.login = login;
        }
        if let Some(password) = password {
            view.form.password = password;
        }
        match view.submit().await {
            Some(next) => {
                let user = self.services.auth.current_user();
                let mut page = self.view_for(next, user.clone());
                page.mount().await;
                screen(user.as_ref(), page.as_ref())
            }
            None => screen(None, &view),
        }
    }

    fn view_for(&self, route: Route, user: Option<User>) -> Box<dyn View> {
        match route {
            Route::Login => Box::new(LoginView::new(self.services.auth.clone())),
            Route::Dashboard => Box::new(DashboardView::new(user)),
            Route::Members => Box::new(MembersView::new(self.services.users.clone())),
            Route::Books => Box::new(BooksView::new(self.services.catalog.clone())),
            Route::Loans => Box::new(LoansView::new(self.services.clone())),
        }
    }

    /// Mount the command's view, apply its action, render the result
    async fn run(&self, command: Command, user: Option<User>) -> Outcome {
        match command {
            Command::AddMember {
                nom,
                prenom,
                email,
                date_adhesion,
            } => {
                let mut view = MembersView::new(self.services.users.clone());
                view.mount().await;
                view.form = MemberForm {
                    nom,
                    prenom,
                    email,
                    date_adhesion,
                };
                view.create_member().await;
                screen(user.as_ref(), &view)
            }
            Command::AddCategory { nom, champ } => {
                let mut view = BooksView::new(self.services.catalog.clone());
                view.mount().await;
                view.category_form = CategoryForm { nom_cat: nom, champ };
                view.create_category().await;
                screen(user.as_ref(), &view)
            }
            Command::AddAuthor { nom, prenom } => {
                let mut view = BooksView::new(self.services.catalog.clone());
                view.mount().await;
                view.author_form = AuthorForm { nom, prenom };
                view.create_author().await;
                screen(user.as_ref(), &view)
            }
            Command::AddBook {
                titre,
                isbn,
                quantite,
                category,
                author,
            } => {
                let mut view = BooksView::new(self.services.catalog.clone());
                view.mount().await;
                view.book_form.titre = titre;
                view.book_form.isbn = isbn;
                view.book_form.quantite = quantite;
                if category.is_some() {
                    view.book_form.category = category;
                }
                if author.is_some() {
                    view.book_form.author = author;
                }
                view.create_book().await;
                screen(user.as_ref(), &view)
            }
            Command::Borrow { book, member, date } => {
                let mut view = LoansView::new(self.services.clone());
                view.mount().await;
                view.form.book = Some(book);
                view.form.member = Some(member);
                if let Some(date) = date {
                    view.form.date_emprunt = date;
                }
                view.create_loan().await;
                screen(user.as_ref(), &view)
            }
            Command::Return { loan, date } => {
                let mut view = LoansView::new(self.services.clone());
                view.mount().await;
                match date {
                    Some(date) => view.return_loan_on(loan, date).await,
                    None => view.return_loan(loan).await,
                }
                screen(user.as_ref(), &view)
            }
            other => {
                let route = other.route().unwrap_or(Route::Dashboard);
                let mut view = self.view_for(route, user.clone());
                view.mount().await;
                screen(user.as_ref(), view.as_ref())
            }
        }
    }
}

/// Navigation bar plus the view; a view error marks the outcome as failed
fn screen(user: Option<&User>, view: &dyn View) -> Outcome {
    let output = format!("{}\n\n{}", navbar::render(user, view.route()), view.render());
    if view.state().error().is_some() {
        Outcome::failed(output)
    } else {
        Outcome::ok(output)
    }
}
