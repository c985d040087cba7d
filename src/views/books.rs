//! Books page: categories, authors and the catalog

use async_trait::async_trait;

use super::table::{cell, Table};
use super::{render_header, View, ViewState};
use crate::guard::Route;
use crate::models::book::{Author, Book, Category, CreateAuthor, CreateBook, CreateCategory};
use crate::services::catalog::CatalogService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    pub nom_cat: String,
    pub champ: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            nom_cat: "Informatique".to_string(),
            champ: "Tech".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorForm {
    pub nom: String,
    pub prenom: String,
}

impl Default for AuthorForm {
    fn default() -> Self {
        Self {
            nom: "Martin".to_string(),
            prenom: "Robert".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookForm {
    pub titre: String,
    pub isbn: String,
    pub quantite: i64,
    pub category: Option<i64>,
    pub author: Option<i64>,
}

impl Default for BookForm {
    fn default() -> Self {
        Self {
            titre: "Clean Code".to_string(),
            isbn: "9780132350884".to_string(),
            quantite: 3,
            category: None,
            author: None,
        }
    }
}

pub struct BooksView {
    catalog: CatalogService,
    categories: Vec<Category>,
    authors: Vec<Author>,
    books: Vec<Book>,
    pub category_form: CategoryForm,
    pub author_form: AuthorForm,
    pub book_form: BookForm,
    state: ViewState,
}

impl BooksView {
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog,
            categories: Vec::new(),
            authors: Vec::new(),
            books: Vec::new(),
            category_form: CategoryForm::default(),
            author_form: AuthorForm::default(),
            book_form: BookForm::default(),
            state: ViewState::default(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Fetch categories, authors and books together
    pub async fn load_all(&mut self) {
        self.state.begin();
        let fetched = tokio::try_join!(
            self.catalog.list_categories(),
            self.catalog.list_authors(),
            self.catalog.list_books(),
        );
        match fetched {
            Ok((categories, authors, books)) => {
                self.categories = categories;
                self.authors = authors;
                self.books = books;

                if self.book_form.category.is_none() {
                    self.book_form.category = self.categories.first().map(|c| c.id_cat);
                }
                if self.book_form.author.is_none() {
                    self.book_form.author = self.authors.first().map(|a| a.id_auteur);
                }
                self.state.loaded();
            }
            Err(e) => self.state.fail("Loading catalog", &e),
        }
    }

    pub async fn create_category(&mut self) {
        self.state.begin();
        let request = CreateCategory {
            nom_cat: self.category_form.nom_cat.clone(),
            champ: self.category_form.champ.clone(),
        };
        match self.catalog.create_category(&request).await {
            Ok(_) => {
                self.category_form.nom_cat.clear();
                self.category_form.champ.clear();
                self.load_all().await;
            }
            Err(e) => self.state.fail("Creating category", &e),
        }
    }

    pub async fn create_author(&mut self) {
        self.state.begin();
        let request = CreateAuthor {
            nom_auteur: self.author_form.nom.clone(),
            prenom_auteur: self.author_form.prenom.clone(),
        };
        match self.catalog.create_author(&request).await {
            Ok(_) => {
                self.author_form.nom.clear();
                self.author_form.prenom.clear();
                self.load_all().await;
            }
            Err(e) => self.state.fail("Creating author", &e),
        }
    }

    /// Create a book in the selected category, credited to the selected author
    pub async fn create_book(&mut self) {
        self.state.begin();
        let form = &self.book_form;
        let request = CreateBook {
            titre: form.titre.clone(),
            isbn: form.isbn.clone(),
            quantite: form.quantite,
            // No selection goes out as id 0, which the server rejects
            cat_id: form.category.unwrap_or_default(),
            auteur_ids: form.author.into_iter().collect(),
        };
        match self.catalog.create_book(&request).await {
            Ok(_) => {
                self.book_form.titre.clear();
                self.book_form.isbn.clear();
                self.book_form.quantite = 1;
                self.load_all().await;
            }
            Err(e) => self.state.fail("Creating book", &e),
        }
    }

    pub fn catalog_table(&self) -> Table {
        let mut table = Table::new(
            &["ID", "Title", "ISBN", "Qty", "Category", "Authors"],
            "No books found.",
        );
        for b in &self.books {
            table.push(vec![
                b.id_livre.to_string(),
                cell(b.titre.as_deref()),
                cell(b.isbn.as_deref()),
                cell(b.quantite),
                cell(b.categorie.as_ref().and_then(|c| c.nom_cat.as_deref())),
                cell(Some(b.author_names())),
            ]);
        }
        table
    }

    pub fn categories_table(&self) -> Table {
        let mut table = Table::new(&["ID", "Nom", "Champ"], "No categories found.");
        for c in &self.categories {
            table.push(vec![
                c.id_cat.to_string(),
                cell(c.nom_cat.as_deref()),
                cell(c.champ.as_deref()),
            ]);
        }
        table
    }

    pub fn authors_table(&self) -> Table {
        let mut table = Table::new(&["ID", "Nom", "Prénom"], "No authors found.");
        for a in &self.authors {
            table.push(vec![
                a.id_auteur.to_string(),
                cell(a.nom_auteur.as_deref()),
                cell(a.prenom_auteur.as_deref()),
            ]);
        }
        table
    }
}

#[async_trait]
impl View for BooksView {
    fn route(&self) -> Route {
        Route::Books
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    async fn mount(&mut self) {
        self.load_all().await;
    }

    fn render(&self) -> String {
        let mut out = render_header("Books", &self.state);
        out.push_str("Categories\n");
        out.push_str(&self.categories_table().render());
        out.push_str("\nAuthors\n");
        out.push_str(&self.authors_table().render());
        out.push_str("\nCatalog\n");
        out.push_str(&self.catalog_table().render());
        out
    }
}
