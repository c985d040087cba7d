//! Catalog models: categories, authors and books

use serde::{Deserialize, Serialize};

/// Book category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id_cat: i64,
    #[serde(default)]
    pub nom_cat: Option<String>,
    #[serde(default)]
    pub champ: Option<String>,
}

/// Book author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id_auteur: i64,
    #[serde(default)]
    pub nom_auteur: Option<String>,
    #[serde(default)]
    pub prenom_auteur: Option<String>,
}

impl Author {
    pub fn full_name(&self) -> String {
        super::display_name(&[self.nom_auteur.as_deref(), self.prenom_auteur.as_deref()])
    }
}

/// Book with its category and authors embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id_livre: i64,
    #[serde(default)]
    pub titre: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    /// Copies still available for loan
    #[serde(default)]
    pub quantite: Option<i64>,
    #[serde(default)]
    pub cat_id: Option<i64>,
    #[serde(default)]
    pub categorie: Option<Category>,
    #[serde(default)]
    pub auteurs: Vec<Author>,
}

impl Book {
    /// Comma separated author names
    pub fn author_names(&self) -> String {
        self.auteurs
            .iter()
            .map(Author::full_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Short book description embedded in loans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookShort {
    pub id_livre: i64,
    #[serde(default)]
    pub titre: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
}

/// Book list filters
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    /// Restrict to one category
    pub cat_id: Option<i64>,
    /// Search in title, ISBN and author names
    pub q: Option<String>,
}

impl BookQuery {
    /// Query parameters (`catId`, `q`); a blank search term is left out
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(cat_id) = self.cat_id {
            pairs.push(("catId".to_string(), cat_id.to_string()));
        }
        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("q".to_string(), q.to_string()));
        }
        pairs
    }
}

/// Create category request
#[derive(Debug, Clone, Serialize)]
pub struct CreateCategory {
    pub nom_cat: String,
    pub champ: String,
}

/// Update category request (only present fields are changed)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_cat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champ: Option<String>,
}

/// Create author request
#[derive(Debug, Clone, Serialize)]
pub struct CreateAuthor {
    pub nom_auteur: String,
    pub prenom_auteur: String,
}

/// Update author request (only present fields are changed)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAuthor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_auteur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom_auteur: Option<String>,
}

/// Create book request
#[derive(Debug, Clone, Serialize)]
pub struct CreateBook {
    pub titre: String,
    pub isbn: String,
    pub quantite: i64,
    pub cat_id: i64,
    pub auteur_ids: Vec<i64>,
}

/// Update book request. `auteur_ids`, when present, replaces the author list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantite: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auteur_ids: Option<Vec<i64>>,
}
