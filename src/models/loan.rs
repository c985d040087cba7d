//! Loan (emprunt) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::book::BookShort;
use super::member::Member;

/// Loan with its book and member embedded when the server resolved them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id_emprunt: i64,
    #[serde(default)]
    pub livre_id: Option<i64>,
    #[serde(default)]
    pub membre_id: Option<i64>,
    #[serde(default)]
    pub date_emprunt: Option<NaiveDate>,
    #[serde(default)]
    pub date_retour: Option<NaiveDate>,
    #[serde(default)]
    pub livre: Option<BookShort>,
    #[serde(default)]
    pub membre: Option<Member>,
}

impl Loan {
    /// A loan is open until a return date is recorded
    pub fn is_open(&self) -> bool {
        self.date_retour.is_none()
    }
}

/// Create loan request (borrow a book)
#[derive(Debug, Clone, Serialize)]
pub struct CreateLoan {
    pub livre_id: i64,
    pub membre_id: i64,
    pub date_emprunt: NaiveDate,
}

/// Return loan request
#[derive(Debug, Clone, Serialize)]
pub struct ReturnLoan {
    pub date_retour: NaiveDate,
}

/// Update loan request (only present fields are changed)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateLoan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livre_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membre_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_emprunt: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_retour: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loan_decodes_with_and_without_embeds() {
        let loans: Vec<Loan> = serde_json::from_value(json!([
            {
                "id_emprunt": 1,
                "livre_id": 3,
                "membre_id": 2,
                "date_emprunt": "2026-02-13",
                "date_retour": null,
                "livre": { "id_livre": 3, "titre": "Clean Code", "isbn": "9780132350884" },
                "membre": { "id_mbre": 2, "nom_mbre": "Doe", "prenom_mbre": "Jane", "email_mbre": "jane@example.org" }
            },
            {
                "id_emprunt": 2,
                "livre_id": 4,
                "membre_id": 2,
                "date_emprunt": "2026-01-02",
                "date_retour": "2026-01-20",
                "livre": null,
                "membre": null
            }
        ]))
        .unwrap();

        assert!(loans[0].is_open());
        assert_eq!(loans[0].membre.as_ref().map(Member::full_name).as_deref(), Some("Doe Jane"));
        assert!(!loans[1].is_open());
        assert_eq!(loans[1].date_retour, NaiveDate::from_ymd_opt(2026, 1, 20));
    }

    #[test]
    fn test_create_loan_wire_format() {
        let request = CreateLoan {
            livre_id: 1,
            membre_id: 2,
            date_emprunt: NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "livre_id": 1, "membre_id": 2, "date_emprunt": "2026-02-13" })
        );
    }
}
