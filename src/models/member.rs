//! Library member model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registered library member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id_mbre: i64,
    #[serde(default)]
    pub nom_mbre: Option<String>,
    #[serde(default)]
    pub prenom_mbre: Option<String>,
    #[serde(default)]
    pub email_mbre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_adhesion: Option<NaiveDate>,
}

impl Member {
    pub fn full_name(&self) -> String {
        super::display_name(&[self.nom_mbre.as_deref(), self.prenom_mbre.as_deref()])
    }
}

/// Create member request
#[derive(Debug, Clone, Serialize)]
pub struct CreateMember {
    pub nom_mbre: String,
    pub prenom_mbre: String,
    pub email_mbre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_adhesion: Option<NaiveDate>,
}

/// Update member request (only present fields are changed)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_mbre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom_mbre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_mbre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_adhesion: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_names_decode() {
        let members: Vec<Member> = serde_json::from_value(json!([
            { "id_mbre": 1, "nom_mbre": null, "prenom_mbre": "Jane", "email_mbre": null },
            { "id_mbre": 2, "nom_mbre": null, "prenom_mbre": null }
        ]))
        .unwrap();

        assert_eq!(members[0].full_name(), "Jane");
        assert_eq!(members[1].full_name(), "-");
    }
}
