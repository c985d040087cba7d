//! Members page

use async_trait::async_trait;
use chrono::NaiveDate;

use super::table::{cell, Table};
use super::{render_header, View, ViewState};
use crate::guard::Route;
use crate::models::member::{CreateMember, Member};
use crate::services::users::UsersService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_adhesion: Option<NaiveDate>,
}

pub struct MembersView {
    users: UsersService,
    members: Vec<Member>,
    pub form: MemberForm,
    state: ViewState,
}

impl MembersView {
    pub fn new(users: UsersService) -> Self {
        Self {
            users,
            members: Vec::new(),
            form: MemberForm::default(),
            state: ViewState::default(),
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub async fn load(&mut self) {
        self.state.begin();
        match self.users.list_members().await {
            Ok(members) => {
                self.members = members;
                self.state.loaded();
            }
            Err(e) => self.state.fail("Loading members", &e),
        }
    }

    /// Register the member described by the form
    pub async fn create_member(&mut self) {
        self.state.begin();
        let request = CreateMember {
            nom_mbre: self.form.nom.clone(),
            prenom_mbre: self.form.prenom.clone(),
            email_mbre: self.form.email.clone(),
            date_adhesion: self.form.date_adhesion,
        };
        match self.users.create_member(&request).await {
            Ok(_) => {
                self.form = MemberForm::default();
                self.load().await;
            }
            Err(e) => self.state.fail("Creating member", &e),
        }
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new(
            &["ID", "Nom", "Prénom", "Email", "Adhésion"],
            "No members found.",
        );
        for m in &self.members {
            table.push(vec![
                m.id_mbre.to_string(),
                cell(m.nom_mbre.as_deref()),
                cell(m.prenom_mbre.as_deref()),
                cell(m.email_mbre.as_deref()),
                cell(m.date_adhesion),
            ]);
        }
        table
    }
}

#[async_trait]
impl View for MembersView {
    fn route(&self) -> Route {
        Route::Members
    }

    fn state(&self) -> &ViewState {
        &self.state
    }

    async fn mount(&mut self) {
        self.load().await;
    }

    fn render(&self) -> String {
        let mut out = render_header("Members", &self.state);
        out.push_str("Registered members\n");
        out.push_str(&self.table().render());
        out
    }
}
