//! Members, profiles (roles) and user accounts

use crate::{
    api::ApiClient,
    error::AppResult,
    models::{
        member::{CreateMember, Member, UpdateMember},
        user::{CreateAccount, CreateProfile, Profile, UpdateAccount, UpdateProfile, User},
        StatusResponse,
    },
};

#[derive(Clone)]
pub struct UsersService {
    api: ApiClient,
}

impl UsersService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List members, newest first
    pub async fn list_members(&self) -> AppResult<Vec<Member>> {
        self.api.get("/api/users/members").await
    }

    pub async fn get_member(&self, id: i64) -> AppResult<Member> {
        self.api.get(&format!("/api/users/members/{}", id)).await
    }

    pub async fn create_member(&self, data: &CreateMember) -> AppResult<Member> {
        self.api.post("/api/users/members", data).await
    }

    pub async fn update_member(&self, id: i64, data: &UpdateMember) -> AppResult<Member> {
        self.api.put(&format!("/api/users/members/{}", id), data).await
    }

    pub async fn delete_member(&self, id: i64) -> AppResult<StatusResponse> {
        self.api.delete(&format!("/api/users/members/{}", id)).await
    }

    /// List profiles (roles)
    pub async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        self.api.get("/api/users/profils").await
    }

    pub async fn create_profile(&self, data: &CreateProfile) -> AppResult<Profile> {
        self.api.post("/api/users/profils", data).await
    }

    pub async fn update_profile(&self, id: i64, data: &UpdateProfile) -> AppResult<Profile> {
        self.api.put(&format!("/api/users/profils/{}", id), data).await
    }

    pub async fn delete_profile(&self, id: i64) -> AppResult<StatusResponse> {
        self.api.delete(&format!("/api/users/profils/{}", id)).await
    }

    /// List user accounts
    pub async fn list_accounts(&self) -> AppResult<Vec<User>> {
        self.api.get("/api/users/accounts").await
    }

    pub async fn create_account(&self, data: &CreateAccount) -> AppResult<User> {
        self.api.post("/api/users/accounts", data).await
    }

    pub async fn update_account(&self, id: i64, data: &UpdateAccount) -> AppResult<User> {
        self.api.put(&format!("/api/users/accounts/{}", id), data).await
    }

    pub async fn delete_account(&self, id: i64) -> AppResult<StatusResponse> {
        self.api.delete(&format!("/api/users/accounts/{}", id)).await
    }
}
