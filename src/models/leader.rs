// src/models/leader.rs
use super::{deserialize_some, patch};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Leader {
    pub id: i64,
    pub name: String,
    pub telephone: Option<String>,
    pub ong_id: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateLeaderPayload {
    pub name: String,
    pub telephone: Option<String>,
    pub ong_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLeaderPayload {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub telephone: Option<Option<String>>,
    pub ong_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl Leader {
    pub fn apply(&mut self, changes: UpdateLeaderPayload) {
        patch(&mut self.name, changes.name);
        patch(&mut self.telephone, changes.telephone);
        patch(&mut self.ong_id, changes.ong_id);
        patch(&mut self.user_id, changes.user_id);
    }
}
