// src/models/gf.rs
use super::patch;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gf {
    pub id: i64,
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateGfPayload {
    pub name: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateGfPayload {
    pub name: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
}

impl Gf {
    pub fn apply(&mut self, changes: UpdateGfPayload) {
        patch(&mut self.name, changes.name);
        patch(&mut self.user_id, changes.user_id);
    }
}
