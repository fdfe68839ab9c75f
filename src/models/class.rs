// src/models/class.rs
use super::{deserialize_some, patch};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Turma/oficina recorrente de uma ONG (tabela `classes`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: i64,
    pub local: Option<String>,
    pub workshop: Option<String>,
    pub status: bool,
    pub category: i64,
    pub ong_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn default_status() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CreateClassPayload {
    pub local: Option<String>,
    pub workshop: Option<String>,
    #[serde(default = "default_status")]
    pub status: bool,
    #[serde(default)]
    pub category: i64,
    pub ong_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateClassPayload {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub local: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub workshop: Option<Option<String>>,
    pub status: Option<bool>,
    pub category: Option<i64>,
    pub ong_id: Option<i64>,
}

impl Class {
    pub fn apply(&mut self, changes: UpdateClassPayload) {
        patch(&mut self.local, changes.local);
        patch(&mut self.workshop, changes.workshop);
        patch(&mut self.status, changes.status);
        patch(&mut self.category, changes.category);
        patch(&mut self.ong_id, changes.ong_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_status_and_category() {
        let payload: CreateClassPayload = serde_json::from_str(r#"{"ong_id": 1}"#).unwrap();
        assert!(payload.status);
        assert_eq!(payload.category, 0);
        assert_eq!(payload.workshop, None);
    }
}
