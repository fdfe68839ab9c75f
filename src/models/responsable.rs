// src/models/responsable.rs
use super::{
    demographics::{Demographics, DemographicsChanges},
    patch,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Responsável legal de um ou mais alunos.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Responsable {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub demographics: Demographics,
    pub ong_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateResponsablePayload {
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub demographics: Demographics,
    pub ong_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateResponsablePayload {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub demographics: DemographicsChanges,
    pub ong_id: Option<i64>,
}

impl Responsable {
    pub fn apply(&mut self, changes: UpdateResponsablePayload) {
        patch(&mut self.name, changes.name);
        patch(&mut self.email, changes.email);
        self.demographics.apply(changes.demographics);
        patch(&mut self.ong_id, changes.ong_id);
    }
}
