// src/models/ong.rs
use super::{deserialize_some, patch};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `ongs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ong {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cnpj: String,
    pub telephone: Option<String>,
    #[serde(rename = "foundationData")]
    pub foundation_data: NaiveDate,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateOngPayload {
    pub name: String,
    pub email: String,
    pub cnpj: String,
    pub telephone: Option<String>,
    #[serde(rename = "foundationData")]
    pub foundation_data: NaiveDate,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateOngPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cnpj: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub telephone: Option<Option<String>>,
    #[serde(rename = "foundationData")]
    pub foundation_data: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub address: Option<Option<String>>,
}

impl Ong {
    pub fn apply(&mut self, changes: UpdateOngPayload) {
        patch(&mut self.name, changes.name);
        patch(&mut self.email, changes.email);
        patch(&mut self.cnpj, changes.cnpj);
        patch(&mut self.telephone, changes.telephone);
        patch(&mut self.foundation_data, changes.foundation_data);
        patch(&mut self.address, changes.address);
    }
}
