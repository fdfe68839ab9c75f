// src/models/instance_class.rs
use super::{deserialize_some, patch};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Uma ocorrência concreta (data/estado) de uma turma recorrente.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstanceClass {
    pub id: i64,
    pub id_classes: i64,
    pub date: Option<NaiveDate>,
    pub status: Option<i64>,
    pub observation: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateInstanceClassPayload {
    pub id_classes: i64,
    pub date: Option<NaiveDate>,
    pub status: Option<i64>,
    pub observation: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInstanceClassPayload {
    pub id_classes: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub status: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub observation: Option<Option<String>>,
}

impl InstanceClass {
    pub fn apply(&mut self, changes: UpdateInstanceClassPayload) {
        patch(&mut self.id_classes, changes.id_classes);
        patch(&mut self.date, changes.date);
        patch(&mut self.status, changes.status);
        patch(&mut self.observation, changes.observation);
    }
}
