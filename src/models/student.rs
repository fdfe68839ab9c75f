// src/models/student.rs
use super::{deserialize_some, patch};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: i64,
    pub race: i64,
    pub birthday: NaiveDate,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub telephone: Option<String>,
    pub state: i64,
    pub city: String,
    pub address: String,
    pub status: i64,
    pub civil_state: i64,
    pub ong_id: i64,
    pub responsable_id: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentPayload {
    pub name: String,
    pub email: String,
    pub gender: i64,
    pub race: i64,
    pub birthday: NaiveDate,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub telephone: Option<String>,
    pub state: i64,
    pub city: String,
    pub address: String,
    pub status: i64,
    pub civil_state: i64,
    pub ong_id: i64,
    pub responsable_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<i64>,
    pub race: Option<i64>,
    pub birthday: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub rg: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub cpf: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub telephone: Option<Option<String>>,
    pub state: Option<i64>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub status: Option<i64>,
    pub civil_state: Option<i64>,
    pub ong_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub responsable_id: Option<Option<i64>>,
}

impl Student {
    pub fn apply(&mut self, changes: UpdateStudentPayload) {
        patch(&mut self.name, changes.name);
        patch(&mut self.email, changes.email);
        patch(&mut self.gender, changes.gender);
        patch(&mut self.race, changes.race);
        patch(&mut self.birthday, changes.birthday);
        patch(&mut self.rg, changes.rg);
        patch(&mut self.cpf, changes.cpf);
        patch(&mut self.telephone, changes.telephone);
        patch(&mut self.state, changes.state);
        patch(&mut self.city, changes.city);
        patch(&mut self.address, changes.address);
        patch(&mut self.status, changes.status);
        patch(&mut self.civil_state, changes.civil_state);
        patch(&mut self.ong_id, changes.ong_id);
        patch(&mut self.responsable_id, changes.responsable_id);
    }
}
