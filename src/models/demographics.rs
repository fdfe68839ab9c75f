// src/models/demographics.rs
//! Campos demográficos partilhados por professores e responsáveis.
//! Todos opcionais; os códigos inteiros (género, raça, estado civil, UF)
//! são definidos pelo frontend.
use super::{deserialize_some, patch};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct Demographics {
    pub gender: Option<i64>,
    pub civil_state: Option<i64>,
    pub race: Option<i64>,
    pub birthday: Option<NaiveDate>,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub telephone: Option<String>,
    pub state: Option<i64>,
    pub city: Option<String>,
    pub address: Option<String>,
}

/// Alterações parciais: ausente mantém, `null` limpa.
#[derive(Debug, Default, Deserialize)]
pub struct DemographicsChanges {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub gender: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub civil_state: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub race: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub birthday: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub rg: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub cpf: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub telephone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub state: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub address: Option<Option<String>>,
}

impl Demographics {
    pub fn apply(&mut self, changes: DemographicsChanges) {
        patch(&mut self.gender, changes.gender);
        patch(&mut self.civil_state, changes.civil_state);
        patch(&mut self.race, changes.race);
        patch(&mut self.birthday, changes.birthday);
        patch(&mut self.rg, changes.rg);
        patch(&mut self.cpf, changes.cpf);
        patch(&mut self.telephone, changes.telephone);
        patch(&mut self.state, changes.state);
        patch(&mut self.city, changes.city);
        patch(&mut self.address, changes.address);
    }
}
