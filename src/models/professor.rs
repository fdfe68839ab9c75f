// src/models/professor.rs
use super::{
    demographics::{Demographics, DemographicsChanges},
    patch,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Professor {
    pub id: i64,
    pub name: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub demographics: Demographics,
    pub ong_id: i64,
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Resumo embutido nas listagens de professores de uma aula.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessorSummary {
    pub id: i64,
    pub name: String,
    pub telephone: Option<String>,
    pub ong_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProfessorPayload {
    pub name: String,
    #[serde(flatten)]
    pub demographics: Demographics,
    pub ong_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfessorPayload {
    pub name: Option<String>,
    #[serde(flatten)]
    pub demographics: DemographicsChanges,
    pub ong_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl Professor {
    pub fn apply(&mut self, changes: UpdateProfessorPayload) {
        patch(&mut self.name, changes.name);
        self.demographics.apply(changes.demographics);
        patch(&mut self.ong_id, changes.ong_id);
        patch(&mut self.user_id, changes.user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_demographics_round_trip_through_payloads() {
        let payload: CreateProfessorPayload = serde_json::from_str(
            r#"{"name": "Carlos", "cpf": "123", "birthday": "1990-01-01", "ong_id": 1, "user_id": 2}"#,
        )
        .unwrap();
        assert_eq!(payload.demographics.cpf.as_deref(), Some("123"));
        assert_eq!(payload.demographics.gender, None);

        let now = chrono::Utc::now().naive_utc();
        let mut row = Professor {
            id: 1,
            name: payload.name,
            demographics: payload.demographics,
            ong_id: payload.ong_id,
            user_id: payload.user_id,
            created_at: now,
            updated_at: now,
        };

        let changes: UpdateProfessorPayload =
            serde_json::from_str(r#"{"cpf": null, "city": "Recife"}"#).unwrap();
        row.apply(changes);

        assert_eq!(row.demographics.cpf, None);
        assert_eq!(row.demographics.city.as_deref(), Some("Recife"));
        assert!(row.demographics.birthday.is_some());

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["city"], "Recife");
        assert_eq!(json["name"], "Carlos");
    }
}
