// src/models/professor_class.rs
use super::{patch, professor::ProfessorSummary};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Professor alocado a uma ocorrência de aula.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfessorClass {
    pub id: i64,
    pub professor_id: i64,
    pub instance_classes_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Linha da associação com o resumo do professor embutido.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessorClassWithProfessor {
    #[serde(flatten)]
    pub assignment: ProfessorClass,
    pub professor: ProfessorSummary,
}

/// Corpo do POST /instance-classes/{id}/professors (a instância vem na rota).
#[derive(Debug, Deserialize)]
pub struct AddProfessorPayload {
    pub professor_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProfessorClassPayload {
    pub professor_id: i64,
    pub instance_classes_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfessorClassPayload {
    pub professor_id: Option<i64>,
    pub instance_classes_id: Option<i64>,
}

impl ProfessorClass {
    pub fn apply(&mut self, changes: UpdateProfessorClassPayload) {
        patch(&mut self.professor_id, changes.professor_id);
        patch(&mut self.instance_classes_id, changes.instance_classes_id);
    }
}
