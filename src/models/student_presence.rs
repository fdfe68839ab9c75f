// src/models/student_presence.rs
use super::patch;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Presença de um aluno numa ocorrência de aula.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentPresence {
    pub id: i64,
    pub student_id: i64,
    pub instance_class_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentPresencePayload {
    pub student_id: i64,
    pub instance_class_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentPresencePayload {
    pub student_id: Option<i64>,
    pub instance_class_id: Option<i64>,
}

impl StudentPresence {
    pub fn apply(&mut self, changes: UpdateStudentPresencePayload) {
        patch(&mut self.student_id, changes.student_id);
        patch(&mut self.instance_class_id, changes.instance_class_id);
    }
}
