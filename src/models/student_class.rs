// src/models/student_class.rs
use super::patch;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Matrícula: associação aluno ↔ turma.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentClass {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentClassPayload {
    pub student_id: i64,
    pub class_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentClassPayload {
    pub student_id: Option<i64>,
    pub class_id: Option<i64>,
}

impl StudentClass {
    pub fn apply(&mut self, changes: UpdateStudentClassPayload) {
        patch(&mut self.student_id, changes.student_id);
        patch(&mut self.class_id, changes.class_id);
    }
}
