// src/services/student_class_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::{
        student::Student,
        student_class::{CreateStudentClassPayload, StudentClass, UpdateStudentClassPayload},
    },
    services::{
        class_service,
        reference_service::{self, Table},
    },
};
use sqlx::SqlitePool;

pub async fn find_all_student_classes(db_pool: &SqlitePool) -> AppResult<Vec<StudentClass>> {
    let rows = sqlx::query_as::<_, StudentClass>("SELECT * FROM student_classes ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    Ok(rows)
}

pub async fn get_student_class(db_pool: &SqlitePool, id: i64) -> AppResult<StudentClass> {
    sqlx::query_as::<_, StudentClass>("SELECT * FROM student_classes WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Matrícula não encontrada.".to_string()))
}

pub async fn create_student_class(
    db_pool: &SqlitePool,
    payload: CreateStudentClassPayload,
) -> AppResult<StudentClass> {
    reference_service::ensure_references(
        db_pool,
        &[
            ("student_id", Table::Students, payload.student_id),
            ("class_id", Table::Classes, payload.class_id),
        ],
    )
    .await?;

    let row = sqlx::query_as::<_, StudentClass>(
        "INSERT INTO student_classes (student_id, class_id) VALUES (?1, ?2) RETURNING *",
    )
    .bind(payload.student_id)
    .bind(payload.class_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!(
        "✅ Aluno {} matriculado na turma {} (matrícula {}).",
        row.student_id,
        row.class_id,
        row.id
    );
    Ok(row)
}

pub async fn update_student_class(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateStudentClassPayload,
) -> AppResult<StudentClass> {
    let mut row = get_student_class(db_pool, id).await?;
    row.apply(changes);
    reference_service::ensure_references(
        db_pool,
        &[
            ("student_id", Table::Students, row.student_id),
            ("class_id", Table::Classes, row.class_id),
        ],
    )
    .await?;

    let row = sqlx::query_as::<_, StudentClass>(
        r#"
        UPDATE student_classes
        SET student_id = ?1, class_id = ?2, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?3
        RETURNING *
        "#,
    )
    .bind(row.student_id)
    .bind(row.class_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(row)
}

pub async fn delete_student_class(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_student_class(db_pool, id).await?;
    sqlx::query("DELETE FROM student_classes WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "A matrícula"))?;
    Ok(())
}

/// Alunos matriculados numa turma (via `student_classes`). 404 se a turma não existir.
pub async fn list_students_for_class(db_pool: &SqlitePool, class_id: i64) -> AppResult<Vec<Student>> {
    class_service::get_class(db_pool, class_id).await?;

    let students = sqlx::query_as::<_, Student>(
        r#"
        SELECT s.*
        FROM students s
        WHERE s.id IN (SELECT sc.student_id FROM student_classes sc WHERE sc.class_id = ?1)
        ORDER BY s.id ASC
        "#,
    )
    .bind(class_id)
    .fetch_all(db_pool)
    .await?;

    tracing::debug!("Turma {} tem {} alunos.", class_id, students.len());
    Ok(students)
}
