// src/services/professor_class_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::{
        professor::ProfessorSummary,
        professor_class::{
            CreateProfessorClassPayload, ProfessorClass, ProfessorClassWithProfessor,
            UpdateProfessorClassPayload,
        },
    },
    services::{
        instance_class_service,
        reference_service::{self, Table},
    },
};
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

// Linha do JOIN professor_classes ⋈ professors
#[derive(Debug, FromRow)]
struct AssignmentRow {
    id: i64,
    professor_id: i64,
    instance_classes_id: i64,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    professor_name: String,
    professor_telephone: Option<String>,
    professor_ong_id: i64,
}

impl From<AssignmentRow> for ProfessorClassWithProfessor {
    fn from(row: AssignmentRow) -> Self {
        Self {
            assignment: ProfessorClass {
                id: row.id,
                professor_id: row.professor_id,
                instance_classes_id: row.instance_classes_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            professor: ProfessorSummary {
                id: row.professor_id,
                name: row.professor_name,
                telephone: row.professor_telephone,
                ong_id: row.professor_ong_id,
            },
        }
    }
}

pub async fn find_all_professor_classes(db_pool: &SqlitePool) -> AppResult<Vec<ProfessorClass>> {
    let rows = sqlx::query_as::<_, ProfessorClass>("SELECT * FROM professor_classes ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    Ok(rows)
}

pub async fn get_professor_class(db_pool: &SqlitePool, id: i64) -> AppResult<ProfessorClass> {
    sqlx::query_as::<_, ProfessorClass>("SELECT * FROM professor_classes WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Professor não encontrado nesta instância de aula.".to_string())
        })
}

/// Professores de uma instância de aula, com o resumo de cada professor.
pub async fn list_professors_for_instance(
    db_pool: &SqlitePool,
    instance_classes_id: i64,
) -> AppResult<Vec<ProfessorClassWithProfessor>> {
    instance_class_service::get_instance_class(db_pool, instance_classes_id).await?;

    let rows = sqlx::query_as::<_, AssignmentRow>(
        r#"
        SELECT
            pc.id,
            pc.professor_id,
            pc.instance_classes_id,
            pc.created_at,
            pc.updated_at,
            p.name AS professor_name,
            p.telephone AS professor_telephone,
            p.ong_id AS professor_ong_id
        FROM professor_classes pc
        JOIN professors p ON p.id = pc.professor_id
        WHERE pc.instance_classes_id = ?1
        ORDER BY pc.id ASC
        "#,
    )
    .bind(instance_classes_id)
    .fetch_all(db_pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn create_professor_class(
    db_pool: &SqlitePool,
    payload: CreateProfessorClassPayload,
) -> AppResult<ProfessorClass> {
    reference_service::ensure_references(
        db_pool,
        &[
            ("professor_id", Table::Professors, payload.professor_id),
            ("instance_classes_id", Table::InstanceClasses, payload.instance_classes_id),
        ],
    )
    .await?;

    let row = sqlx::query_as::<_, ProfessorClass>(
        r#"
        INSERT INTO professor_classes (professor_id, instance_classes_id)
        VALUES (?1, ?2)
        RETURNING *
        "#,
    )
    .bind(payload.professor_id)
    .bind(payload.instance_classes_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!(
        "✅ Professor {} alocado à instância {}.",
        row.professor_id,
        row.instance_classes_id
    );
    Ok(row)
}

pub async fn update_professor_class(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateProfessorClassPayload,
) -> AppResult<ProfessorClass> {
    let mut row = get_professor_class(db_pool, id).await?;
    row.apply(changes);
    reference_service::ensure_references(
        db_pool,
        &[
            ("professor_id", Table::Professors, row.professor_id),
            ("instance_classes_id", Table::InstanceClasses, row.instance_classes_id),
        ],
    )
    .await?;

    let row = sqlx::query_as::<_, ProfessorClass>(
        r#"
        UPDATE professor_classes
        SET professor_id = ?1, instance_classes_id = ?2, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?3
        RETURNING *
        "#,
    )
    .bind(row.professor_id)
    .bind(row.instance_classes_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(row)
}

pub async fn delete_professor_class(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_professor_class(db_pool, id).await?;
    sqlx::query("DELETE FROM professor_classes WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "A alocação do professor"))?;
    Ok(())
}
