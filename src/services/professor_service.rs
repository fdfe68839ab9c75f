// src/services/professor_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
    services::{
        bind_demographics,
        reference_service::{self, Table},
    },
};
use sqlx::SqlitePool;

pub async fn find_all_professors(db_pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    let professors = sqlx::query_as::<_, Professor>("SELECT * FROM professors ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} professores.", professors.len());
    Ok(professors)
}

pub async fn get_professor(db_pool: &SqlitePool, id: i64) -> AppResult<Professor> {
    sqlx::query_as::<_, Professor>("SELECT * FROM professors WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Professor não encontrado.".to_string()))
}

pub async fn create_professor(
    db_pool: &SqlitePool,
    payload: CreateProfessorPayload,
) -> AppResult<Professor> {
    reference_service::ensure_references(
        db_pool,
        &[
            ("ong_id", Table::Ongs, payload.ong_id),
            ("user_id", Table::Users, payload.user_id),
        ],
    )
    .await?;

    let query = sqlx::query_as::<_, Professor>(
        r#"
        INSERT INTO professors (
            name, gender, civil_state, race, birthday, rg, cpf, telephone,
            state, city, address, ong_id, user_id
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        RETURNING *
        "#,
    )
    .bind(&payload.name);
    let professor = bind_demographics(query, &payload.demographics)
        .bind(payload.ong_id)
        .bind(payload.user_id)
        .fetch_one(db_pool)
        .await?;

    tracing::info!("✅ Professor {} criado (ONG {}).", professor.id, professor.ong_id);
    Ok(professor)
}

pub async fn update_professor(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateProfessorPayload,
) -> AppResult<Professor> {
    let mut professor = get_professor(db_pool, id).await?;
    professor.apply(changes);
    reference_service::ensure_references(
        db_pool,
        &[
            ("ong_id", Table::Ongs, professor.ong_id),
            ("user_id", Table::Users, professor.user_id),
        ],
    )
    .await?;

    let query = sqlx::query_as::<_, Professor>(
        r#"
        UPDATE professors
        SET name = ?1, gender = ?2, civil_state = ?3, race = ?4, birthday = ?5,
            rg = ?6, cpf = ?7, telephone = ?8, state = ?9, city = ?10, address = ?11,
            ong_id = ?12, user_id = ?13, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?14
        RETURNING *
        "#,
    )
    .bind(&professor.name);
    let updated = bind_demographics(query, &professor.demographics)
        .bind(professor.ong_id)
        .bind(professor.user_id)
        .bind(id)
        .fetch_one(db_pool)
        .await?;
    Ok(updated)
}

pub async fn delete_professor(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_professor(db_pool, id).await?;
    sqlx::query("DELETE FROM professors WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O professor"))?;
    Ok(())
}
