// src/services/responsable_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::responsable::{CreateResponsablePayload, Responsable, UpdateResponsablePayload},
    services::{
        bind_demographics,
        reference_service::{self, Table},
    },
};
use sqlx::SqlitePool;

pub async fn find_all_responsables(db_pool: &SqlitePool) -> AppResult<Vec<Responsable>> {
    let responsables =
        sqlx::query_as::<_, Responsable>("SELECT * FROM responsables ORDER BY id ASC")
            .fetch_all(db_pool)
            .await?;
    Ok(responsables)
}

pub async fn get_responsable(db_pool: &SqlitePool, id: i64) -> AppResult<Responsable> {
    sqlx::query_as::<_, Responsable>("SELECT * FROM responsables WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Responsável não encontrado.".to_string()))
}

pub async fn create_responsable(
    db_pool: &SqlitePool,
    payload: CreateResponsablePayload,
) -> AppResult<Responsable> {
    reference_service::ensure_references(db_pool, &[("ong_id", Table::Ongs, payload.ong_id)])
        .await?;

    let query = sqlx::query_as::<_, Responsable>(
        r#"
        INSERT INTO responsables (
            name, email, gender, civil_state, race, birthday, rg, cpf, telephone,
            state, city, address, ong_id
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        RETURNING *
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email);
    let responsable = bind_demographics(query, &payload.demographics)
        .bind(payload.ong_id)
        .fetch_one(db_pool)
        .await?;

    tracing::info!("✅ Responsável {} criado.", responsable.id);
    Ok(responsable)
}

pub async fn update_responsable(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateResponsablePayload,
) -> AppResult<Responsable> {
    let mut responsable = get_responsable(db_pool, id).await?;
    responsable.apply(changes);
    reference_service::ensure_references(db_pool, &[("ong_id", Table::Ongs, responsable.ong_id)])
        .await?;

    let query = sqlx::query_as::<_, Responsable>(
        r#"
        UPDATE responsables
        SET name = ?1, email = ?2, gender = ?3, civil_state = ?4, race = ?5,
            birthday = ?6, rg = ?7, cpf = ?8, telephone = ?9, state = ?10,
            city = ?11, address = ?12, ong_id = ?13, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?14
        RETURNING *
        "#,
    )
    .bind(&responsable.name)
    .bind(&responsable.email);
    let updated = bind_demographics(query, &responsable.demographics)
        .bind(responsable.ong_id)
        .bind(id)
        .fetch_one(db_pool)
        .await?;
    Ok(updated)
}

pub async fn delete_responsable(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_responsable(db_pool, id).await?;
    sqlx::query("DELETE FROM responsables WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O responsável"))?;
    Ok(())
}
