// src/services/gf_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::gf::{CreateGfPayload, Gf, UpdateGfPayload},
    services::reference_service::{self, Table},
};
use sqlx::SqlitePool;

pub async fn find_all_gfs(db_pool: &SqlitePool) -> AppResult<Vec<Gf>> {
    let gfs = sqlx::query_as::<_, Gf>("SELECT * FROM gfs ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} GFs.", gfs.len());
    Ok(gfs)
}

pub async fn get_gf(db_pool: &SqlitePool, id: i64) -> AppResult<Gf> {
    sqlx::query_as::<_, Gf>("SELECT * FROM gfs WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("GF não encontrado.".to_string()))
}

pub async fn create_gf(db_pool: &SqlitePool, payload: CreateGfPayload) -> AppResult<Gf> {
    reference_service::ensure_references(db_pool, &[("userId", Table::Users, payload.user_id)])
        .await?;

    let gf = sqlx::query_as::<_, Gf>(
        "INSERT INTO gfs (name, user_id) VALUES (?1, ?2) RETURNING *",
    )
    .bind(&payload.name)
    .bind(payload.user_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ GF {} criado para user {}.", gf.id, gf.user_id);
    Ok(gf)
}

pub async fn update_gf(db_pool: &SqlitePool, id: i64, changes: UpdateGfPayload) -> AppResult<Gf> {
    let mut gf = get_gf(db_pool, id).await?;
    gf.apply(changes);
    reference_service::ensure_references(db_pool, &[("userId", Table::Users, gf.user_id)]).await?;

    let gf = sqlx::query_as::<_, Gf>(
        r#"
        UPDATE gfs SET name = ?1, user_id = ?2, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?3
        RETURNING *
        "#,
    )
    .bind(&gf.name)
    .bind(gf.user_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(gf)
}

pub async fn delete_gf(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_gf(db_pool, id).await?;
    sqlx::query("DELETE FROM gfs WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O GF"))?;
    Ok(())
}
