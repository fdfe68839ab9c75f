// src/services/ong_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::ong::{CreateOngPayload, Ong, UpdateOngPayload},
};
use sqlx::SqlitePool;

pub async fn find_all_ongs(db_pool: &SqlitePool) -> AppResult<Vec<Ong>> {
    tracing::debug!("Buscando todas as ONGs...");
    let ongs = sqlx::query_as::<_, Ong>("SELECT * FROM ongs ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontradas {} ONGs.", ongs.len());
    Ok(ongs)
}

pub async fn find_ong_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Ong>> {
    let ong = sqlx::query_as::<_, Ong>("SELECT * FROM ongs WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?;
    Ok(ong)
}

/// Como `find_ong_by_id`, mas a ausência é um 404.
pub async fn get_ong(db_pool: &SqlitePool, id: i64) -> AppResult<Ong> {
    find_ong_by_id(db_pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("ONG não encontrada.".to_string()))
}

pub async fn create_ong(db_pool: &SqlitePool, payload: CreateOngPayload) -> AppResult<Ong> {
    tracing::info!("Criando ONG '{}'", payload.name);
    let ong = sqlx::query_as::<_, Ong>(
        r#"
        INSERT INTO ongs (name, email, cnpj, telephone, foundation_data, address)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING *
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.cnpj)
    .bind(&payload.telephone)
    .bind(payload.foundation_data)
    .bind(&payload.address)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ ONG {} criada.", ong.id);
    Ok(ong)
}

pub async fn update_ong(db_pool: &SqlitePool, id: i64, changes: UpdateOngPayload) -> AppResult<Ong> {
    let mut ong = get_ong(db_pool, id).await?;
    ong.apply(changes);

    let ong = sqlx::query_as::<_, Ong>(
        r#"
        UPDATE ongs
        SET name = ?1, email = ?2, cnpj = ?3, telephone = ?4,
            foundation_data = ?5, address = ?6, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?7
        RETURNING *
        "#,
    )
    .bind(&ong.name)
    .bind(&ong.email)
    .bind(&ong.cnpj)
    .bind(&ong.telephone)
    .bind(ong.foundation_data)
    .bind(&ong.address)
    .bind(id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ ONG {} atualizada.", id);
    Ok(ong)
}

pub async fn delete_ong(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_ong(db_pool, id).await?;
    sqlx::query("DELETE FROM ongs WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "A ONG"))?;
    tracing::info!("ONG {} removida.", id);
    Ok(())
}
