// src/services/leader_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::{
        leader::{CreateLeaderPayload, Leader, UpdateLeaderPayload},
        ong::Ong,
    },
    services::{
        ong_service,
        reference_service::{self, Table},
    },
};
use sqlx::SqlitePool;

pub async fn find_all_leaders(db_pool: &SqlitePool) -> AppResult<Vec<Leader>> {
    let leaders = sqlx::query_as::<_, Leader>("SELECT * FROM leaders ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} líderes.", leaders.len());
    Ok(leaders)
}

pub async fn get_leader(db_pool: &SqlitePool, id: i64) -> AppResult<Leader> {
    sqlx::query_as::<_, Leader>("SELECT * FROM leaders WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Líder não encontrado.".to_string()))
}

pub async fn create_leader(db_pool: &SqlitePool, payload: CreateLeaderPayload) -> AppResult<Leader> {
    reference_service::ensure_references(
        db_pool,
        &[
            ("ong_id", Table::Ongs, payload.ong_id),
            ("user_id", Table::Users, payload.user_id),
        ],
    )
    .await?;

    let leader = sqlx::query_as::<_, Leader>(
        r#"
        INSERT INTO leaders (name, telephone, ong_id, user_id)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING *
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.telephone)
    .bind(payload.ong_id)
    .bind(payload.user_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Líder {} criado (ONG {}).", leader.id, leader.ong_id);
    Ok(leader)
}

pub async fn update_leader(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateLeaderPayload,
) -> AppResult<Leader> {
    let mut leader = get_leader(db_pool, id).await?;
    leader.apply(changes);
    reference_service::ensure_references(
        db_pool,
        &[
            ("ong_id", Table::Ongs, leader.ong_id),
            ("user_id", Table::Users, leader.user_id),
        ],
    )
    .await?;

    let leader = sqlx::query_as::<_, Leader>(
        r#"
        UPDATE leaders
        SET name = ?1, telephone = ?2, ong_id = ?3, user_id = ?4,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?5
        RETURNING *
        "#,
    )
    .bind(&leader.name)
    .bind(&leader.telephone)
    .bind(leader.ong_id)
    .bind(leader.user_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(leader)
}

pub async fn delete_leader(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_leader(db_pool, id).await?;
    sqlx::query("DELETE FROM leaders WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O líder"))?;
    Ok(())
}

/// ONG do líder, seguindo `leader.ong_id`. 404 se faltar qualquer um dos dois.
pub async fn find_ong_for_leader(db_pool: &SqlitePool, leader_id: i64) -> AppResult<Ong> {
    let leader = get_leader(db_pool, leader_id).await?;
    match ong_service::find_ong_by_id(db_pool, leader.ong_id).await? {
        Some(ong) => Ok(ong),
        None => {
            tracing::warn!("Líder {} aponta para ONG {} inexistente.", leader_id, leader.ong_id);
            Err(AppError::NotFound("ONG não encontrada para este líder.".to_string()))
        }
    }
}
