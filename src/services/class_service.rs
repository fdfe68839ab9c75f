// src/services/class_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::class::{Class, CreateClassPayload, UpdateClassPayload},
    services::reference_service::{self, Table},
};
use sqlx::SqlitePool;

pub async fn find_all_classes(db_pool: &SqlitePool) -> AppResult<Vec<Class>> {
    let classes = sqlx::query_as::<_, Class>("SELECT * FROM classes ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontradas {} turmas.", classes.len());
    Ok(classes)
}

pub async fn get_class(db_pool: &SqlitePool, id: i64) -> AppResult<Class> {
    sqlx::query_as::<_, Class>("SELECT * FROM classes WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Turma não encontrada.".to_string()))
}

pub async fn create_class(db_pool: &SqlitePool, payload: CreateClassPayload) -> AppResult<Class> {
    reference_service::ensure_references(db_pool, &[("ong_id", Table::Ongs, payload.ong_id)])
        .await?;

    let class = sqlx::query_as::<_, Class>(
        r#"
        INSERT INTO classes (local, workshop, status, category, ong_id)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING *
        "#,
    )
    .bind(&payload.local)
    .bind(&payload.workshop)
    .bind(payload.status)
    .bind(payload.category)
    .bind(payload.ong_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Turma {} criada (ONG {}).", class.id, class.ong_id);
    Ok(class)
}

pub async fn update_class(db_pool: &SqlitePool, id: i64, changes: UpdateClassPayload) -> AppResult<Class> {
    let mut class = get_class(db_pool, id).await?;
    class.apply(changes);
    reference_service::ensure_references(db_pool, &[("ong_id", Table::Ongs, class.ong_id)]).await?;

    let class = sqlx::query_as::<_, Class>(
        r#"
        UPDATE classes
        SET local = ?1, workshop = ?2, status = ?3, category = ?4, ong_id = ?5,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?6
        RETURNING *
        "#,
    )
    .bind(&class.local)
    .bind(&class.workshop)
    .bind(class.status)
    .bind(class.category)
    .bind(class.ong_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(class)
}

pub async fn delete_class(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_class(db_pool, id).await?;
    sqlx::query("DELETE FROM classes WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "A turma"))?;
    Ok(())
}
