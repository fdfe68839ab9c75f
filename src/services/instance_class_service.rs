// src/services/instance_class_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::instance_class::{CreateInstanceClassPayload, InstanceClass, UpdateInstanceClassPayload},
    services::reference_service::{self, Table},
};
use sqlx::SqlitePool;

pub async fn find_all_instance_classes(db_pool: &SqlitePool) -> AppResult<Vec<InstanceClass>> {
    let rows = sqlx::query_as::<_, InstanceClass>("SELECT * FROM instance_classes ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    Ok(rows)
}

pub async fn get_instance_class(db_pool: &SqlitePool, id: i64) -> AppResult<InstanceClass> {
    sqlx::query_as::<_, InstanceClass>("SELECT * FROM instance_classes WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Instância de aula não encontrada.".to_string()))
}

pub async fn create_instance_class(
    db_pool: &SqlitePool,
    payload: CreateInstanceClassPayload,
) -> AppResult<InstanceClass> {
    reference_service::ensure_references(
        db_pool,
        &[("id_classes", Table::Classes, payload.id_classes)],
    )
    .await?;

    let row = sqlx::query_as::<_, InstanceClass>(
        r#"
        INSERT INTO instance_classes (id_classes, date, status, observation)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING *
        "#,
    )
    .bind(payload.id_classes)
    .bind(payload.date)
    .bind(payload.status)
    .bind(&payload.observation)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Instância {} criada para a turma {}.", row.id, row.id_classes);
    Ok(row)
}

pub async fn update_instance_class(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateInstanceClassPayload,
) -> AppResult<InstanceClass> {
    let mut row = get_instance_class(db_pool, id).await?;
    row.apply(changes);
    reference_service::ensure_references(db_pool, &[("id_classes", Table::Classes, row.id_classes)])
        .await?;

    let row = sqlx::query_as::<_, InstanceClass>(
        r#"
        UPDATE instance_classes
        SET id_classes = ?1, date = ?2, status = ?3, observation = ?4,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?5
        RETURNING *
        "#,
    )
    .bind(row.id_classes)
    .bind(row.date)
    .bind(row.status)
    .bind(&row.observation)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(row)
}

pub async fn delete_instance_class(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_instance_class(db_pool, id).await?;
    sqlx::query("DELETE FROM instance_classes WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "A instância de aula"))?;
    Ok(())
}
