// src/services/student_presence_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::student_presence::{
        CreateStudentPresencePayload, StudentPresence, UpdateStudentPresencePayload,
    },
    services::reference_service::{self, Table},
};
use sqlx::SqlitePool;

pub async fn find_all_presences(db_pool: &SqlitePool) -> AppResult<Vec<StudentPresence>> {
    let rows = sqlx::query_as::<_, StudentPresence>(
        "SELECT * FROM student_presences_classes ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(rows)
}

pub async fn get_presence(db_pool: &SqlitePool, id: i64) -> AppResult<StudentPresence> {
    sqlx::query_as::<_, StudentPresence>("SELECT * FROM student_presences_classes WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Presença não encontrada.".to_string()))
}

/// Marca a presença de um aluno numa instância de aula.
pub async fn create_presence(
    db_pool: &SqlitePool,
    payload: CreateStudentPresencePayload,
) -> AppResult<StudentPresence> {
    tracing::debug!(
        "Marcando presença do aluno {} na instância {}",
        payload.student_id,
        payload.instance_class_id
    );
    reference_service::ensure_references(
        db_pool,
        &[
            ("student_id", Table::Students, payload.student_id),
            ("instance_class_id", Table::InstanceClasses, payload.instance_class_id),
        ],
    )
    .await?;

    let row = sqlx::query_as::<_, StudentPresence>(
        r#"
        INSERT INTO student_presences_classes (student_id, instance_class_id)
        VALUES (?1, ?2)
        RETURNING *
        "#,
    )
    .bind(payload.student_id)
    .bind(payload.instance_class_id)
    .fetch_one(db_pool)
    .await?;
    Ok(row)
}

pub async fn update_presence(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateStudentPresencePayload,
) -> AppResult<StudentPresence> {
    let mut row = get_presence(db_pool, id).await?;
    row.apply(changes);
    reference_service::ensure_references(
        db_pool,
        &[
            ("student_id", Table::Students, row.student_id),
            ("instance_class_id", Table::InstanceClasses, row.instance_class_id),
        ],
    )
    .await?;

    let row = sqlx::query_as::<_, StudentPresence>(
        r#"
        UPDATE student_presences_classes
        SET student_id = ?1, instance_class_id = ?2, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?3
        RETURNING *
        "#,
    )
    .bind(row.student_id)
    .bind(row.instance_class_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(row)
}

pub async fn delete_presence(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_presence(db_pool, id).await?;
    sqlx::query("DELETE FROM student_presences_classes WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "A presença"))?;
    Ok(())
}
