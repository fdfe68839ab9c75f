// src/services/class_schedule_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::class_schedule::{
        ClassSchedule, CreateClassSchedulePayload, DayOfWeek, UpdateClassSchedulePayload,
    },
    services::reference_service::{self, Table},
};
use sqlx::{types::Json, SqlitePool};
use std::collections::BTreeSet;

pub async fn find_all_class_schedules(db_pool: &SqlitePool) -> AppResult<Vec<ClassSchedule>> {
    let schedules = sqlx::query_as::<_, ClassSchedule>("SELECT * FROM class_schedules ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    Ok(schedules)
}

pub async fn get_class_schedule(db_pool: &SqlitePool, id: i64) -> AppResult<ClassSchedule> {
    sqlx::query_as::<_, ClassSchedule>("SELECT * FROM class_schedules WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Horário não encontrado.".to_string()))
}

/// Id do horário já associado a esta matrícula, se houver.
async fn schedule_for_student_class(
    db_pool: &SqlitePool,
    student_class_id: i64,
) -> AppResult<Option<i64>> {
    let id = sqlx::query_scalar("SELECT id FROM class_schedules WHERE student_class_id = ?1")
        .bind(student_class_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(id)
}

fn ensure_days(days: &BTreeSet<DayOfWeek>) -> AppResult<()> {
    if days.is_empty() {
        return Err(AppError::InvalidState(
            "day_of_week tem de conter pelo menos um dia.".to_string(),
        ));
    }
    Ok(())
}

fn duplicate_schedule(student_class_id: i64) -> AppError {
    tracing::warn!("Matrícula {} já tem horário.", student_class_id);
    AppError::InvalidState(format!(
        "Já existe um horário para a matrícula {}.",
        student_class_id
    ))
}

pub async fn create_class_schedule(
    db_pool: &SqlitePool,
    payload: CreateClassSchedulePayload,
) -> AppResult<ClassSchedule> {
    ensure_days(&payload.day_of_week)?;
    reference_service::ensure_references(
        db_pool,
        &[("student_class_id", Table::StudentClasses, payload.student_class_id)],
    )
    .await?;

    if schedule_for_student_class(db_pool, payload.student_class_id).await?.is_some() {
        return Err(duplicate_schedule(payload.student_class_id));
    }

    let schedule = sqlx::query_as::<_, ClassSchedule>(
        r#"
        INSERT INTO class_schedules (
            student_class_id, day_of_week, start_time, end_time, status, frequency
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING *
        "#,
    )
    .bind(payload.student_class_id)
    .bind(Json(&payload.day_of_week))
    .bind(payload.start_time)
    .bind(payload.end_time)
    .bind(payload.status)
    .bind(payload.frequency)
    .fetch_one(db_pool)
    .await?;

    tracing::info!(
        "✅ Horário {} criado para a matrícula {}.",
        schedule.id,
        schedule.student_class_id
    );
    Ok(schedule)
}

pub async fn update_class_schedule(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateClassSchedulePayload,
) -> AppResult<ClassSchedule> {
    let mut schedule = get_class_schedule(db_pool, id).await?;
    schedule.apply(changes);
    ensure_days(&schedule.day_of_week)?;
    reference_service::ensure_references(
        db_pool,
        &[("student_class_id", Table::StudentClasses, schedule.student_class_id)],
    )
    .await?;

    // Mudar de matrícula não pode criar um segundo horário para a nova
    if let Some(other) = schedule_for_student_class(db_pool, schedule.student_class_id).await? {
        if other != id {
            return Err(duplicate_schedule(schedule.student_class_id));
        }
    }

    let schedule = sqlx::query_as::<_, ClassSchedule>(
        r#"
        UPDATE class_schedules
        SET student_class_id = ?1, day_of_week = ?2, start_time = ?3, end_time = ?4,
            status = ?5, frequency = ?6, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?7
        RETURNING *
        "#,
    )
    .bind(schedule.student_class_id)
    .bind(Json(&schedule.day_of_week))
    .bind(schedule.start_time)
    .bind(schedule.end_time)
    .bind(schedule.status)
    .bind(schedule.frequency)
    .bind(id)
    .fetch_one(db_pool)
    .await?;
    Ok(schedule)
}

pub async fn delete_class_schedule(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_class_schedule(db_pool, id).await?;
    sqlx::query("DELETE FROM class_schedules WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O horário"))?;
    Ok(())
}
