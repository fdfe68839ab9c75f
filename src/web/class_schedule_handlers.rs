// src/web/class_schedule_handlers.rs
use crate::{
    error::AppResult,
    models::{
        class_schedule::{CreateClassSchedulePayload, ClassSchedule, UpdateClassSchedulePayload},
        DeletedMessage,
    },
    services::class_schedule_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/class-schedules
pub async fn list_class_schedules(State(state): State<AppState>) -> AppResult<Json<Vec<ClassSchedule>>> {
    Ok(Json(class_schedule_service::find_all_class_schedules(&state.db_pool).await?))
}

// GET /api/class-schedules/{id}
pub async fn get_class_schedule(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<ClassSchedule>> {
    Ok(Json(class_schedule_service::get_class_schedule(&state.db_pool, id).await?))
}

// POST /api/class-schedules
pub async fn create_class_schedule(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateClassSchedulePayload>,
) -> AppResult<(StatusCode, Json<ClassSchedule>)> {
    let created = class_schedule_service::create_class_schedule(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/class-schedules/{id}
pub async fn update_class_schedule(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateClassSchedulePayload>,
) -> AppResult<Json<ClassSchedule>> {
    Ok(Json(class_schedule_service::update_class_schedule(&state.db_pool, id, changes).await?))
}

// DELETE /api/class-schedules/{id}
pub async fn delete_class_schedule(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    class_schedule_service::delete_class_schedule(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Horário excluído com sucesso.")))
}
