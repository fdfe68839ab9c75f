// src/web/student_presence_handlers.rs
use crate::{
    error::AppResult,
    models::{
        student_presence::{CreateStudentPresencePayload, StudentPresence, UpdateStudentPresencePayload},
        DeletedMessage,
    },
    services::student_presence_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/students-presences-classes
pub async fn list_presences(State(state): State<AppState>) -> AppResult<Json<Vec<StudentPresence>>> {
    Ok(Json(student_presence_service::find_all_presences(&state.db_pool).await?))
}

// GET /api/students-presences-classes/{id}
pub async fn get_presence(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<StudentPresence>> {
    Ok(Json(student_presence_service::get_presence(&state.db_pool, id).await?))
}

// POST /api/students-presences-classes
pub async fn create_presence(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentPresencePayload>,
) -> AppResult<(StatusCode, Json<StudentPresence>)> {
    let created = student_presence_service::create_presence(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/students-presences-classes/{id}
pub async fn update_presence(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateStudentPresencePayload>,
) -> AppResult<Json<StudentPresence>> {
    Ok(Json(student_presence_service::update_presence(&state.db_pool, id, changes).await?))
}

// DELETE /api/students-presences-classes/{id}
pub async fn delete_presence(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    student_presence_service::delete_presence(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Presença excluída com sucesso.")))
}
