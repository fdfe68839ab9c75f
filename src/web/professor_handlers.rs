// src/web/professor_handlers.rs
use crate::{
    error::AppResult,
    models::{
        professor::{CreateProfessorPayload, Professor, UpdateProfessorPayload},
        DeletedMessage,
    },
    services::professor_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/professors
pub async fn list_professors(State(state): State<AppState>) -> AppResult<Json<Vec<Professor>>> {
    Ok(Json(professor_service::find_all_professors(&state.db_pool).await?))
}

// GET /api/professors/{id}
pub async fn get_professor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Professor>> {
    Ok(Json(professor_service::get_professor(&state.db_pool, id).await?))
}

// POST /api/professors
pub async fn create_professor(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProfessorPayload>,
) -> AppResult<(StatusCode, Json<Professor>)> {
    let created = professor_service::create_professor(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/professors/{id}
pub async fn update_professor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateProfessorPayload>,
) -> AppResult<Json<Professor>> {
    Ok(Json(professor_service::update_professor(&state.db_pool, id, changes).await?))
}

// DELETE /api/professors/{id}
pub async fn delete_professor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    professor_service::delete_professor(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Professor excluído com sucesso.")))
}
