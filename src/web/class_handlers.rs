// src/web/class_handlers.rs
use crate::{
    error::AppResult,
    models::{
        class::{CreateClassPayload, Class, UpdateClassPayload},
        DeletedMessage,
    },
    services::class_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/classes
pub async fn list_classes(State(state): State<AppState>) -> AppResult<Json<Vec<Class>>> {
    Ok(Json(class_service::find_all_classes(&state.db_pool).await?))
}

// GET /api/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Class>> {
    Ok(Json(class_service::get_class(&state.db_pool, id).await?))
}

// POST /api/classes
pub async fn create_class(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateClassPayload>,
) -> AppResult<(StatusCode, Json<Class>)> {
    let created = class_service::create_class(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/classes/{id}
pub async fn update_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateClassPayload>,
) -> AppResult<Json<Class>> {
    Ok(Json(class_service::update_class(&state.db_pool, id, changes).await?))
}

// DELETE /api/classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    class_service::delete_class(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Turma excluída com sucesso.")))
}
