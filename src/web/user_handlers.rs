// src/web/user_handlers.rs
use crate::{
    error::AppResult,
    models::{
        user::{CreateUserPayload, UpdateUserPayload, User},
        DeletedMessage,
    },
    services::user_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(user_service::find_all_users(&state.db_pool).await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::get_user(&state.db_pool, id).await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = user_service::create_user(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateUserPayload>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::update_user(&state.db_pool, id, changes).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    user_service::delete_user(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Utilizador excluído com sucesso.")))
}
