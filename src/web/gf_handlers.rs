// src/web/gf_handlers.rs
use crate::{
    error::AppResult,
    models::{
        gf::{CreateGfPayload, Gf, UpdateGfPayload},
        DeletedMessage,
    },
    services::gf_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_gfs(State(state): State<AppState>) -> AppResult<Json<Vec<Gf>>> {
    Ok(Json(gf_service::find_all_gfs(&state.db_pool).await?))
}

pub async fn get_gf(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Gf>> {
    Ok(Json(gf_service::get_gf(&state.db_pool, id).await?))
}

pub async fn create_gf(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGfPayload>,
) -> AppResult<(StatusCode, Json<Gf>)> {
    let created = gf_service::create_gf(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_gf(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateGfPayload>,
) -> AppResult<Json<Gf>> {
    Ok(Json(gf_service::update_gf(&state.db_pool, id, changes).await?))
}

pub async fn delete_gf(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    gf_service::delete_gf(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("GF excluído com sucesso.")))
}
