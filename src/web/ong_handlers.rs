// src/web/ong_handlers.rs
use crate::{
    error::AppResult,
    models::{
        ong::{CreateOngPayload, Ong, UpdateOngPayload},
        DeletedMessage,
    },
    services::ong_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/ongs
pub async fn list_ongs(State(state): State<AppState>) -> AppResult<Json<Vec<Ong>>> {
    Ok(Json(ong_service::find_all_ongs(&state.db_pool).await?))
}

// GET /api/ongs/{id}
pub async fn get_ong(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Ong>> {
    Ok(Json(ong_service::get_ong(&state.db_pool, id).await?))
}

// POST /api/ongs
pub async fn create_ong(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateOngPayload>,
) -> AppResult<(StatusCode, Json<Ong>)> {
    let ong = ong_service::create_ong(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(ong)))
}

// PUT /api/ongs/{id}
pub async fn update_ong(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateOngPayload>,
) -> AppResult<Json<Ong>> {
    Ok(Json(ong_service::update_ong(&state.db_pool, id, changes).await?))
}

// DELETE /api/ongs/{id}
pub async fn delete_ong(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    ong_service::delete_ong(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("ONG excluída com sucesso.")))
}
