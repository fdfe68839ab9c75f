// src/web/leader_handlers.rs
use crate::{
    error::AppResult,
    models::{
        leader::{CreateLeaderPayload, Leader, UpdateLeaderPayload},
        ong::Ong,
        DeletedMessage,
    },
    services::leader_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/leaders
pub async fn list_leaders(State(state): State<AppState>) -> AppResult<Json<Vec<Leader>>> {
    Ok(Json(leader_service::find_all_leaders(&state.db_pool).await?))
}

// GET /api/leaders/{id}
pub async fn get_leader(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Leader>> {
    Ok(Json(leader_service::get_leader(&state.db_pool, id).await?))
}

// POST /api/leaders
pub async fn create_leader(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLeaderPayload>,
) -> AppResult<(StatusCode, Json<Leader>)> {
    let created = leader_service::create_leader(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/leaders/{id}
pub async fn update_leader(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateLeaderPayload>,
) -> AppResult<Json<Leader>> {
    Ok(Json(leader_service::update_leader(&state.db_pool, id, changes).await?))
}

// DELETE /api/leaders/{id}
pub async fn delete_leader(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    leader_service::delete_leader(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Líder excluído com sucesso.")))
}

// GET /api/leader/{id}/ong
pub async fn get_leader_ong(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Ong>> {
    tracing::debug!("Buscando ONG do líder {}", id);
    Ok(Json(leader_service::find_ong_for_leader(&state.db_pool, id).await?))
}
