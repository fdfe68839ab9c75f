// src/web/responsable_handlers.rs
use crate::{
    error::AppResult,
    models::{
        responsable::{CreateResponsablePayload, Responsable, UpdateResponsablePayload},
        DeletedMessage,
    },
    services::responsable_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_responsables(State(state): State<AppState>) -> AppResult<Json<Vec<Responsable>>> {
    Ok(Json(responsable_service::find_all_responsables(&state.db_pool).await?))
}

pub async fn get_responsable(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Responsable>> {
    Ok(Json(responsable_service::get_responsable(&state.db_pool, id).await?))
}

pub async fn create_responsable(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateResponsablePayload>,
) -> AppResult<(StatusCode, Json<Responsable>)> {
    let created = responsable_service::create_responsable(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_responsable(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateResponsablePayload>,
) -> AppResult<Json<Responsable>> {
    Ok(Json(responsable_service::update_responsable(&state.db_pool, id, changes).await?))
}

pub async fn delete_responsable(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    responsable_service::delete_responsable(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Responsável excluído com sucesso.")))
}
