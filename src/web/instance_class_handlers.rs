// src/web/instance_class_handlers.rs
use crate::{
    error::AppResult,
    models::{
        instance_class::{CreateInstanceClassPayload, InstanceClass, UpdateInstanceClassPayload},
        DeletedMessage,
    },
    services::instance_class_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

pub async fn list_instance_classes(State(state): State<AppState>) -> AppResult<Json<Vec<InstanceClass>>> {
    Ok(Json(instance_class_service::find_all_instance_classes(&state.db_pool).await?))
}

pub async fn get_instance_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<InstanceClass>> {
    Ok(Json(instance_class_service::get_instance_class(&state.db_pool, id).await?))
}

pub async fn create_instance_class(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateInstanceClassPayload>,
) -> AppResult<(StatusCode, Json<InstanceClass>)> {
    let created = instance_class_service::create_instance_class(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_instance_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateInstanceClassPayload>,
) -> AppResult<Json<InstanceClass>> {
    Ok(Json(instance_class_service::update_instance_class(&state.db_pool, id, changes).await?))
}

pub async fn delete_instance_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    instance_class_service::delete_instance_class(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Instância de aula excluída com sucesso.")))
}
