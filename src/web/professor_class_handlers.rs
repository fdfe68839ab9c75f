// src/web/professor_class_handlers.rs
use crate::{
    error::AppResult,
    models::{
        professor_class::{
            AddProfessorPayload, CreateProfessorClassPayload, ProfessorClass,
            ProfessorClassWithProfessor, UpdateProfessorClassPayload,
        },
        DeletedMessage,
    },
    services::professor_class_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/professors-instance
pub async fn list_professor_classes(State(state): State<AppState>) -> AppResult<Json<Vec<ProfessorClass>>> {
    Ok(Json(professor_class_service::find_all_professor_classes(&state.db_pool).await?))
}

// GET /api/professors-instance/{id}
pub async fn get_professor_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<ProfessorClass>> {
    Ok(Json(professor_class_service::get_professor_class(&state.db_pool, id).await?))
}

// POST /api/professors-instance
pub async fn create_professor_class(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProfessorClassPayload>,
) -> AppResult<(StatusCode, Json<ProfessorClass>)> {
    let created = professor_class_service::create_professor_class(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/professors-instance/{id}
pub async fn update_professor_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateProfessorClassPayload>,
) -> AppResult<Json<ProfessorClass>> {
    Ok(Json(professor_class_service::update_professor_class(&state.db_pool, id, changes).await?))
}

// DELETE /api/professors-instance/{id}
pub async fn delete_professor_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    professor_class_service::delete_professor_class(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Professor removido da instância de aula com sucesso.")))
}

// GET /api/instance-classes/{id}/professors
pub async fn list_professors_for_instance(
    State(state): State<AppState>,
    AppPath(instance_classes_id): AppPath<i64>,
) -> AppResult<Json<Vec<ProfessorClassWithProfessor>>> {
    let rows =
        professor_class_service::list_professors_for_instance(&state.db_pool, instance_classes_id)
            .await?;
    Ok(Json(rows))
}

// POST /api/instance-classes/{id}/professors
// A instância vem da rota, o professor do corpo.
pub async fn add_professor_to_instance(
    State(state): State<AppState>,
    AppPath(instance_classes_id): AppPath<i64>,
    AppJson(payload): AppJson<AddProfessorPayload>,
) -> AppResult<(StatusCode, Json<ProfessorClass>)> {
    let created = professor_class_service::create_professor_class(
        &state.db_pool,
        CreateProfessorClassPayload {
            professor_id: payload.professor_id,
            instance_classes_id,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(created)))
}
