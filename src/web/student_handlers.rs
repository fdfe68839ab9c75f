// src/web/student_handlers.rs
use crate::{
    error::AppResult,
    models::{
        student::{CreateStudentPayload, Student, UpdateStudentPayload},
        DeletedMessage,
    },
    services::student_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/students
pub async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    Ok(Json(student_service::find_all_students(&state.db_pool).await?))
}

// GET /api/students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Student>> {
    Ok(Json(student_service::get_student(&state.db_pool, id).await?))
}

// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentPayload>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let created = student_service::create_student(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateStudentPayload>,
) -> AppResult<Json<Student>> {
    Ok(Json(student_service::update_student(&state.db_pool, id, changes).await?))
}

// DELETE /api/students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    student_service::delete_student(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Aluno excluído com sucesso.")))
}
