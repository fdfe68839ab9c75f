// src/web/student_class_handlers.rs
use crate::{
    error::AppResult,
    models::{
        student::Student,
        student_class::{CreateStudentClassPayload, StudentClass, UpdateStudentClassPayload},
        DeletedMessage,
    },
    services::student_class_service,
    state::AppState,
    web::extract::{AppJson, AppPath},
};
use axum::{extract::State, http::StatusCode, Json};

// GET /api/student-classes
pub async fn list_student_classes(State(state): State<AppState>) -> AppResult<Json<Vec<StudentClass>>> {
    Ok(Json(student_class_service::find_all_student_classes(&state.db_pool).await?))
}

// GET /api/student-classes/{id}
pub async fn get_student_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<StudentClass>> {
    Ok(Json(student_class_service::get_student_class(&state.db_pool, id).await?))
}

// POST /api/student-classes
pub async fn create_student_class(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentClassPayload>,
) -> AppResult<(StatusCode, Json<StudentClass>)> {
    let created = student_class_service::create_student_class(&state.db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/student-classes/{id}
pub async fn update_student_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(changes): AppJson<UpdateStudentClassPayload>,
) -> AppResult<Json<StudentClass>> {
    Ok(Json(student_class_service::update_student_class(&state.db_pool, id, changes).await?))
}

// DELETE /api/student-classes/{id}
pub async fn delete_student_class(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<DeletedMessage>> {
    student_class_service::delete_student_class(&state.db_pool, id).await?;
    Ok(Json(DeletedMessage::new("Matrícula excluída com sucesso.")))
}

// GET /api/students-classes/students/{class_id}
pub async fn list_students_for_class(
    State(state): State<AppState>,
    AppPath(class_id): AppPath<i64>,
) -> AppResult<Json<Vec<Student>>> {
    Ok(Json(
        student_class_service::list_students_for_class(&state.db_pool, class_id).await?,
    ))
}
