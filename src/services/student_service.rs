// src/services/student_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::student::{CreateStudentPayload, Student, UpdateStudentPayload},
    services::reference_service::{self, ForeignKey, Table},
};
use sqlx::SqlitePool;

pub async fn find_all_students(db_pool: &SqlitePool) -> AppResult<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} alunos.", students.len());
    Ok(students)
}

pub async fn get_student(db_pool: &SqlitePool, id: i64) -> AppResult<Student> {
    sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?1")
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Aluno não encontrado.".to_string()))
}

// responsable_id é opcional: só é verificado quando presente
fn student_keys(ong_id: i64, responsable_id: Option<i64>) -> Vec<ForeignKey<'static>> {
    let mut keys = vec![("ong_id", Table::Ongs, ong_id)];
    if let Some(responsable_id) = responsable_id {
        keys.push(("responsable_id", Table::Responsables, responsable_id));
    }
    keys
}

pub async fn create_student(db_pool: &SqlitePool, payload: CreateStudentPayload) -> AppResult<Student> {
    reference_service::ensure_references(
        db_pool,
        &student_keys(payload.ong_id, payload.responsable_id),
    )
    .await?;

    let student = sqlx::query_as::<_, Student>(
        r#"
        INSERT INTO students (
            name, email, gender, race, birthday, rg, cpf, telephone, state,
            city, address, status, civil_state, ong_id, responsable_id
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
        RETURNING *
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(payload.gender)
    .bind(payload.race)
    .bind(payload.birthday)
    .bind(&payload.rg)
    .bind(&payload.cpf)
    .bind(&payload.telephone)
    .bind(payload.state)
    .bind(&payload.city)
    .bind(&payload.address)
    .bind(payload.status)
    .bind(payload.civil_state)
    .bind(payload.ong_id)
    .bind(payload.responsable_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Aluno {} criado (ONG {}).", student.id, student.ong_id);
    Ok(student)
}

pub async fn update_student(
    db_pool: &SqlitePool,
    id: i64,
    changes: UpdateStudentPayload,
) -> AppResult<Student> {
    let mut student = get_student(db_pool, id).await?;
    student.apply(changes);
    reference_service::ensure_references(
        db_pool,
        &student_keys(student.ong_id, student.responsable_id),
    )
    .await?;

    let student = sqlx::query_as::<_, Student>(
        r#"
        UPDATE students
        SET name = ?1, email = ?2, gender = ?3, race = ?4, birthday = ?5, rg = ?6,
            cpf = ?7, telephone = ?8, state = ?9, city = ?10, address = ?11,
            status = ?12, civil_state = ?13, ong_id = ?14, responsable_id = ?15,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?16
        RETURNING *
        "#,
    )
    .bind(&student.name)
    .bind(&student.email)
    .bind(student.gender)
    .bind(student.race)
    .bind(student.birthday)
    .bind(&student.rg)
    .bind(&student.cpf)
    .bind(&student.telephone)
    .bind(student.state)
    .bind(&student.city)
    .bind(&student.address)
    .bind(student.status)
    .bind(student.civil_state)
    .bind(student.ong_id)
    .bind(student.responsable_id)
    .bind(id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Aluno {} atualizado.", id);
    Ok(student)
}

pub async fn delete_student(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    get_student(db_pool, id).await?;
    sqlx::query("DELETE FROM students WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O aluno"))?;
    Ok(())
}
