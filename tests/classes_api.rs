mod common;

use axum::http::StatusCode;
use common::{assert_error, spawn_app, TestApp};
use serde_json::{json, Value};

/// Ong, turma e um aluno matriculado: (class_id, student_id, student_class_id).
async fn enrolled(app: &TestApp) -> (i64, i64, i64) {
    let ong_id = app.create_ong().await;
    let class_id = app.create_class(ong_id).await;
    let student_id = app.create_student(ong_id, None).await;
    let student_class_id = app.create_student_class(student_id, class_id).await;
    (class_id, student_id, student_class_id)
}

fn schedule_body(student_class_id: i64) -> Value {
    json!({
        "student_class_id": student_class_id,
        "day_of_week": ["wednesday", "monday"],
        "start_time": "14:00:00",
        "end_time": "15:30:00"
    })
}

#[tokio::test]
async fn class_defaults_and_reference_check() {
    let app = spawn_app().await;

    let (status, body) = app.post("/api/classes", json!({ "ong_id": 1 })).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("/api/classes").await, 0);

    let ong_id = app.create_ong().await;
    let (status, class) = app.post("/api/classes", json!({ "ong_id": ong_id })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(class["status"], true);
    assert_eq!(class["category"], 0);
    assert_eq!(class["workshop"], json!(null));

    let id = class["id"].as_i64().unwrap();
    let (status, updated) = app
        .put(
            &format!("/api/classes/{}", id),
            json!({ "workshop": "Xadrez", "status": false }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["workshop"], "Xadrez");
    assert_eq!(updated["status"], false);
    assert_eq!(updated["ong_id"], ong_id);

    let (status, body) = app.get("/api/classes/999").await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn enrollment_requires_student_and_class() {
    let app = spawn_app().await;
    let ong_id = app.create_ong().await;
    let class_id = app.create_class(ong_id).await;
    let student_id = app.create_student(ong_id, None).await;

    let (status, body) = app
        .post(
            "/api/student-classes",
            json!({ "student_id": 999, "class_id": class_id }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            "/api/student-classes",
            json!({ "student_id": student_id, "class_id": 999 }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("/api/student-classes").await, 0);

    let id = app.create_student_class(student_id, class_id).await;

    // turma com matrículas não pode ser apagada
    let (status, body) = app.delete(&format!("/api/classes/{}", class_id)).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, _) = app.delete(&format!("/api/student-classes/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete(&format!("/api/classes/{}", class_id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn students_for_class_lists_only_enrolled_students() {
    let app = spawn_app().await;
    let (class_id, student_id, _) = enrolled(&app).await;

    let ong_id = app.create_ong().await;
    let other_class = app.create_class(ong_id).await;
    let other_student = app.create_student(ong_id, None).await;
    app.create_student_class(other_student, other_class).await;

    let (status, students) = app
        .get(&format!("/api/students-classes/students/{}", class_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let students = students.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], student_id);
    assert_eq!(students[0]["name"], "Lucas Lima");

    let empty_class = app.create_class(ong_id).await;
    let (status, students) = app
        .get(&format!("/api/students-classes/students/{}", empty_class))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(students, json!([]));

    let (status, body) = app.get("/api/students-classes/students/999").await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn one_schedule_per_enrollment() {
    let app = spawn_app().await;
    let (_, _, student_class_id) = enrolled(&app).await;

    let (status, created) = app
        .post("/api/class-schedules", schedule_body(student_class_id))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["day_of_week"], json!(["monday", "wednesday"]));
    assert_eq!(created["start_time"], "14:00:00");
    assert_eq!(created["status"], 1);
    assert_eq!(created["frequency"], 1);

    let schedule_id = created["id"].as_i64().unwrap();
    let (status, fetched) = app
        .get(&format!("/api/class-schedules/{}", schedule_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut second = schedule_body(student_class_id);
    second["day_of_week"] = json!(["friday"]);
    let (status, body) = app.post("/api/class-schedules", second).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, list) = app.get("/api/class-schedules").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn schedule_times_accept_hours_and_minutes() {
    let app = spawn_app().await;
    let (_, _, student_class_id) = enrolled(&app).await;

    let mut body = schedule_body(student_class_id);
    body["start_time"] = json!("08:00");
    body["end_time"] = json!("09:30");
    let (status, created) = app.post("/api/class-schedules", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["start_time"], "08:00:00");
    assert_eq!(created["end_time"], "09:30:00");

    let (status, fetched) = app
        .get(&format!("/api/class-schedules/{}", created["id"]))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = app
        .put(
            &format!("/api/class-schedules/{}", created["id"]),
            json!({ "end_time": "10:15" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["end_time"], "10:15:00");
    assert_eq!(updated["start_time"], "08:00:00");
}

#[tokio::test]
async fn schedule_validation() {
    let app = spawn_app().await;
    let (_, _, student_class_id) = enrolled(&app).await;

    let (status, body) = app.post("/api/class-schedules", schedule_body(999)).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let mut no_days = schedule_body(student_class_id);
    no_days["day_of_week"] = json!([]);
    let (status, body) = app.post("/api/class-schedules", no_days).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let mut bad_day = schedule_body(student_class_id);
    bad_day["day_of_week"] = json!(["funday"]);
    let (status, body) = app.post("/api/class-schedules", bad_day).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    assert_eq!(app.count("/api/class-schedules").await, 0);
}

#[tokio::test]
async fn schedule_cannot_move_onto_taken_enrollment() {
    let app = spawn_app().await;
    let (_, _, first_enrollment) = enrolled(&app).await;
    let (_, _, second_enrollment) = enrolled(&app).await;

    let first = app
        .create("/api/class-schedules", schedule_body(first_enrollment))
        .await;
    let second = app
        .create("/api/class-schedules", schedule_body(second_enrollment))
        .await;

    let (status, body) = app
        .put(
            &format!("/api/class-schedules/{}", second),
            json!({ "student_class_id": first_enrollment }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, updated) = app
        .put(
            &format!("/api/class-schedules/{}", first),
            json!({ "day_of_week": ["saturday"], "end_time": "16:00:00" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["day_of_week"], json!(["saturday"]));
    assert_eq!(updated["end_time"], "16:00:00");
    assert_eq!(updated["student_class_id"], first_enrollment);

    let (status, _) = app.delete(&format!("/api/class-schedules/{}", first)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.get(&format!("/api/class-schedules/{}", first)).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn instance_class_crud() {
    let app = spawn_app().await;
    let ong_id = app.create_ong().await;
    let class_id = app.create_class(ong_id).await;

    let (status, body) = app
        .post("/api/instance-classes", json!({ "id_classes": 999 }))
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("/api/instance-classes").await, 0);

    let id = app.create_instance_class(class_id).await;
    let (status, updated) = app
        .put(
            &format!("/api/instance-classes/{}", id),
            json!({ "observation": "Aula reposta", "date": null }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["observation"], "Aula reposta");
    assert_eq!(updated["date"], json!(null));
    assert_eq!(updated["status"], 1);
    assert_eq!(updated["id_classes"], class_id);

    let (status, body) = app.delete("/api/instance-classes/999").await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn professors_assigned_to_instance() {
    let app = spawn_app().await;
    let ong_id = app.create_ong().await;
    let class_id = app.create_class(ong_id).await;
    let instance_id = app.create_instance_class(class_id).await;
    let user_id = app.create_user("prof@ong.org", "professor").await;
    let professor_id = app.create_professor(ong_id, user_id).await;

    let (status, professors) = app
        .get(&format!("/api/instance-classes/{}/professors", instance_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(professors, json!([]));

    let (status, body) = app
        .post(
            &format!("/api/instance-classes/{}/professors", instance_id),
            json!({ "professor_id": 999 }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, assignment) = app
        .post(
            &format!("/api/instance-classes/{}/professors", instance_id),
            json!({ "professor_id": professor_id }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(assignment["instance_classes_id"], instance_id);

    let (status, professors) = app
        .get(&format!("/api/instance-classes/{}/professors", instance_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let professors = professors.as_array().unwrap();
    assert_eq!(professors.len(), 1);
    assert_eq!(professors[0]["id"], assignment["id"]);
    assert_eq!(professors[0]["professor"]["id"], professor_id);
    assert_eq!(professors[0]["professor"]["name"], "Paulo Freire");
    assert_eq!(professors[0]["professor"]["ong_id"], ong_id);

    let (status, body) = app.get("/api/instance-classes/999/professors").await;
    assert_error(status, &body, StatusCode::NOT_FOUND);

    // professor alocado não pode ser apagado
    let (status, body) = app.delete(&format!("/api/professors/{}", professor_id)).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn professor_assignment_crud() {
    let app = spawn_app().await;
    let ong_id = app.create_ong().await;
    let class_id = app.create_class(ong_id).await;
    let first_instance = app.create_instance_class(class_id).await;
    let second_instance = app.create_instance_class(class_id).await;
    let user_id = app.create_user("prof@ong.org", "professor").await;
    let professor_id = app.create_professor(ong_id, user_id).await;

    let (status, body) = app
        .post(
            "/api/professors-instance",
            json!({ "professor_id": professor_id, "instance_classes_id": 999 }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("/api/professors-instance").await, 0);

    let id = app
        .create(
            "/api/professors-instance",
            json!({ "professor_id": professor_id, "instance_classes_id": first_instance }),
        )
        .await;

    let (status, moved) = app
        .put(
            &format!("/api/professors-instance/{}", id),
            json!({ "instance_classes_id": second_instance }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["instance_classes_id"], second_instance);
    assert_eq!(moved["professor_id"], professor_id);

    let (status, _) = app.delete(&format!("/api/professors-instance/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.get(&format!("/api/professors-instance/{}", id)).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn presences_reference_student_and_instance() {
    let app = spawn_app().await;
    let (class_id, student_id, _) = enrolled(&app).await;
    let instance_id = app.create_instance_class(class_id).await;

    let (status, body) = app
        .post(
            "/api/students-presences-classes",
            json!({ "student_id": student_id, "instance_class_id": 999 }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            "/api/students-presences-classes",
            json!({ "student_id": 999, "instance_class_id": instance_id }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("/api/students-presences-classes").await, 0);

    let (status, presence) = app
        .post(
            "/api/students-presences-classes",
            json!({ "student_id": student_id, "instance_class_id": instance_id }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = presence["id"].as_i64().unwrap();

    let (status, fetched) = app
        .get(&format!("/api/students-presences-classes/{}", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, presence);

    // instância com presenças registadas
    let (status, body) = app
        .delete(&format!("/api/instance-classes/{}", instance_id))
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .put(
            &format!("/api/students-presences-classes/{}", id),
            json!({ "student_id": 999 }),
        )
        .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .delete(&format!("/api/students-presences-classes/{}", id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app
        .delete(&format!("/api/students-presences-classes/{}", id))
        .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}
