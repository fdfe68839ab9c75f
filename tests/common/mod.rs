#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use ponderada::{db, state::AppState, web::routes::create_router};
use serde_json::{json, Value};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tower::ServiceExt; // for oneshot

/// Router real sobre uma base SQLite em memória com as migrações aplicadas.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

pub async fn spawn_app() -> TestApp {
    // Uma única ligação que nunca expira: a base em memória vive com ela
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestApp {
        router: create_router(AppState::new(pool.clone())),
        pool,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST que tem de dar 201; devolve o id atribuído.
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, created) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {} falhou: {}", uri, created);
        created["id"].as_i64().expect("created row without id")
    }

    pub async fn count(&self, uri: &str) -> usize {
        let (status, list) = self.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        list.as_array().expect("list endpoint must return an array").len()
    }

    // --- Fixtures ---

    pub async fn create_ong(&self) -> i64 {
        self.create(
            "/api/ongs",
            json!({
                "name": "Instituto Aprender",
                "email": "contato@aprender.org",
                "cnpj": "12.345.678/0001-90",
                "telephone": "81 3333-4444",
                "foundationData": "2010-03-15",
                "address": "Rua das Flores, 100"
            }),
        )
        .await
    }

    pub async fn create_user(&self, email: &str, role: &str) -> i64 {
        self.create(
            "/api/users",
            json!({ "email": email, "password": "senha-forte", "gender": 1, "role": role }),
        )
        .await
    }

    pub async fn create_professor(&self, ong_id: i64, user_id: i64) -> i64 {
        self.create(
            "/api/professors",
            json!({
                "name": "Paulo Freire",
                "telephone": "81 98888-7777",
                "city": "Recife",
                "ong_id": ong_id,
                "user_id": user_id
            }),
        )
        .await
    }

    pub async fn create_responsable(&self, ong_id: i64) -> i64 {
        self.create(
            "/api/responsables",
            json!({ "name": "Maria Souza", "email": "maria@mail.com", "ong_id": ong_id }),
        )
        .await
    }

    pub async fn create_student(&self, ong_id: i64, responsable_id: Option<i64>) -> i64 {
        self.create("/api/students", student_body(ong_id, responsable_id)).await
    }

    pub async fn create_class(&self, ong_id: i64) -> i64 {
        self.create(
            "/api/classes",
            json!({ "local": "Sala 2", "workshop": "Robótica", "ong_id": ong_id }),
        )
        .await
    }

    pub async fn create_student_class(&self, student_id: i64, class_id: i64) -> i64 {
        self.create(
            "/api/student-classes",
            json!({ "student_id": student_id, "class_id": class_id }),
        )
        .await
    }

    pub async fn create_instance_class(&self, class_id: i64) -> i64 {
        self.create(
            "/api/instance-classes",
            json!({ "id_classes": class_id, "date": "2024-04-02", "status": 1 }),
        )
        .await
    }
}

pub fn student_body(ong_id: i64, responsable_id: Option<i64>) -> Value {
    json!({
        "name": "Lucas Lima",
        "email": "lucas@mail.com",
        "gender": 1,
        "race": 2,
        "birthday": "2012-08-20",
        "state": 17,
        "city": "Olinda",
        "address": "Rua do Sol, 5",
        "status": 1,
        "civil_state": 0,
        "ong_id": ong_id,
        "responsable_id": responsable_id
    })
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected status, body: {}", body);
    assert!(
        body["error"].as_str().map_or(false, |msg| !msg.is_empty()),
        "error body must be {{\"error\": string}}, got {}",
        body
    );
}
