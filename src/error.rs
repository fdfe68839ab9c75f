// src/error.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de configuração: {0}")]
    ConfigError(String),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    // Recurso pedido (por id) não existe
    #[error("{0}")]
    NotFound(String),

    // Chave estrangeira aponta para um registo inexistente
    #[error("{0}")]
    InvalidReference(String),

    // Violação de regra de estado (duplicado, registo ainda referenciado...)
    #[error("{0}")]
    InvalidState(String),

    #[error("Corpo JSON inválido: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Parâmetro de rota inválido: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Violações de constraint que escapam às verificações da aplicação
// (ex: apagamento concorrente) continuam a ser erros do cliente.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return AppError::InvalidReference(
                    "Referência inválida: o registo referenciado não existe.".to_string(),
                );
            }
            if db_err.is_unique_violation() {
                return AppError::InvalidState("Registo duplicado.".to_string());
            }
        }
        AppError::SqlxError(err)
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidReference(_)
            | AppError::InvalidState(_)
            | AppError::JsonRejection(_)
            | AppError::PathRejection(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Traduz a falha de um DELETE bloqueado por FK (linha ainda referenciada).
pub fn map_delete_error(err: sqlx::Error, what: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            tracing::warn!("DELETE bloqueado por FK em {}: {}", what, db_err);
            AppError::InvalidState(format!(
                "{} ainda está referenciado(a) por outros registos.",
                what
            ))
        }
        _ => err.into(),
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        let user_message = match &self {
            AppError::NotFound(msg) | AppError::InvalidReference(msg) | AppError::InvalidState(msg) => {
                tracing::debug!("Erro de cliente ({}): {}", status.as_u16(), msg);
                msg.clone()
            }
            AppError::JsonRejection(rejection) => {
                tracing::debug!("JSON rejeitado: {}", rejection.body_text());
                rejection.body_text()
            }
            AppError::PathRejection(rejection) => {
                tracing::debug!("Path rejeitado: {}", rejection.body_text());
                rejection.body_text()
            }
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                "Erro ao aceder aos dados.".to_string()
            }
            AppError::ConfigError(_) => {
                tracing::error!("Erro processado: {:?}", self);
                "Erro de configuração.".to_string()
            }
            AppError::PasswordHashingError => {
                tracing::error!("Erro processado: {:?}", self);
                "Erro ao processar credenciais.".to_string()
            }
            AppError::InternalServerError => {
                tracing::error!("Erro processado: {:?}", self);
                "Ocorreu um erro inesperado.".to_string()
            }
        };

        (status, Json(json!({ "error": user_message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidReference("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidState("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn persistence_errors_are_500() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::SqlxError(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::InternalServerError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_details_are_not_leaked() {
        let response = AppError::SqlxError(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Erro ao aceder aos dados.");
    }
}
