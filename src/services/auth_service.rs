// src/services/auth_service.rs
use crate::error::{AppError, AppResult};

/// Gera um hash bcrypt para uma senha (fora do runtime async).
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt...");
        bcrypt::hash(&password, bcrypt::DEFAULT_COST)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_is_verifiable_and_not_plaintext() {
        let hash = hash_password("segredo123").await.unwrap();
        assert_ne!(hash, "segredo123");
        assert!(bcrypt::verify("segredo123", &hash).unwrap());
        assert!(!bcrypt::verify("outra", &hash).unwrap());
    }
}
