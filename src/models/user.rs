// src/models/user.rs
use super::patch;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Papel do utilizador. Guardado como texto ('gf', 'leader', 'professor');
/// não é usado para controlo de acesso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Gf,
    Leader,
    Professor,
}

// Representa um utilizador lido da tabela 'users'
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    // Nunca sai na resposta JSON
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub gender: i64,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub gender: i64,
    pub role: Role,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserPayload {
    pub email: Option<String>,
    // Nova password em claro; o serviço gera o hash antes de gravar
    pub password: Option<String>,
    pub gender: Option<i64>,
    pub role: Option<Role>,
}

impl User {
    /// Aplica os campos simples; a password é tratada à parte (hash).
    pub fn apply(&mut self, changes: &UpdateUserPayload) {
        patch(&mut self.email, changes.email.clone());
        patch(&mut self.gender, changes.gender);
        patch(&mut self.role, changes.role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_uses_lowercase_names() {
        let role: Role = serde_json::from_str(r#""professor""#).unwrap();
        assert_eq!(role, Role::Professor);
        assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let now = chrono::Utc::now().naive_utc();
        let user = User {
            id: 1,
            email: "gf@ong.org".into(),
            password_hash: "$2b$12$segredo".into(),
            gender: 1,
            role: Role::Gf,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "gf");
    }
}
