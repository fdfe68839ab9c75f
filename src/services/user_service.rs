// src/services/user_service.rs
use crate::{
    error::{map_delete_error, AppError, AppResult},
    models::user::{CreateUserPayload, UpdateUserPayload, User},
    services::auth_service,
};
use sqlx::SqlitePool;

pub async fn find_all_users(db_pool: &SqlitePool) -> AppResult<Vec<User>> {
    tracing::debug!("Buscando todos os utilizadores...");
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
        .fetch_all(db_pool)
        .await?;
    tracing::debug!("Encontrados {} utilizadores.", users.len());
    Ok(users)
}

pub async fn find_user_by_id(db_pool: &SqlitePool, user_id: i64) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por ID: {}", user_id);
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_optional(db_pool)
        .await?;
    Ok(user)
}

pub async fn get_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<User> {
    find_user_by_id(db_pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Utilizador não encontrado.".to_string()))
}

async fn email_taken(db_pool: &SqlitePool, email: &str, except_id: Option<i64>) -> AppResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users WHERE email = ?1 AND (?2 IS NULL OR id <> ?2)",
    )
    .bind(email)
    .bind(except_id)
    .fetch_one(db_pool)
    .await?;
    Ok(count > 0)
}

pub async fn create_user(db_pool: &SqlitePool, payload: CreateUserPayload) -> AppResult<User> {
    tracing::info!("Tentando criar utilizador: {}", payload.email);

    if email_taken(db_pool, &payload.email, None).await? {
        tracing::warn!("Falha ao criar user: email '{}' já existe.", payload.email);
        return Err(AppError::InvalidState(format!(
            "Já existe um utilizador com o email '{}'.",
            payload.email
        )));
    }

    let password_hash = auth_service::hash_password(&payload.password).await?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, gender, role)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING *
        "#,
    )
    .bind(&payload.email)
    .bind(&password_hash)
    .bind(payload.gender)
    .bind(payload.role)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Utilizador {} criado.", user.id);
    Ok(user)
}

pub async fn update_user(
    db_pool: &SqlitePool,
    user_id: i64,
    changes: UpdateUserPayload,
) -> AppResult<User> {
    tracing::info!("Atualizando dados para user: {}", user_id);
    let mut user = get_user(db_pool, user_id).await?;
    user.apply(&changes);

    if email_taken(db_pool, &user.email, Some(user_id)).await? {
        return Err(AppError::InvalidState(format!(
            "Já existe um utilizador com o email '{}'.",
            user.email
        )));
    }

    if let Some(new_password) = &changes.password {
        user.password_hash = auth_service::hash_password(new_password).await?;
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET email = ?1, password_hash = ?2, gender = ?3, role = ?4,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?5
        RETURNING *
        "#,
    )
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.gender)
    .bind(user.role)
    .bind(user_id)
    .fetch_one(db_pool)
    .await?;

    tracing::info!("✅ Dados atualizados com sucesso para user: {}", user_id);
    Ok(user)
}

pub async fn delete_user(db_pool: &SqlitePool, user_id: i64) -> AppResult<()> {
    get_user(db_pool, user_id).await?;
    sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(user_id)
        .execute(db_pool)
        .await
        .map_err(|e| map_delete_error(e, "O utilizador"))?;
    tracing::info!("Utilizador {} removido.", user_id);
    Ok(())
}
