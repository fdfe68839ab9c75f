// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, net::SocketAddr};

/// Configuração lida do ambiente; o `.env` é carregado antes, em `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    // Origem do frontend autorizada no CORS
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://ponderada.db".to_string());
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5)?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 3000)?;
        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            cors_origin,
        })
    }

    pub fn socket_addr(&self) -> AppResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::ConfigError(format!("HOST/PORT inválidos: {}", e)))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::ConfigError(format!("{} inválida ('{}'): {}", name, raw, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_addr_joins_host_and_port() {
        let config = Config {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            host: "127.0.0.1".into(),
            port: 8080,
            cors_origin: "http://localhost:5173".into(),
        };
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn from_env_rejects_non_numeric_pool_size() {
        env::set_var("DATABASE_MAX_CONNECTIONS", "muitas");
        let result = Config::from_env();
        env::remove_var("DATABASE_MAX_CONNECTIONS");

        match result {
            Err(AppError::ConfigError(msg)) => assert!(msg.contains("DATABASE_MAX_CONNECTIONS")),
            other => panic!("esperava ConfigError, veio {:?}", other),
        }
    }

    #[test]
    fn bad_host_is_a_config_error() {
        let config = Config {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            host: "not a host".into(),
            port: 3000,
            cors_origin: String::new(),
        };
        assert!(matches!(config.socket_addr(), Err(AppError::ConfigError(_))));
    }
}
