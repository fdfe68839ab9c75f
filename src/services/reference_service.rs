// src/services/reference_service.rs
//! Verificação de chaves estrangeiras antes de INSERT/UPDATE.
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Tabelas que podem ser alvo de uma chave estrangeira.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Ongs,
    Users,
    Professors,
    Responsables,
    Students,
    Classes,
    StudentClasses,
    InstanceClasses,
}

impl Table {
    fn name(self) -> &'static str {
        match self {
            Table::Ongs => "ongs",
            Table::Users => "users",
            Table::Professors => "professors",
            Table::Responsables => "responsables",
            Table::Students => "students",
            Table::Classes => "classes",
            Table::StudentClasses => "student_classes",
            Table::InstanceClasses => "instance_classes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Table::Ongs => "ONG",
            Table::Users => "Utilizador",
            Table::Professors => "Professor",
            Table::Responsables => "Responsável",
            Table::Students => "Aluno",
            Table::Classes => "Turma",
            Table::StudentClasses => "Matrícula",
            Table::InstanceClasses => "Instância de aula",
        }
    }
}

/// Uma chave estrangeira de um payload: (campo, tabela alvo, valor).
pub type ForeignKey<'a> = (&'a str, Table, i64);

pub async fn exists(db_pool: &SqlitePool, table: Table, id: i64) -> AppResult<bool> {
    // O nome da tabela vem sempre do enum, nunca do pedido
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1)", table.name());
    let found: i64 = sqlx::query_scalar(&sql).bind(id).fetch_one(db_pool).await?;
    Ok(found != 0)
}

/// Garante que todas as referências existem; a primeira em falta gera
/// `InvalidReference` com o nome do campo.
pub async fn ensure_references(db_pool: &SqlitePool, keys: &[ForeignKey<'_>]) -> AppResult<()> {
    for &(field, table, id) in keys {
        if !exists(db_pool, table, id).await? {
            tracing::warn!("Referência inválida: {} = {} ({} inexistente)", field, id, table.name());
            return Err(AppError::InvalidReference(format!(
                "{} inválido: {} {} não encontrado(a).",
                field,
                table.label(),
                id
            )));
        }
    }
    Ok(())
}
