// src/services/mod.rs
pub mod auth_service;
pub mod class_schedule_service;
pub mod class_service;
pub mod gf_service;
pub mod instance_class_service;
pub mod leader_service;
pub mod ong_service;
pub mod professor_class_service;
pub mod professor_service;
pub mod reference_service;
pub mod responsable_service;
pub mod student_class_service;
pub mod student_presence_service;
pub mod student_service;
pub mod user_service;

use crate::models::demographics::Demographics;
use sqlx::{query::QueryAs, sqlite::SqliteArguments, Sqlite};

/// Liga os 10 campos demográficos, pela ordem das colunas
/// (gender, civil_state, race, birthday, rg, cpf, telephone, state, city, address).
pub(crate) fn bind_demographics<'q, O>(
    query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    d: &'q Demographics,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    query
        .bind(d.gender)
        .bind(d.civil_state)
        .bind(d.race)
        .bind(d.birthday)
        .bind(&d.rg)
        .bind(&d.cpf)
        .bind(&d.telephone)
        .bind(d.state)
        .bind(&d.city)
        .bind(&d.address)
}
