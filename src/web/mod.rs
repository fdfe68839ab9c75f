// src/web/mod.rs
pub mod class_handlers;
pub mod class_schedule_handlers;
pub mod extract;
pub mod gf_handlers;
pub mod instance_class_handlers;
pub mod leader_handlers;
pub mod ong_handlers;
pub mod professor_class_handlers;
pub mod professor_handlers;
pub mod responsable_handlers;
pub mod routes;
pub mod student_class_handlers;
pub mod student_handlers;
pub mod student_presence_handlers;
pub mod user_handlers;
