// src/models/mod.rs
pub mod class;
pub mod class_schedule;
pub mod demographics;
pub mod gf;
pub mod instance_class;
pub mod leader;
pub mod ong;
pub mod professor;
pub mod professor_class;
pub mod responsable;
pub mod student;
pub mod student_class;
pub mod student_presence;
pub mod user;

use serde::{Deserialize, Deserializer, Serialize};

/// Distingue "campo ausente" (None) de "campo a null" (Some(None)) nos payloads
/// de atualização. Usar sempre com `#[serde(default)]`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Substitui o valor atual apenas quando o payload trouxe o campo.
pub(crate) fn patch<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Resposta de confirmação dos DELETE.
#[derive(Debug, Serialize)]
pub struct DeletedMessage {
    pub message: String,
}

impl DeletedMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
