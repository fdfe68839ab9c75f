// src/models/class_schedule.rs
use super::patch;
use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeSet;

/// Dia da semana de um horário. A ordem das variantes define a ordem
/// em que os dias são guardados/devolvidos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Horário recorrente de uma matrícula. No máximo um por `student_class_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClassSchedule {
    pub id: i64,
    pub student_class_id: i64,
    // Guardado como array JSON em TEXT
    #[sqlx(json)]
    pub day_of_week: BTreeSet<DayOfWeek>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: i64,
    pub frequency: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn default_one() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct CreateClassSchedulePayload {
    pub student_class_id: i64,
    pub day_of_week: BTreeSet<DayOfWeek>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default = "default_one")]
    pub status: i64,
    #[serde(default = "default_one")]
    pub frequency: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateClassSchedulePayload {
    pub student_class_id: Option<i64>,
    pub day_of_week: Option<BTreeSet<DayOfWeek>>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: Option<i64>,
    pub frequency: Option<i64>,
}

impl ClassSchedule {
    pub fn apply(&mut self, changes: UpdateClassSchedulePayload) {
        patch(&mut self.student_class_id, changes.student_class_id);
        patch(&mut self.day_of_week, changes.day_of_week);
        patch(&mut self.start_time, changes.start_time);
        patch(&mut self.end_time, changes.end_time);
        patch(&mut self.status, changes.status);
        patch(&mut self.frequency, changes.frequency);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekdays_collapse_duplicates_and_sort() {
        let payload: CreateClassSchedulePayload = serde_json::from_str(
            r#"{
                "student_class_id": 1,
                "day_of_week": ["friday", "monday", "friday"],
                "start_time": "14:00:00",
                "end_time": "15:30:00"
            }"#,
        )
        .unwrap();

        let days: Vec<_> = payload.day_of_week.iter().copied().collect();
        assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Friday]);
        assert_eq!(payload.status, 1);
        assert_eq!(payload.frequency, 1);
        assert_eq!(
            serde_json::to_value(&payload.day_of_week).unwrap(),
            serde_json::json!(["monday", "friday"])
        );
    }

    #[test]
    fn unknown_weekday_is_rejected() {
        let result = serde_json::from_str::<BTreeSet<DayOfWeek>>(r#"["funday"]"#);
        assert!(result.is_err());
    }
}
