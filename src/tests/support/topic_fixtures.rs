use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::topic::application::domain::entities::{Topic, TopicFields, TopicId};

pub fn fixed_created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 5, 2)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

pub fn sample_topic(id: TopicId, title: &str) -> Topic {
    Topic {
        id,
        title: title.to_string(),
        message: format!("Mensaje de {}", title),
        created_at: fixed_created_at(),
        status: "ABIERTO".to_string(),
        author: "ana".to_string(),
        course: "Rust".to_string(),
    }
}

pub fn sample_fields(title: &str, course: &str) -> TopicFields {
    TopicFields {
        title: title.to_string(),
        message: format!("Mensaje de {}", title),
        status: "ABIERTO".to_string(),
        author: "ana".to_string(),
        course: course.to_string(),
    }
}

/// Request body accepted by create and update.
pub fn valid_topic_json(title: &str) -> Value {
    json!({
        "titulo": title,
        "mensaje": format!("Mensaje de {}", title),
        "status": "ABIERTO",
        "autor": "ana",
        "curso": "Rust"
    })
}

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}
