use crate::topic::application::domain::entities::TopicFields;

//
// ──────────────────────────────────────────────────────────
// Topic Command (create and update share the same payload)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicField {
    Title,
    Message,
    Status,
    Author,
    Course,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: TopicField,
    pub message: &'static str,
}

pub const BLANK_FIELD_MESSAGE: &str = "no debe estar vacío";

/// Violations are listed in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct TopicCommandError(pub Vec<FieldViolation>);

impl TopicCommandError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCommand {
    fields: TopicFields,
}

impl TopicCommand {
    /// Every field is required and must contain a non-whitespace character.
    /// Values are kept as sent; duplicate detection compares them verbatim.
    pub fn new(
        title: Option<String>,
        message: Option<String>,
        status: Option<String>,
        author: Option<String>,
        course: Option<String>,
    ) -> Result<Self, TopicCommandError> {
        let mut violations = Vec::new();

        let title = require(TopicField::Title, title, &mut violations);
        let message = require(TopicField::Message, message, &mut violations);
        let status = require(TopicField::Status, status, &mut violations);
        let author = require(TopicField::Author, author, &mut violations);
        let course = require(TopicField::Course, course, &mut violations);

        if !violations.is_empty() {
            return Err(TopicCommandError(violations));
        }

        Ok(Self {
            fields: TopicFields {
                title,
                message,
                status,
                author,
                course,
            },
        })
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn message(&self) -> &str {
        &self.fields.message
    }

    pub fn fields(&self) -> &TopicFields {
        &self.fields
    }

    pub fn into_fields(self) -> TopicFields {
        self.fields
    }
}

fn require(
    field: TopicField,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            violations.push(FieldViolation {
                field,
                message: BLANK_FIELD_MESSAGE,
            });
            String::new()
        }
    }
}
