use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::api::{ApiError, FieldError};
use crate::topic::application::{
    domain::entities::{Topic, TopicId},
    ports::{
        incoming::use_cases::{TopicCommand, TopicCommandError, TopicField},
        outgoing::{PageRequest, PageResult, SortDirection, TopicSort, TopicSortProperty},
    },
};

//
// ──────────────────────────────────────────────────────────
// Request DTOs
// ──────────────────────────────────────────────────────────
//

/// Body of `POST /topicos` and `PUT /topicos/{id}`.
///
/// Fields are optional at the serde level so that missing ones are reported
/// by validation together with blank ones. `id` and `fechaCreacion` are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TopicRequest {
    #[schema(example = "Error de compilación")]
    pub titulo: Option<String>,
    #[schema(example = "No compila el proyecto")]
    pub mensaje: Option<String>,
    #[schema(example = "ABIERTO")]
    pub status: Option<String>,
    #[schema(example = "ana")]
    pub autor: Option<String>,
    #[schema(example = "Rust")]
    pub curso: Option<String>,
}

impl TopicRequest {
    pub fn into_command(self) -> Result<TopicCommand, ApiError> {
        TopicCommand::new(
            self.titulo,
            self.mensaje,
            self.status,
            self.autor,
            self.curso,
        )
        .map_err(validation_error)
    }
}

pub fn validation_error(err: TopicCommandError) -> ApiError {
    ApiError::Validation(
        err.violations()
            .iter()
            .map(|v| FieldError::new(wire_name(v.field), v.message))
            .collect(),
    )
}

fn wire_name(field: TopicField) -> &'static str {
    match field {
        TopicField::Title => "titulo",
        TopicField::Message => "mensaje",
        TopicField::Status => "status",
        TopicField::Author => "autor",
        TopicField::Course => "curso",
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index (default 0)
    pub page: Option<i64>,
    /// Page size (default 10, max 2000)
    pub size: Option<i64>,
    /// `property[,asc|desc]`, default `fechaCreacion,asc`
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn into_parts(self) -> Result<(PageRequest, TopicSort), ApiError> {
        let sort = parse_sort(self.sort.as_deref())?;
        Ok((PageRequest::from_raw(self.page, self.size), sort))
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// Exact course name
    pub curso: String,
    /// Calendar year of the creation date
    pub year: i32,
}

pub fn parse_sort(raw: Option<&str>) -> Result<TopicSort, ApiError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(TopicSort::default()),
        Some(raw) => raw,
    };

    let mut parts = raw.split(',').map(str::trim);

    let property = match parts.next().unwrap_or_default() {
        "id" => TopicSortProperty::Id,
        "titulo" => TopicSortProperty::Title,
        "mensaje" => TopicSortProperty::Message,
        "fechaCreacion" => TopicSortProperty::CreatedAt,
        "status" => TopicSortProperty::Status,
        "autor" => TopicSortProperty::Author,
        "curso" => TopicSortProperty::Course,
        other => {
            return Err(ApiError::InvalidParameter(format!(
                "Propiedad de ordenamiento desconocida: {}",
                other
            )))
        }
    };

    let direction = match parts.next() {
        None => SortDirection::Asc,
        Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
        Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        Some(other) => {
            return Err(ApiError::InvalidParameter(format!(
                "Dirección de ordenamiento inválida: {}",
                other
            )))
        }
    };

    if let Some(extra) = parts.next() {
        return Err(ApiError::InvalidParameter(format!(
            "Parámetro de ordenamiento inválido: {}",
            extra
        )));
    }

    Ok(TopicSort {
        property,
        direction,
    })
}

//
// ──────────────────────────────────────────────────────────
// Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    #[schema(example = 1)]
    pub id: TopicId,
    pub titulo: String,
    pub mensaje: String,
    #[schema(value_type = String, example = "2024-03-01T10:15:30.123456")]
    pub fecha_creacion: NaiveDateTime,
    pub status: String,
    pub autor: String,
    pub curso: String,
}

impl From<Topic> for TopicResponse {
    fn from(t: Topic) -> Self {
        Self {
            id: t.id,
            titulo: t.title,
            mensaje: t.message,
            fecha_creacion: t.created_at,
            status: t.status,
            autor: t.author,
            curso: t.course,
        }
    }
}

/// Snapshot returned by `DELETE /topicos/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedTopicResponse {
    pub titulo: String,
    pub mensaje: String,
    pub status: String,
    pub autor: String,
    pub curso: String,
}

impl From<Topic> for DeletedTopicResponse {
    fn from(t: Topic) -> Self {
        Self {
            titulo: t.title,
            mensaje: t.message,
            status: t.status,
            autor: t.author,
            curso: t.course,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicPageResponse {
    pub content: Vec<TopicResponse>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl From<PageResult<Topic>> for TopicPageResponse {
    fn from(page: PageResult<Topic>) -> Self {
        let total_pages = page.total_pages();
        let number = page.page;
        let size = page.size;
        let total_elements = page.total;
        let content: Vec<TopicResponse> = page.items.into_iter().map(TopicResponse::from).collect();

        Self {
            total_elements,
            total_pages,
            number,
            size,
            number_of_elements: content.len(),
            first: number == 0,
            last: number + 1 >= total_pages,
            empty: content.is_empty(),
            content,
        }
    }
}
