use crate::topic::application::domain::entities::Topic;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topicos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub titulo: String,

    #[sea_orm(column_type = "Text")]
    pub mensaje: String,

    pub fecha_creacion: DateTime,

    pub status: String,

    pub autor: String,

    pub curso: String,
}

impl From<Model> for Topic {
    fn from(model: Model) -> Self {
        Topic {
            id: model.id,
            title: model.titulo,
            message: model.mensaje,
            created_at: model.fecha_creacion,
            status: model.status,
            author: model.autor,
            course: model.curso,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::respuestas::Entity")]
    Respuestas,
}

impl Related<super::respuestas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Respuestas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
