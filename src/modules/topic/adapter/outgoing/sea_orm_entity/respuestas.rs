use crate::topic::application::domain::entities::Reply;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "respuestas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub mensaje: String,

    pub topico_id: i64,

    pub fecha_creacion: DateTime,

    pub autor_id: Option<i64>,

    pub solucion: bool,
}

impl From<Model> for Reply {
    fn from(model: Model) -> Self {
        Reply {
            id: model.id,
            message: model.mensaje,
            topic_id: model.topico_id,
            created_at: model.fecha_creacion,
            author_id: model.autor_id,
            solution: model.solucion,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topicos::Entity",
        from = "Column::TopicoId",
        to = "super::topicos::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Topicos,

    #[sea_orm(
        belongs_to = "super::perfiles::Entity",
        from = "Column::AutorId",
        to = "super::perfiles::Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Perfiles,
}

impl Related<super::topicos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topicos.def()
    }
}

impl Related<super::perfiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Perfiles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
