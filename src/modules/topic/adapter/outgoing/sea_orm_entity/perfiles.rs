use crate::topic::application::domain::entities::Profile;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "perfiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub nombre: String,
}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Profile {
            id: model.id,
            name: model.nombre,
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
