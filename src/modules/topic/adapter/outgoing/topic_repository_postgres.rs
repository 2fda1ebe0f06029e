use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

use crate::topic::application::domain::entities::{NewTopic, Topic, TopicFields, TopicId};
use crate::topic::application::ports::outgoing::{TopicRepository, TopicRepositoryError};

// SeaORM entity imports
use super::sea_orm_entity::respuestas::{Column as ReplyColumn, Entity as ReplyEntity};
use super::sea_orm_entity::topicos::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: NewTopic) -> Result<Topic, TopicRepositoryError> {
        let NewTopic { fields, created_at } = data;

        let active = TopicActiveModel {
            titulo: Set(fields.title),
            mensaje: Set(fields.message),
            fecha_creacion: Set(created_at),
            status: Set(fields.status),
            autor: Set(fields.author),
            curso: Set(fields.course),
            ..Default::default()
        };

        let inserted: TopicModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }

    async fn update_topic(
        &self,
        id: TopicId,
        fields: TopicFields,
    ) -> Result<Topic, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: ActiveValue::Unchanged(id),
            titulo: Set(fields.title),
            mensaje: Set(fields.message),
            status: Set(fields.status),
            autor: Set(fields.author),
            curso: Set(fields.course),
            ..Default::default()
        };

        let updated: TopicModel = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
            other => map_db_err(other),
        })?;

        Ok(updated.into())
    }

    async fn delete_topic(&self, id: TopicId) -> Result<(), TopicRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Owned replies go first; the FK cascade covers rows written outside this service.
        ReplyEntity::delete_many()
            .filter(ReplyColumn::TopicoId.eq(id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let result = TopicEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(map_db_err)?;
            return Err(TopicRepositoryError::TopicNotFound);
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(err: DbErr) -> TopicRepositoryError {
    TopicRepositoryError::DatabaseError(err.to_string())
}
