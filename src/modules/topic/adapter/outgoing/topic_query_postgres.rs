use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::topic::application::domain::entities::{Topic, TopicId};
use crate::topic::application::ports::outgoing::{
    PageRequest, PageResult, SortDirection, TopicQuery, TopicQueryError, TopicSort,
    TopicSortProperty,
};

// SeaORM entity
use super::sea_orm_entity::topicos::{Column as TopicColumn, Entity as TopicEntity};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Topic>, TopicQueryError> {
        let models = TopicEntity::find()
            .order_by_asc(TopicColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }

    async fn find_by_id(&self, id: TopicId) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Topic::from))
    }

    async fn find_by_title_and_message(
        &self,
        title: &str,
        message: &str,
    ) -> Result<Option<Topic>, TopicQueryError> {
        let model = TopicEntity::find()
            .filter(TopicColumn::Titulo.eq(title))
            .filter(TopicColumn::Mensaje.eq(message))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Topic::from))
    }

    async fn find_by_course_and_year(
        &self,
        course: &str,
        year: i32,
    ) -> Result<Vec<Topic>, TopicQueryError> {
        let models = TopicEntity::find()
            .filter(TopicColumn::Curso.eq(course))
            .filter(Expr::cust_with_values(
                "EXTRACT(YEAR FROM fecha_creacion) = ?",
                [year],
            ))
            .order_by_asc(TopicColumn::FechaCreacion)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Topic::from).collect())
    }

    async fn list_paginated(
        &self,
        page: PageRequest,
        sort: TopicSort,
    ) -> Result<PageResult<Topic>, TopicQueryError> {
        let query = TopicEntity::find()
            .order_by(sort_column(sort.property), sort_order(sort.direction))
            // Tie-breaker so pages never overlap
            .order_by_asc(TopicColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = query
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: models.into_iter().map(Topic::from).collect(),
            page: page.page,
            size: page.size,
            total,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn sort_column(property: TopicSortProperty) -> TopicColumn {
    match property {
        TopicSortProperty::Id => TopicColumn::Id,
        TopicSortProperty::Title => TopicColumn::Titulo,
        TopicSortProperty::Message => TopicColumn::Mensaje,
        TopicSortProperty::CreatedAt => TopicColumn::FechaCreacion,
        TopicSortProperty::Status => TopicColumn::Status,
        TopicSortProperty::Author => TopicColumn::Autor,
        TopicSortProperty::Course => TopicColumn::Curso,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

fn map_db_err(err: DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(err.to_string())
}
