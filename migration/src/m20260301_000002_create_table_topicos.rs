use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topicos table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topicos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topicos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Topicos::Titulo).string_len(255).not_null())
                    .col(ColumnDef::new(Topicos::Mensaje).text().not_null())
                    .col(
                        ColumnDef::new(Topicos::FechaCreacion)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Topicos::Status).string_len(50).not_null())
                    .col(ColumnDef::new(Topicos::Autor).string_len(255).not_null())
                    .col(ColumnDef::new(Topicos::Curso).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Filter by course
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topicos_curso
                ON topicos (curso);
                "#,
            )
            .await?;

        // Paginated listing is ordered by creation date
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topicos_fecha_creacion
                ON topicos (fecha_creacion);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topicos_curso;
                DROP INDEX IF EXISTS idx_topicos_fecha_creacion;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topicos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topicos {
    Table,
    Id,
    Titulo,
    Mensaje,
    FechaCreacion,
    Status,
    Autor,
    Curso,
}
