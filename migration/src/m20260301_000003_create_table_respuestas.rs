use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Respuestas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Respuestas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Respuestas::Mensaje).text().not_null())
                    .col(ColumnDef::new(Respuestas::TopicoId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Respuestas::FechaCreacion)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Respuestas::AutorId).big_integer())
                    .col(
                        ColumnDef::new(Respuestas::Solucion)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_respuestas_topico_id")
                            .from(Respuestas::Table, Respuestas::TopicoId)
                            .to(Topicos::Table, Topicos::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_respuestas_autor_id")
                            .from(Respuestas::Table, Respuestas::AutorId)
                            .to(Perfiles::Table, Perfiles::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_respuestas_topico_id
                ON respuestas (topico_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_respuestas_topico_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(Respuestas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Respuestas {
    Table,
    Id,
    Mensaje,
    TopicoId,
    FechaCreacion,
    AutorId,
    Solucion,
}

#[derive(DeriveIden)]
enum Topicos {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Perfiles {
    Table,
    Id,
}
