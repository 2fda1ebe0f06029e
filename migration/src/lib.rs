pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_perfiles;
mod m20260301_000002_create_table_topicos;
mod m20260301_000003_create_table_respuestas;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_perfiles::Migration),
            Box::new(m20260301_000002_create_table_topicos::Migration),
            Box::new(m20260301_000003_create_table_respuestas::Migration),
        ]
    }
}
