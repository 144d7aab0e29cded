//! Migrator registering table migrations in foreign-key order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241009_000001_create_pigs;
mod m20241009_000002_create_wolves;
mod m20241009_000003_create_houses;
mod m20241009_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241009_000001_create_pigs::Migration),
            Box::new(m20241009_000002_create_wolves::Migration),
            // houses references pigs
            Box::new(m20241009_000003_create_houses::Migration),
            Box::new(m20241009_000004_add_indexes::Migration),
        ]
    }
}
