pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_members;
mod m20260801_000002_create_analyses;
mod m20260801_000003_create_testimonials;
mod m20260801_000004_create_admin_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_members::Migration),
            Box::new(m20260801_000002_create_analyses::Migration),
            Box::new(m20260801_000003_create_testimonials::Migration),
            Box::new(m20260801_000004_create_admin_logs::Migration),
        ]
    }
}
