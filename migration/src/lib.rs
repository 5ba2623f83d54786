pub use sea_orm_migration::prelude::*;

mod m20250412_000001_create_dashboard_tables;
mod m20250508_000001_add_meeting_record_url;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250412_000001_create_dashboard_tables::Migration),
            Box::new(m20250508_000001_add_meeting_record_url::Migration),
        ]
    }
}
