pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_property_table;
mod m20251020_000003_create_booking_table;
mod m20251020_000004_create_feedback_table;
mod m20251021_000005_seed_initial_properties;
mod m20251022_000006_add_booking_lookup_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_property_table::Migration),
            Box::new(m20251020_000003_create_booking_table::Migration),
            Box::new(m20251020_000004_create_feedback_table::Migration),
            Box::new(m20251021_000005_seed_initial_properties::Migration),
            Box::new(m20251022_000006_add_booking_lookup_index::Migration),
        ]
    }
}
