use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(super::migrations::m20250301_create_department_table::Migration),
            Box::new(super::migrations::m20250301_create_service_template_table::Migration),
            Box::new(super::migrations::m20250315_add_template_code_index::Migration),
        ]
    }
}
