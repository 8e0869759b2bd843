use sea_orm_migration::prelude::*;

use super::m20250301_create_service_template_table::ServiceTemplate;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250315_add_template_code_index" // Make sure this matches with the file name
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // the code is the natural key the reconciler looks records up by
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_service_template_code")
                    .table(ServiceTemplate::Table)
                    .col(ServiceTemplate::Code)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_service_template_code")
                    .table(ServiceTemplate::Table)
                    .to_owned(),
            )
            .await
    }
}
