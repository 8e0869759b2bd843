use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250301_create_department_table" // Make sure this matches with the file name
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .col(
                        ColumnDef::new(Department::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Department::Code).string().not_null())
                    .col(ColumnDef::new(Department::Name).string().not_null())
                    .col(ColumnDef::new(Department::Tenant).string().not_null())
                    .to_owned(),
            )
            .await?;

        // department lookups are always by (tenant, code)
        manager
            .create_index(
                Index::create()
                    .name("idx_department_tenant_code")
                    .table(Department::Table)
                    .col(Department::Tenant)
                    .col(Department::Code)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Department {
    Table,
    Id,
    Code,
    Name,
    Tenant,
}
