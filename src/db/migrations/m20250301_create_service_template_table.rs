use sea_orm::Iterable;
use sea_orm_migration::prelude::*;

use super::m20250301_create_department_table::Department;
use crate::catalog::ServiceKind;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20250301_create_service_template_table" // Make sure this matches with the file name
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTemplate::Table)
                    .col(
                        ColumnDef::new(ServiceTemplate::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceTemplate::Code).string().not_null())
                    .col(ColumnDef::new(ServiceTemplate::Tenant).string().not_null())
                    .col(
                        ColumnDef::new(ServiceTemplate::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceTemplate::Name).string().not_null())
                    .col(
                        ColumnDef::new(ServiceTemplate::Description)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTemplate::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTemplate::Kind)
                            .enumeration(Alias::new("kind"), ServiceKind::iter())
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceTemplate::ModuleType).string())
                    .col(ColumnDef::new(ServiceTemplate::FormSchema).json())
                    .col(
                        ColumnDef::new(ServiceTemplate::RequiresDocuments)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceTemplate::RequiredDocuments).json())
                    .col(ColumnDef::new(ServiceTemplate::EstimatedDays).integer())
                    .col(
                        ColumnDef::new(ServiceTemplate::Priority)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ServiceTemplate::Icon).string())
                    .col(ColumnDef::new(ServiceTemplate::Color).string())
                    .col(
                        ColumnDef::new(ServiceTemplate::IsActive)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTemplate::Version)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ServiceTemplate::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_template_department")
                            .from(ServiceTemplate::Table, ServiceTemplate::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceTemplate::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ServiceTemplate {
    Table,
    Id,
    Code,
    Tenant,
    DepartmentId,
    Name,
    Description,
    Category,
    Kind,
    ModuleType,
    FormSchema,
    RequiresDocuments,
    RequiredDocuments,
    EstimatedDays,
    Priority,
    Icon,
    Color,
    IsActive,
    Version,
    LastUpdated,
}
