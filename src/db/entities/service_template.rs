use sea_orm::entity::prelude::*;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The natural key; globally unique
    #[sea_orm(unique)]
    pub code: String,
    pub tenant: String,
    pub department_id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub kind: ServiceKind,
    pub module_type: Option<String>,
    pub form_schema: Option<Json>,
    pub requires_documents: bool,
    pub required_documents: Option<Json>,
    pub estimated_days: Option<i32>,
    pub priority: i32,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_active: bool,
    pub version: i32,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_delete = "Cascade"
    )]
    Department,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn find_by_code(code: &str, db: &DatabaseConnection) -> Result<Option<Model>, Error> {
        Entity::find()
            .filter(Column::Code.eq(code))
            .one(db)
            .await
            .map_err(|err| {
                error!(
                    "Query failed while looking up service template '{}': {:?}",
                    code, err
                );
                err.into()
            })
    }

    /// Builds the stored shape of a fresh candidate
    pub fn from_template(
        template: &ServiceTemplate,
        department_id: Uuid,
        tenant: &str,
    ) -> Result<Model, Error> {
        Ok(Model {
            id: Uuid::new_v4(),
            code: template.code.clone(),
            tenant: tenant.to_string(),
            department_id,
            name: template.name.clone(),
            description: template.description.clone(),
            category: template.category.clone(),
            kind: template.kind,
            module_type: template.module_type.clone(),
            form_schema: template.form_schema_json()?,
            requires_documents: template.requires_documents,
            required_documents: template.required_documents_json()?,
            estimated_days: template.estimated_days,
            priority: template.priority,
            icon: template.icon.clone(),
            color: template.color.clone(),
            is_active: true,
            version: 1,
            last_updated: Utc::now(),
        })
    }
}
