use sea_orm::entity::prelude::*;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Stable code, eg "SAUDE"; unique per tenant
    pub code: String,
    pub name: String,
    pub tenant: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_template::Entity")]
    ServiceTemplate,
}

impl Related<super::service_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Department lookup is always tenant-scoped
    pub async fn find_by_code(
        code: &str,
        tenant: &str,
        db: &DatabaseConnection,
    ) -> Result<Option<Model>, Error> {
        Entity::find()
            .filter(Column::Code.eq(code))
            .filter(Column::Tenant.eq(tenant))
            .one(db)
            .await
            .map_err(|err| {
                error!(
                    "Query failed while looking up department '{}': {:?}",
                    code, err
                );
                err.into()
            })
    }
}

#[cfg(test)]
pub(crate) fn test_department(code: &str, tenant: &str) -> Model {
    Model {
        id: Uuid::new_v4(),
        code: code.to_string(),
        name: format!("Secretaria de {}", code),
        tenant: tenant.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, IntoActiveModel};

    use crate::setup_logging;

    #[tokio::test]
    async fn test_department_entity() {
        let _ = setup_logging(true, false);

        let db = crate::db::test_connect()
            .await
            .expect("Failed to connect to database");

        let department = super::test_department("SAUDE", "demo");
        super::Entity::insert(department.clone().into_active_model())
            .exec(&db)
            .await
            .expect("Failed to insert department");

        let found = super::Model::find_by_code("SAUDE", "demo", &db)
            .await
            .expect("Failed to query department")
            .expect("Failed to find department");
        assert_eq!(found.id, department.id);
    }

    #[tokio::test]
    async fn test_department_lookup_is_tenant_scoped() {
        let _ = setup_logging(true, false);

        let db = crate::db::test_connect()
            .await
            .expect("Failed to connect to database");

        let department = super::test_department("SAUDE", "demo");
        super::Entity::insert(department.into_active_model())
            .exec(&db)
            .await
            .expect("Failed to insert department");

        let found = super::Model::find_by_code("SAUDE", "another-town", &db)
            .await
            .expect("Failed to query department");
        assert!(found.is_none());
    }
}
