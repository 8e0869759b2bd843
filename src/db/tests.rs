use crate::log::setup_logging;
use crate::prelude::*;

/// Departments and their display names for the demo municipality. Matches the
/// department codes the embedded catalog references.
pub(crate) static TEST_DEPARTMENTS: &[(&str, &str)] = &[
    ("SAUDE", "Secretaria de Saúde"),
    ("EDUCACAO", "Secretaria de Educação"),
    ("ASSISTENCIA_SOCIAL", "Secretaria de Assistência Social"),
    ("CULTURA", "Secretaria de Cultura"),
    ("MEIO_AMBIENTE", "Secretaria de Meio Ambiente"),
    ("ESPORTES", "Secretaria de Esportes"),
];

/// In-memory database plus the example config, with departments provisioned.
/// Department provisioning itself is out of scope for the seeder, so the
/// harness stands in for the tenant-provisioning service.
pub(crate) async fn test_setup() -> Result<(Arc<DatabaseConnection>, Configuration), Error> {
    let _ = setup_logging(true, false);

    let db = Arc::new(
        crate::db::test_connect()
            .await
            .expect("Failed to connect to database"),
    );

    let config = Configuration::load_test_config().await;

    seed_departments(db.as_ref(), &config.tenant).await?;

    Ok((db, config))
}

pub(crate) async fn seed_departments(db: &DatabaseConnection, tenant: &str) -> Result<(), Error> {
    for (code, name) in TEST_DEPARTMENTS {
        let department = entities::department::Model {
            id: Uuid::new_v4(),
            code: ToString::to_string(code),
            name: ToString::to_string(name),
            tenant: tenant.to_string(),
        };
        entities::department::Entity::insert(department.into_active_model())
            .exec(db)
            .await?;
    }
    Ok(())
}

#[tokio::test]
async fn test_connect_with_real_db() {
    let _ = setup_logging(true, false);

    let tempfile = tempfile::NamedTempFile::new().expect("Failed to create tempfile");
    let config = Configuration {
        database_file: tempfile
            .path()
            .to_str()
            .expect("Failed to get filepath")
            .to_string(),
        ..Default::default()
    };

    let db = crate::db::connect(&config)
        .await
        .expect("Failed to connect to database");

    seed_departments(&db, &config.tenant)
        .await
        .expect("Failed to seed departments");

    let found = entities::department::Model::find_by_code("SAUDE", &config.tenant, &db)
        .await
        .expect("Failed to query department");
    assert!(found.is_some());

    db.close().await.expect("Failed to close database");
}

#[tokio::test]
async fn test_migrations_are_rerunnable() {
    // connect runs the migrations; a second connect against the same file must
    // not fail on already-applied migrations
    let tempfile = tempfile::NamedTempFile::new().expect("Failed to create tempfile");
    let config = Configuration {
        database_file: tempfile
            .path()
            .to_str()
            .expect("Failed to get filepath")
            .to_string(),
        ..Default::default()
    };

    let db = crate::db::connect(&config)
        .await
        .expect("Failed to connect to database");
    db.close().await.expect("Failed to close database");

    let db = crate::db::connect(&config)
        .await
        .expect("Failed to reconnect to database");
    db.close().await.expect("Failed to close database");
}
