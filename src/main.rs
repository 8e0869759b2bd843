use std::process::ExitCode;

use clap::Parser;
use schemars::schema_for;
use sea_orm::DatabaseConnection;

use digiurban_catalog::catalog::source::load_catalog;
use digiurban_catalog::catalog::ServiceTemplate;
use digiurban_catalog::cli::{Actions, CliOpts};
use digiurban_catalog::config::Configuration;
use digiurban_catalog::errors::Error;
use digiurban_catalog::prelude::*;
use digiurban_catalog::setup_logging;
use digiurban_catalog::{db, reconcile, report};

async fn seed(
    db: &DatabaseConnection,
    config: &Configuration,
    catalog: &[ServiceTemplate],
) -> Result<(), Error> {
    let summary = reconcile::reconcile_catalog(db, &config.tenant, catalog).await?;
    report::print_summary(&summary, catalog);

    let totals = report::category_totals(db, &config.tenant).await?;
    report::print_category_totals(&totals);
    Ok(())
}

async fn run_seed(config: &Configuration) -> Result<(), ExitCode> {
    let catalog = load_catalog(config).await.map_err(|err| {
        error!("Failed to load catalog: {:?}", err);
        ExitCode::from(1)
    })?;

    let db = db::connect(config).await.map_err(|err| {
        error!("Failed to connect to database: {:?}", err);
        ExitCode::from(1)
    })?;

    let res = seed(&db, config, &catalog).await;

    // the connection gets released on the success and the failure path
    if let Err(err) = db.close().await {
        error!("Failed to close database connection: {:?}", err);
    }

    res.map_err(|err| {
        error!("Seed run failed: {:?}", err);
        ExitCode::from(1)
    })
}

async fn load_config(cli: &CliOpts) -> Result<Configuration, ExitCode> {
    Configuration::new(Some(cli.config())).await.map_err(|err| {
        error!("Failed to load config: {:?}", err);
        ExitCode::from(1)
    })
}

#[tokio::main]
#[cfg(not(tarpaulin_include))] // ignore for code coverage
async fn main() -> Result<(), ExitCode> {
    let cli = CliOpts::parse();
    if let Err(err) = setup_logging(cli.debug(), cli.db_debug()) {
        println!("Failed to setup logging: {:?}", err);
        return Err(ExitCode::from(1));
    };

    match cli.action {
        Actions::Seed(_) => {
            let config = load_config(&cli).await?;
            run_seed(&config).await
        }
        Actions::ShowCatalog(_) => {
            let config = load_config(&cli).await?;
            let catalog = load_catalog(&config).await.map_err(|err| {
                error!("Failed to load catalog: {:?}", err);
                ExitCode::from(1)
            })?;
            for template in &catalog {
                println!(
                    "{} [{}] {} ({})",
                    template.code, template.department_code, template.name, template.kind
                );
            }
            Ok(())
        }
        Actions::ShowConfig(ref show_config) => {
            let config = load_config(&cli).await?;
            if show_config.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&config)
                        .unwrap_or(format!("Failed to serialize config: {:?}", &config))
                );
            } else {
                println!("{:#?}", config);
            }
            Ok(())
        }
        Actions::ExportConfigSchema => {
            println!(
                "{}",
                serde_json::to_string_pretty(&schema_for!(Configuration)).map_err(|err| {
                    error!("Failed to serialize config schema: {:?}", err);
                    ExitCode::from(1)
                })?
            );
            Ok(())
        }
        Actions::ExportTemplateSchema => {
            println!(
                "{}",
                serde_json::to_string_pretty(&schema_for!(Vec<ServiceTemplate>)).map_err(
                    |err| {
                        error!("Failed to serialize template schema: {:?}", err);
                        ExitCode::from(1)
                    }
                )?
            );
            Ok(())
        }
    }
}
