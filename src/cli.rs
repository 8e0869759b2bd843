use std::path::PathBuf;

use clap::*;

use crate::DEFAULT_CONFIG_FILE;

#[derive(Parser, Clone, Default)]
pub struct SharedOpts {
    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    pub debug: Option<bool>,
    #[clap(long, action = clap::ArgAction::SetTrue, help = "Include SQL queries in the logs")]
    pub db_debug: Option<bool>,
    #[clap(short, long, help=format!("Path to the configuration file. Defaults to {}", crate::DEFAULT_CONFIG_FILE), default_value=crate::DEFAULT_CONFIG_FILE)]
    /// Defaults to [crate::DEFAULT_CONFIG_FILE]
    pub config: PathBuf,
}

#[derive(Parser, Clone, Default)]
/// Load the candidate catalog and reconcile it into storage
pub struct Seed {
    #[clap(flatten)]
    pub sharedopts: SharedOpts,
}

#[derive(Parser, Clone, Default)]
/// Show the candidate catalog without touching the database
pub struct ShowCatalog {
    #[clap(flatten)]
    pub sharedopts: SharedOpts,
}

#[derive(Parser, Clone)]
/// Show the parsed configuration
pub struct ShowConfig {
    #[clap(flatten)]
    pub sharedopts: SharedOpts,
    #[clap(short, long)]
    pub json: bool,
}

#[derive(Subcommand, Clone)]
pub enum Actions {
    #[clap(name = "seed")]
    Seed(Seed),
    #[clap(name = "show-catalog")]
    ShowCatalog(ShowCatalog),
    #[clap(name = "show-config")]
    ShowConfig(ShowConfig),
    #[clap(name = "export-config-schema")]
    /// Export a JSON schema for the config file
    ExportConfigSchema,
    #[clap(name = "export-template-schema")]
    /// Export a JSON schema for the per-department template data files
    ExportTemplateSchema,
}

#[derive(Parser, Clone)]
pub struct CliOpts {
    #[command(subcommand)]
    pub action: Actions,
}

impl CliOpts {
    pub fn config(&self) -> PathBuf {
        match &self.action {
            Actions::Seed(opts) => opts.sharedopts.config.clone(),
            Actions::ShowCatalog(opts) => opts.sharedopts.config.clone(),
            Actions::ShowConfig(opts) => opts.sharedopts.config.clone(),
            Actions::ExportConfigSchema | Actions::ExportTemplateSchema => {
                PathBuf::from(DEFAULT_CONFIG_FILE)
            }
        }
    }

    pub fn debug(&self) -> bool {
        match &self.action {
            Actions::Seed(opts) => opts.sharedopts.debug.unwrap_or(false),
            Actions::ShowCatalog(opts) => opts.sharedopts.debug.unwrap_or(false),
            Actions::ShowConfig(opts) => opts.sharedopts.debug.unwrap_or(false),
            Actions::ExportConfigSchema | Actions::ExportTemplateSchema => false,
        }
    }

    pub fn db_debug(&self) -> bool {
        match &self.action {
            Actions::Seed(opts) => opts.sharedopts.db_debug.unwrap_or(false),
            Actions::ShowCatalog(opts) => opts.sharedopts.db_debug.unwrap_or(false),
            Actions::ShowConfig(opts) => opts.sharedopts.db_debug.unwrap_or(false),
            Actions::ExportConfigSchema | Actions::ExportTemplateSchema => false,
        }
    }
}
