//! Catalog sources: where candidate templates come from.
//!
//! The fallback is explicit rather than an inline existence check so each
//! source can be exercised on its own.

use std::path::PathBuf;

use crate::prelude::*;

/// Department groups we expect a templates file for. A missing file is fine,
/// a secretariat may not have shipped templates yet.
pub static DEPARTMENT_GROUPS: &[&str] = &[
    "saude",
    "educacao",
    "assistencia-social",
    "esportes",
    "cultura",
    "meio-ambiente",
    "planejamento-urbano",
    "obras",
    "habitacao",
];

#[async_trait]
pub trait CatalogSource {
    /// Operator-facing name for logging
    fn name(&self) -> String;
    async fn load(&self) -> Result<Vec<ServiceTemplate>, Error>;
}

/// Reads one JSON array of templates per department group from a directory
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> String {
        format!("templates directory {:?}", self.dir)
    }

    async fn load(&self) -> Result<Vec<ServiceTemplate>, Error> {
        let mut res = Vec::new();
        for group in DEPARTMENT_GROUPS {
            let path = self.dir.join(format!("{}.json", group));
            if !path.exists() {
                debug!("No templates file for group '{}', skipping", group);
                continue;
            }
            let contents = tokio::fs::read_to_string(&path).await?;
            // a malformed file aborts the whole run, the loader only ever runs
            // offline under operator control
            let templates: Vec<ServiceTemplate> = serde_json::from_str(&contents)
                .map_err(|err| Error::ConfigParse(format!("Failed to parse {:?}: {}", path, err)))?;
            info!("Loaded {} templates from {:?}", templates.len(), path);
            res.extend(templates);
        }
        Ok(res)
    }
}

/// The hard-coded literal catalog compiled into the binary
pub struct EmbeddedSource;

#[async_trait]
impl CatalogSource for EmbeddedSource {
    fn name(&self) -> String {
        "embedded catalog".to_string()
    }

    async fn load(&self) -> Result<Vec<ServiceTemplate>, Error> {
        Ok(super::builtin::catalog())
    }
}

/// Assemble the full candidate catalog. Uses the configured templates
/// directory when it yields at least one record, otherwise falls back to the
/// embedded list. Order is group iteration order, then file order; duplicate
/// codes across sources are not detected here.
pub async fn load_catalog(config: &Configuration) -> Result<Vec<ServiceTemplate>, Error> {
    if let Some(dir) = &config.templates_dir {
        let source = FileSource::new(dir);
        let templates = source.load().await?;
        if !templates.is_empty() {
            info!("Using {} ({} candidates)", source.name(), templates.len());
            return Ok(templates);
        }
        warn!(
            "{} produced no templates, falling back to the embedded catalog",
            source.name()
        );
    }
    let source = EmbeddedSource;
    let templates = source.load().await?;
    info!("Using {} ({} candidates)", source.name(), templates.len());
    Ok(templates)
}
