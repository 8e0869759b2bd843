use std::path::PathBuf;

use crate::prelude::*;
use crate::DEFAULT_CONFIG_FILE;

fn default_database_file() -> String {
    "digiurban.sqlite".to_string()
}

fn default_tenant() -> String {
    "demo".to_string()
}

#[derive(Serialize, Deserialize, Debug, JsonSchema)]
pub struct Configuration {
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Which municipality's partition of the store to seed
    #[serde(default = "default_tenant")]
    pub tenant: String,

    /// Directory holding one JSON file of templates per department group, eg
    /// `saude.json`. When unset (or empty) the embedded catalog is used.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            tenant: default_tenant(),
            templates_dir: None,
        }
    }
}

impl Configuration {
    pub async fn new(filename: Option<PathBuf>) -> Result<Self, Error> {
        let filename = filename.unwrap_or(PathBuf::from(DEFAULT_CONFIG_FILE));
        if !filename.exists() {
            return Err(Error::ConfigFileNotFound(
                filename.to_string_lossy().to_string(),
            ));
        }
        debug!("Loading config from {:?}", filename);
        Self::new_from_string(&tokio::fs::read_to_string(filename).await?)
    }

    pub fn new_from_string(config: &str) -> Result<Self, Error> {
        serde_json::from_str(config).map_err(Error::from)
    }

    #[cfg(test)]
    pub async fn load_test_config() -> Self {
        Self::new_from_string(
            &tokio::fs::read_to_string("digiurban.example.json")
                .await
                .expect("Failed to load example config"),
        )
        .expect("Failed to parse example config")
    }
}
