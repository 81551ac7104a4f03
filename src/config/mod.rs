pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of the three store files. Passed into the adapters explicitly;
/// nothing else in the crate knows about paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_volunteers_file")]
    pub volunteers_file: String,

    #[serde(default = "default_deployed_file")]
    pub deployed_file: String,

    #[serde(default = "default_sites_file")]
    pub sites_file: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_volunteers_file() -> String {
    "volunteers.txt".to_string()
}

fn default_deployed_file() -> String {
    "deployed_volunteers.txt".to_string()
}

fn default_sites_file() -> String {
    "relief_sites.txt".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            volunteers_file: default_volunteers_file(),
            deployed_file: default_deployed_file(),
            sites_file: default_sites_file(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<String>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn volunteers_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.volunteers_file)
    }

    pub fn deployed_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.deployed_file)
    }

    pub fn sites_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.sites_file)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("volunteers_file", &self.volunteers_file)?;
        validate_path("deployed_file", &self.deployed_file)?;
        validate_path("sites_file", &self.sites_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths_match_data_layout() {
        let config = StoreConfig::default();
        assert_eq!(
            config.volunteers_path(),
            PathBuf::from("data/volunteers.txt")
        );
        assert_eq!(
            config.deployed_path(),
            PathBuf::from("data/deployed_volunteers.txt")
        );
        assert_eq!(config.sites_path(), PathBuf::from("data/relief_sites.txt"));
    }

    #[test]
    fn test_from_toml_file_with_partial_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stores.toml");
        fs::write(
            &path,
            "data_dir = \"/var/relief\"\nsites_file = \"sites.tbl\"\n",
        )
        .unwrap();

        let config = StoreConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.data_dir, "/var/relief");
        assert_eq!(config.sites_file, "sites.tbl");
        assert_eq!(config.volunteers_file, "volunteers.txt");
    }

    #[test]
    fn test_validation_rejects_empty_dir() {
        let config = StoreConfig::default().with_data_dir("");
        assert!(config.validate().is_err());
    }
}
