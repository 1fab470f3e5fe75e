use crate::config::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MEDIA_TYPE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PipelineError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub upload: UploadConfig,
    pub spool: SpoolConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: Option<u64>,
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolConfig {
    pub dir: String,
}

impl TomlConfig {
    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PipelineError::Config {
            message: e.to_string(),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn accepted_media_type(&self) -> &str {
        self.upload.media_type.as_deref().unwrap_or(DEFAULT_MEDIA_TYPE)
    }

    fn max_upload_bytes(&self) -> u64 {
        self.upload.max_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    fn spool_dir(&self) -> &str {
        &self.spool.dir
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_bytes) = self.upload.max_bytes {
            validation::validate_positive_number("upload.max_bytes", max_bytes, 1)?;
        }
        if let Some(media_type) = &self.upload.media_type {
            validation::validate_non_empty_string("upload.media_type", media_type)?;
        }
        validation::validate_path("spool.dir", &self.spool.dir)?;
        Ok(())
    }
}
