pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 500 * 1024;
pub const DEFAULT_MEDIA_TYPE: &str = "application/json";
pub const DEFAULT_SPOOL_DIR: &str = "./tmp";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "step-summary")]
#[command(about = "Summarize a monthly step-count JSON upload")]
pub struct CliConfig {
    /// File to ingest as the uploaded artifact
    pub input: std::path::PathBuf,

    #[arg(long, default_value = DEFAULT_MEDIA_TYPE)]
    pub media_type: String,

    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: u64,

    #[arg(long, default_value = DEFAULT_SPOOL_DIR)]
    pub spool_dir: String,

    /// Optional TOML settings file overriding the flags above
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn accepted_media_type(&self) -> &str {
        &self.media_type
    }

    fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    fn spool_dir(&self) -> &str {
        &self.spool_dir
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("media_type", &self.media_type)?;
        validation::validate_positive_number("max_upload_bytes", self.max_upload_bytes, 1)?;
        validation::validate_path("spool_dir", &self.spool_dir)?;
        Ok(())
    }
}
