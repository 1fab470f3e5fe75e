pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalSpool, toml_config::TomlConfig};

pub use crate::core::{engine::SummaryEngine, pipeline::UploadPipeline};
pub use domain::model::{Envelope, RawUpload, SummaryReport};
pub use utils::error::{PipelineError, Result};
