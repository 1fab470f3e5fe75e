pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    Envelope, ParsedBatch, RawUpload, SpooledArtifact, StepRecord, SummaryReport,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
