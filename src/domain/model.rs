use crate::utils::error::PipelineError;
use serde::{Deserialize, Serialize};

/// One uploaded file as handed over by the caller: the declared media type
/// plus the raw bytes. Presence is modeled by the caller passing `Option`.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// An admitted upload, persisted to transient spool storage until release.
#[derive(Debug, Clone)]
pub struct SpooledArtifact {
    pub spool_key: String,
    pub media_type: String,
    pub size: u64,
}

/// One day's entry as read from the uploaded JSON. Fields stay optional:
/// records are taken as they come and checked during aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepRecord {
    pub pv: Option<i64>,
    pub kk: Option<i64>,
    pub vvvv: Option<i64>,
    pub askeleet: Option<i64>,
}

impl StepRecord {
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            pv: value.get("pv").and_then(serde_json::Value::as_i64),
            kk: value.get("kk").and_then(serde_json::Value::as_i64),
            vvvv: value.get("vvvv").and_then(serde_json::Value::as_i64),
            askeleet: value.get("askeleet").and_then(serde_json::Value::as_i64),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedBatch {
    pub raw_text: String,
    pub records: Vec<StepRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub month_name: String,
    pub year: i64,
    pub total_steps: i64,
    pub average_steps: String,
    pub raw_text: String,
}

/// The two shapes the rendering layer receives: a report, or one
/// human-readable failure message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Report(SummaryReport),
    Failure { message: String },
}

impl Envelope {
    pub fn failure(error: PipelineError) -> Self {
        Self::Failure {
            message: error.to_string(),
        }
    }
}
