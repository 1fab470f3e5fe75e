use crate::core::{
    ConfigProvider, ParsedBatch, Pipeline, RawUpload, SpooledArtifact, StepRecord, Storage,
    SummaryReport,
};
use crate::domain::months::month_name;
use crate::utils::error::{PipelineError, Result};
use uuid::Uuid;

pub struct UploadPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> UploadPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn reject(reason: impl Into<String>) -> PipelineError {
        PipelineError::Admission {
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for UploadPipeline<S, C> {
    async fn admit(&self, upload: Option<RawUpload>) -> Result<SpooledArtifact> {
        let Some(upload) = upload else {
            return Err(Self::reject("file missing"));
        };

        if upload.media_type != self.config.accepted_media_type() {
            tracing::debug!("rejecting upload declared as {}", upload.media_type);
            return Err(Self::reject("invalid file format: JSON files only"));
        }

        let max_bytes = self.config.max_upload_bytes();
        if upload.bytes.len() as u64 > max_bytes {
            return Err(Self::reject(format!(
                "file exceeds the {} KiB upload limit",
                max_bytes / 1024
            )));
        }

        let spool_key = format!("upload-{}.json", Uuid::new_v4());
        self.storage.write_file(&spool_key, &upload.bytes).await?;
        tracing::debug!("spooled {} bytes as {}", upload.bytes.len(), spool_key);

        Ok(SpooledArtifact {
            size: upload.bytes.len() as u64,
            media_type: upload.media_type,
            spool_key,
        })
    }

    async fn parse(&self, artifact: &SpooledArtifact) -> Result<ParsedBatch> {
        let bytes = self.storage.read_file(&artifact.spool_key).await?;
        let raw_text = String::from_utf8(bytes)?;

        // Top level must be an array; the serde message is surfaced as-is.
        let rows: Vec<serde_json::Value> = serde_json::from_str(&raw_text)?;

        // Records are admitted as they come. Missing or non-integer fields
        // stay None here and are reported during aggregation.
        let records = rows.iter().map(StepRecord::from_value).collect();

        Ok(ParsedBatch { raw_text, records })
    }

    async fn summarize(&self, batch: ParsedBatch) -> Result<SummaryReport> {
        let records = &batch.records;
        let first = records.first().ok_or(PipelineError::EmptyDataset)?;

        // Only the first record is inspected for the month/year label.
        let month = first.kk;
        let month_name = month
            .and_then(month_name)
            .ok_or(PipelineError::UnknownMonth { month })?
            .to_string();
        let year = first.vvvv.ok_or(PipelineError::MissingField {
            row: 1,
            field: "vvvv",
        })?;

        let mut total_steps: i64 = 0;
        for (index, record) in records.iter().enumerate() {
            let steps = record.askeleet.ok_or(PipelineError::MissingField {
                row: index + 1,
                field: "askeleet",
            })?;
            total_steps += steps;
        }

        let average = (total_steps as f64 / records.len() as f64).round() as i64;

        tracing::debug!(
            "summarized {} records for {} {}: {} steps",
            records.len(),
            month_name,
            year,
            total_steps
        );

        Ok(SummaryReport {
            month_name,
            year,
            total_steps,
            average_steps: average.to_string(),
            raw_text: batch.raw_text,
        })
    }

    async fn release(&self, artifact: Option<SpooledArtifact>) -> Result<()> {
        let Some(artifact) = artifact else {
            return Ok(());
        };
        self.storage.remove_file(&artifact.spool_key).await?;
        tracing::debug!("released spool entry {}", artifact.spool_key);
        Ok(())
    }
}
