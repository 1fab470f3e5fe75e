use crate::core::{Envelope, Pipeline, RawUpload, SpooledArtifact, SummaryReport};
use crate::utils::error::Result;

pub struct SummaryEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SummaryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs one upload through the pipeline. Every failure is folded into a
    /// Failure envelope, and the spooled artifact is released exactly once
    /// on every exit path.
    pub async fn run(&self, upload: Option<RawUpload>) -> Envelope {
        let mut admitted = None;
        let outcome = self.execute(upload, &mut admitted).await;

        if let Err(err) = self.pipeline.release(admitted).await {
            tracing::warn!("spool release failed: {}", err);
        }

        match outcome {
            Ok(report) => {
                tracing::info!(
                    "summarized {} {}: {} steps total",
                    report.month_name,
                    report.year,
                    report.total_steps
                );
                Envelope::Report(report)
            }
            Err(err) => {
                tracing::error!("pipeline failed: {}", err);
                Envelope::failure(err)
            }
        }
    }

    async fn execute(
        &self,
        upload: Option<RawUpload>,
        admitted: &mut Option<SpooledArtifact>,
    ) -> Result<SummaryReport> {
        let artifact = admitted.insert(self.pipeline.admit(upload).await?);
        let batch = self.pipeline.parse(artifact).await?;
        self.pipeline.summarize(batch).await
    }
}
