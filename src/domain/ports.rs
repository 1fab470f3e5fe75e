use crate::domain::model::{ParsedBatch, RawUpload, SpooledArtifact, SummaryReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn read_file(&self, name: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn remove_file(&self, name: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn accepted_media_type(&self) -> &str;
    fn max_upload_bytes(&self) -> u64;
    fn spool_dir(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn admit(&self, upload: Option<RawUpload>) -> Result<SpooledArtifact>;
    async fn parse(&self, artifact: &SpooledArtifact) -> Result<ParsedBatch>;
    async fn summarize(&self, batch: ParsedBatch) -> Result<SummaryReport>;
    async fn release(&self, artifact: Option<SpooledArtifact>) -> Result<()>;
}
