use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

/// Filesystem spool used by the CLI driver. Entries live under one base
/// directory and are removed on release.
#[derive(Debug, Clone)]
pub struct LocalSpool {
    base_path: String,
}

impl LocalSpool {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalSpool {
    async fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(name);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn remove_file(&self, name: &str) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);
        tokio::fs::remove_file(full_path).await?;
        Ok(())
    }
}
