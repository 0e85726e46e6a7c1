use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::Attachment;

/// Staging area for files uploaded with a turn.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn put(&self, file_name: &str, data: Bytes) -> Result<Attachment, AttachmentStoreError>;

    async fn read(&self, attachment: &Attachment) -> Result<Vec<u8>, AttachmentStoreError>;

    /// Deletes a staged file. Removing an already missing file succeeds.
    async fn remove(&self, attachment: &Attachment) -> Result<(), AttachmentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentStoreError {
    #[error("attachment not found: {0}")]
    NotFound(String),
    #[error("storage failed: {0}")]
    Storage(String),
}
