use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};
use uuid::Uuid;

use crate::application::ports::{AttachmentStore, AttachmentStoreError};
use crate::domain::Attachment;

/// Stages uploads on the local filesystem under `<base>/<uuid>/<file name>`.
pub struct LocalAttachmentStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAttachmentStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AttachmentStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| AttachmentStoreError::Storage(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AttachmentStoreError::Storage(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

fn safe_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[async_trait]
impl AttachmentStore for LocalAttachmentStore {
    async fn put(&self, file_name: &str, data: Bytes) -> Result<Attachment, AttachmentStoreError> {
        let name = safe_file_name(file_name);
        let key = format!("{}/{}", Uuid::new_v4(), name);
        let size = data.len();

        self.inner
            .put(&StorePath::from(key.as_str()), PutPayload::from(data))
            .await
            .map_err(|e| AttachmentStoreError::Storage(e.to_string()))?;

        tracing::debug!(key = %key, bytes = size, "Attachment staged");
        Ok(Attachment::new(key, name))
    }

    async fn read(&self, attachment: &Attachment) -> Result<Vec<u8>, AttachmentStoreError> {
        let result = self
            .inner
            .get(&StorePath::from(attachment.key.as_str()))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => {
                    AttachmentStoreError::NotFound(attachment.key.clone())
                }
                other => AttachmentStoreError::Storage(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AttachmentStoreError::Storage(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn remove(&self, attachment: &Attachment) -> Result<(), AttachmentStoreError> {
        match self
            .inner
            .delete(&StorePath::from(attachment.key.as_str()))
            .await
        {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => {
                tracing::debug!(key = %attachment.key, "Attachment removed");
                Ok(())
            }
            Err(e) => Err(AttachmentStoreError::Storage(e.to_string())),
        }
    }
}
