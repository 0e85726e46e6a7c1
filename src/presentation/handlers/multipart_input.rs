use axum::extract::Multipart;

use crate::application::ports::AttachmentStore;
use crate::application::services::PipelineError;
use crate::domain::{Attachment, MultimodalInput};

use super::ApiError;

/// Reads a `text` field plus any file fields into a [`MultimodalInput`],
/// staging the files in the attachment store. Files staged before a
/// failing field are removed again.
pub async fn read_multimodal_input(
    attachments: &dyn AttachmentStore,
    mut multipart: Multipart,
) -> Result<MultimodalInput, ApiError> {
    let mut text = None;
    let mut staged = Vec::new();

    if let Err(e) = read_fields(attachments, &mut multipart, &mut text, &mut staged).await {
        discard_staged(attachments, &staged).await;
        return Err(e);
    }

    tracing::debug!(
        has_text = text.is_some(),
        attachments = staged.len(),
        "Multipart input received"
    );

    Ok(MultimodalInput::Structured {
        text,
        attachments: staged,
    })
}

async fn read_fields(
    attachments: &dyn AttachmentStore,
    multipart: &mut Multipart,
    text: &mut Option<String>,
    staged: &mut Vec<Attachment>,
) -> Result<(), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                if data.is_empty() {
                    continue;
                }
                let attachment = attachments
                    .put(&file_name, data)
                    .await
                    .map_err(|e| PipelineError::unavailable("attachment store", e))?;
                staged.push(attachment);
            }
            None if name == "text" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read text: {}", e)))?;
                *text = Some(value);
            }
            None => tracing::debug!(field = %name, "Ignoring multipart field"),
        }
    }
    Ok(())
}

/// Drops the turn's staged uploads once the pipeline has read them.
pub async fn discard_attachments(attachments: &dyn AttachmentStore, input: &MultimodalInput) {
    discard_staged(attachments, input.attachments()).await;
}

async fn discard_staged(attachments: &dyn AttachmentStore, staged: &[Attachment]) {
    for attachment in staged {
        if let Err(e) = attachments.remove(attachment).await {
            tracing::warn!(key = %attachment.key, error = %e, "Failed to remove attachment");
        }
    }
}
