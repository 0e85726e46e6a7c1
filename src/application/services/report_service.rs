use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use futures::future::try_join_all;
use tracing::instrument;

use crate::application::ports::{
    ImageCodec, ImageFetcher, LlmClient, PatientRepository, PdfRenderer, ReportPayload,
};
use crate::domain::{
    EncodedImage, GeneratedReport, IMAGE_UNAVAILABLE_HTML, MAX_RETAINED_REPORTS, Report,
    ReportImage, ReportRecord, ReportSections, ReportStamp, Transcript, UserKey,
};

use super::prompts::REPORT_PROMPT;
use super::{Collaborators, PipelineError, PipelineModels};

/// Renders the report prompt, one speaker line per transcript turn.
pub fn build_report_prompt(transcript: &Transcript) -> String {
    let lines: String = transcript
        .turns()
        .iter()
        .map(|turn| format!("{}: {}\n", turn.role.report_label(), turn.content))
        .collect();
    format!("{}{}", REPORT_PROMPT, lines)
}

/// Strict parse of the model's answer; no repair is attempted.
pub fn parse_report_sections(raw: &str) -> Result<ReportSections, PipelineError> {
    serde_json::from_str(raw.trim()).map_err(|e| PipelineError::Schema(e.to_string()))
}

struct ResolvedImage {
    html: String,
    embedded: bool,
}

impl ResolvedImage {
    fn none() -> Self {
        Self {
            html: String::new(),
            embedded: false,
        }
    }

    fn unavailable() -> Self {
        Self {
            html: IMAGE_UNAVAILABLE_HTML.to_string(),
            embedded: false,
        }
    }
}

/// Builds, renders, stores and prunes medical reports.
pub struct ReportService {
    llm: Arc<dyn LlmClient>,
    image_fetcher: Arc<dyn ImageFetcher>,
    image_codec: Arc<dyn ImageCodec>,
    pdf_renderer: Arc<dyn PdfRenderer>,
    patients: Arc<dyn PatientRepository>,
    report_model: String,
}

impl ReportService {
    pub fn new(collaborators: &Collaborators, models: &PipelineModels) -> Self {
        Self {
            llm: Arc::clone(&collaborators.llm),
            image_fetcher: Arc::clone(&collaborators.image_fetcher),
            image_codec: Arc::clone(&collaborators.image_codec),
            pdf_renderer: Arc::clone(&collaborators.pdf_renderer),
            patients: Arc::clone(&collaborators.patients),
            report_model: models.analysis.clone(),
        }
    }

    /// Never fails: any error collapses into the fixed failure fragment.
    pub async fn generate_report(
        &self,
        transcript: &Transcript,
        name: &str,
        email: &str,
        image: Option<&ReportImage>,
    ) -> GeneratedReport {
        let stamp = ReportStamp::new(Utc::now());
        match self
            .try_generate_report(transcript, name, email, image, stamp)
            .await
        {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "Report generation failed");
                GeneratedReport::failed()
            }
        }
    }

    #[instrument(
        skip(self, transcript, name, email, image),
        fields(turns = transcript.len(), report_id = %stamp.report_id())
    )]
    pub async fn try_generate_report(
        &self,
        transcript: &Transcript,
        name: &str,
        email: &str,
        image: Option<&ReportImage>,
        stamp: ReportStamp,
    ) -> Result<GeneratedReport, PipelineError> {
        let prompt = build_report_prompt(transcript);
        let raw = self
            .llm
            .complete(&self.report_model, &prompt)
            .await
            .map_err(|e| PipelineError::unavailable("report generation", e))?;
        let sections = parse_report_sections(&raw)?;

        let resolved = self.resolve_image(image).await;

        let report = Report {
            sections,
            name: name.to_string(),
            email: email.to_string(),
            date: stamp.display_date(),
            image_html: resolved.html.clone(),
        };

        let payload = ReportPayload {
            name: report.name.clone(),
            email: report.email.clone(),
            date: report.date.clone(),
            symptoms: report.sections.symptoms.clone(),
            observations: report.sections.observations.clone(),
            recommendations: report.sections.recommendations.clone(),
            image: if resolved.embedded {
                resolved.html
            } else {
                String::new()
            },
        };

        let download_url = self.pdf_renderer.render(&payload).await?;
        let pdf = self.pdf_renderer.download(&download_url).await?;

        let report_id = stamp.report_id();
        let download_link = format!(
            r#"<a download="{}" href="data:application/pdf;base64,{}" target="_blank">{}</a>"#,
            stamp.file_name(name),
            STANDARD.encode(&pdf),
            report_id
        );

        let key = UserKey::from_email(email);
        let record = ReportRecord {
            report_id,
            download_link: download_link.clone(),
            created_at: stamp.at(),
        };
        self.patients.save_report(&key, &record).await?;
        self.prune_history(&key).await?;

        tracing::info!(pdf_bytes = pdf.len(), "Report generated");

        Ok(GeneratedReport {
            html: report.to_html(),
            download_link,
        })
    }

    /// Keeps only the newest reports for the patient.
    async fn prune_history(&self, key: &UserKey) -> Result<(), PipelineError> {
        let records = self.patients.list_reports(key, None).await?;
        let stale = records.iter().skip(MAX_RETAINED_REPORTS).map(|record| {
            tracing::debug!(report_id = %record.report_id, "Pruning report");
            self.patients.delete_report(key, &record.report_id)
        });
        try_join_all(stale).await?;
        Ok(())
    }

    async fn resolve_image(&self, image: Option<&ReportImage>) -> ResolvedImage {
        let Some(image) = image else {
            return ResolvedImage::none();
        };

        match self.jpeg_base64(image).await {
            Ok(jpeg) => ResolvedImage {
                html: format!(
                    r#"<img src="data:image/jpeg;base64,{}" style="max-width:100%; height:auto;"><br>"#,
                    jpeg
                ),
                embedded: true,
            },
            Err(reason) => {
                tracing::warn!(%reason, "Report image unavailable, using placeholder");
                ResolvedImage::unavailable()
            }
        }
    }

    async fn jpeg_base64(&self, image: &ReportImage) -> Result<String, String> {
        let bytes = match image {
            ReportImage::Url(url) if url.starts_with("http") => self
                .image_fetcher
                .fetch(url)
                .await
                .map_err(|e| e.to_string())?,
            ReportImage::Url(raw) => self.decoded_bytes(&EncodedImage::new(raw.clone()))?,
            ReportImage::Encoded(encoded) => self.decoded_bytes(encoded)?,
        };

        let jpeg = self
            .image_codec
            .to_jpeg(&bytes)
            .map_err(|e| e.to_string())?;
        Ok(STANDARD.encode(jpeg))
    }

    fn decoded_bytes(&self, encoded: &EncodedImage) -> Result<Vec<u8>, String> {
        self.image_codec
            .decode(encoded)
            .map(|decoded| decoded.bytes)
            .map_err(|e| e.to_string())
    }
}
