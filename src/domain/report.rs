use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of persisted reports kept per patient.
pub const MAX_RETAINED_REPORTS: usize = 5;

pub const REPORT_FAILURE_HTML: &str = "<p>Error generating report. Please try again later.</p>";
pub const IMAGE_UNAVAILABLE_HTML: &str = "<p><i>Image could not be included in report.</i></p>";

/// The exact JSON contract the model must answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSections {
    #[serde(rename = "Symptoms")]
    pub symptoms: String,
    #[serde(rename = "Observations")]
    pub observations: String,
    #[serde(rename = "Recommendations")]
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sections: ReportSections,
    pub name: String,
    pub email: String,
    pub date: String,
    pub image_html: String,
}

impl Report {
    pub fn to_html(&self) -> String {
        format!(
            r#"<h2 style="text-align:center">Medical Report</h2>
<p><b>Name:</b> {name}<br>
<b>Email:</b> {email}<br>
<b>Date:</b> {date}</p><br>
<h2 style="text-align:center">Image</h2>
<div style="text-align:center">{image}</div>
<h2 style="text-align:center">Diagnosis</h2>
<h3>Symptoms</h3>{symptoms}
<h3>Observations</h3>{observations}
<h3>Recommendations</h3>{recommendations}
"#,
            name = self.name,
            email = self.email,
            date = self.date,
            image = self.image_html,
            symptoms = self.sections.symptoms,
            observations = self.sections.observations,
            recommendations = self.sections.recommendations,
        )
    }
}

/// Time-derived naming shared by the report id and the PDF file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStamp(DateTime<Utc>);

impl ReportStamp {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.0
    }

    /// `March 05, 2026`
    pub fn display_date(&self) -> String {
        self.0.format("%B %d, %Y").to_string()
    }

    /// `05-03-2026_02-15-PM`
    pub fn timestamp(&self) -> String {
        self.0.format("%d-%m-%Y_%I-%M-%p").to_string()
    }

    pub fn report_id(&self) -> String {
        format!("Report_{}", self.timestamp())
    }

    pub fn file_name(&self, patient_name: &str) -> String {
        format!(
            "{}_Report_{}.pdf",
            patient_name.replace(' ', "_"),
            self.timestamp()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub report_id: String,
    pub download_link: String,
    pub created_at: DateTime<Utc>,
}

/// What the presentation layer shows after a report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedReport {
    pub html: String,
    pub download_link: String,
}

impl GeneratedReport {
    pub fn failed() -> Self {
        Self {
            html: REPORT_FAILURE_HTML.to_string(),
            download_link: String::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.download_link.is_empty()
    }
}
