mod account_service;
mod collaborators;
mod diagnosis_service;
mod followup_service;
mod input_normalizer;
mod pipeline_error;
pub mod prompts;
mod query_presenter;
mod report_service;

pub use account_service::{
    AccountError, AccountService, LoginOutcome, NO_REPORTS_HTML, render_history,
};
pub use collaborators::{Collaborators, PipelineModels};
pub use diagnosis_service::{Diagnosis, DiagnosisService};
pub use followup_service::{
    AUDIO_NOT_FOUND_MESSAGE, FollowUp, FollowUpOutcome, FollowUpService,
    TRANSCRIPTION_FAILED_MESSAGE, UNCLEAR_INPUT_MESSAGE,
};
pub use input_normalizer::InputNormalizer;
pub use pipeline_error::{PipelineError, SERVICE_UNAVAILABLE_MESSAGE};
pub use query_presenter::QueryPresenter;
pub use report_service::{ReportService, build_report_prompt, parse_report_sections};
