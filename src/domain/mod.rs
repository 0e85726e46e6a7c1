mod audio_artifact;
mod canonical_query;
mod conversation_turn;
mod message_role;
mod multimodal_input;
mod patient;
mod presented_query;
mod report;
mod session_id;
mod transcript;

pub use audio_artifact::AudioArtifact;
pub use canonical_query::{CanonicalQuery, EncodedImage};
pub use conversation_turn::ConversationTurn;
pub use message_role::MessageRole;
pub use multimodal_input::{Attachment, AttachmentKind, MultimodalInput};
pub use patient::{PatientProfile, UserKey};
pub use presented_query::{DisplayImage, PresentedQuery, ReportImage};
pub use report::{
    GeneratedReport, IMAGE_UNAVAILABLE_HTML, MAX_RETAINED_REPORTS, REPORT_FAILURE_HTML, Report,
    ReportRecord, ReportSections, ReportStamp,
};
pub use session_id::SessionId;
pub use transcript::Transcript;
