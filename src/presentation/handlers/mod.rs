mod auth;
mod consultation;
mod error;
mod followup;
mod health;
mod multipart_input;
mod report;
mod sessions;

pub use auth::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, login_handler,
    register_handler,
};
pub use consultation::{ConsultationResponse, consultation_handler};
pub use error::{ApiError, ErrorResponse};
pub use followup::{FollowUpResponse, followup_handler};
pub use health::{HealthResponse, health_handler};
pub use report::{
    ReportHistoryResponse, ReportResponse, generate_report_handler, report_history_handler,
};
pub use sessions::{SessionCreatedResponse, create_session_handler, delete_session_handler};
