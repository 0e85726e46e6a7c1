use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use medvoice::application::ports::PatientRepository;
use medvoice::application::services::{Collaborators, PipelineModels};
use medvoice::infrastructure::audio::{OpenAiSpeechSynthesizer, OpenAiWhisperEngine};
use medvoice::infrastructure::auth::FirebaseAuthProvider;
use medvoice::infrastructure::imaging::{
    HttpImageFetcher, PollinationsImageGenerator, RasterImageCodec,
};
use medvoice::infrastructure::llm::OpenAiClient;
use medvoice::infrastructure::observability::{TracingConfig, init_tracing};
use medvoice::infrastructure::pdf::ApiTemplatePdfRenderer;
use medvoice::infrastructure::persistence::{
    InMemoryPatientRepository, PgPatientRepository, create_pool,
};
use medvoice::infrastructure::storage::LocalAttachmentStore;
use medvoice::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(
        environment.as_str(),
        &settings.logging,
    ));

    let patients: Arc<dyn PatientRepository> = match &settings.database.url {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            Arc::new(PgPatientRepository::new(pool))
        }
        None if environment.is_production() => {
            anyhow::bail!("APP_DATABASE__URL must be set in production")
        }
        None => {
            tracing::warn!("No database configured, patient data is kept in memory");
            Arc::new(InMemoryPatientRepository::new())
        }
    };

    let llm = &settings.llm;
    let collaborators = Collaborators {
        transcription: Arc::new(OpenAiWhisperEngine::new(
            llm.api_key.clone(),
            llm.base_url.clone(),
            Some(llm.transcription_model.clone()),
        )),
        llm: Arc::new(OpenAiClient::new(llm.api_key.clone(), llm.base_url.clone())),
        speech: Arc::new(OpenAiSpeechSynthesizer::new(
            llm.api_key.clone(),
            llm.base_url.clone(),
            Some(settings.speech.model.clone()),
            Some(settings.speech.voice.clone()),
        )),
        image_codec: Arc::new(RasterImageCodec::new()),
        image_generator: Arc::new(
            PollinationsImageGenerator::new(
                Some(settings.image_generation.base_url.clone()),
                Some(settings.image_generation.model.clone()),
            )
            .with_size(
                settings.image_generation.width,
                settings.image_generation.height,
            ),
        ),
        image_fetcher: Arc::new(HttpImageFetcher::new()),
        pdf_renderer: Arc::new(ApiTemplatePdfRenderer::new(
            settings.pdf.api_key.clone(),
            settings.pdf.template_id.clone(),
            settings.pdf.base_url.clone(),
        )),
        patients,
        auth: Arc::new(FirebaseAuthProvider::new(
            settings.auth.api_key.clone(),
            settings.auth.base_url.clone(),
        )),
        attachments: Arc::new(LocalAttachmentStore::new(
            settings.attachments.directory.clone(),
        )?),
    };

    let models = PipelineModels {
        analysis: llm.analysis_model.clone(),
        image_prompt: llm.image_prompt_model.clone(),
    };

    let state = AppState::new(&collaborators, &models)
        .with_session_idle_timeout(settings.sessions.idle_timeout());
    let router = create_router(state, settings.attachments.max_upload_mb * 1024 * 1024);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
