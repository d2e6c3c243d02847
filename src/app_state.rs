use std::{sync::Arc, time::Duration};

use uuid::Uuid;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    repositories::{InMemorySessionRepository, SessionRepository, SharedSession},
    services::{
        content_fetcher::{HttpPageFetcher, PageFetcher},
        curation_service::CurationService,
        draft_service::DraftService,
        model_service::{ModelService, TextGenerator},
        pdf_excerpt_service::{LopdfExcerptExtractor, PdfExcerptExtractor},
        question_service::QuestionService,
        search_client::{LinkSearch, SerpApiClient},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRepository>,
    pub curation_service: Arc<CurationService>,
    pub question_service: Arc<QuestionService>,
    pub draft_service: Arc<DraftService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let search = Arc::new(SerpApiClient::new(&config)?);
        let fetcher = Arc::new(HttpPageFetcher::new(&config)?);
        let generator = Arc::new(ModelService::new(&config));
        let pdf_extractor = Arc::new(LopdfExcerptExtractor::new(config.pdf_excerpt_pages));

        Ok(Self::with_collaborators(
            config,
            search,
            fetcher,
            generator,
            pdf_extractor,
        ))
    }

    /// Wires the services around the given external collaborators.
    pub fn with_collaborators(
        config: Config,
        search: Arc<dyn LinkSearch>,
        fetcher: Arc<dyn PageFetcher>,
        generator: Arc<dyn TextGenerator>,
        pdf_extractor: Arc<dyn PdfExcerptExtractor>,
    ) -> Self {
        let curation_service = Arc::new(CurationService::new(search, config.search_engine.clone()));
        let question_service = Arc::new(QuestionService::new(
            fetcher,
            Arc::clone(&generator),
            config.max_page_chars,
        ));
        let draft_service = Arc::new(DraftService::new(generator, pdf_extractor));

        Self {
            sessions: Arc::new(InMemorySessionRepository::with_idle_timeout(
                Duration::from_secs(config.session_idle_secs),
            )),
            curation_service,
            question_service,
            draft_service,
            config: Arc::new(config),
        }
    }

    pub async fn session(&self, id: &Uuid) -> AppResult<SharedSession> {
        self.sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", id)))
    }
}
