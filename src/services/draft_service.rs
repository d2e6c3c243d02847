use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use validator::Validate;

use crate::{
    constants::prompts::{
        DRAFT_FORMATTING_PROMPT, DRAFT_ROLE_PROMPT, DRAFT_SECTIONS, DRAFT_TASK_PROMPT,
        EXCERPTS_HEADER, SUPPLIER_ANSWERS_HEADER, TENDER_ANSWERS_HEADER,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{Answer, ResearchSession},
        dto::request::{GenerateDraftRequest, PdfUpload},
    },
    services::{model_service::TextGenerator, pdf_excerpt_service::PdfExcerptExtractor},
};

pub fn render_answers(answers: &[Answer]) -> String {
    answers.iter().map(Answer::render).collect()
}

pub fn build_draft_prompt(pdf_text: &str, tender_answers: &str, supplier_answers: &str) -> String {
    let outline = DRAFT_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{}. {}", i + 1, section))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{role}\n\n{excerpts}\n{pdf_text}\n\n{tender}\n{tender_answers}\n\n{supplier}\n{supplier_answers}\n\n{task}\n\n{outline}\n\n{formatting}\n",
        role = DRAFT_ROLE_PROMPT,
        excerpts = EXCERPTS_HEADER,
        tender = TENDER_ANSWERS_HEADER,
        supplier = SUPPLIER_ANSWERS_HEADER,
        task = DRAFT_TASK_PROMPT,
        formatting = DRAFT_FORMATTING_PROMPT,
    )
}

/// Assembles the "Requirements & Specifications" draft from answers and
/// optional sample tender PDFs.
pub struct DraftService {
    generator: Arc<dyn TextGenerator>,
    pdf_extractor: Arc<dyn PdfExcerptExtractor>,
}

impl DraftService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        pdf_extractor: Arc<dyn PdfExcerptExtractor>,
    ) -> Self {
        Self {
            generator,
            pdf_extractor,
        }
    }

    /// Returns the model's text untouched.
    pub async fn generate_draft(
        &self,
        pdf_excerpt_text: &str,
        tender_answers: &[Answer],
        supplier_answers: &[Answer],
    ) -> AppResult<String> {
        let prompt = build_draft_prompt(
            pdf_excerpt_text,
            &render_answers(tender_answers),
            &render_answers(supplier_answers),
        );
        self.generator.generate(&prompt).await
    }

    /// Decodes every upload and concatenates the excerpts. A file that cannot
    /// be read as a PDF contributes nothing.
    pub fn excerpt_uploads(&self, uploads: &[PdfUpload]) -> AppResult<String> {
        let mut excerpts = String::new();
        for upload in uploads {
            let bytes = STANDARD.decode(upload.content_base64.trim()).map_err(|e| {
                AppError::ValidationError(format!(
                    "'{}' is not valid base64: {}",
                    upload.file_name, e
                ))
            })?;
            let excerpt = self.pdf_extractor.extract_excerpt(&bytes);
            log::info!(
                "Extracted {} chars from '{}'",
                excerpt.chars().count(),
                upload.file_name
            );
            excerpts.push_str(&excerpt);
        }
        Ok(excerpts)
    }

    pub async fn draft_for_session(
        &self,
        session: &mut ResearchSession,
        request: GenerateDraftRequest,
    ) -> AppResult<String> {
        request.validate()?;
        if !request.has_answers() {
            return Err(AppError::ValidationError(
                "Answer at least one question before drafting".to_string(),
            ));
        }

        let pdf_text = self.excerpt_uploads(&request.pdfs)?;
        let tender_answers: Vec<Answer> = request.tender_answers.into_iter().map(Answer::from).collect();
        let supplier_answers: Vec<Answer> = request
            .supplier_answers
            .into_iter()
            .map(Answer::from)
            .collect();

        let draft = self
            .generate_draft(&pdf_text, &tender_answers, &supplier_answers)
            .await?;

        log::info!("Session {}: draft generated", session.id);
        session.draft = Some(draft.clone());
        Ok(draft)
    }
}
