use std::sync::Arc;

use crate::{
    constants::prompts::{
        QUESTION_FORMAT_PROMPT, SCRAPED_DOCUMENTS_HEADER, SUPPLIER_ROLE_PROMPT, TENDER_ROLE_PROMPT,
    },
    errors::{AppError, AppResult},
    models::domain::{LinkCategory, QuestionRole, QuestionSet, ResearchSession},
    services::{content_fetcher::PageFetcher, model_service::TextGenerator},
};

pub fn build_question_prompt(role: QuestionRole, documents: &str, product: &str) -> String {
    let head = match role {
        QuestionRole::Tender => TENDER_ROLE_PROMPT.to_string(),
        QuestionRole::Supplier => SUPPLIER_ROLE_PROMPT.replace("{product}", product),
    };

    format!(
        "{}\n\n{}\n{}\n\n{}",
        head, SCRAPED_DOCUMENTS_HEADER, documents, QUESTION_FORMAT_PROMPT
    )
}

/// Keeps the lines that start (after indentation) with a digit 1 to 5.
/// No count check: anywhere from zero to many lines pass through.
pub fn extract_questions(response: &str) -> Vec<String> {
    response
        .lines()
        .filter(|line| {
            line.trim_start()
                .starts_with(|c: char| ('1'..='5').contains(&c))
        })
        .map(|line| line.trim().to_string())
        .collect()
}

/// Turns scraped page text into clarification questions per role.
pub struct QuestionService {
    fetcher: Arc<dyn PageFetcher>,
    generator: Arc<dyn TextGenerator>,
    max_page_chars: usize,
}

impl QuestionService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        generator: Arc<dyn TextGenerator>,
        max_page_chars: usize,
    ) -> Self {
        Self {
            fetcher,
            generator,
            max_page_chars,
        }
    }

    pub async fn generate_questions(
        &self,
        role: QuestionRole,
        document_text: &str,
        product: &str,
    ) -> AppResult<QuestionSet> {
        let prompt = build_question_prompt(role, document_text, product);
        let response = self.generator.generate(&prompt).await?;
        let questions = extract_questions(&response);

        log::info!("Generated {} {:?} questions", questions.len(), role);
        Ok(QuestionSet { role, questions })
    }

    /// Fetches each URL in order and joins the page texts with newlines.
    pub async fn gather_text(&self, urls: &[String], english_only: bool) -> String {
        let mut texts = Vec::with_capacity(urls.len());
        for url in urls {
            let page = self
                .fetcher
                .fetch_text(url, self.max_page_chars, english_only)
                .await;
            texts.push(page.into_text());
        }
        texts.join("\n")
    }

    /// Regenerates both question sets for a session. Tender and prior-tender
    /// pages are fetched and turned into tender questions before supplier
    /// pages are touched. Literature text feeds both prompts. Nothing is
    /// stored unless both generations succeed.
    pub async fn generate_for_session(&self, session: &mut ResearchSession) -> AppResult<()> {
        let product = session
            .product_name
            .clone()
            .ok_or_else(|| AppError::ValidationError("Enter a product name first".to_string()))?;

        if !session.curation(LinkCategory::Tender).has_visible_links()
            || !session.curation(LinkCategory::Supplier).has_visible_links()
        {
            return Err(AppError::ValidationError(
                "Tender and supplier links are required before generating questions".to_string(),
            ));
        }

        let limit = session.results_per_query * 2;
        let english_only = session.english_only;

        let mut tender_links = session.curation(LinkCategory::Tender).document_links(usize::MAX);
        tender_links.extend(session.curation(LinkCategory::PriorTender).document_links(usize::MAX));
        tender_links.truncate(limit);
        let supplier_links = session.curation(LinkCategory::Supplier).document_links(limit);
        let literature_links = session.curation(LinkCategory::Literature).document_links(limit);

        let tender_text = self.gather_text(&tender_links, english_only).await;
        let literature_text = self.gather_text(&literature_links, english_only).await;
        let tender = self
            .generate_questions(
                QuestionRole::Tender,
                &format!("{}\n{}", tender_text, literature_text),
                &product,
            )
            .await?;

        let supplier_text = self.gather_text(&supplier_links, english_only).await;
        let supplier = self
            .generate_questions(
                QuestionRole::Supplier,
                &format!("{}\n{}", supplier_text, literature_text),
                &product,
            )
            .await?;

        session.tender_questions = tender;
        session.supplier_questions = supplier;
        session.draft = None;
        Ok(())
    }
}
