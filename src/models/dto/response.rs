use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{CurationState, LinkCategory, ResearchSession};

pub const DRAFT_FILE_NAME: &str = "Requirements.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct LinkView {
    pub url: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct CategoryView {
    pub category: LinkCategory,
    pub label: String,
    pub query: Option<String>,
    pub cursor: u64,
    pub links: Vec<LinkView>,
    pub rejected_count: u64,
}

impl CategoryView {
    pub fn new(category: LinkCategory, state: &CurationState) -> Self {
        let links = state
            .display_view()
            .into_iter()
            .map(|url| LinkView {
                url: url.to_string(),
                accepted: state.is_accepted(url),
            })
            .collect();

        CategoryView {
            category,
            label: category.label().to_string(),
            query: state.query().map(|q| q.text.clone()),
            cursor: state.cursor() as u64,
            links,
            rejected_count: state.rejected().len() as u64,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SessionView {
    pub id: String,
    pub product_name: Option<String>,
    pub results_per_query: u64,
    pub english_only: bool,
    pub categories: Vec<CategoryView>,
    pub tender_questions: Vec<String>,
    pub supplier_questions: Vec<String>,
    pub has_draft: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&ResearchSession> for SessionView {
    fn from(session: &ResearchSession) -> Self {
        SessionView {
            id: session.id.to_string(),
            product_name: session.product_name.clone(),
            results_per_query: session.results_per_query as u64,
            english_only: session.english_only,
            categories: LinkCategory::ALL
                .into_iter()
                .map(|category| CategoryView::new(category, session.curation(category)))
                .collect(),
            tender_questions: session.tender_questions.questions.clone(),
            supplier_questions: session.supplier_questions.questions.clone(),
            has_draft: session.draft.is_some(),
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub tender_questions: Vec<String>,
    pub supplier_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DraftResponse {
    pub file_name: String,
    pub content: String,
}

impl DraftResponse {
    pub fn new(content: String) -> Self {
        DraftResponse {
            file_name: DRAFT_FILE_NAME.to_string(),
            content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub message: String,
}
