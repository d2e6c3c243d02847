use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{
    curation_state::CurationState,
    link_category::LinkCategory,
    question_set::{QuestionRole, QuestionSet},
};

pub const DEFAULT_RESULTS_PER_QUERY: usize = 3;

/// Everything one officer builds up during an interactive session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResearchSession {
    pub id: Uuid,
    pub product_name: Option<String>,
    pub results_per_query: usize,
    pub english_only: bool,
    curation: [CurationState; 4],
    pub tender_questions: QuestionSet,
    pub supplier_questions: QuestionSet,
    pub draft: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ResearchSession {
    pub fn new(english_only: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_name: None,
            results_per_query: DEFAULT_RESULTS_PER_QUERY,
            english_only,
            curation: Default::default(),
            tender_questions: QuestionSet::empty(QuestionRole::Tender),
            supplier_questions: QuestionSet::empty(QuestionRole::Supplier),
            draft: None,
            created_at: Utc::now(),
        }
    }

    pub fn curation(&self, category: LinkCategory) -> &CurationState {
        &self.curation[category.index()]
    }

    pub fn curation_mut(&mut self, category: LinkCategory) -> &mut CurationState {
        &mut self.curation[category.index()]
    }

    /// Drops generated output that depended on the previous link discovery.
    pub fn clear_generated(&mut self) {
        self.tender_questions = QuestionSet::empty(QuestionRole::Tender);
        self.supplier_questions = QuestionSet::empty(QuestionRole::Supplier);
        self.draft = None;
    }

    pub fn has_questions(&self) -> bool {
        !self.tender_questions.is_empty() || !self.supplier_questions.is_empty()
    }
}
