use async_graphql::Enum;
use serde::{Deserialize, Serialize};

pub const QUESTIONS_PER_ROLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum QuestionRole {
    Tender,
    Supplier,
}

/// Clarification questions for one role. Holds whatever the model produced,
/// between zero and five entries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionSet {
    pub role: QuestionRole,
    pub questions: Vec<String>,
}

impl QuestionSet {
    pub fn empty(role: QuestionRole) -> Self {
        Self {
            role,
            questions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// An officer's response to one question, used only while assembling the draft.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Answer {
    pub question: String,
    pub response: String,
}

impl Answer {
    pub fn render(&self) -> String {
        format!("{}\nA: {}\n", self.question, self.response)
    }
}
