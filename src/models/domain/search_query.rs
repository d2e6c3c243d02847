use serde::{Deserialize, Serialize};

/// A query issued for one category. Kept as-is so "fetch more" can replay it
/// against the next result page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchQuery {
    pub text: String,
    pub is_literature: bool,
    pub engine: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, is_literature: bool, engine: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_literature,
            engine: engine.into(),
        }
    }
}
