pub mod curation_state;
pub mod link_category;
pub mod question_set;
pub mod search_query;
pub mod session;
pub use curation_state::CurationState;
pub use link_category::LinkCategory;
pub use question_set::{Answer, QuestionRole, QuestionSet};
pub use search_query::SearchQuery;
pub use session::ResearchSession;
