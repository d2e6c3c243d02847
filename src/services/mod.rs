pub mod content_fetcher;
pub mod curation_service;
pub mod domain_filter;
pub mod draft_service;
pub mod http_helpers;
pub mod model_service;
pub mod pdf_excerpt_service;
pub mod question_service;
pub mod search_client;
