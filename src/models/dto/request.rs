use async_graphql::InputObject;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Answer, LinkCategory};

fn default_results_per_query() -> usize {
    crate::models::domain::session::DEFAULT_RESULTS_PER_QUERY
}

fn default_categories() -> Vec<LinkCategory> {
    vec![LinkCategory::Tender, LinkCategory::Supplier]
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn web_scheme(value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        _ => Err(ValidationError::new("http_url")),
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub english_only: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DiscoverLinksRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub product_name: String,

    #[serde(default = "default_results_per_query")]
    #[validate(range(min = 1, max = 10))]
    pub results_per_query: usize,

    #[serde(default = "default_categories")]
    #[validate(length(min = 1, message = "Select at least one link category"))]
    pub categories: Vec<LinkCategory>,

    #[serde(default)]
    pub english_only: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct LinkRequest {
    #[validate(length(min = 1, max = 2048), custom(function = "web_scheme"))]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerInput {
    #[validate(length(min = 1))]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl From<AnswerInput> for Answer {
    fn from(input: AnswerInput) -> Self {
        Answer {
            question: input.question,
            response: input.answer,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PdfUpload {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 1))]
    pub content_base64: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateDraftRequest {
    #[serde(default)]
    #[validate(nested)]
    pub tender_answers: Vec<AnswerInput>,

    #[serde(default)]
    #[validate(nested)]
    pub supplier_answers: Vec<AnswerInput>,

    #[serde(default)]
    #[validate(nested)]
    pub pdfs: Vec<PdfUpload>,
}

impl GenerateDraftRequest {
    pub fn has_answers(&self) -> bool {
        !self.tender_answers.is_empty() || !self.supplier_answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_request_applies_defaults() {
        let request: DiscoverLinksRequest =
            serde_json::from_str(r#"{"product_name": "street lighting"}"#).unwrap();

        assert_eq!(request.results_per_query, 3);
        assert_eq!(
            request.categories,
            vec![LinkCategory::Tender, LinkCategory::Supplier]
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn discover_request_rejects_out_of_range_count() {
        let request: DiscoverLinksRequest = serde_json::from_str(
            r#"{"product_name": "street lighting", "results_per_query": 11}"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn discover_request_rejects_blank_product_and_no_categories() {
        let blank: DiscoverLinksRequest =
            serde_json::from_str(r#"{"product_name": "   "}"#).unwrap();
        let none: DiscoverLinksRequest =
            serde_json::from_str(r#"{"product_name": "bins", "categories": []}"#).unwrap();

        assert!(blank.validate().is_err());
        assert!(none.validate().is_err());
    }

    #[test]
    fn link_request_requires_web_url() {
        let ok = LinkRequest {
            url: "https://etenders.gov.ie/notice/1".to_string(),
        };
        let ftp = LinkRequest {
            url: "ftp://example.com/file".to_string(),
        };
        let junk = LinkRequest {
            url: "not a url".to_string(),
        };

        assert!(ok.validate().is_ok());
        assert!(ftp.validate().is_err());
        assert!(junk.validate().is_err());
    }

    #[test]
    fn draft_request_knows_when_answers_are_missing() {
        let empty = GenerateDraftRequest::default();
        assert!(!empty.has_answers());

        let request: GenerateDraftRequest = serde_json::from_str(
            r#"{"tender_answers": [{"question": "1. Budget?", "answer": "€2m"}]}"#,
        )
        .unwrap();
        assert!(request.has_answers());
        assert!(request.validate().is_ok());
    }
}
