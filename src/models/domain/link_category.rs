use std::{fmt, str::FromStr};

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::{errors::AppError, models::domain::search_query::SearchQuery};

/// The four independent link lists a research session curates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    Tender,
    Supplier,
    PriorTender,
    Literature,
}

impl LinkCategory {
    pub const ALL: [LinkCategory; 4] = [
        LinkCategory::Tender,
        LinkCategory::Supplier,
        LinkCategory::PriorTender,
        LinkCategory::Literature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkCategory::Tender => "tender",
            LinkCategory::Supplier => "supplier",
            LinkCategory::PriorTender => "prior_tender",
            LinkCategory::Literature => "literature",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            LinkCategory::Tender => 0,
            LinkCategory::Supplier => 1,
            LinkCategory::PriorTender => 2,
            LinkCategory::Literature => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkCategory::Tender => "Current Tenders",
            LinkCategory::Supplier => "Suppliers",
            LinkCategory::PriorTender => "Previous Tenders",
            LinkCategory::Literature => "Academic Literature",
        }
    }

    pub fn is_literature(&self) -> bool {
        matches!(self, LinkCategory::Literature)
    }

    pub fn query_text(&self, product: &str) -> String {
        let product = product.trim();
        match self {
            LinkCategory::Tender => format!("{product} procurement tender"),
            LinkCategory::Supplier => format!("{product} supplier Europe price"),
            LinkCategory::PriorTender => format!("site:ted.europa.eu {product}"),
            LinkCategory::Literature => format!("{product} tender specification"),
        }
    }

    pub fn search_query(&self, product: &str, engine: &str) -> SearchQuery {
        SearchQuery::new(self.query_text(product), self.is_literature(), engine)
    }

    /// Number of raw upstream results to ask for when `display_count` links
    /// should be shown. Literature over-fetches because most hits are filtered.
    pub fn requested_count(&self, display_count: usize) -> usize {
        if self.is_literature() {
            display_count * 2
        } else {
            display_count
        }
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tender" => Ok(LinkCategory::Tender),
            "supplier" => Ok(LinkCategory::Supplier),
            "prior_tender" => Ok(LinkCategory::PriorTender),
            "literature" => Ok(LinkCategory::Literature),
            other => Err(AppError::ValidationError(format!(
                "Unknown link category '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_templates_embed_product_name() {
        let product = "electric vehicle charging station";

        assert_eq!(
            LinkCategory::Tender.query_text(product),
            "electric vehicle charging station procurement tender"
        );
        assert_eq!(
            LinkCategory::Supplier.query_text(product),
            "electric vehicle charging station supplier Europe price"
        );
        assert_eq!(
            LinkCategory::PriorTender.query_text(product),
            "site:ted.europa.eu electric vehicle charging station"
        );
        assert_eq!(
            LinkCategory::Literature.query_text(product),
            "electric vehicle charging station tender specification"
        );
    }

    #[test]
    fn only_literature_over_fetches() {
        assert_eq!(LinkCategory::Literature.requested_count(3), 6);
        assert_eq!(LinkCategory::Tender.requested_count(3), 3);
        assert!(LinkCategory::Literature.search_query("x", "google").is_literature);
        assert!(!LinkCategory::Supplier.search_query("x", "google").is_literature);
    }

    #[test]
    fn parses_path_names() {
        for category in LinkCategory::ALL {
            let parsed: LinkCategory = category.as_str().parse().expect("known category");
            assert_eq!(parsed, category);
        }
        assert!("tenders".parse::<LinkCategory>().is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&LinkCategory::PriorTender).expect("serialize");
        assert_eq!(json, "\"prior_tender\"");
    }
}
