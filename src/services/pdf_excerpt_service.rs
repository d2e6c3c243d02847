use lopdf::Document;

/// Binary in, text out. Extraction problems yield an empty excerpt.
#[cfg_attr(test, mockall::automock)]
pub trait PdfExcerptExtractor: Send + Sync {
    fn extract_excerpt(&self, bytes: &[u8]) -> String;
}

/// Reads the text of the leading pages of a PDF.
pub struct LopdfExcerptExtractor {
    max_pages: usize,
}

impl LopdfExcerptExtractor {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }
}

impl PdfExcerptExtractor for LopdfExcerptExtractor {
    fn extract_excerpt(&self, bytes: &[u8]) -> String {
        let document = match Document::load_mem(bytes) {
            Ok(document) => document,
            Err(e) => {
                log::warn!("Could not parse uploaded PDF: {}", e);
                return String::new();
            }
        };

        let pages: Vec<u32> = document
            .get_pages()
            .keys()
            .copied()
            .take(self.max_pages)
            .collect();

        if pages.is_empty() {
            return String::new();
        }

        document.extract_text(&pages).unwrap_or_else(|e| {
            log::warn!("Could not extract text from uploaded PDF: {}", e);
            String::new()
        })
    }
}
