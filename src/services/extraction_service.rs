use lopdf::Document;
use tokio::task;

use crate::errors::{AppError, AppResult};

const PDF_MAGIC: &[u8] = b"%PDF";

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract the concatenated visible text of a PDF, pages in
    /// page-number order, separated by a blank line.
    ///
    /// Parsing runs on the blocking pool; pages are walked sequentially
    /// so the output is deterministic. The caller is responsible for
    /// checking the result against its minimum-content threshold.
    pub async fn extract_text(bytes: Vec<u8>) -> AppResult<String> {
        if bytes.is_empty() {
            return Err(AppError::Extraction("the file is empty".to_string()));
        }
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::Extraction("missing PDF header".to_string()));
        }

        let pages = task::spawn_blocking(move || extract_pages(&bytes))
            .await
            .map_err(|err| AppError::Extraction(format!("extraction task failed: {}", err)))??;

        Ok(pages.join("\n\n"))
    }
}

fn extract_pages(bytes: &[u8]) -> AppResult<Vec<String>> {
    let doc = Document::load_mem(bytes).map_err(|err| AppError::Extraction(err.to_string()))?;

    let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    page_numbers.sort_unstable();

    let mut pages = Vec::with_capacity(page_numbers.len());
    for page_number in page_numbers {
        // A page that fails to decode contributes nothing rather than
        // aborting the whole document.
        let raw = doc.extract_text(&[page_number]).unwrap_or_default();
        pages.push(normalize_page_text(&raw));
    }

    Ok(pages)
}

/// Join extracted fragments with single spaces.
fn normalize_page_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
