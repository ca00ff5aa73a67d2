use anyhow::{Context, Result};
use log::debug;

/// Extract the text layer of a PDF, page by page.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .context("failed to extract text from PDF")?;
    debug!("PDF text layer is {} bytes", text.len());
    Ok(text)
}
