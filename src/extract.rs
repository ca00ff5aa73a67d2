use log::info;
use thiserror::Error;

use crate::{epub_text, ocr_text, pdf_text, text};

/// Document formats the trainer can ingest. One external decoder per kind;
/// selection happens here at the boundary, never inside shared logic.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentKind {
    Text,
    Pdf,
    Epub,
    Image,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Text => "text",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Epub => "EPUB",
            DocumentKind::Image => "image",
        }
    }

    /// Resolve the document kind from the declared content type, falling
    /// back to the file extension. Rejects unknown formats before any
    /// decode attempt.
    pub fn detect(content_type: Option<&str>, file_name: &str) -> Result<Self, ExtractError> {
        if let Some(declared) = content_type {
            let declared = declared.trim();
            return match declared {
                "application/pdf" => Ok(DocumentKind::Pdf),
                "application/epub+zip" => Ok(DocumentKind::Epub),
                "text/plain" => Ok(DocumentKind::Text),
                _ if declared.starts_with("image/") => Ok(DocumentKind::Image),
                _ => Err(ExtractError::UnsupportedFormat(declared.to_string())),
            };
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "txt" | "text" | "md" => Ok(DocumentKind::Text),
            "pdf" => Ok(DocumentKind::Pdf),
            "epub" => Ok(DocumentKind::Epub),
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "tif" | "tiff" | "webp" => {
                Ok(DocumentKind::Image)
            }
            _ => Err(ExtractError::UnsupportedFormat(format!(".{extension}"))),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Rejected before any decode attempt; nothing was read.
    #[error("unsupported document format: {0} (expected PDF, EPUB, image, or plain text)")]
    UnsupportedFormat(String),

    /// The decoder for the declared kind could not parse the input.
    #[error("could not decode {} document", .kind.label())]
    Decode {
        kind: DocumentKind,
        #[source]
        source: anyhow::Error,
    },

    /// The document was structurally readable but yielded no text. Reported
    /// distinctly from a decode failure.
    #[error("the document was readable but no text could be extracted")]
    EmptyContent,
}

/// Decode the document and normalize the result to a single string.
///
/// Per-section failures inside a decoder (EPUB) are recovered there; only a
/// wholly unreadable input surfaces as a decode error here.
pub fn extract(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractError> {
    info!("extracting text from {} document ({} bytes)", kind.label(), bytes.len());

    let raw = match kind {
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
        DocumentKind::Pdf => pdf_text::decode(bytes).map_err(|source| decode_error(kind, source))?,
        DocumentKind::Epub => {
            epub_text::decode(bytes).map_err(|source| decode_error(kind, source))?
        }
        DocumentKind::Image => {
            ocr_text::decode(bytes).map_err(|source| decode_error(kind, source))?
        }
    };

    let normalized = text::normalize(&raw);
    if normalized.is_empty() {
        return Err(ExtractError::EmptyContent);
    }
    info!("extracted {} characters", normalized.chars().count());
    Ok(normalized)
}

fn decode_error(kind: DocumentKind, source: anyhow::Error) -> ExtractError {
    ExtractError::Decode { kind, source }
}
