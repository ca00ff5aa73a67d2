use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use log::{info, warn};
use rbook::prelude::*;
use rbook::Epub;

use crate::text;

/// Flatten an EPUB's spine to plain text.
///
/// Unreadable sections are skipped rather than aborting the whole book; only
/// a container that cannot be opened at all is an error. The returned text
/// may be empty, which the caller classifies as empty content.
pub fn decode(bytes: &[u8]) -> Result<String> {
    // rbook opens from a path, so stage the bytes in a temp file first.
    static STAGE_ID: AtomicU64 = AtomicU64::new(0);
    let staging = std::env::temp_dir().join(format!(
        "rsvpread-{}-{}.epub",
        std::process::id(),
        STAGE_ID.fetch_add(1, Ordering::Relaxed)
    ));
    fs::write(&staging, bytes).context("failed to stage EPUB for reading")?;
    let result = decode_file(&staging);
    let _ = fs::remove_file(&staging);
    result
}

fn decode_file(path: &Path) -> Result<String> {
    let epub = Epub::options()
        .strict(false)
        .open(path)
        .context("failed to open EPUB container")?;

    let mut extracted = String::new();
    let mut sections = 0usize;
    let mut skipped = 0usize;
    let mut reader = epub.reader();

    while let Some(result) = reader.read_next() {
        match result {
            Ok(data) => {
                let html = data.content().to_string();
                if html.trim().is_empty() {
                    continue;
                }
                let markdown = html2md::parse_html(&html, false);
                extracted.push_str(&text::markdown_to_plain(&markdown));
                extracted.push(' ');
                sections += 1;
            }
            Err(err) => {
                // Keep whatever the rest of the spine yields.
                skipped += 1;
                warn!("skipping unreadable EPUB section: {err}");
            }
        }
    }

    info!("read {sections} EPUB sections ({skipped} skipped)");
    Ok(extracted)
}
