use std::fs;
use std::process::Command;

use anyhow::{bail, Context, Result};
use image::load_from_memory;
use log::{debug, info};

/// Recognition language for the external tesseract binary.
const OCR_LANGUAGE: &str = "eng";

/// Run OCR over a raster image by shelling out to the `tesseract` binary.
///
/// The bytes are decoded with the `image` crate first, both to reject
/// non-image input before spawning a process and to hand tesseract a clean
/// PNG regardless of the original encoding.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let img = load_from_memory(bytes).context("failed to decode image data")?;
    debug!("image dimensions: {}x{}", img.width(), img.height());

    let staging = std::env::temp_dir().join(format!("rsvpread-ocr-{}.png", std::process::id()));
    img.save(&staging)
        .context("failed to stage image for OCR")?;

    let output = Command::new("tesseract")
        .arg(&staging)
        .arg("stdout")
        .arg("-l")
        .arg(OCR_LANGUAGE)
        .output();
    let _ = fs::remove_file(&staging);

    let output = output.context(
        "failed to run tesseract; install it from https://github.com/tesseract-ocr/tesseract",
    )?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("tesseract failed: {}", stderr.trim());
    }

    let recognized =
        String::from_utf8(output.stdout).context("tesseract produced non-UTF-8 output")?;
    info!("OCR recognized {} bytes of text", recognized.len());
    Ok(recognized)
}
