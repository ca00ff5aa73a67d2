use clap::Parser;
use std::path::PathBuf;

use crate::locale::QuizLanguage;
use crate::player::{MAX_WPM, MIN_WPM, WPM_STEP};

/// Speed-read a document one word at a time, then take a comprehension quiz
#[derive(Parser, Debug)]
#[command(name = "rsvpread", version, about)]
pub struct Cli {
    /// Path to the input document (.txt, .pdf, .epub, or an image for OCR)
    #[arg(required_unless_present = "stdin")]
    pub input: Option<PathBuf>,

    /// Read plain text from stdin instead of a file
    #[arg(long, conflicts_with = "input")]
    pub stdin: bool,

    /// Reading speed in words per minute (100-1000, in steps of 10)
    #[arg(short, long, default_value_t = 300, value_parser = parse_wpm)]
    pub wpm: u16,

    /// Declared content type (e.g. application/epub+zip); overrides extension sniffing
    #[arg(long)]
    pub content_type: Option<String>,

    /// Skip the comprehension quiz after playback
    #[arg(long, default_value_t = false)]
    pub no_quiz: bool,

    /// Language used for quiz prompts
    #[arg(long, value_enum, default_value_t = QuizLanguage::En)]
    pub quiz_language: QuizLanguage,
}

fn parse_wpm(raw: &str) -> Result<u16, String> {
    let wpm: u16 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !(MIN_WPM..=MAX_WPM).contains(&wpm) {
        return Err(format!("WPM must be between {MIN_WPM} and {MAX_WPM}"));
    }
    if wpm % WPM_STEP != 0 {
        return Err(format!("WPM must be a multiple of {WPM_STEP}"));
    }
    Ok(wpm)
}
