mod cli;
mod epub_text;
mod extract;
mod locale;
mod ocr_text;
mod pdf_text;
mod player;
mod quiz;
mod session;
mod stats;
mod text;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();
    session::run(&cli)
}
