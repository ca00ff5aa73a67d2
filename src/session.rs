use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::thread;

use anyhow::{Context, Result};
use log::info;

use crate::cli::Cli;
use crate::extract::{self, DocumentKind, ExtractError};
use crate::locale::QuizStrings;
use crate::player::{Player, Tick};
use crate::quiz::{self, AnswerSet};
use crate::stats::ReadingStats;
use crate::text;

/// Drive one full training session: extract, play back, quiz, and offer
/// another pass. Playback and the quiz only ever see the word sequence;
/// extraction problems are reported here and end the session.
pub fn run(cli: &Cli) -> Result<()> {
    let document = load_document(cli)?;
    let words = text::tokenize(&document);

    let strings = QuizStrings::for_language(cli.quiz_language);
    let mut player = Player::new(cli.wpm);
    player.load(words);

    loop {
        play_through(&mut player)?;
        if cli.no_quiz {
            return Ok(());
        }

        // A fresh quiz per completed pass; the previous one is discarded.
        run_quiz(&document, strings)?;

        if !prompt_yes_no("Read the text again? [y/N] ")? {
            return Ok(());
        }
        if !player.reset() {
            // Already at position 0 (single-word pass); reload to leave the
            // finished state behind.
            player.load(text::tokenize(&document));
        }
    }
}

fn load_document(cli: &Cli) -> Result<String> {
    if cli.stdin {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read text from stdin")?;
        let document = text::normalize(&raw);
        if document.is_empty() {
            return Err(ExtractError::EmptyContent.into());
        }
        return Ok(document);
    }

    let path = cli
        .input
        .as_ref()
        .context("an input path is required unless --stdin is set")?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let kind = DocumentKind::detect(cli.content_type.as_deref(), &file_name)?;
    eprintln!("Extracting text from {}...", kind.label());

    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(extract::extract(kind, &bytes)?)
}

/// Play the loaded words at the configured rate, rendering the current word
/// and live progress in place. The sleep is derived from `tick_interval`
/// on every cycle, so there is never a stale timer to cancel.
fn play_through(player: &mut Player) -> Result<()> {
    if !player.start() {
        return Ok(());
    }

    let stats = ReadingStats::snapshot(player);
    eprintln!(
        "Reading {} words at {} WPM (about {} min). Press Ctrl-C to stop.",
        stats.total_words,
        player.wpm(),
        stats.minutes_remaining
    );

    let mut out = io::stdout().lock();
    loop {
        render_word(&mut out, player)?;
        thread::sleep(player.tick_interval());
        match player.tick() {
            Tick::Advanced => {}
            Tick::Finished => {
                render_word(&mut out, player)?;
                writeln!(out)?;
                break;
            }
            Tick::Ignored => break,
        }
    }

    info!("reading pass completed at position {}", player.position());
    eprintln!("Reading complete.");
    Ok(())
}

fn render_word(out: &mut impl Write, player: &Player) -> Result<()> {
    let stats = ReadingStats::snapshot(player);
    write!(
        out,
        "\r{:<28} {:>5}/{} {:>5.1}%",
        player.current_word().unwrap_or_default(),
        stats.current_word,
        stats.total_words,
        stats.progress_percent
    )?;
    out.flush()?;
    Ok(())
}

fn run_quiz(document: &str, strings: &QuizStrings) -> Result<()> {
    let quiz = quiz::generate(document, strings);
    println!("\nComprehension quiz: {} questions.", quiz.questions.len());

    let stdin = io::stdin();
    let mut answers = AnswerSet::new();
    for question in &quiz.questions {
        println!("\nQuestion {}: {}", question.id, question.prompt);
        for (index, option) in question.options.iter().enumerate() {
            println!("  {}) {}", index + 1, option);
        }
        match prompt_option(&stdin, question.options.len())? {
            Some(choice) => {
                answers.insert(question.id, choice);
            }
            None => break,
        }
    }

    if !quiz::is_complete(&quiz, &answers) {
        eprintln!("Quiz abandoned before every question was answered; not graded.");
        return Ok(());
    }

    let score = quiz::grade(&quiz, &answers);
    println!("\nScore: {score}%");
    Ok(())
}

/// Ask for an option number until a valid one arrives. `None` means the
/// input stream closed.
fn prompt_option(stdin: &io::Stdin, option_count: usize) -> Result<Option<usize>> {
    loop {
        eprint!("Your answer (1-{option_count}): ");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=option_count).contains(&choice) => {
                return Ok(Some(choice - 1));
            }
            _ => eprintln!("Please enter a number between 1 and {option_count}."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> Result<bool> {
    eprint!("{prompt}");
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
