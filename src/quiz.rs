//! Heuristic comprehension quiz built from sentences of the source text.
//!
//! Generation is intentionally randomized per invocation: regenerating from
//! the same text produces a different quiz. Tests therefore assert structure
//! (question count, option count, answer-key range), not exact content.

use std::collections::HashMap;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::locale::QuizStrings;

pub const QUESTION_TARGET: usize = 5;
pub const OPTIONS_PER_QUESTION: usize = 4;

const CANDIDATE_CAP: usize = 15;
const MIN_CANDIDATE_CHARS: usize = 10;
const MIN_QUESTION_CHARS: usize = 15;
const MIN_KEY_TERM_CHARS: usize = 4;

#[derive(Clone, Debug)]
pub struct Question {
    pub id: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

#[derive(Clone, Debug)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

/// Selected option index per question id. Built incrementally while the user
/// answers, discarded on restart.
pub type AnswerSet = HashMap<usize, usize>;

/// Build a quiz of up to [`QUESTION_TARGET`] questions from the text.
///
/// Never fails: texts with fewer than three usable sentences fall back to a
/// fixed set of generic engagement questions.
pub fn generate(text: &str, strings: &QuizStrings) -> Quiz {
    generate_with_rng(text, strings, &mut rand::thread_rng())
}

fn generate_with_rng<R: Rng + ?Sized>(text: &str, strings: &QuizStrings, rng: &mut R) -> Quiz {
    let mut candidates: Vec<String> = usable_sentences(text).take(CANDIDATE_CAP).collect();

    if candidates.len() < 3 {
        debug!(
            "only {} usable sentences, falling back to generic questions",
            candidates.len()
        );
        return generic_quiz(strings);
    }

    let mut questions = Vec::new();
    for _ in 0..QUESTION_TARGET {
        if candidates.is_empty() {
            break;
        }
        let sentence = candidates.remove(rng.gen_range(0..candidates.len()));
        if let Some(question) = build_question(text, &sentence, questions.len() + 1, strings, rng) {
            questions.push(question);
        }
    }

    // Backfill skipped slots so a quiz always has exactly five questions.
    while questions.len() < QUESTION_TARGET {
        let id = questions.len() + 1;
        questions.push(filler_question(id, strings));
    }

    Quiz { questions }
}

fn build_question<R: Rng + ?Sized>(
    text: &str,
    sentence: &str,
    id: usize,
    strings: &QuizStrings,
    rng: &mut R,
) -> Option<Question> {
    if sentence.chars().count() <= MIN_QUESTION_CHARS {
        return None;
    }

    let key_terms: Vec<&str> = sentence
        .split(' ')
        .filter(|w| w.chars().count() > MIN_KEY_TERM_CHARS)
        .collect();
    let term = *key_terms.choose(rng)?;

    // Distractors come from the whole text, not just the capped candidate
    // list, so long documents still yield varied options.
    let mut others: Vec<String> = usable_sentences(text)
        .filter(|s| !s.contains(term) && s != sentence)
        .collect();

    let mut options = vec![sentence.to_string()];
    for _ in 0..OPTIONS_PER_QUESTION - 1 {
        if others.is_empty() {
            break;
        }
        options.push(others.remove(rng.gen_range(0..others.len())));
    }
    while options.len() < OPTIONS_PER_QUESTION {
        options.push(strings.placeholder(term));
    }

    options.shuffle(rng);
    let correct = options.iter().position(|o| o == sentence)?;

    Some(Question {
        id,
        prompt: strings.prompt(term),
        options,
        correct,
    })
}

fn usable_sentences(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_CANDIDATE_CHARS)
        .map(str::to_string)
}

fn generic_quiz(strings: &QuizStrings) -> Quiz {
    let questions = strings
        .generic_questions
        .iter()
        .enumerate()
        .map(|(i, (prompt, options))| Question {
            id: i + 1,
            prompt: (*prompt).to_string(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            correct: 0,
        })
        .collect();
    Quiz { questions }
}

fn filler_question(id: usize, strings: &QuizStrings) -> Question {
    Question {
        id,
        prompt: strings.filler_prompt(id),
        options: strings
            .filler_options
            .iter()
            .map(|o| (*o).to_string())
            .collect(),
        correct: 0,
    }
}

/// True once every question has an answer; submission is gated on this.
pub fn is_complete(quiz: &Quiz, answers: &AnswerSet) -> bool {
    quiz.questions.iter().all(|q| answers.contains_key(&q.id))
}

/// Percentage of correctly answered questions, rounded to the nearest whole
/// number. Missing answers count as incorrect.
pub fn grade(quiz: &Quiz, answers: &AnswerSet) -> u8 {
    if quiz.questions.is_empty() {
        return 0;
    }
    let correct = quiz
        .questions
        .iter()
        .filter(|q| answers.get(&q.id) == Some(&q.correct))
        .count();
    ((correct as f64 / quiz.questions.len() as f64) * 100.0).round() as u8
}
