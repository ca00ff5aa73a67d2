//! User-facing quiz strings.
//!
//! Generation logic is language-agnostic; everything the user reads comes
//! from one of these tables. Templates use `{term}` and `{n}` markers.

use clap::ValueEnum;

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuizLanguage {
    /// English
    En,
    /// Indonesian
    Id,
}

pub struct QuizStrings {
    prompt_template: &'static str,
    placeholder_template: &'static str,
    filler_template: &'static str,
    pub filler_options: [&'static str; 4],
    pub generic_questions: [(&'static str, [&'static str; 4]); 3],
}

impl QuizStrings {
    pub fn for_language(language: QuizLanguage) -> &'static QuizStrings {
        match language {
            QuizLanguage::En => &ENGLISH,
            QuizLanguage::Id => &INDONESIAN,
        }
    }

    pub fn prompt(&self, term: &str) -> String {
        self.prompt_template.replace("{term}", term)
    }

    pub fn placeholder(&self, term: &str) -> String {
        self.placeholder_template.replace("{term}", term)
    }

    pub fn filler_prompt(&self, number: usize) -> String {
        self.filler_template.replace("{n}", &number.to_string())
    }
}

static ENGLISH: QuizStrings = QuizStrings {
    prompt_template: "Which of the following is mentioned in relation to \"{term}\"?",
    placeholder_template: "Option not related to {term}",
    filler_template: "What is your understanding of the text? (Question {n})",
    filler_options: [
        "Complete understanding",
        "Partial understanding",
        "Limited understanding",
        "No understanding",
    ],
    generic_questions: [
        (
            "Was this text useful to read?",
            [
                "Yes, very useful",
                "Somewhat useful",
                "Not very useful",
                "Not at all useful",
            ],
        ),
        (
            "Would you recommend this text to others?",
            ["Definitely", "Probably", "Probably not", "Definitely not"],
        ),
        (
            "How well did you understand the text?",
            ["Completely", "Mostly", "Somewhat", "Not at all"],
        ),
    ],
};

static INDONESIAN: QuizStrings = QuizStrings {
    prompt_template: "Manakah dari pilihan berikut yang disebutkan berkaitan dengan \"{term}\"?",
    placeholder_template: "Pilihan yang tidak berkaitan dengan {term}",
    filler_template: "Bagaimana pemahaman Anda tentang teks ini? (Pertanyaan {n})",
    filler_options: [
        "Pemahaman penuh",
        "Pemahaman sebagian",
        "Pemahaman terbatas",
        "Tidak paham",
    ],
    generic_questions: [
        (
            "Apakah teks ini bermanfaat untuk dibaca?",
            [
                "Ya, sangat bermanfaat",
                "Cukup bermanfaat",
                "Kurang bermanfaat",
                "Sama sekali tidak bermanfaat",
            ],
        ),
        (
            "Apakah Anda akan merekomendasikan teks ini kepada orang lain?",
            ["Pasti", "Mungkin", "Mungkin tidak", "Pasti tidak"],
        ),
        (
            "Seberapa baik Anda memahami teks ini?",
            ["Sepenuhnya", "Sebagian besar", "Sedikit", "Tidak sama sekali"],
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_substitute_their_markers() {
        for language in [QuizLanguage::En, QuizLanguage::Id] {
            let strings = QuizStrings::for_language(language);
            assert!(strings.prompt("velocity").contains("velocity"));
            assert!(strings.placeholder("velocity").contains("velocity"));
            assert!(strings.filler_prompt(4).contains('4'));
            assert!(!strings.prompt("velocity").contains("{term}"));
            assert!(!strings.filler_prompt(4).contains("{n}"));
        }
    }

    #[test]
    fn both_tables_carry_three_generic_questions_with_four_options() {
        for language in [QuizLanguage::En, QuizLanguage::Id] {
            let strings = QuizStrings::for_language(language);
            assert_eq!(strings.generic_questions.len(), 3);
            for (prompt, options) in &strings.generic_questions {
                assert!(!prompt.is_empty());
                assert!(options.iter().all(|o| !o.is_empty()));
            }
        }
    }
}
