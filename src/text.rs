/// Collapse any run of whitespace to a single space and trim the ends.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into display words. Pure and deterministic; every
/// token is non-empty and source order is preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Strip markdown markup left behind by HTML-to-markdown conversion so the
/// word stream reads as plain prose.
pub fn markdown_to_plain(md: &str) -> String {
    let mut result = String::with_capacity(md.len());

    for line in md.lines() {
        let line = line.trim_start_matches(['#', '>']).trim();
        if line.is_empty() || line.chars().all(|c| c == '-' || c == '=' || c == '*') {
            continue;
        }

        let mut cleaned = line
            .replace("**", "")
            .replace("__", "")
            .replace('`', "")
            .replace('*', "");

        // Keep link text, drop the target: [text](url) -> text
        while let Some(open) = cleaned.find('[') {
            let Some(close) = cleaned[open..].find("](").map(|i| open + i) else {
                break;
            };
            let Some(end) = cleaned[close..].find(')').map(|i| close + i) else {
                break;
            };
            let label = cleaned[open + 1..close].to_string();
            cleaned.replace_range(open..=end, &label);
        }

        result.push_str(&cleaned);
        result.push(' ');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_collapses_whitespace_and_drops_empties() {
        assert_eq!(tokenize("  The  quick\n fox "), vec!["The", "quick", "fox"]);
    }

    #[test]
    fn tokenize_of_empty_input_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t ").is_empty());
    }

    #[test]
    fn no_token_is_ever_empty() {
        let inputs = ["a  b", " x ", "one\ttwo\r\nthree", "\u{a0}"];
        for input in inputs {
            assert!(tokenize(input).iter().all(|t| !t.is_empty()));
        }
    }

    #[test]
    fn tokenize_is_idempotent_after_rejoin() {
        let first = tokenize("  The  quick\n fox jumps  over ");
        let rejoined = first.join(" ");
        assert_eq!(tokenize(&rejoined), first);
    }

    #[test]
    fn normalize_then_tokenize_matches_direct_tokenize() {
        let raw = " a\n\n b\tc ";
        assert_eq!(tokenize(&normalize(raw)), tokenize(raw));
    }

    #[test]
    fn markdown_markup_is_stripped() {
        let md = "# Heading\n\nSome **bold** and *italic* text with a [link](http://x).\n\n---\n";
        let plain = markdown_to_plain(md);
        assert!(plain.contains("Heading"));
        assert!(plain.contains("bold"));
        assert!(plain.contains("italic"));
        assert!(plain.contains("link"));
        assert!(!plain.contains('*'));
        assert!(!plain.contains("http://x"));
        assert!(!plain.contains("---"));
    }
}
