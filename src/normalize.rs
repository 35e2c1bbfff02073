//! Free-form word list cleanup
//!
//! Tier word lists arrive as pasted text, one word per line or comma
//! separated. This module turns that text into the ordered, duplicate-free
//! list of words the store keeps per tier.

use itertools::Itertools;

/// Characters allowed inside a word besides ASCII letters.
const KEPT_PUNCTUATION: [char; 3] = [' ', '-', '\''];

/// Cleans free-form text into an ordered, duplicate-free word list
///
/// The text is split on newlines and commas (runs of delimiters collapse).
/// Each piece is trimmed and stripped of every character that is not an
/// ASCII letter, space, hyphen, or apostrophe; pieces that end up empty are
/// dropped. Duplicates are detected case-insensitively; the first occurrence
/// wins and keeps its original casing and position.
///
/// Total: malformed input yields fewer words, never an error.
pub fn normalize(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .chars()
                .filter(|c| c.is_ascii_alphabetic() || KEPT_PUNCTUATION.contains(c))
                .collect::<String>()
        })
        .map(|word| word.trim().to_owned())
        .filter(|word| !word.is_empty())
        .unique_by(|word| word.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_splits_on_newlines_and_commas() {
        let words = normalize("Swift\nFierce,Grim");
        assert_eq!(words, vec!["Swift", "Fierce", "Grim"]);
    }

    #[test]
    fn test_normalize_collapses_delimiter_runs() {
        let words = normalize("Swift,,\n\n,Fierce");
        assert_eq!(words, vec!["Swift", "Fierce"]);
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let words = normalize("  Swift  \n\tFierce\t");
        assert_eq!(words, vec!["Swift", "Fierce"]);
    }

    #[test]
    fn test_normalize_strips_disallowed_characters() {
        assert_eq!(normalize("Sw1ft!"), vec!["Swft"]);
        assert_eq!(normalize("(Grim)"), vec!["Grim"]);
        // Digits-and-symbols-only pieces vanish entirely.
        assert_eq!(normalize("42!, Swift"), vec!["Swift"]);
    }

    #[test]
    fn test_normalize_keeps_spaces_hyphens_apostrophes() {
        let words = normalize("fire panther\nice-cold,o'brien");
        assert_eq!(words, vec!["fire panther", "ice-cold", "o'brien"]);
    }

    #[test]
    fn test_normalize_strips_non_ascii_letters() {
        assert_eq!(normalize("née Zoë"), vec!["ne Zo"]);
    }

    #[test]
    fn test_normalize_dedup_keeps_first_casing_and_order() {
        let words = normalize("Swift, swift\nSWIFT, Fierce, swift");
        assert_eq!(words, vec!["Swift", "Fierce"]);
    }

    #[test]
    fn test_normalize_empty_and_junk_input() {
        assert_eq!(normalize(""), Vec::<String>::new());
        assert_eq!(normalize(" , ,\n"), Vec::<String>::new());
        assert_eq!(normalize("123, 456"), Vec::<String>::new());
    }

    #[test]
    fn test_normalize_handles_crlf_line_endings() {
        let words = normalize("Swift\r\nFierce");
        assert_eq!(words, vec!["Swift", "Fierce"]);
    }

    #[test]
    fn test_normalize_idempotent() {
        let input = "Swift!, swift\n fire panther,Gr1m\n\nice-cold";
        let once = normalize(input);
        let twice = normalize(&once.join("\n"));
        assert_eq!(once, twice);
    }
}
