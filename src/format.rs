//! Name formatting and display decomposition
//!
//! This module owns the deterministic half of a pull: casing each word and
//! joining the pair with a separator. It also hosts the best-effort split
//! used when a finished name is shown as its two halves again. Parsing of
//! the casing and separator choices is fail-open: unrecognized input
//! degrades to a default instead of erroring, so a stale UI value can never
//! block generation.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Casing applied to each word before joining
///
/// Parsing and deserialization fall back to [`CaseMode::Unchanged`] for
/// unrecognized input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum CaseMode {
    /// Capitalize the first letter of every letter run, lowercase the rest
    Title,
    /// Uppercase the whole word
    Upper,
    /// Lowercase the whole word
    Lower,
    /// Leave the word exactly as stored
    #[default]
    Unchanged,
}

impl Display for CaseMode {
    /// Formats the mode as the label shown in selection controls
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Title => "Title Case",
            Self::Upper => "UPPER",
            Self::Lower => "lower",
            Self::Unchanged => "Unchanged",
        })
    }
}

impl From<&str> for CaseMode {
    /// Total conversion: anything unrecognized is `Unchanged`
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "title case" | "title" => Self::Title,
            "upper" => Self::Upper,
            "lower" => Self::Lower,
            _ => Self::Unchanged,
        }
    }
}

impl From<String> for CaseMode {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for CaseMode {
    type Err = Infallible;

    /// Never fails; unrecognized input becomes [`CaseMode::Unchanged`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

/// How the adjective and noun are joined into one name
///
/// Parsing and deserialization fall back to [`Separator::Space`] for
/// unrecognized input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Separator {
    /// `"adjective noun"`
    #[default]
    Space,
    /// `"adjective-noun"`
    Hyphen,
    /// `"adjective_noun"`
    Underscore,
    /// `"adjective of noun"`
    Of,
}

impl Display for Separator {
    /// Formats the separator as the label shown in selection controls
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Space => "Space",
            Self::Hyphen => "Hyphen",
            Self::Underscore => "Underscore",
            Self::Of => "of",
        })
    }
}

impl From<&str> for Separator {
    /// Total conversion: anything unrecognized is `Space`
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "hyphen" => Self::Hyphen,
            "underscore" => Self::Underscore,
            "of" => Self::Of,
            _ => Self::Space,
        }
    }
}

impl From<String> for Separator {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for Separator {
    type Err = Infallible;

    /// Never fails; unrecognized input becomes [`Separator::Space`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

/// Applies a case transform to a single word
///
/// `Title` capitalizes the first letter of every contiguous letter run and
/// lowercases the rest, so hyphens and apostrophes survive and start a new
/// run: `"ice-cold"` becomes `"Ice-Cold"`, `"o'brien"` becomes `"O'Brien"`.
pub fn apply_case(word: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Title => {
            let mut titled = String::with_capacity(word.len());
            let mut in_run = false;
            for c in word.chars() {
                if c.is_alphabetic() {
                    if in_run {
                        titled.extend(c.to_lowercase());
                    } else {
                        titled.extend(c.to_uppercase());
                    }
                    in_run = true;
                } else {
                    titled.push(c);
                    in_run = false;
                }
            }
            titled
        }
        CaseMode::Upper => word.to_uppercase(),
        CaseMode::Lower => word.to_lowercase(),
        CaseMode::Unchanged => word.to_owned(),
    }
}

/// Joins the two halves of a name with the chosen separator
pub fn join_name(adjective: &str, noun: &str, separator: Separator) -> String {
    match separator {
        Separator::Space => format!("{adjective} {noun}"),
        Separator::Hyphen => format!("{adjective}-{noun}"),
        Separator::Underscore => format!("{adjective}_{noun}"),
        Separator::Of => format!("{adjective} of {noun}"),
    }
}

/// Splits a formatted name back into its two halves for display
///
/// Best-effort inverse of [`join_name`], not a verified round trip: the
/// first matching delimiter wins, trying `" of "`, then `-`, then `_`, then
/// a space. Without any delimiter the right half is empty.
pub fn split_name(name: &str) -> (String, String) {
    for delimiter in [" of ", "-", "_", " "] {
        if let Some((left, right)) = name.split_once(delimiter) {
            return (left.to_owned(), right.to_owned());
        }
    }
    (name.to_owned(), String::new())
}
