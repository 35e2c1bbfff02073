//! Random name generation
//!
//! A name is an adjective and a noun, each drawn through the weighted tier
//! picker, cased and joined per the caller's options. Constraint misses
//! (duplicate names, alliteration without a matching noun) retry with a
//! fresh adjective draw, up to a fixed attempt budget.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    WordKind,
    constants::generator::MAX_ATTEMPTS,
    format::{CaseMode, Separator, apply_case, join_name},
    picker::{TierWeights, WeightedPick, pick_word_from_tiers},
};

/// Knobs for a single pull
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// How the two words are joined
    pub separator: Separator,
    /// Casing applied to each word before joining
    pub case_mode: CaseMode,
    /// Require the noun to start with the adjective's first letter
    pub alliteration: bool,
    /// Reject names already recorded in the caller's used set
    pub avoid_duplicates: bool,
}

/// A successfully generated name with the tiers each word came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    /// The formatted name
    pub name: String,
    /// Tier the adjective was drawn from
    pub adjective_tier: String,
    /// Tier the noun was drawn from
    pub noun_tier: String,
}

/// Why a pull produced no name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No tier with a positive weight has any words of this kind
    #[error("no enabled tier has any {0} words")]
    NoEligibleWords(WordKind),
    /// Every attempt hit a constraint (duplicate or alliteration miss)
    #[error("no name satisfied the constraints within {} attempts", MAX_ATTEMPTS)]
    RetryExhausted,
}

/// Generates one name from the given word lists
///
/// Each attempt draws a fresh adjective, so an alliteration miss can recover
/// by landing on a different first letter. The duplicate check compares the
/// lowercased finished name against `used_names`, which is expected to hold
/// lowercased entries.
///
/// # Errors
///
/// [`GenerateError::NoEligibleWords`] when a weighted draw has nothing to
/// draw from, [`GenerateError::RetryExhausted`] when the attempt budget runs
/// out before any candidate clears the constraints.
pub fn generate(
    adjectives: &HashMap<String, Vec<String>>,
    nouns: &HashMap<String, Vec<String>>,
    weights: &TierWeights,
    options: GenerationOptions,
    used_names: &HashSet<String>,
    rng: &mut fastrand::Rng,
) -> Result<GeneratedName, GenerateError> {
    let nouns_by_letter = options
        .alliteration
        .then(|| noun_pairs_by_letter(nouns, weights));

    for _ in 0..MAX_ATTEMPTS {
        let adjective = pick_word_from_tiers(adjectives, weights, rng)
            .ok_or(GenerateError::NoEligibleWords(WordKind::Adjective))?;

        let noun = if let Some(by_letter) = &nouns_by_letter {
            // Uniform over the matching (tier, word) pairs; tier weights do
            // not apply to this draw.
            let Some(candidates) =
                first_letter(adjective.word).and_then(|letter| by_letter.get(&letter))
            else {
                continue;
            };
            let Some(&(tier, word)) = rng.choice(candidates) else {
                continue;
            };
            WeightedPick { tier, word }
        } else {
            pick_word_from_tiers(nouns, weights, rng)
                .ok_or(GenerateError::NoEligibleWords(WordKind::Noun))?
        };

        let name = join_name(
            &apply_case(adjective.word, options.case_mode),
            &apply_case(noun.word, options.case_mode),
            options.separator,
        );

        if options.avoid_duplicates && used_names.contains(&name.to_lowercase()) {
            continue;
        }

        return Ok(GeneratedName {
            name,
            adjective_tier: adjective.tier.to_owned(),
            noun_tier: noun.tier.to_owned(),
        });
    }

    debug!(attempts = MAX_ATTEMPTS, "name generation exhausted its retry budget");
    Err(GenerateError::RetryExhausted)
}

/// Indexes nouns from positively weighted tiers by lowercased first letter
fn noun_pairs_by_letter<'a>(
    nouns: &'a HashMap<String, Vec<String>>,
    weights: &TierWeights,
) -> HashMap<char, Vec<(&'a str, &'a str)>> {
    let mut by_letter: HashMap<char, Vec<(&'a str, &'a str)>> = HashMap::new();
    for (tier, weight) in weights.iter() {
        if weight == 0 {
            continue;
        }
        let Some((tier, words)) = nouns.get_key_value(tier) else {
            continue;
        };
        for word in words {
            if let Some(letter) = first_letter(word) {
                by_letter
                    .entry(letter)
                    .or_default()
                    .push((tier.as_str(), word.as_str()));
            }
        }
    }
    by_letter
}

/// Lowercased first character of a word, [`None`] for the empty string
fn first_letter(word: &str) -> Option<char> {
    let first = word.chars().next()?;
    Some(first.to_lowercase().next().unwrap_or(first))
}
