//! Weighted tier selection
//!
//! A pull draws one word in two stages: first a tier, chosen with
//! probability proportional to its weight, then a word uniformly from that
//! tier's list. A tier takes part in the draw only when its weight is
//! positive and its word list is present and non-empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::weights::{COMMON, OTHER, RARE};

/// Per-tier draw weights
///
/// Entries keep their insertion order so a seeded [`fastrand::Rng`]
/// reproduces the same draws run after run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierWeights {
    entries: Vec<(String, u32)>,
}

impl TierWeights {
    /// Creates an empty weight table
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggested weights for a set of tiers
    ///
    /// `"Common"` and `"Rare"` get their conventional defaults, every other
    /// tier weighs in at [`OTHER`].
    pub fn suggested<I>(tiers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        tiers
            .into_iter()
            .map(|tier| {
                let weight = match tier.as_ref() {
                    "Common" => COMMON,
                    "Rare" => RARE,
                    _ => OTHER,
                };
                (tier.as_ref().to_owned(), weight)
            })
            .collect()
    }

    /// Sets the weight for a tier, replacing any existing entry in place
    pub fn set(&mut self, tier: impl Into<String>, weight: u32) {
        let tier = tier.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == tier) {
            entry.1 = weight;
        } else {
            self.entries.push((tier, weight));
        }
    }

    /// Returns the weight for a tier, `0` when it has no entry
    pub fn get(&self, tier: &str) -> u32 {
        self.entries
            .iter()
            .find(|(name, _)| name == tier)
            .map_or(0, |(_, weight)| *weight)
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(tier, weight)| (tier.as_str(), *weight))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TierWeights {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut weights = Self::new();
        for (tier, weight) in iter {
            weights.set(tier, weight);
        }
        weights
    }
}

/// A single word drawn from the tiers, borrowed from the word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedPick<'a> {
    /// Tier the word came from
    pub tier: &'a str,
    /// The word itself
    pub word: &'a str,
}

/// Draws one word, weighting the tier choice and picking uniformly within it
///
/// Only tiers with a positive weight and a non-empty word list are eligible.
/// Returns [`None`] when no tier qualifies.
pub fn pick_word_from_tiers<'a>(
    words_by_tier: &'a HashMap<String, Vec<String>>,
    weights: &TierWeights,
    rng: &mut fastrand::Rng,
) -> Option<WeightedPick<'a>> {
    let available: Vec<(&str, &[String], u64)> = weights
        .iter()
        .filter(|&(_, weight)| weight > 0)
        .filter_map(|(tier, weight)| {
            words_by_tier
                .get_key_value(tier)
                .map(|(name, words)| (name.as_str(), words.as_slice(), u64::from(weight)))
        })
        .filter(|(_, words, _)| !words.is_empty())
        .collect();

    if available.is_empty() {
        return None;
    }

    let total: u64 = available.iter().map(|&(_, _, weight)| weight).sum();
    let mut roll = rng.u64(0..total);
    for (tier, words, weight) in available {
        if roll < weight {
            let word = rng.choice(words)?;
            return Some(WeightedPick {
                tier,
                word: word.as_str(),
            });
        }
        roll -= weight;
    }

    None
}
