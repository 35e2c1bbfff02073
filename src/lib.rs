//! # Pal Name Generator Library
//!
//! Core logic for a slot-pull style name generator. Words live in rarity
//! tiers; a pull draws an adjective and a noun through the tier weights and
//! formats the pair into one name, which a per-user session records. Word
//! lists persist as a single JSON file that users can edit directly or
//! replace through import. Frontends only orchestrate; everything here is
//! UI-free.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::doc_markdown)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod constants;

pub mod format;
pub mod generator;
pub mod normalize;
pub mod picker;
pub mod session;
pub mod store;

/// Which half of a name a word supplies
///
/// Every tier carries one word list per kind; operations that touch word
/// lists take a `WordKind` instead of coming in adjective and noun flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordKind {
    /// The first half of a name
    Adjective,
    /// The second half of a name
    Noun,
}

impl Display for WordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Adjective => "adjective",
            Self::Noun => "noun",
        })
    }
}
