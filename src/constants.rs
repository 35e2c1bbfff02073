//! Configuration constants for the palgen name generator
//!
//! This module contains the limits and default values used throughout
//! the generator so that every boundary lives in one place.

/// Name generation constants
pub mod generator {
    /// Maximum number of attempts before a pull gives up
    ///
    /// The generation loop is rejection sampling: constraint misses
    /// (alliteration, duplicates) discard the attempt and redraw. The cap
    /// keeps a fully-constrained pool from looping forever.
    pub const MAX_ATTEMPTS: usize = 250;
}

/// Word store constants
pub mod store {
    /// Tiers created when no wordlist file exists yet
    pub const DEFAULT_TIERS: [&str; 3] = ["Common", "Rare", "Epic"];
    /// Conventional location of the durable wordlist file
    pub const DEFAULT_FILE: &str = "data/wordlists.json";
}

/// Session constants
pub mod session {
    /// Maximum number of retained pull records, most recent first
    pub const HISTORY_LIMIT: usize = 12;
}

/// Suggested tier weight constants
pub mod weights {
    /// Suggested weight for the "Common" tier
    pub const COMMON: u32 = 5;
    /// Suggested weight for the "Rare" tier
    pub const RARE: u32 = 3;
    /// Suggested weight for any other tier
    pub const OTHER: u32 = 1;
}
