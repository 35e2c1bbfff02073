//! Pull session state
//!
//! A session tracks what one user has pulled so far: the set of names held
//! back for duplicate avoidance and a short most-recent-first history. It
//! carries an id so concurrent sessions can be told apart in logs, and it
//! serializes cleanly for hosts that persist sessions between runs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use web_time::SystemTime;

use crate::{
    WordKind,
    constants::session::HISTORY_LIMIT,
    generator::{GenerateError, GeneratedName, GenerationOptions, generate},
    picker::TierWeights,
    store::WordStore,
};

/// One entry in the pull history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRecord {
    /// When the pull happened
    pub at: SystemTime,
    /// The generated name
    pub name: String,
    /// Tier the adjective was drawn from
    pub tier: String,
}

/// Per-user generation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    used_names: HashSet<String>,
    history: Vec<PullRecord>,
}

impl Session {
    /// Creates an empty session with a fresh id
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            used_names: HashSet::new(),
            history: Vec::new(),
        }
    }

    /// The session's id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Generates a name and records it in this session
    ///
    /// The name lands at the front of the history, which keeps at most
    /// [`HISTORY_LIMIT`] entries. With duplicate avoidance on, the
    /// lowercased name also joins the used set so later pulls skip it.
    ///
    /// # Errors
    ///
    /// Passes through [`generate`]'s errors; the session is unchanged when
    /// generation fails.
    pub fn pull(
        &mut self,
        store: &WordStore,
        weights: &TierWeights,
        options: GenerationOptions,
        rng: &mut fastrand::Rng,
    ) -> Result<GeneratedName, GenerateError> {
        let generated = generate(
            store.word_lists(WordKind::Adjective),
            store.word_lists(WordKind::Noun),
            weights,
            options,
            &self.used_names,
            rng,
        )?;

        if options.avoid_duplicates {
            self.used_names.insert(generated.name.to_lowercase());
        }
        self.history.insert(
            0,
            PullRecord {
                at: SystemTime::now(),
                name: generated.name.clone(),
                tier: generated.adjective_tier.clone(),
            },
        );
        self.history.truncate(HISTORY_LIMIT);

        Ok(generated)
    }

    /// Forgets every name held back for duplicate avoidance
    ///
    /// The history is untouched.
    pub fn clear_used_names(&mut self) {
        self.used_names.clear();
    }

    /// Lowercased names this session refuses to repeat
    pub fn used_names(&self) -> &HashSet<String> {
        &self.used_names
    }

    /// Recent pulls, most recent first
    pub fn history(&self) -> &[PullRecord] {
        &self.history
    }

    /// The most recently pulled name, if any
    pub fn last_name(&self) -> Option<&str> {
        self.history.first().map(|record| record.name.as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::format::CaseMode;

    fn store_with_words(
        dir: &tempfile::TempDir,
        adjectives: &[&str],
        nouns: &[&str],
    ) -> WordStore {
        let mut store = WordStore::load(dir.path().join("wordlists.json")).unwrap();
        store
            .set_tier_words(
                "Common",
                WordKind::Adjective,
                adjectives.iter().map(|w| (*w).to_string()).collect(),
            )
            .unwrap();
        store
            .set_tier_words(
                "Common",
                WordKind::Noun,
                nouns.iter().map(|w| (*w).to_string()).collect(),
            )
            .unwrap();
        store
    }

    fn titled() -> GenerationOptions {
        GenerationOptions {
            case_mode: CaseMode::Title,
            ..GenerationOptions::default()
        }
    }

    #[test]
    fn test_pull_records_history_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_words(&dir, &["swift", "grim"], &["fang", "flame"]);
        let weights: TierWeights = [("Common", 5)].into_iter().collect();
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        let mut pulled = Vec::new();
        for _ in 0..3 {
            pulled.push(
                session
                    .pull(&store, &weights, titled(), &mut rng)
                    .unwrap()
                    .name,
            );
        }

        let recorded: Vec<&str> = session
            .history()
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        pulled.reverse();
        assert_eq!(recorded, pulled);
        assert_eq!(session.last_name(), Some(pulled[0].as_str()));
    }

    #[test]
    fn test_history_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_words(&dir, &["swift"], &["fang"]);
        let weights: TierWeights = [("Common", 5)].into_iter().collect();
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        for _ in 0..(HISTORY_LIMIT + 3) {
            session.pull(&store, &weights, titled(), &mut rng).unwrap();
        }

        assert_eq!(session.history().len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_pull_avoids_duplicates_within_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_words(&dir, &["swift"], &["fang"]);
        let weights: TierWeights = [("Common", 5)].into_iter().collect();
        let options = GenerationOptions {
            avoid_duplicates: true,
            ..titled()
        };
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        let first = session.pull(&store, &weights, options, &mut rng).unwrap();
        assert_eq!(first.name, "Swift Fang");
        assert!(session.used_names().contains("swift fang"));

        let second = session.pull(&store, &weights, options, &mut rng);
        assert_eq!(second, Err(GenerateError::RetryExhausted));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_clear_used_names_allows_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_words(&dir, &["swift"], &["fang"]);
        let weights: TierWeights = [("Common", 5)].into_iter().collect();
        let options = GenerationOptions {
            avoid_duplicates: true,
            ..titled()
        };
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        session.pull(&store, &weights, options, &mut rng).unwrap();
        session.clear_used_names();

        let repeat = session.pull(&store, &weights, options, &mut rng).unwrap();
        assert_eq!(repeat.name, "Swift Fang");
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_pull_without_dedup_repeats_and_tracks_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_words(&dir, &["swift"], &["fang"]);
        let weights: TierWeights = [("Common", 5)].into_iter().collect();
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        for _ in 0..2 {
            let generated = session.pull(&store, &weights, titled(), &mut rng).unwrap();
            assert_eq!(generated.name, "Swift Fang");
        }
        assert!(session.used_names().is_empty());
    }

    #[test]
    fn test_failed_pull_leaves_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordStore::load(dir.path().join("wordlists.json")).unwrap();
        let weights: TierWeights = [("Common", 5)].into_iter().collect();
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        let result = session.pull(&store, &weights, titled(), &mut rng);

        assert_eq!(
            result,
            Err(GenerateError::NoEligibleWords(WordKind::Adjective))
        );
        assert!(session.history().is_empty());
        assert!(session.used_names().is_empty());
        assert_eq!(session.last_name(), None);
    }

    #[test]
    fn test_history_records_the_adjective_tier() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = WordStore::load(dir.path().join("wordlists.json")).unwrap();
        store
            .set_tier_words("Common", WordKind::Adjective, vec!["swift".to_string()])
            .unwrap();
        store
            .set_tier_words("Epic", WordKind::Noun, vec!["storm".to_string()])
            .unwrap();
        let weights: TierWeights = [("Common", 5), ("Epic", 1)].into_iter().collect();
        let mut rng = fastrand::Rng::with_seed(8);
        let mut session = Session::new();

        let generated = session.pull(&store, &weights, titled(), &mut rng).unwrap();

        assert_eq!(generated.adjective_tier, "Common");
        assert_eq!(generated.noun_tier, "Epic");
        assert_eq!(session.history()[0].tier, "Common");
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new().id(), Session::new().id());
    }
}
