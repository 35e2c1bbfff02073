//! Word list persistence
//!
//! The store owns the tier roster and the per-tier adjective and noun lists,
//! backed by a single JSON file. Every mutation saves immediately; writes go
//! through a temp file in the target directory and a rename, so a crash
//! mid-write never leaves a half-written file behind. A missing file on load
//! bootstraps the default tiers.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::{WordKind, constants::store::DEFAULT_TIERS};

/// Errors from loading or mutating the word list store
#[derive(Debug, Error)]
pub enum Error {
    /// The word list JSON could not be parsed
    #[error("word list data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// The named tier is not part of the store
    #[error("unknown tier {0:?}")]
    UnknownTier(String),
    /// Reading or writing the backing file failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// On-disk shape of the word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct WordListDocument {
    tiers: Vec<String>,
    adjectives: HashMap<String, Vec<String>>,
    nouns: HashMap<String, Vec<String>>,
}

impl Default for WordListDocument {
    fn default() -> Self {
        let mut document = Self {
            tiers: DEFAULT_TIERS.iter().map(ToString::to_string).collect(),
            adjectives: HashMap::new(),
            nouns: HashMap::new(),
        };
        ensure_tier_entries(&mut document);
        document
    }
}

/// Every tier named in the roster gets a (possibly empty) list of each kind
fn ensure_tier_entries(document: &mut WordListDocument) {
    for tier in &document.tiers {
        document.adjectives.entry(tier.clone()).or_default();
        document.nouns.entry(tier.clone()).or_default();
    }
}

/// Tiered word lists bound to a JSON file
#[derive(Debug, Clone)]
pub struct WordStore {
    document: WordListDocument,
    path: PathBuf,
}

impl WordStore {
    /// Opens the store at `path`, creating it with the default tiers when
    /// the file does not exist yet
    ///
    /// Tiers present in the roster but missing from a word list get an empty
    /// entry, so partially hand-edited files still load.
    ///
    /// # Errors
    ///
    /// [`Error::Corrupt`] when the file holds invalid JSON or lacks one of
    /// the required keys, [`Error::Io`] for any other read or write failure.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                let mut document: WordListDocument = serde_json::from_str(&contents)?;
                ensure_tier_entries(&mut document);
                Ok(Self { document, path })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no word list file, starting with defaults");
                let store = Self {
                    document: WordListDocument::default(),
                    path,
                };
                store.save()?;
                Ok(store)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Opens the store at the conventional location
    ///
    /// # Errors
    ///
    /// Same as [`WordStore::load`].
    pub fn load_default() -> Result<Self, Error> {
        Self::load(crate::constants::store::DEFAULT_FILE)
    }

    /// Writes the current state to the backing file atomically
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the directory cannot be created or the write or
    /// rename fails.
    pub fn save(&self) -> Result<(), Error> {
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;
        let temp = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(temp.as_file(), &self.document)
            .map_err(io::Error::from)?;
        temp.persist(&self.path).map_err(|persist| persist.error)?;
        Ok(())
    }

    /// Adds a tier with empty word lists, returning whether anything changed
    ///
    /// The name is trimmed first. An empty or already existing name is a
    /// logged no-op.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when saving the updated state fails.
    pub fn add_tier(&mut self, name: &str) -> Result<bool, Error> {
        let name = name.trim();
        if name.is_empty() {
            warn!("cannot add a tier with an empty name");
            return Ok(false);
        }
        if self.has_tier(name) {
            warn!(tier = name, "tier already exists");
            return Ok(false);
        }
        self.document.tiers.push(name.to_owned());
        self.document.adjectives.insert(name.to_owned(), Vec::new());
        self.document.nouns.insert(name.to_owned(), Vec::new());
        self.save()?;
        Ok(true)
    }

    /// Removes a tier and both of its word lists, returning whether anything
    /// changed
    ///
    /// An unknown name is a logged no-op.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when saving the updated state fails.
    pub fn remove_tier(&mut self, name: &str) -> Result<bool, Error> {
        let Some(position) = self.document.tiers.iter().position(|tier| tier == name) else {
            warn!(tier = name, "tier does not exist");
            return Ok(false);
        };
        self.document.tiers.remove(position);
        self.document.adjectives.remove(name);
        self.document.nouns.remove(name);
        self.save()?;
        Ok(true)
    }

    /// Replaces one tier's word list of the given kind
    ///
    /// Callers are expected to normalize the words first.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTier`] when the tier is not in the roster,
    /// [`Error::Io`] when saving fails.
    pub fn set_tier_words(
        &mut self,
        tier: &str,
        kind: WordKind,
        words: Vec<String>,
    ) -> Result<(), Error> {
        if !self.has_tier(tier) {
            return Err(Error::UnknownTier(tier.to_owned()));
        }
        let lists = match kind {
            WordKind::Adjective => &mut self.document.adjectives,
            WordKind::Noun => &mut self.document.nouns,
        };
        lists.insert(tier.to_owned(), words);
        self.save()
    }

    /// Replaces the whole store with the given JSON document and saves it
    ///
    /// The current state is untouched when parsing fails.
    ///
    /// # Errors
    ///
    /// [`Error::Corrupt`] when the JSON is invalid or lacks a required key,
    /// [`Error::Io`] when saving fails.
    pub fn import_json(&mut self, json: &str) -> Result<(), Error> {
        let mut document: WordListDocument = serde_json::from_str(json)?;
        ensure_tier_entries(&mut document);
        self.document = document;
        self.save()
    }

    /// Serializes the current state as pretty-printed JSON
    ///
    /// # Panics
    ///
    /// The default serializer cannot fail on this data.
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.document).expect("default serializer cannot fail")
    }

    /// Tier names in their display order
    pub fn tiers(&self) -> &[String] {
        &self.document.tiers
    }

    /// Whether a tier with exactly this name exists
    pub fn has_tier(&self, name: &str) -> bool {
        self.document.tiers.iter().any(|tier| tier == name)
    }

    /// All word lists of one kind, keyed by tier
    pub fn word_lists(&self, kind: WordKind) -> &HashMap<String, Vec<String>> {
        match kind {
            WordKind::Adjective => &self.document.adjectives,
            WordKind::Noun => &self.document.nouns,
        }
    }

    /// One tier's words of the given kind, empty for an unknown tier
    pub fn tier_words(&self, tier: &str, kind: WordKind) -> &[String] {
        self.word_lists(kind).get(tier).map_or(&[], Vec::as_slice)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
