// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Seed identifier pool
//!
//! The pool holds the UUIDs of entities that already exist in the system under
//! test. Lookup and update cases draw from it without removing anything;
//! delete cases take from it so a deleted entity is never targeted again.
//!
//! # Example
//!
//! ```
//! use junqo_fuzz_seed::UuidPool;
//!
//! let sql = "INSERT INTO users VALUES ('11111111-1111-1111-1111-111111111111', 'a');";
//! let pool = UuidPool::load(sql);
//! assert_eq!(pool.len(), 1);
//! assert_eq!(pool.take().unwrap(), "11111111-1111-1111-1111-111111111111");
//! assert!(pool.take().is_err());
//! ```

use std::collections::{HashSet, VecDeque};
use std::path::Path;
use std::sync::OnceLock;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex_lite::Regex;
use tracing::{debug, info};

use crate::error::SeedError;

/// Canonical 8-4-4-4-12 textual UUID grammar, any letter case
///
/// Word boundaries are checked separately: regex-lite's `\b` only knows ASCII.
fn uuid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
            .expect("UUID pattern must compile")
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `text[start..end]` is not glued to a letter, digit or underscore
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Extract every UUID-shaped substring from `text`, in order of appearance
///
/// A match must stand alone: any Unicode letter, digit or underscore directly
/// before or after it disqualifies it. Duplicates are dropped (first
/// occurrence wins, compared case-insensitively); the surviving identifiers
/// keep the letter case they had in the source.
#[must_use]
pub fn extract_identifiers(text: &str) -> Vec<String> {
    let pattern = uuid_pattern();
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(m) = pattern.find_at(text, pos) {
        if on_word_boundaries(text, m.start(), m.end()) {
            found.push(m.as_str().to_string());
            pos = m.end();
        } else {
            // Matches start on an ASCII hex digit
            pos = m.start() + 1;
        }
    }
    dedup(found)
}

fn dedup(ids: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.to_ascii_lowercase()))
        .collect()
}

struct PoolState {
    ids: VecDeque<String>,
    rng: StdRng,
}

/// A concurrency-safe pool of known-valid entity identifiers
pub struct UuidPool {
    /// Contents at load time, kept for [`UuidPool::reset`]
    initial: Vec<String>,
    state: Mutex<PoolState>,
}

impl UuidPool {
    /// Build a pool from every UUID found in a seed text blob
    ///
    /// Finding no identifiers is not an error here; callers that need a
    /// usable pool check [`UuidPool::ensure_non_empty`] before testing starts.
    #[must_use]
    pub fn load(source: &str) -> Self {
        Self::from_ids(extract_identifiers(source))
    }

    /// Read a seed file and build a pool from the identifiers it contains
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Load`] if the file is missing or unreadable.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SeedError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let pool = Self::load(&text);
        info!(path = %path.display(), identifiers = pool.len(), "Loaded seed identifiers");
        Ok(pool)
    }

    /// Build a pool from an explicit identifier list
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let initial = dedup(ids.into_iter().map(Into::into));
        Self {
            state: Mutex::new(PoolState {
                ids: initial.iter().cloned().collect(),
                rng: StdRng::from_entropy(),
            }),
            initial,
        }
    }

    /// Replace the draw RNG with one seeded from `seed`
    ///
    /// Draws are then reproducible for a given seed and pool ordering.
    #[must_use]
    pub fn with_rng_seed(self, seed: u64) -> Self {
        self.state.lock().rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Return a uniformly chosen identifier without removing it
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptyPool`] if every identifier has been taken.
    pub fn draw(&self) -> Result<String, SeedError> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        if state.ids.is_empty() {
            return Err(SeedError::EmptyPool);
        }
        let idx = state.rng.gen_range(0..state.ids.len());
        Ok(state.ids[idx].clone())
    }

    /// Remove and return the oldest identifier
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptyPool`] if every identifier has been taken.
    pub fn take(&self) -> Result<String, SeedError> {
        let id = self.state.lock().ids.pop_front().ok_or(SeedError::EmptyPool)?;
        debug!(id = %id, remaining = self.len(), "Took seed identifier");
        Ok(id)
    }

    /// Remove and return the `count` oldest identifiers, or none at all
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptyPool`] if fewer than `count` identifiers
    /// remain; the pool is left untouched.
    pub fn take_many(&self, count: usize) -> Result<Vec<String>, SeedError> {
        let mut state = self.state.lock();
        if state.ids.len() < count {
            return Err(SeedError::EmptyPool);
        }
        let ids: Vec<String> = state.ids.drain(..count).collect();
        debug!(ids = ?ids, remaining = state.ids.len(), "Took seed identifiers");
        Ok(ids)
    }

    /// Number of identifiers still available
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().ids.len()
    }

    /// Whether every identifier has been taken
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().ids.is_empty()
    }

    /// Number of identifiers the pool was loaded with
    #[must_use]
    pub fn initial_len(&self) -> usize {
        self.initial.len()
    }

    /// Whether `id` is still available
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.state.lock().ids.iter().any(|candidate| candidate == id)
    }

    /// Copy of the identifiers still available, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.state.lock().ids.iter().cloned().collect()
    }

    /// Restore the load-time contents, undoing every `take`
    pub fn reset(&self) {
        self.state.lock().ids = self.initial.iter().cloned().collect();
    }

    /// Fail fast when the pool was loaded without any identifiers
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::NoIdentifiers`] naming `source_name`.
    pub fn ensure_non_empty(&self, source_name: &str) -> Result<(), SeedError> {
        if self.initial.is_empty() {
            return Err(SeedError::NoIdentifiers {
                source_name: source_name.to_string(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for UuidPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UuidPool")
            .field("initial", &self.initial.len())
            .field("available", &self.len())
            .finish()
    }
}
