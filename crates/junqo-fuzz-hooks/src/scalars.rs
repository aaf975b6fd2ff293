// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Custom scalar mapping for the generation engine
//!
//! The junqo schema declares `Date`, `DateTime`, `Email` and `ID` scalars. The
//! engine cannot invent values for them on its own, so this module says what a
//! generated value of each looks like. It is set up once per process and is
//! not consulted by the hooks themselves.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Builder;

use crate::body::Value;

/// Seconds between 1970-01-01 and 2100-01-01
const MAX_TIMESTAMP: i64 = 4_102_444_800;

const TLDS: &[&str] = &["com", "org", "net", "io", "fr", "dev"];
const LOCAL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789._";
const DOMAIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// The shape a custom scalar is generated as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp in UTC
    DateTime,
    /// `local@domain.tld`
    Email,
    /// Version 4 UUID
    Id,
}

impl ScalarKind {
    /// Generate one string in this scalar's shape
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            ScalarKind::Date => random_date(rng).format("%Y-%m-%d").to_string(),
            ScalarKind::DateTime => random_datetime(rng).to_rfc3339(),
            ScalarKind::Email => random_email(rng),
            ScalarKind::Id => Builder::from_random_bytes(rng.r#gen()).into_uuid().to_string(),
        }
    }
}

fn random_date<R: Rng + ?Sized>(rng: &mut R) -> NaiveDate {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    let days = rng.gen_range(0..MAX_TIMESTAMP / 86_400) as u64;
    epoch.checked_add_days(Days::new(days)).unwrap_or(epoch)
}

fn random_datetime<R: Rng + ?Sized>(rng: &mut R) -> DateTime<Utc> {
    let secs = rng.gen_range(0..MAX_TIMESTAMP);
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn random_word<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

fn random_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let local = random_word(rng, LOCAL_CHARS, 16);
    let domain = random_word(rng, DOMAIN_CHARS, 12);
    let tld = TLDS.choose(rng).copied().unwrap_or("com");
    format!("{local}@{domain}.{tld}")
}

/// Scalar name to generated shape, for every custom scalar in the schema
#[derive(Debug, Clone)]
pub struct CustomScalars {
    kinds: BTreeMap<String, ScalarKind>,
}

impl CustomScalars {
    /// A mapping with no custom scalars
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kinds: BTreeMap::new(),
        }
    }

    /// Declare how scalar `name` is generated, replacing any earlier entry
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.kinds.insert(name.into(), kind);
        self
    }

    /// Shape declared for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ScalarKind> {
        self.kinds.get(name).copied()
    }

    /// Generate a string literal for scalar `name`, if it is declared
    pub fn sample<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Option<Value> {
        self.get(name).map(|kind| Value::String(kind.sample(rng)))
    }

    /// Declared scalars, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, ScalarKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Number of declared scalars
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no scalar is declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for CustomScalars {
    /// The junqo schema's scalars
    fn default() -> Self {
        Self::empty()
            .with("Date", ScalarKind::Date)
            .with("DateTime", ScalarKind::DateTime)
            .with("Email", ScalarKind::Email)
            .with("ID", ScalarKind::Id)
    }
}
