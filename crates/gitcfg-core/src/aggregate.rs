//! Level-partitioned aggregation of configuration entries
//!
//! Enumeration yields a flat stream of entries tagged with their level. This
//! module groups that stream by level in two passes: a counting pass that
//! rejects unknown levels and sizes each bucket, then a fill pass that keeps
//! the delivery order within every level.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{ConfigEntry, ConfigLevel, Error, Result};

/// Number of entries observed at each canonical level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts([usize; ConfigLevel::COUNT]);

impl LevelCounts {
    pub fn get(&self, level: ConfigLevel) -> usize {
        self.0[level.index()]
    }

    /// Total number of entries across all levels.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Levels with at least one entry, lowest precedence first.
    pub fn populated(&self) -> impl Iterator<Item = ConfigLevel> + '_ {
        ConfigLevel::ALL
            .into_iter()
            .filter(|level| self.get(*level) > 0)
    }

    fn increment(&mut self, level: ConfigLevel) {
        self.0[level.index()] += 1;
    }
}

/// Ordered `(key, value)` pairs of one level.
///
/// Keys may repeat: every occurrence is kept in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelEntries(Vec<(String, String)>);

impl LevelEntries {
    fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    fn push(&mut self, key: String, value: String) {
        self.0.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys in enumeration order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Last value recorded for `key` at this level.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value recorded for `key` at this level, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for LevelEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Configuration entries grouped by level.
///
/// Only levels that contributed at least one entry are present. Iteration
/// runs from the lowest to the highest precedence level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeveledConfig {
    levels: BTreeMap<ConfigLevel, LevelEntries>,
}

impl LeveledConfig {
    /// Count and group `entries` in one call.
    pub fn from_entries<L>(entries: &[ConfigEntry<L>]) -> Result<Self>
    where
        L: Copy + TryInto<ConfigLevel, Error = Error>,
    {
        let counts = count_by_level(entries)?;
        aggregate(entries, &counts)
    }

    pub fn get(&self, level: ConfigLevel) -> Option<&LevelEntries> {
        self.levels.get(&level)
    }

    pub fn levels(&self) -> impl Iterator<Item = ConfigLevel> + '_ {
        self.levels.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConfigLevel, &LevelEntries)> {
        self.levels.iter().map(|(level, entries)| (*level, entries))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Serialize for LeveledConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.levels.len()))?;
        for (level, entries) in &self.levels {
            map.serialize_entry(level, entries)?;
        }
        map.end()
    }
}

/// Count entries per canonical level.
///
/// Fails with [`Error::UnrecognizedLevel`] on the first entry whose level is
/// outside the canonical set.
pub fn count_by_level<L>(entries: &[ConfigEntry<L>]) -> Result<LevelCounts>
where
    L: Copy + TryInto<ConfigLevel, Error = Error>,
{
    let mut counts = LevelCounts::default();
    for entry in entries {
        counts.increment(entry.config_level()?);
    }
    Ok(counts)
}

/// Group `entries` by level using previously computed `counts`.
///
/// A bucket is allocated for each level with a non-zero count and holds at
/// most that many entries. Entries beyond a level's count are dropped.
pub fn aggregate<L>(entries: &[ConfigEntry<L>], counts: &LevelCounts) -> Result<LeveledConfig>
where
    L: Copy + TryInto<ConfigLevel, Error = Error>,
{
    let mut levels: BTreeMap<ConfigLevel, LevelEntries> = counts
        .populated()
        .map(|level| (level, LevelEntries::with_capacity(counts.get(level))))
        .collect();

    for entry in entries {
        let level = entry.config_level()?;
        match levels.get_mut(&level) {
            Some(bucket) if bucket.len() < counts.get(level) => {
                bucket.push(entry.name.clone(), entry.value.clone())
            }
            _ => tracing::warn!(
                level = %level,
                key = %entry.name,
                "Dropping config entry beyond the counted entries for its level"
            ),
        }
    }

    Ok(LeveledConfig { levels })
}
