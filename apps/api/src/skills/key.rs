//! Case-insensitive skill identity.
//!
//! `SkillKey` is the single definition of "same skill" in the crate. The
//! comparator, aggregator and JD scorer all go through `SkillSet` instead of
//! lower-casing strings at each call site.

use std::collections::HashSet;

/// Normalized identity of a skill name (Unicode lower-case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillKey(String);

impl SkillKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Insertion-ordered set of skill names, deduplicated by `SkillKey`.
/// Keeps the casing of the first occurrence for display.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    names: Vec<String>,
    keys: HashSet<SkillKey>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an equal skill (ignoring case) is already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.keys.insert(SkillKey::new(name)) {
            self.names.push(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&SkillKey::new(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}
