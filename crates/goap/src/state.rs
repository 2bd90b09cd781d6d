//! Boolean world states.

use std::collections::BTreeMap;
use std::fmt;

/// Mapping from proposition name to truth value.
///
/// Used both for full snapshots and for partial assignments (preconditions,
/// effects, goals). The world is closed: a proposition that is absent is not
/// "unknown", it simply fails any requirement that mentions it.
///
/// Keys are kept sorted, so equality, hashing and `Debug` output do not depend
/// on insertion order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorldState {
    facts: BTreeMap<String, bool>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        self.facts.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.facts.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.facts.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.facts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.facts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// True if every entry of `requirements` is present here with the same
    /// value. Missing keys fail.
    pub fn satisfies(&self, requirements: &WorldState) -> bool {
        requirements
            .facts
            .iter()
            .all(|(key, value)| self.facts.get(key) == Some(value))
    }

    /// Copy of `self` with every entry of `effects` overwritten. Keys not
    /// mentioned by `effects` keep their value.
    #[must_use]
    pub fn apply(&self, effects: &WorldState) -> WorldState {
        let mut next = self.clone();
        for (key, value) in &effects.facts {
            next.facts.insert(key.clone(), *value);
        }
        next
    }
}

impl fmt::Debug for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.facts.iter()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for WorldState {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (key, value) in iter {
            state.set(key, value);
        }
        state
    }
}

impl<K: Into<String>> Extend<(K, bool)> for WorldState {
    fn extend<I: IntoIterator<Item = (K, bool)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Builds a [`WorldState`] from `key => value` pairs.
///
/// ```
/// use goap::world_state;
///
/// let goal = world_state! { "door_open" => true };
/// assert_eq!(goal.get("door_open"), Some(true));
/// assert!(world_state!{}.is_empty());
/// ```
#[macro_export]
macro_rules! world_state {
    () => {
        $crate::WorldState::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut state = $crate::WorldState::new();
        $( state.set($key, $value); )+
        state
    }};
}
