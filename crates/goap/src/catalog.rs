//! Validated, immutable action sets.

use std::collections::HashSet;

use crate::{Action, CatalogError, WorldState};

/// Ordered set of actions with unique, non-empty names.
///
/// Declaration order matters: the planner expands actions in this order, so
/// among equally short plans the one built from earlier actions wins.
#[derive(Clone, Debug)]
pub struct ActionCatalog<K> {
    actions: Vec<Action<K>>,
}

impl<K> ActionCatalog<K> {
    /// Builds a catalog, rejecting empty or duplicate action names.
    pub fn new(actions: Vec<Action<K>>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for (index, action) in actions.iter().enumerate() {
            if action.name().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !names.insert(action.name()) {
                return Err(CatalogError::DuplicateName(action.name().to_owned()));
            }
        }
        Ok(Self { actions })
    }

    /// Builds a catalog and checks it against the goal it will plan for.
    pub fn for_goal(actions: Vec<Action<K>>, goal: &WorldState) -> Result<Self, CatalogError> {
        let catalog = Self::new(actions)?;
        catalog.check_goal(goal)?;
        Ok(catalog)
    }

    /// Fails if some action sets a proposition that neither `goal` nor any
    /// precondition in the catalog ever looks at.
    pub fn check_goal(&self, goal: &WorldState) -> Result<(), CatalogError> {
        let referenced: HashSet<&str> = goal
            .keys()
            .chain(self.actions.iter().flat_map(|a| a.preconditions().keys()))
            .collect();

        for action in &self.actions {
            if let Some(key) = action.effects().keys().find(|k| !referenced.contains(k)) {
                return Err(CatalogError::UnreferencedEffect {
                    action: action.name().to_owned(),
                    key: key.to_owned(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Action<K>> {
        self.actions.iter().find(|a| a.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action<K>> + '_ {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action<K>] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
