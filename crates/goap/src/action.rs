//! Declarative planner actions.

use crate::WorldState;

/// A planner action: preconditions, effects and a caller-defined kind.
///
/// The kind `K` stands in for whatever the action *does* when it is chosen
/// (for agents, a behavior mode). The planner never looks at it; the owner of
/// the plan interprets it when a step is dispatched.
///
/// Actions are identified by name. Two actions with the same name compare
/// equal regardless of their conditions.
#[derive(Clone, Debug)]
pub struct Action<K> {
    name: String,
    preconditions: WorldState,
    effects: WorldState,
    kind: K,
}

impl<K> Action<K> {
    pub fn new(
        name: impl Into<String>,
        preconditions: WorldState,
        effects: WorldState,
        kind: K,
    ) -> Self {
        Self {
            name: name.into(),
            preconditions,
            effects,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn preconditions(&self) -> &WorldState {
        &self.preconditions
    }

    pub fn effects(&self) -> &WorldState {
        &self.effects
    }

    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// True iff every precondition holds in `state`.
    pub fn is_applicable(&self, state: &WorldState) -> bool {
        state.satisfies(&self.preconditions)
    }

    /// The state predicted after running this action from `state`.
    pub fn apply_effects(&self, state: &WorldState) -> WorldState {
        state.apply(&self.effects)
    }
}

impl<K> PartialEq for Action<K> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<K> Eq for Action<K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_state;

    #[test]
    fn applicability_requires_every_precondition() {
        let open = Action::new(
            "open",
            world_state! { "has_key" => true, "at_door" => true },
            world_state! { "door_open" => true },
            (),
        );

        assert!(!open.is_applicable(&world_state! { "has_key" => true }));
        assert!(open.is_applicable(&world_state! { "has_key" => true, "at_door" => true }));
    }

    #[test]
    fn equality_is_by_name() {
        let a = Action::new("a", WorldState::new(), world_state! { "x" => true }, 1);
        let b = Action::new("a", world_state! { "y" => true }, WorldState::new(), 2);
        assert_eq!(a, b);
    }
}
