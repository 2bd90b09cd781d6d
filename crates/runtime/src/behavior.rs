//! Behavior modes: what an agent does while a plan step is active.

/// Movement behavior attached to a planner action.
///
/// The planner never interprets these. [`crate::Agent`] switches to the mode
/// of each dispatched step and runs it every tick until the next switch.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BehaviorMode {
    /// Walk to a random passable vertex, then pick another.
    #[default]
    Patrol,
    /// Walk to the nearest interest category not yet visited.
    GoToFood,
    /// Chase the player until within stop distance.
    GoToPlayer,
    /// Walk to the home vertex.
    GoToHome,
    /// Stand still and lower hunger.
    Eating,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn display_is_snake_case() {
        assert_eq!(BehaviorMode::GoToFood.to_string(), "go_to_food");
        let label: &'static str = BehaviorMode::Eating.into();
        assert_eq!(label, "eating");
    }

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<&'static str> = BehaviorMode::iter().map(Into::into).collect();
        assert_eq!(labels.len(), 5);
        assert!(labels.contains("go_to_player"));
    }
}
