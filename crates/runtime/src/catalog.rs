//! The built-in forage/eat/rest catalog.
use goap::{Action, ActionCatalog, CatalogError, WorldState, world_state};

use crate::behavior::BehaviorMode;
use crate::sensors::keys;

/// What every agent ultimately wants: to be home, fed and undisturbed.
pub fn default_goal() -> WorldState {
    world_state! { keys::COMFORT => true }
}

/// Actions in planning order.
///
/// Hungry agents patrol until food is in range, walk to it and eat; fed
/// agents go home. A visible player is attacked, or fled from when health is
/// low.
pub fn default_actions() -> Vec<Action<BehaviorMode>> {
    vec![
        Action::new(
            "forage",
            world_state! { keys::FOUND_FOOD => false, keys::HUNGRY => true },
            world_state! { keys::FOUND_FOOD => true },
            BehaviorMode::Patrol,
        ),
        Action::new(
            "search_food",
            world_state! { keys::FOUND_FOOD => true, keys::HUNGRY => true },
            world_state! { keys::ON_FOOD => true },
            BehaviorMode::GoToFood,
        ),
        Action::new(
            "eat",
            world_state! { keys::ON_FOOD => true, keys::HUNGRY => true },
            world_state! { keys::HUNGRY => false },
            BehaviorMode::Eating,
        ),
        Action::new(
            "attack_player",
            world_state! { keys::FOUND_PLAYER => true, keys::LOW_HEALTH => false },
            world_state! { keys::FOUND_PLAYER => false },
            BehaviorMode::GoToPlayer,
        ),
        Action::new(
            "go_home",
            world_state! { keys::FOUND_PLAYER => true, keys::LOW_HEALTH => true },
            world_state! { keys::FOUND_PLAYER => false },
            BehaviorMode::GoToHome,
        ),
        Action::new(
            "rest",
            world_state! { keys::HUNGRY => false, keys::FOUND_PLAYER => false },
            world_state! { keys::COMFORT => true },
            BehaviorMode::GoToHome,
        ),
    ]
}

pub fn default_catalog() -> Result<ActionCatalog<BehaviorMode>, CatalogError> {
    ActionCatalog::for_goal(default_actions(), &default_goal())
}
