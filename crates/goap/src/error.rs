//! Catalog and planning errors.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("action at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("action name {0:?} is declared more than once")]
    DuplicateName(String),

    #[error("effect {key:?} of action {action:?} is never required by the goal or any action")]
    UnreferencedEffect { action: String, key: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("goal unreachable after exploring {explored} nodes")]
    Unreachable { explored: usize },

    #[error("search exceeded the limit of {limit} nodes")]
    NodeLimit { limit: usize },
}
