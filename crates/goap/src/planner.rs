//! Breadth-first forward planner.
//!
//! The planner walks the state graph implied by a catalog, layer by layer,
//! starting from the current state. The first node whose state satisfies the
//! goal wins, so the returned plan always has the fewest possible actions.
//!
//! Within a single candidate plan an action is never used twice. No global
//! visited set is kept: two branches that reach the same state with different
//! used-action sets may still lead to different plans.

use std::collections::VecDeque;

use crate::{Action, ActionCatalog, PlanError, WorldState};

/// Tunables for [`Planner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Upper bound on dequeued search nodes before giving up.
    pub max_nodes: usize,
}

impl PlannerConfig {
    pub const DEFAULT_MAX_NODES: usize = 10_000;

    pub const fn new() -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
        }
    }

    pub const fn with_max_nodes(max_nodes: usize) -> Self {
        Self { max_nodes }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered sequence of actions produced by [`Planner::plan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan<K> {
    steps: Vec<Action<K>>,
}

impl<K> Plan<K> {
    pub fn empty() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[Action<K>] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Action<K>> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(Action::name).collect()
    }

    /// State reached by applying every step's effects to `initial` in order.
    pub fn final_state(&self, initial: &WorldState) -> WorldState {
        self.steps
            .iter()
            .fold(initial.clone(), |state, action| action.apply_effects(&state))
    }
}

struct Node {
    state: WorldState,
    steps: Vec<usize>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// Finds the shortest action sequence that takes `current` to a state
    /// satisfying `goal`.
    ///
    /// A goal that already holds yields an empty plan, not an error.
    pub fn plan<K: Clone>(
        &self,
        catalog: &ActionCatalog<K>,
        current: &WorldState,
        goal: &WorldState,
    ) -> Result<Plan<K>, PlanError> {
        let actions = catalog.as_slice();
        let mut open = VecDeque::from([Node {
            state: current.clone(),
            steps: Vec::new(),
        }]);
        let mut explored = 0usize;

        while let Some(node) = open.pop_front() {
            explored += 1;
            if explored > self.config.max_nodes {
                tracing::warn!(limit = self.config.max_nodes, "planner node limit reached");
                return Err(PlanError::NodeLimit {
                    limit: self.config.max_nodes,
                });
            }

            if node.state.satisfies(goal) {
                let steps: Vec<Action<K>> =
                    node.steps.iter().map(|&i| actions[i].clone()).collect();
                tracing::debug!(
                    explored,
                    steps = ?steps.iter().map(Action::name).collect::<Vec<_>>(),
                    "plan found"
                );
                return Ok(Plan { steps });
            }

            for (index, action) in actions.iter().enumerate() {
                if node.steps.contains(&index) || !action.is_applicable(&node.state) {
                    continue;
                }
                let mut steps = node.steps.clone();
                steps.push(index);
                open.push_back(Node {
                    state: action.apply_effects(&node.state),
                    steps,
                });
            }
        }

        tracing::debug!(explored, "goal unreachable");
        Err(PlanError::Unreachable { explored })
    }
}
