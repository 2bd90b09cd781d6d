//! Tick-driven plan execution with re-planning on divergence.
//!
//! Each tick the owner senses a fresh [`WorldState`] and hands it to
//! [`PlanExecutor::tick`]. The executor compares it with what it saw last
//! time and with what the last dispatched step predicted:
//!
//! - unchanged world: keep going, nothing new to dispatch
//! - world matches the prediction and steps remain: advance and dispatch the
//!   next step
//! - anything else: drop the plan and plan again from the sensed state
//!
//! A step is dispatched exactly once, at the moment the cursor reaches it.

use crate::{Action, ActionCatalog, Plan, Planner, WorldState};

/// Why the executor has nothing to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdleReason {
    /// The goal already holds in the sensed state.
    GoalSatisfied,
    /// The planner could not reach the goal.
    NoPlan,
}

/// What the owner should do after a tick.
#[derive(Debug)]
pub enum Directive<'a, K> {
    /// Start executing `action`, the step at index `step` of the active plan.
    Dispatch {
        step: usize,
        action: &'a Action<K>,
        replanned: bool,
    },
    /// The current step is still in progress.
    Hold,
    /// No active plan.
    Idle(IdleReason),
}

impl<K> Directive<'_, K> {
    pub fn dispatched(&self) -> Option<&Action<K>> {
        match self {
            Directive::Dispatch { action, .. } => Some(action),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct PlanExecutor<K> {
    planner: Planner,
    plan: Option<Plan<K>>,
    cursor: usize,
    recorded: Option<WorldState>,
    predicted: Option<WorldState>,
    idle: IdleReason,
    replans: u64,
}

impl<K: Clone> PlanExecutor<K> {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner,
            plan: None,
            cursor: 0,
            recorded: None,
            predicted: None,
            idle: IdleReason::NoPlan,
            replans: 0,
        }
    }

    /// Advances the executor with the freshly sensed state.
    pub fn tick(
        &mut self,
        catalog: &ActionCatalog<K>,
        goal: &WorldState,
        current: WorldState,
    ) -> Directive<'_, K> {
        let changed = self.recorded.as_ref() != Some(&current);
        let mut replan = false;
        let mut advance = false;

        if changed {
            let on_track = self.predicted.as_ref() == Some(&current);
            let has_next = self
                .plan
                .as_ref()
                .is_some_and(|plan| self.cursor + 1 < plan.len());
            if on_track && has_next {
                advance = true;
            } else {
                replan = true;
            }
        }

        if advance {
            self.cursor += 1;
        }

        let mut replanned = false;
        if replan {
            self.abandon();
            self.replans += 1;
            match self.planner.plan(catalog, &current, goal) {
                Ok(plan) if plan.is_empty() => {
                    self.idle = IdleReason::GoalSatisfied;
                }
                Ok(plan) => {
                    self.plan = Some(plan);
                    self.cursor = 0;
                    replanned = true;
                }
                Err(err) => {
                    tracing::warn!(error = %err, state = ?current, "no plan, staying idle");
                    self.idle = IdleReason::NoPlan;
                }
            }
        }

        let dispatch = advance || replanned;
        let directive = match &self.plan {
            Some(plan) if dispatch => {
                let action = &plan.steps()[self.cursor];
                self.predicted = Some(action.apply_effects(&current));
                Directive::Dispatch {
                    step: self.cursor,
                    action,
                    replanned,
                }
            }
            Some(_) => Directive::Hold,
            None => Directive::Idle(self.idle),
        };
        self.recorded = Some(current);
        directive
    }

    /// Drops the active plan and prediction.
    pub fn abandon(&mut self) {
        self.plan = None;
        self.cursor = 0;
        self.predicted = None;
    }

    pub fn plan(&self) -> Option<&Plan<K>> {
        self.plan.as_ref()
    }

    pub fn current_step(&self) -> Option<&Action<K>> {
        self.plan.as_ref().and_then(|plan| plan.get(self.cursor))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of planner invocations so far.
    pub fn replans(&self) -> u64 {
        self.replans
    }
}
