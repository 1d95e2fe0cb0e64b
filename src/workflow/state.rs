use serde::{Deserialize, Serialize};

use super::steps::{StepId, TOTAL_STEPS};
use super::validate::ValidationResult;

/// Per-visit completion map for the wizard, carried in the cookie session.
///
/// A single `current` step is the source of truth for activation, so two
/// steps can never be active at the same time. Completion is monotonic:
/// once a step is completed it stays completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowState {
    current: StepId,
    completed: Vec<StepId>,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            current: StepId::Receive,
            completed: Vec::new(),
        }
    }
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, id: StepId) -> bool {
        self.current == id
    }

    pub fn is_completed(&self, id: StepId) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn remaining(&self) -> usize {
        TOTAL_STEPS - self.completed.len()
    }

    /// 1-based position of the active step.
    pub fn active_step_number(&self) -> usize {
        self.current.step().order
    }

    /// Record a step as completed. Refused unless its validator passed.
    /// Completing the active step advances `current` to the next step;
    /// the last step stays active once completed.
    pub fn complete(&mut self, id: StepId, outcome: &ValidationResult) -> bool {
        if !outcome.ok {
            return false;
        }
        if !self.completed.contains(&id) {
            self.completed.push(id);
        }
        if self.current == id {
            if let Some(next) = id.next() {
                self.current = next;
            }
        }
        true
    }
}
