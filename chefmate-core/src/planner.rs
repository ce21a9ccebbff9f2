//! State behind the meal-planner screen.
//!
//! `MealPlanner` owns the selection, a two-state phase guarding submission,
//! and the last generated plan:
//!
//! ```text
//! Idle --begin_submit--> Loading --finish_submit--> Idle
//! ```
//!
//! Submitting while `Loading`, or with nothing selected, is refused.

use thiserror::Error;

use crate::ai::prompts::render_meal_plan_prompt;
use crate::relay::{MealPlanRelay, RelayError};
use crate::render::{render_plan, step_cards, StepCard};
use crate::script::{parse_script, ParsedScript, Step};
use crate::selection::SelectionMap;
use crate::types::GenerateRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Select at least one item before generating a meal plan")]
    EmptySelection,

    #[error("A meal plan is already being generated")]
    Busy,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// One successful generation: the raw script and its parsed views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    script: String,
    parsed: ParsedScript,
}

impl GenerationResult {
    pub fn new(script: String) -> Self {
        let parsed = parse_script(&script);
        Self { script, parsed }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn steps(&self) -> &[Step] {
        &self.parsed.steps
    }

    /// The script with all step lines removed.
    pub fn narrative(&self) -> &str {
        &self.parsed.narrative
    }

    pub fn cards(&self) -> Vec<StepCard> {
        step_cards(&self.parsed)
    }

    pub fn render(&self) -> String {
        render_plan(&self.parsed)
    }
}

#[derive(Debug, Default)]
pub struct MealPlanner {
    selection: SelectionMap,
    phase: Phase,
    result: Option<GenerationResult>,
    last_error: Option<String>,
}

impl MealPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The last successful generation, if any.
    pub fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// Why the most recent submission failed. Cleared by the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Select or deselect an item. Allowed in any phase.
    pub fn toggle(&mut self, item: &str) -> bool {
        self.selection.toggle(item)
    }

    /// Change the quantity of a selected item; ignored for unselected items.
    pub fn set_quantity(&mut self, item: &str, quantity: &str) -> bool {
        self.selection.set_quantity(item, quantity)
    }

    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && self.phase == Phase::Idle
    }

    /// Enter `Loading` and build the request for the current selection.
    pub fn begin_submit(&mut self) -> Result<GenerateRequest, SubmitError> {
        if self.phase == Phase::Loading {
            return Err(SubmitError::Busy);
        }
        if self.selection.is_empty() {
            return Err(SubmitError::EmptySelection);
        }

        self.phase = Phase::Loading;
        self.last_error = None;

        Ok(GenerateRequest {
            prompt: render_meal_plan_prompt(&self.selection),
        })
    }

    /// Record the outcome of the relay call and return to `Idle`.
    ///
    /// A success replaces the previous result. A failure keeps whatever
    /// result was there before and is remembered in [`Self::last_error`].
    pub fn finish_submit(
        &mut self,
        outcome: Result<String, RelayError>,
    ) -> Result<&GenerationResult, SubmitError> {
        self.phase = Phase::Idle;

        match outcome {
            Ok(script) => Ok(self.result.insert(GenerationResult::new(script))),
            Err(e) => {
                tracing::warn!("Error generating meal plan: {}", e);
                self.last_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Abandon an in-flight submission started with [`Self::begin_submit`].
    ///
    /// Returns to `Idle` without touching the result or the last error.
    pub fn cancel_submit(&mut self) {
        if self.phase == Phase::Loading {
            tracing::debug!("Meal plan generation cancelled");
        }
        self.phase = Phase::Idle;
    }

    /// Submit the current selection through `relay` and wait for the result.
    ///
    /// Dropping the returned future before it completes puts the planner
    /// back in `Idle`.
    pub async fn submit<R>(&mut self, relay: &R) -> Result<&GenerationResult, SubmitError>
    where
        R: MealPlanRelay + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = {
            let _guard = LoadingGuard {
                phase: &mut self.phase,
            };
            relay.generate(&request).await
        };
        self.finish_submit(outcome)
    }
}

/// Resets the phase to `Idle` when an awaited relay call goes away.
struct LoadingGuard<'a> {
    phase: &'a mut Phase,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.phase = Phase::Idle;
    }
}
