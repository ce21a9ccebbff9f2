//! Meal-plan prompt built from the user's selected ingredients.

use crate::selection::SelectionMap;

/// Prompt name used to label calls in logs.
pub const MEAL_PLAN_PROMPT_NAME: &str = "meal_plan";

/// Fixed system instruction sent with every meal-plan request.
pub const MEAL_PLAN_SYSTEM_PROMPT: &str = "You are a meal-planning assistant that generates meal plans from selected ingredients and cooking instructions.";

/// Placeholder used for items without a quantity.
pub const DEFAULT_AMOUNT: &str = "default amount";

/// Render the user prompt for the current selection.
///
/// Items appear in selection order as `Name (quantity)`, with
/// [`DEFAULT_AMOUNT`] standing in for an empty quantity. Callers are expected
/// to refuse empty selections before getting here.
pub fn render_meal_plan_prompt(selection: &SelectionMap) -> String {
    let items = selection
        .iter()
        .map(|(item, quantity)| {
            let quantity = if quantity.is_empty() {
                DEFAULT_AMOUNT
            } else {
                quantity
            };
            format!("{} ({})", item, quantity)
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a meal plan using only the: {} with detailed instructions and nutritional information.",
        items
    )
}
