//! Presentation of a parsed script: step cards and the nutrition block.

use serde::Serialize;

use crate::script::ParsedScript;

/// Heading shown above the narrative block.
pub const NUTRITION_HEADING: &str = "Nutritional Information";

/// One step as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepCard {
    /// "Step 1", "Step 2", ... regardless of the numbering in the script.
    pub title: String,
    pub body: String,
}

/// Build the step cards for a parsed script, numbered by position.
pub fn step_cards(parsed: &ParsedScript) -> Vec<StepCard> {
    parsed
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepCard {
            title: format!("Step {}", index + 1),
            body: step.display_text().to_string(),
        })
        .collect()
}

/// Render the whole plan as markdown.
///
/// Cards come first, then the narrative under [`NUTRITION_HEADING`]. Either
/// section is omitted when it has nothing to show.
pub fn render_plan(parsed: &ParsedScript) -> String {
    let mut out = String::new();

    for card in step_cards(parsed) {
        out.push_str(&format!("## {}\n{}\n\n", card.title, card.body));
    }

    let narrative = parsed.narrative.trim();
    if !narrative.is_empty() {
        out.push_str(&format!("## {}\n{}\n", NUTRITION_HEADING, narrative));
    }

    out
}
