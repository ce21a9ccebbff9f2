//! Parsing of generated meal-plan text into numbered steps and narrative.
//!
//! A step is any `<digits>. <text>` run up to the end of its line. Everything
//! else is the narrative (nutrition notes, intro, closing remarks).

use regex::Regex;
use serde::Serialize;
use std::ops::Range;
use std::sync::LazyLock;

/// ASCII digits, a period, one space or tab, then the rest of the line.
static STEP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\.[ \t].+").expect("Invalid step regex"));

/// One numbered step exactly as it appeared in the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The number as written, e.g. "3".
    pub number: String,
    /// The whole matched text, including the `"<n>. "` prefix.
    pub line: String,
    /// Byte range of `line` in the original script.
    pub span: Range<usize>,
}

impl Step {
    /// Step text without its numbering prefix.
    pub fn display_text(&self) -> &str {
        // prefix is the digits, the period, and one whitespace byte
        self.line[self.number.len() + 2..].trim_end_matches('\r')
    }
}

/// A script split into its steps and what remains around them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedScript {
    pub steps: Vec<Step>,
    /// The script with every step span deleted. No other cleanup is applied.
    pub narrative: String,
}

/// Extract every numbered step from `script`, in order of appearance.
///
/// Numbering is taken verbatim: it need not start at 1 or be contiguous.
/// Text without numbered lines yields no steps and a narrative equal to the
/// input. Parsing a narrative again never finds further steps.
pub fn parse_script(script: &str) -> ParsedScript {
    let mut steps = Vec::new();
    let mut narrative = String::with_capacity(script.len());
    let mut last_end = 0;

    for caps in STEP_REGEX.captures_iter(script) {
        let (Some(whole), Some(number)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        narrative.push_str(&script[last_end..whole.start()]);
        last_end = whole.end();

        steps.push(Step {
            number: number.as_str().to_string(),
            line: whole.as_str().to_string(),
            span: whole.range(),
        });
    }
    narrative.push_str(&script[last_end..]);

    ParsedScript { steps, narrative }
}
