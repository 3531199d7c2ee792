use super::{ComparisonTrace, Step};

/// Formats comparison traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a comparison trace into a one-line explanation, bottom layer first.
    pub fn format_trace(trace: &ComparisonTrace) -> String {
        if trace.steps.is_empty() {
            return "Nothing to compare".to_string();
        }

        trace
            .steps
            .iter()
            .map(Self::format_step)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn format_step(step: &Step) -> String {
        match step {
            Step::Match(ingredient) => format!("{} ✓", ingredient),
            Step::Wrong { expected, found } => format!("{} ✗ (got {})", expected, found),
            Step::Missing(expected) => format!("{} ✗ (missing)", expected),
            Step::Extra(found) => format!("+{} (extra)", found),
        }
    }
}
