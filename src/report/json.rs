use crate::report::RunSummary;

pub fn render_summary_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
