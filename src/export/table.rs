//! Terminal table rendering.

use tabled::settings::Style;
use tabled::Table;

use crate::models::Outcome;

use super::row::ResultRow;

/// Renders the result collection as a bordered terminal table.
pub fn render_table(outcomes: &[Outcome]) -> String {
    let rows = outcomes.iter().map(ResultRow::from);
    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::PageSpeedMetrics;
    use crate::models::{Device, Task};

    #[test]
    fn test_render_table_includes_headers_and_rows() {
        let task = Task::new("https://example.com", Device::Mobile);
        let metrics = PageSpeedMetrics {
            performance_score: Some(91),
            ..Default::default()
        };
        let outcomes = vec![Outcome::success(&task, metrics)];

        let table = render_table(&outcomes);
        assert!(table.contains("Performance Score"));
        assert!(table.contains("https://example.com"));
        assert!(table.contains("91"));
    }

    #[test]
    fn test_render_table_empty_run() {
        let table = render_table(&[]);
        // Header-only table still renders
        assert!(table.contains("URL"));
    }
}
