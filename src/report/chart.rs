use crate::config::ReportConfig;
use crate::errors::ChartError;
use crate::ledger::SpendSource;

const LEFT_MARGIN: &str = "     ";
const COLUMN_WIDTH: usize = 3;

/// Share of total spend per source, in percent and in input order.
///
/// Sources that spent nothing get exactly `0.0`.
pub fn spend_percentages<T: SpendSource>(sources: &[T]) -> Result<Vec<f64>, ChartError> {
    if sources.is_empty() {
        return Err(ChartError::NoCategories);
    }
    let total_spent: f64 = sources.iter().map(|source| source.withdrawals()).sum();
    tracing::debug!(total_spent, "computed total spend");
    if total_spent >= 0.0 {
        return Err(ChartError::NoSpending);
    }

    let percentages: Vec<f64> = sources
        .iter()
        .map(|source| {
            let spent = source.withdrawals();
            if spent < 0.0 {
                spent / total_spent * 100.0
            } else {
                0.0
            }
        })
        .collect();
    tracing::debug!(?percentages, "computed spend percentages");
    Ok(percentages)
}

/// Renders the spend chart with the default layout.
pub fn create_spend_chart<T: SpendSource>(sources: &[T]) -> Result<String, ChartError> {
    create_spend_chart_with(sources, &ReportConfig::default())
}

/// Renders a vertical bar chart of each source's share of total spend,
/// followed by the source names written top to bottom.
pub fn create_spend_chart_with<T: SpendSource>(
    sources: &[T],
    config: &ReportConfig,
) -> Result<String, ChartError> {
    let percentages = spend_percentages(sources)?;
    let spent: Vec<bool> = sources.iter().map(|s| s.withdrawals() < 0.0).collect();

    let marker = format!("{:<width$}", config.chart_marker, width = COLUMN_WIDTH);
    let blank = " ".repeat(COLUMN_WIDTH);

    let mut chart = String::new();
    chart.push_str(&config.chart_title);
    chart.push('\n');

    for threshold in (0..=100).rev().step_by(10) {
        chart.push_str(&format!("{:>3}| ", threshold));
        for (percentage, has_spend) in percentages.iter().zip(&spent) {
            if *has_spend && *percentage >= f64::from(threshold) {
                chart.push_str(&marker);
            } else {
                chart.push_str(&blank);
            }
        }
        chart.push('\n');
    }

    chart.push_str("    -");
    chart.push_str(&"-".repeat(COLUMN_WIDTH * sources.len()));
    chart.push('\n');

    let names: Vec<Vec<char>> = sources.iter().map(|s| s.name().chars().collect()).collect();
    let max_name_length = names.iter().map(Vec::len).max().unwrap_or(0);
    let rows: Vec<String> = (0..max_name_length)
        .map(|idx| {
            let mut row = String::from(LEFT_MARGIN);
            for name in &names {
                match name.get(idx) {
                    Some(ch) => {
                        row.push(*ch);
                        row.push_str("  ");
                    }
                    None => row.push_str(&blank),
                }
            }
            row
        })
        .collect();
    chart.push_str(&rows.join("\n"));

    Ok(chart.trim().to_string())
}
