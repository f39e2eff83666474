//! Terminal output for the offline subcommands
//!
//! Every formatter renders either a human table/listing or pretty JSON
//! matching the HTTP API payloads.

use aquawise_core::{PredictionResult, SavingsSummary, UsageRecord};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

// ============================================================================
// Formatters
// ============================================================================

/// Format a usage series as table (human) or JSON
pub fn format_usage_table(records: &[UsageRecord], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string());
    }

    if records.is_empty() {
        return "No usage records.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Date", "Usage", "Leak"]);
    } else {
        table.set_header(vec![
            Cell::new("Date").fg(Color::Cyan),
            Cell::new("Usage").fg(Color::Cyan),
            Cell::new("Leak").fg(Color::Cyan),
        ]);
    }

    for record in records {
        let date = record.date.format("%Y-%m-%d").to_string();
        let leak = if record.leak_detected { "yes" } else { "-" };

        if no_color || !record.leak_detected {
            table.add_row(Row::from(vec![
                Cell::new(date),
                Cell::new(record.usage),
                Cell::new(leak),
            ]));
        } else {
            table.add_row(Row::from(vec![
                Cell::new(date),
                Cell::new(record.usage),
                Cell::new(leak).fg(Color::Red),
            ]));
        }
    }

    table.to_string()
}

/// Format a savings summary (human or JSON)
pub fn format_savings(summary: &SavingsSummary, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string());
    }

    [
        format!("Current usage:     {:.2} / day", summary.current_usage),
        format!("Potential savings: {:.2} / day", summary.potential_savings),
    ]
    .join("\n")
}

/// Format a prediction (human or JSON)
pub fn format_prediction(result: &PredictionResult, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());
    }
    format!("Predicted usage: {:.2}", result.prediction)
}

/// Numbered tip listing
pub fn format_tips(tips: &[&str]) -> String {
    tips.iter()
        .enumerate()
        .map(|(i, tip)| format!("{:>2}. {}", i + 1, tip))
        .collect::<Vec<_>>()
        .join("\n")
}
