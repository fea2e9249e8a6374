//! Output formatting.
//!
//! Every command produces a `serde_json::Value`, usually a result envelope
//! carrying `result`, `warnings`, and `methodology`. The formatters below
//! render that value per the global `--output` flag.

pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Render a command's output value in the selected format.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}
