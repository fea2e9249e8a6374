use serde_json::Value;
use tabled::{Table, builder::Builder};

// Result arrays from a property analysis that get their own row tables
// instead of being JSON-stringified into a single cell.
const ROSTER_SECTIONS: [&str; 2] = ["tenant_risks", "concentration_risk"];

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    println!("{}", render(value));
}

fn render(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                render_envelope(result, map)
            } else {
                render_fields(map)
            }
        }
        Value::Array(rows) => render_rows(rows),
        _ => value.to_string(),
    }
}

/// A result envelope: scalar fields first, then each tenant roster as its
/// own table, then warnings and methodology.
fn render_envelope(result: &Value, envelope: &serde_json::Map<String, Value>) -> String {
    let mut sections = Vec::new();

    match result {
        Value::Object(res_map) => {
            let mut scalars = serde_json::Map::new();
            for (key, val) in res_map {
                if !ROSTER_SECTIONS.contains(&key.as_str()) {
                    scalars.insert(key.clone(), val.clone());
                }
            }
            sections.push(render_fields(&scalars));

            for name in ROSTER_SECTIONS {
                if let Some(Value::Array(rows)) = res_map.get(name) {
                    if !rows.is_empty() {
                        sections.push(format!("{}:\n{}", name, render_rows(rows)));
                    }
                }
            }
        }
        other => sections.push(render(other)),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            let mut block = String::from("Warnings:");
            for warning in warnings {
                if let Value::String(text) = warning {
                    block.push_str("\n  - ");
                    block.push_str(text);
                }
            }
            sections.push(block);
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        sections.push(format!("Methodology: {}", methodology));
    }

    sections.join("\n\n")
}

fn render_fields(map: &serde_json::Map<String, Value>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &cell(val)]);
    }
    Table::from(builder).to_string()
}

/// A homogeneous array of records, one table row per record. Headers come
/// from the first record.
fn render_rows(rows: &[Value]) -> String {
    if rows.is_empty() {
        return "(empty)".to_string();
    }

    if let Some(Value::Object(first)) = rows.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for row in rows {
            if let Value::Object(map) = row {
                let record: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(cell).unwrap_or_default())
                    .collect();
                builder.push_record(record);
            }
        }

        Table::from(builder).to_string()
    } else {
        rows.iter().map(cell).collect::<Vec<_>>().join("\n")
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => arr.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
