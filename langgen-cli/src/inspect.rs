use crate::catalog::load_catalog;
use langgen::validate;
use serde::Serialize;

/// One row of `langgen keys` output.
#[derive(Debug, Serialize)]
struct KeyRow<'a> {
    key: &'a str,
    resource_key: String,
    arguments: String,
}

/// Validate a catalog without generating anything.
pub fn run_validate_command(catalog_path: &str, format: Option<&str>) -> Result<(), String> {
    let catalog = load_catalog(catalog_path, format)?;
    let validated = validate(&catalog).map_err(|e| format!("validation error: {}", e))?;

    println!(
        "✅ {} is valid: {} language(s), {} entries",
        catalog_path,
        validated.languages().len(),
        validated.entries().len()
    );
    Ok(())
}

/// Print every entry key with its derived resource key and argument list.
pub fn run_keys_command(
    catalog_path: &str,
    format: Option<&str>,
    json_output: bool,
) -> Result<(), String> {
    let catalog = load_catalog(catalog_path, format)?;
    let validated = validate(&catalog).map_err(|e| format!("validation error: {}", e))?;

    let rows: Vec<KeyRow> = validated
        .entries()
        .iter()
        .map(|entry| KeyRow {
            key: entry.key(),
            resource_key: entry.resource_key(),
            arguments: entry.argument_list(),
        })
        .collect();

    if json_output {
        let text = serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("Failed to serialize keys JSON: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    for row in &rows {
        println!("{}\t\"{}\"\t{}", row.key, row.resource_key, row.arguments);
    }
    Ok(())
}
