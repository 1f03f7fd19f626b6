use super::types::TableSchema;
use anyhow::Context;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Load a table schema description from a YAML or JSON file.
///
/// The format is chosen by extension: `.yaml`/`.yml` are read as YAML,
/// anything else as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a schema.
pub fn load_schema(path: &Path) -> anyhow::Result<TableSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;
    parse_schema(&content, is_yaml(path))
        .with_context(|| format!("Failed to parse schema: {}", path.display()))
}

/// Parse a schema description held in memory.
pub fn parse_schema(content: &str, yaml: bool) -> anyhow::Result<TableSchema> {
    let schema = if yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    Ok(schema)
}
