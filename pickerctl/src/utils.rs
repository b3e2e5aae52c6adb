//! Document loading and output rendering.

use std::path::Path;

use anyhow::{Context, bail};
use picker_schema::{Attribute, attributes};
use serde_json::{Map, Value};

use crate::config::OutputFormat;

/// Load a flat attribute document from a `.json` or `.toml` file.
///
/// Tables under a group prefix such as `[scanSettings]` are flattened into
/// dotted keys. Any other value, objects included, is kept as is so that
/// type tagging can reject it. `configure` is both a boolean attribute and a
/// group: only a non-empty table under it is flattened.
///
/// # Errors
///
/// Returns an error for unreadable files, unsupported extensions, parse
/// failures, a root that is not an object, or a key given twice (once flat
/// and once inside its group).
pub fn load_document(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let value: Value = match ext {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?,
        "toml" => {
            let v: toml::Value = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            serde_json::to_value(v)?
        }
        _ => {
            bail!("Unsupported document extension: {ext:?}");
        }
    };

    let Value::Object(root) = value else {
        bail!("{}: document root must be an object", path.display());
    };
    debug!("loaded {} top-level keys from {}", root.len(), path.display());

    flatten_document(root).with_context(|| format!("Invalid document {}", path.display()))
}

/// Flatten group tables of a document into dotted keys.
pub fn flatten_document(root: Map<String, Value>) -> anyhow::Result<Map<String, Value>> {
    let mut flat = Map::new();
    flatten_into(&mut flat, "", root)?;
    Ok(flat)
}

fn flatten_into(
    out: &mut Map<String, Value>,
    prefix: &str,
    map: Map<String, Value>,
) -> anyhow::Result<()> {
    for (key, value) in map {
        let key = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(inner) if is_group_table(&key, &inner) => {
                flatten_into(out, &key, inner)?;
            }
            value => {
                if out.insert(key.clone(), value).is_some() {
                    bail!("attribute {key:?} is given more than once");
                }
            }
        }
    }
    Ok(())
}

fn is_group_table(key: &str, table: &Map<String, Value>) -> bool {
    let is_group = attributes().iter().any(|attr| attr.group() == Some(key));
    if !is_group {
        return false;
    }
    // A group that is also an attribute keeps an empty table as its value
    key.parse::<Attribute>().is_err() || !table.is_empty()
}

/// Render a JSON value in the requested output format.
pub fn render(value: &Value, format: OutputFormat) -> anyhow::Result<String> {
    let s = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Toml => toml::to_string_pretty(value)?,
    };
    Ok(s)
}
