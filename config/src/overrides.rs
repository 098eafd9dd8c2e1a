use toml::Value;

use crate::error::ConfigError;

/// Split a raw `key=value` override. The value is parsed as TOML when
/// possible (`true`, `3`, `"esc"`, `[1, 2]`), otherwise kept as a bare
/// string so `-c overlays.cancel_key=esc` works without quoting.
pub fn parse_override(raw: &str) -> Result<(String, Value), ConfigError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(ConfigError::InvalidOverride(raw.to_string()));
    };
    let key = key.trim();
    if key.is_empty() || key.split('.').any(str::is_empty) {
        return Err(ConfigError::InvalidOverride(raw.to_string()));
    }
    let value = value.trim();
    let parsed = parse_toml_value(value).unwrap_or_else(|| Value::String(value.to_string()));
    Ok((key.to_string(), parsed))
}

fn parse_toml_value(raw: &str) -> Option<Value> {
    let wrapped = format!("_x_ = {raw}");
    let mut table: toml::Table = toml::from_str(&wrapped).ok()?;
    table.remove("_x_")
}

/// Apply each override to `table`, creating intermediate tables for dotted
/// keys.
pub fn apply_overrides(table: &mut toml::Table, overrides: &[String]) -> Result<(), ConfigError> {
    for raw in overrides {
        let (key, value) = parse_override(raw)?;
        let mut segments: Vec<&str> = key.split('.').collect();
        let Some(leaf) = segments.pop() else {
            return Err(ConfigError::InvalidOverride(raw.clone()));
        };

        let mut current = &mut *table;
        for segment in segments {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Table(toml::Table::new()));
            if !entry.is_table() {
                *entry = Value::Table(toml::Table::new());
            }
            let Value::Table(next) = entry else {
                return Err(ConfigError::InvalidOverride(raw.clone()));
            };
            current = next;
        }
        tracing::debug!(key = %key, "applying config override");
        current.insert(leaf.to_string(), value);
    }
    Ok(())
}
