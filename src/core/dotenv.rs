//! Parsing and serialization of .env files.
//!
//! The parser is deliberately forgiving: malformed lines are skipped, never
//! an error. Serialization emits plain `KEY=VALUE` lines with no quoting,
//! which is asymmetric with parsing (quotes in the source are stripped).

use std::collections::BTreeMap;

use crate::core::model::Secret;

/// Strip at most one leading and one trailing quote character from a value.
///
/// Each side is handled independently, so `"foo'` becomes `foo`. This
/// mirrors the behavior of the hosted service's other clients.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

/// Parse .env text into a key-value map.
///
/// Skips empty lines, `#` comments, and lines without a `=`. Keys and
/// values are trimmed; one layer of surrounding quotes is stripped from
/// values. Entries with an empty key or value are dropped. Duplicate keys
/// keep the last occurrence.
pub fn parse(text: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = strip_quotes(value.trim());

            if !key.is_empty() && !value.is_empty() {
                entries.insert(key.to_string(), value.to_string());
            }
        }
    }

    entries
}

/// Serialize secrets for one environment as .env text.
///
/// Emits a header comment naming the project and environment, then one
/// `KEY=VALUE` line per value matching the target environment, preserving
/// the server-provided order.
pub fn serialize(secrets: &[Secret], project_id: &str, environment: &str) -> String {
    let mut output = format!(
        "# Secrets for project {} - Environment: {}\n\n",
        project_id, environment
    );

    for secret in secrets {
        for val in &secret.values {
            if val.environment == environment {
                output.push_str(&format!("{}={}\n", secret.key, val.value));
            }
        }
    }

    output
}
