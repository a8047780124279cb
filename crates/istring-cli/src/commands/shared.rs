//! Arguments shared by several commands.

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::PathBuf;

use istring::options::DEFAULT_PATTERN_SIZE_LIMIT;
use istring::{MatchOptions, ToStringMap};
use serde_json::Value as JsonValue;

/// Pattern matching flags.
#[derive(Debug, Clone, clap::Args)]
pub struct MatchArgs {
    /// Lowercase pattern selectors before matching
    #[arg(long)]
    pub fold_case: bool,

    /// Maximum compiled size of a pattern selector, in bytes
    #[arg(long, default_value_t = DEFAULT_PATTERN_SIZE_LIMIT)]
    pub pattern_size_limit: usize,
}

impl MatchArgs {
    pub fn options(&self) -> MatchOptions {
        MatchOptions::builder()
            .fold_pattern_case(self.fold_case)
            .pattern_size_limit(self.pattern_size_limit)
            .build()
    }
}

/// Placeholder values from the command line.
#[derive(Debug, Clone, clap::Args)]
pub struct ValueArgs {
    /// Placeholder values in key=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// JSON file with an object of placeholder values
    #[arg(long)]
    pub values: Option<PathBuf>,
}

impl ValueArgs {
    /// Collects the JSON file values, then the `--param` values on top.
    pub fn load(&self) -> miette::Result<BTreeMap<String, String>> {
        let mut values = BTreeMap::new();
        if let Some(path) = &self.values {
            let content = read_to_string(path).map_err(|e| {
                miette::miette!("Cannot read values file {}: {}", path.display(), e)
            })?;
            let json: JsonValue = serde_json::from_str(&content).map_err(|e| {
                miette::miette!("Invalid JSON in values file {}: {}", path.display(), e)
            })?;
            values.extend(json.to_string_map());
        }
        values.extend(self.params.iter().cloned());
        Ok(values)
    }
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected key=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}
