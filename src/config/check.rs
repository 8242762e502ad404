use crate::errors::AppResult;
use serde_yaml::Value;

/// Keys a complete configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 8] = [
    "input_file",
    "output_dir",
    "done_dir",
    "delimiter",
    "layout",
    "envelope",
    "processing_time",
    "dwell",
];

/// Result of inspecting a config file against the known key set.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Known keys absent from the file; defaults apply to them.
    pub missing: Vec<String>,
    /// Keys present in the file that the tool does not know.
    pub unknown: Vec<String>,
}

impl CheckReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

/// Inspect raw YAML content without applying defaults.
pub fn check_yaml(content: &str) -> AppResult<CheckReport> {
    let yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content)?
    };

    let keys: Vec<String> = yaml
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let missing = KNOWN_KEYS
        .iter()
        .filter(|k| !keys.iter().any(|present| present == *k))
        .map(|k| k.to_string())
        .collect();

    let unknown = keys
        .iter()
        .filter(|k| !KNOWN_KEYS.contains(&k.as_str()))
        .cloned()
        .collect();

    Ok(CheckReport { missing, unknown })
}
