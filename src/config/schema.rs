// also compiled into build.rs, keep it to `toml` and `anyhow`

use std::collections::BTreeSet;
use std::fmt;

// section read by toml_cfg, named after the package
pub const SECTION: &str = "bedroom-light";

pub const FIELDS: [&str; 5] = [
    "wifi_ssid",
    "wifi_password",
    "server_host",
    "api_key",
    "device_id",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    MissingSection,
    KeyMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::MissingSection => write!(f, "missing `[{}]` section", SECTION),
            SchemaError::KeyMismatch {
                missing,
                unexpected,
            } => write!(
                f,
                "keys differ from the template (missing: {:?}, unexpected: {:?})",
                missing, unexpected
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

pub fn keys(document: &str) -> anyhow::Result<BTreeSet<String>> {
    let table: toml::Table = document.parse()?;
    let section = table
        .get(SECTION)
        .and_then(|section| section.as_table())
        .ok_or(SchemaError::MissingSection)?;
    Ok(section.keys().cloned().collect())
}

pub fn check_parity(template: &str, actual: &str) -> anyhow::Result<()> {
    compare(&keys(template)?, &keys(actual)?)
}

pub fn check_template(template: &str) -> anyhow::Result<()> {
    let expected = FIELDS.iter().map(|field| field.to_string()).collect();
    compare(&expected, &keys(template)?)
}

fn compare(expected: &BTreeSet<String>, actual: &BTreeSet<String>) -> anyhow::Result<()> {
    let missing: Vec<String> = expected.difference(actual).cloned().collect();
    let unexpected: Vec<String> = actual.difference(expected).cloned().collect();
    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }
    Err(SchemaError::KeyMismatch {
        missing,
        unexpected,
    }
    .into())
}
