use crate::domain::config::InsuranceConfig;
use crate::error::{PayrollError, Result};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;
use tracing::debug;

/// Reads `key = value` lines into raw numeric values.
///
/// Blank lines and lines starting with `#` are skipped. A later duplicate key
/// replaces the earlier value.
pub struct ConfigReader<R: Read> {
    source: BufReader<R>,
}

impl<R: Read> ConfigReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
        }
    }

    pub fn values(self) -> Result<HashMap<String, Decimal>> {
        let mut values = HashMap::new();
        for (index, line) in self.source.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_no = index + 1;
            let (key, raw) = line.split_once('=').ok_or_else(|| {
                PayrollError::Parameter(format!("config line {line_no}: expected `key = value`"))
            })?;
            let (key, raw) = (key.trim(), raw.trim());
            let value = Decimal::from_str(raw).map_err(|_| {
                PayrollError::Parameter(format!(
                    "config line {line_no}: value `{raw}` for `{key}` is not a number"
                ))
            })?;

            if values.insert(key.to_string(), value).is_some() {
                debug!(key, line_no, "config key redefined");
            }
        }
        Ok(values)
    }

    /// Reads and validates the whole config in one step.
    pub fn read_config(self) -> Result<InsuranceConfig> {
        let values = self.values()?;
        debug!(keys = values.len(), "config values read");
        InsuranceConfig::from_values(&values)
    }
}
