//! Board manifest handling.
//!
//! A board manifest is a JSON object describing one piece of target hardware:
//! clock frequency, build variant, linker-script override, upload limits. The
//! build orchestrator addresses values by dotted key (`build.variant` names
//! the `variant` field of the `build` object), so the nested manifest is
//! flattened into a dotted-key map once, on construction, and is read-only
//! afterwards.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{ConfigError, Result};

/// Raw board manifest, as deserialized from JSON.
///
/// This is the wire shape; [`BoardConfig`] is the flattened view the
/// derivation operations consume.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct BoardConfigData {
    values: serde_json::Map<String, Value>,
}

/// Read-only, dotted-key view of a board manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardConfig {
    values: FxHashMap<String, String>,
}

impl BoardConfig {
    pub fn new(data: BoardConfigData) -> BoardConfig {
        let mut values = FxHashMap::default();
        for (key, value) in &data.values {
            flatten(key, value, &mut values);
        }
        BoardConfig { values }
    }

    pub fn from_json(text: &str) -> Result<BoardConfig> {
        let data: BoardConfigData = serde_json::from_str(text).map_err(|err| {
            ConfigError::Configuration(format!("malformed board manifest: {err}"))
        })?;
        Ok(BoardConfig::new(data))
    }

    /// Raw lookup. Empty values are kept here; the typed accessors decide
    /// whether empty means unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// `build.variant`, with the empty string counting as unset.
    pub fn variant(&self) -> Option<&str> {
        self.get("build.variant").filter(|it| !it.is_empty())
    }

    /// `build.ldscript`, with the empty string counting as unset.
    pub fn ldscript(&self) -> Option<&str> {
        self.get("build.ldscript").filter(|it| !it.is_empty())
    }

    /// `build.board_def`, required.
    pub fn board_def(&self) -> Result<&str> {
        self.get("build.board_def").filter(|it| !it.is_empty()).ok_or_else(|| {
            ConfigError::Configuration("board manifest is missing `build.board_def`".to_string())
        })
    }

    /// `build.f_cpu` in Hz, required where a framework references it.
    ///
    /// Manifests in the wild write either a bare number or a string with a
    /// trailing `L`, e.g. `"400000000L"`.
    pub fn f_cpu(&self) -> Result<u64> {
        let raw = self.get("build.f_cpu").filter(|it| !it.is_empty()).ok_or_else(|| {
            ConfigError::Configuration("board manifest is missing `build.f_cpu`".to_string())
        })?;
        let digits = raw.strip_suffix('L').or_else(|| raw.strip_suffix('l')).unwrap_or(raw);
        digits.parse().map_err(|_| {
            ConfigError::Configuration(format!("`build.f_cpu` is not a frequency: {raw:?}"))
        })
    }
}

/// Flattens nested manifest objects into dotted keys.
///
/// Only scalar leaves are kept: every key the derivation reads is a scalar,
/// and list-valued entries (such as `frameworks`) are not addressable by
/// dotted key anyway.
fn flatten(key: &str, value: &Value, out: &mut FxHashMap<String, String>) {
    match value {
        Value::Object(fields) => {
            for (name, value) in fields {
                flatten(&format!("{key}.{name}"), value, out);
            }
        }
        Value::String(it) => {
            out.insert(key.to_string(), it.clone());
        }
        Value::Number(it) => {
            out.insert(key.to_string(), it.to_string());
        }
        Value::Bool(it) => {
            out.insert(key.to_string(), it.to_string());
        }
        Value::Null | Value::Array(_) => {}
    }
}
