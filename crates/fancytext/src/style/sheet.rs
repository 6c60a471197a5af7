//! External stylesheet loading.
//!
//! A stylesheet is a mapping of style names to character tables:
//!
//! ```yaml
//! Greek:
//!   a: α
//!   b: β
//! Runic:
//!   f: ᚠ
//!   "1": ᛁ
//! ```
//!
//! The same shape is accepted as JSON. Documents are validated in full
//! before any table is handed to a [`StyleRegistry`]: keys must be single
//! characters, replacements must be strings, and tables must not be empty.

use std::path::Path;

use serde_json::Value;

use super::charmap::CharacterMap;
use super::error::{StyleError, StyleSheetError};
use super::registry::StyleRegistry;

/// Supported stylesheet encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Yaml,
    Json,
}

impl SheetFormat {
    /// Picks a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(SheetFormat::Yaml),
            "json" => Some(SheetFormat::Json),
            _ => None,
        }
    }
}

/// Validated standard-style tables read from YAML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    tables: Vec<(String, CharacterMap)>,
}

impl StyleSheet {
    /// Parses a stylesheet in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSheetError::Parse`] for malformed documents and the
    /// validation variants for tables that break the stylesheet rules.
    pub fn parse(source: &str, format: SheetFormat) -> Result<Self, StyleSheetError> {
        let value: Value = match format {
            SheetFormat::Yaml => serde_yaml::from_str(source).map_err(|e| {
                StyleSheetError::Parse {
                    message: e.to_string(),
                }
            })?,
            SheetFormat::Json => serde_json::from_str(source).map_err(|e| {
                StyleSheetError::Parse {
                    message: e.to_string(),
                }
            })?,
        };
        Self::from_value(value)
    }

    /// Parses a YAML stylesheet.
    pub fn from_yaml(source: &str) -> Result<Self, StyleSheetError> {
        Self::parse(source, SheetFormat::Yaml)
    }

    /// Parses a JSON stylesheet.
    pub fn from_json(source: &str) -> Result<Self, StyleSheetError> {
        Self::parse(source, SheetFormat::Json)
    }

    /// Reads and parses a stylesheet file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSheetError::UnknownFormat`] for unrecognised
    /// extensions and [`StyleSheetError::Io`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleSheetError> {
        let path = path.as_ref();
        let format = SheetFormat::from_path(path).ok_or_else(|| StyleSheetError::UnknownFormat {
            path: path.to_path_buf(),
        })?;
        let source = std::fs::read_to_string(path).map_err(|source| StyleSheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet = Self::parse(&source, format)?;
        log::debug!(
            "loaded {} style(s) from {}",
            sheet.len(),
            path.display()
        );
        Ok(sheet)
    }

    /// Style names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// Looks up a parsed table by name.
    pub fn get(&self, name: &str) -> Option<&CharacterMap> {
        self.tables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, map)| map)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Registers every table as a standard style.
    ///
    /// Names are checked against the registry before anything is added,
    /// so a clash leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StyleSheetError::Registry`] on a name clash.
    pub fn register_into(self, registry: &mut StyleRegistry) -> Result<(), StyleSheetError> {
        if let Some(name) = self.names().find(|name| registry.has(name)) {
            return Err(StyleError::DuplicateStyle {
                name: name.to_string(),
            }
            .into());
        }
        for (name, map) in self.tables {
            registry.add_standard(name, map)?;
        }
        Ok(())
    }

    fn from_value(value: Value) -> Result<Self, StyleSheetError> {
        let styles = match value {
            Value::Object(styles) => styles,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(StyleSheetError::Parse {
                    message: format!(
                        "expected a mapping of style names to tables, found {}",
                        kind_of(&other)
                    ),
                })
            }
        };

        let mut tables = Vec::with_capacity(styles.len());
        for (style, table) in styles {
            if style.trim().is_empty() {
                return Err(StyleSheetError::EmptyName);
            }
            let Value::Object(entries) = table else {
                return Err(StyleSheetError::InvalidTable { style });
            };
            if entries.is_empty() {
                return Err(StyleSheetError::EmptyTable { style });
            }

            let mut pairs = Vec::with_capacity(entries.len());
            for (key, replacement) in entries {
                let mut chars = key.chars();
                let (Some(source), None) = (chars.next(), chars.next()) else {
                    return Err(StyleSheetError::InvalidKey { style, key });
                };
                let Value::String(replacement) = replacement else {
                    return Err(StyleSheetError::InvalidValue { style, key });
                };
                pairs.push((source, replacement));
            }
            tables.push((style, CharacterMap::from_pairs(pairs)));
        }

        Ok(Self { tables })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
