//! Style lookup and registration errors.

use std::path::PathBuf;

/// Error returned by style lookups and registry updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// No standard style or special transformer has this name.
    #[error("style not found: \"{name}\"")]
    NotFound { name: String },
    /// A style with this name is already registered.
    #[error("style \"{name}\" is already registered")]
    DuplicateStyle { name: String },
    /// Style names must contain at least one non-whitespace character.
    #[error("style name must not be empty")]
    EmptyName,
}

/// Error returned when an external stylesheet cannot be loaded.
///
/// Stylesheets are validated in full before any table reaches the
/// registry, so a malformed file never produces a partial style.
#[derive(Debug, thiserror::Error)]
pub enum StyleSheetError {
    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file extension does not name a supported format.
    #[error("unknown stylesheet format for {}, expected .yaml, .yml or .json", path.display())]
    UnknownFormat { path: PathBuf },
    /// The document is not valid YAML/JSON, or is not a mapping.
    #[error("failed to parse stylesheet: {message}")]
    Parse { message: String },
    /// A style name is empty.
    #[error("style name must not be empty")]
    EmptyName,
    /// A style's value is not a mapping of characters to replacements.
    #[error("style \"{style}\" must be a table of character replacements")]
    InvalidTable { style: String },
    /// A style's table has no entries.
    #[error("style \"{style}\" has no entries")]
    EmptyTable { style: String },
    /// A table key is not exactly one character.
    #[error("style \"{style}\": key {key:?} is not a single character")]
    InvalidKey { style: String, key: String },
    /// A replacement is not a string.
    #[error("style \"{style}\": replacement for {key:?} is not a string")]
    InvalidValue { style: String, key: String },
    /// Registering a parsed table failed.
    #[error(transparent)]
    Registry(#[from] StyleError),
}
