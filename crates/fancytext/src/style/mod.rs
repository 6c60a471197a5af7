//! Style registry for standard substitution styles and special transformers.
//!
//! This module provides the core data types:
//!
//! - [`CharacterMap`]: An immutable character substitution table
//! - [`StyleRegistry`]: The ordered collection of named styles
//! - [`Style`], [`StyleKind`], [`Category`]: A registered style and its shape
//! - [`StyleSheet`]: Extra standard styles loaded from YAML or JSON
//! - [`StyleError`], [`StyleSheetError`]: Lookup, registration and loading errors
//!
//! Built-in tables are plain static data. They are wrapped into
//! [`CharacterMap`]s once, when a registry is built, and never mutated.

mod charmap;
mod error;
mod registry;
mod sheet;
mod tables;

pub use charmap::CharacterMap;
pub use error::{StyleError, StyleSheetError};
pub use registry::{Category, Style, StyleKind, StyleRegistry};
pub use sheet::{SheetFormat, StyleSheet};
