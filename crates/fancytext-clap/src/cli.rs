//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fancytext::Category;

/// Turn plain text into decorative Unicode styles.
#[derive(Debug, Parser)]
#[command(name = "fancytext", version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Extra style tables to load (YAML or JSON, repeatable)
    #[arg(long = "styles", value_name = "FILE", global = true)]
    pub stylesheets: Vec<PathBuf>,

    /// Seed for the random styles, making their output reproducible
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Zalgo rounds per character
    #[arg(long, value_name = "N", global = true)]
    pub zalgo_intensity: Option<u8>,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert text with every style
    All {
        /// Text to convert (read from stdin when omitted)
        text: Option<String>,

        /// Only show styles of this category
        #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Only show results whose style name or text contains TERM
        #[arg(long, value_name = "TERM")]
        search: Option<String>,
    },

    /// Convert text with one style
    Convert {
        /// Style name, e.g. "Bold" or "Leet Speak"
        #[arg(short, long)]
        style: String,

        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },

    /// List the available styles
    List {
        /// Only show styles of this category
        #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,

        /// Only show styles whose name contains TERM
        #[arg(long, value_name = "TERM")]
        search: Option<String>,
    },

    /// Convert text with one style and copy it to the clipboard
    Copy {
        /// Style name
        #[arg(short, long)]
        style: String,

        /// Text to convert (read from stdin when omitted)
        text: Option<String>,

        /// Attempts before giving up
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
        retries: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled, aligned text
    #[default]
    Text,
    /// JSON for scripting
    Json,
}

/// Category selector for `all` and `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    Standard,
    Special,
}

impl CategoryFilter {
    pub fn accepts(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Standard => category == Category::Standard,
            CategoryFilter::Special => category == Category::Special,
        }
    }
}

/// Log level argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}
