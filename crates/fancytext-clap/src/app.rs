//! Command execution.
//!
//! [`App`] owns the converter built from the command line options and
//! runs one [`Command`] against injected input, output and clipboard, so
//! the binary and the tests drive exactly the same code.

use std::io::{Read, Write};

use anyhow::{anyhow, Context, Result};
use fancytext::{Category, Converter, StyleRegistry, StyleSheet, ZalgoConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::cli::{CategoryFilter, Cli, Command, OutputFormat};
use crate::clipboard::{copy_with_retry, ClipboardSink, RETRY_DELAY};
use crate::notify::NotificationQueue;
use crate::present::{Presenter, ResultFilter};
use crate::source::read_text;

/// Builds the style registry described by the command line: the builtin
/// styles (with any Zalgo override) followed by each `--styles` file.
pub fn build_registry(cli: &Cli) -> Result<StyleRegistry> {
    let zalgo = match cli.zalgo_intensity {
        Some(intensity) => ZalgoConfig {
            intensity,
            ..ZalgoConfig::default()
        },
        None => ZalgoConfig::default(),
    };
    let mut registry = StyleRegistry::builtin_with_zalgo(zalgo);
    for path in &cli.stylesheets {
        let sheet = StyleSheet::from_file(path)
            .with_context(|| format!("failed to load styles from {}", path.display()))?;
        log::info!("loaded {} style(s) from {}", sheet.len(), path.display());
        sheet
            .register_into(&mut registry)
            .with_context(|| format!("failed to register styles from {}", path.display()))?;
    }
    Ok(registry)
}

#[derive(Serialize)]
struct StyleEntry<'a> {
    name: &'a str,
    category: Category,
}

#[derive(Serialize)]
struct Converted<'a> {
    name: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct Copied<'a> {
    name: &'a str,
    text: &'a str,
    attempts: u32,
}

pub struct App<'c> {
    converter: Converter,
    presenter: Presenter,
    format: OutputFormat,
    rng: StdRng,
    clipboard: &'c mut dyn ClipboardSink,
    notifications: NotificationQueue,
}

impl<'c> App<'c> {
    pub fn new(
        cli: &Cli,
        presenter: Presenter,
        clipboard: &'c mut dyn ClipboardSink,
    ) -> Result<Self> {
        let converter = Converter::new(build_registry(cli)?);
        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Ok(Self {
            converter,
            presenter,
            format: cli.output,
            rng,
            clipboard,
            notifications: NotificationQueue::default(),
        })
    }

    /// Notifications raised so far. The caller drains them after [`run`](Self::run).
    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Runs `command`, reading text from `input` when no TEXT argument was given.
    pub fn run(
        &mut self,
        command: &Command,
        input: &mut dyn Read,
        out: &mut dyn Write,
    ) -> Result<()> {
        match command {
            Command::All {
                text,
                category,
                search,
            } => {
                let text = read_text(text.as_deref(), input).context("failed to read text")?;
                self.all(&text, *category, search.as_deref(), out)
            }
            Command::Convert { style, text } => {
                let text = read_text(text.as_deref(), input).context("failed to read text")?;
                self.convert(&text, style, out)
            }
            Command::List { category, search } => self.list(*category, search.as_deref(), out),
            Command::Copy {
                style,
                text,
                retries,
            } => {
                let text = read_text(text.as_deref(), input).context("failed to read text")?;
                self.copy(&text, style, *retries, out)
            }
        }
    }

    fn all(
        &mut self,
        text: &str,
        category: CategoryFilter,
        search: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let results = self.converter.convert_all_with_rng(text, &mut self.rng);
        let shown = ResultFilter::new(category, search).apply(&results);
        log::debug!("showing {} of {} results", shown.len(), results.len());
        match self.format {
            OutputFormat::Json => write_json(out, &shown),
            OutputFormat::Text => {
                out.write_all(self.presenter.render_results(&shown)?.as_bytes())?;
                Ok(())
            }
        }
    }

    fn convert(&mut self, text: &str, style: &str, out: &mut dyn Write) -> Result<()> {
        let converted = self.lookup(text, style)?;
        match self.format {
            OutputFormat::Json => write_json(
                out,
                &Converted {
                    name: style,
                    text: &converted,
                },
            ),
            OutputFormat::Text => {
                writeln!(out, "{converted}")?;
                Ok(())
            }
        }
    }

    fn list(
        &self,
        category: CategoryFilter,
        search: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let filter = ResultFilter::new(category, search);
        let styles: Vec<_> = self
            .converter
            .registry()
            .iter()
            .filter(|s| filter.accepts(s.name(), s.category(), ""))
            .map(|s| (s.name(), s.category()))
            .collect();
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<_> = styles
                    .iter()
                    .map(|&(name, category)| StyleEntry { name, category })
                    .collect();
                write_json(out, &entries)
            }
            OutputFormat::Text => {
                out.write_all(self.presenter.render_styles(&styles)?.as_bytes())?;
                Ok(())
            }
        }
    }

    fn copy(&mut self, text: &str, style: &str, attempts: u32, out: &mut dyn Write) -> Result<()> {
        let converted = self.lookup(text, style)?;
        match copy_with_retry(&mut *self.clipboard, &converted, attempts, RETRY_DELAY) {
            Ok(used) => {
                log::info!("copied {} bytes in {used} attempt(s)", converted.len());
                self.notifications.success("Text copied!");
                match self.format {
                    OutputFormat::Json => write_json(
                        out,
                        &Copied {
                            name: style,
                            text: &converted,
                            attempts: used,
                        },
                    ),
                    OutputFormat::Text => {
                        writeln!(out, "{converted}")?;
                        Ok(())
                    }
                }
            }
            Err(err) => {
                self.notifications.error("Copy failed");
                Err(anyhow!(err).context(format!("could not copy after {attempts} attempt(s)")))
            }
        }
    }

    fn lookup(&mut self, text: &str, style: &str) -> Result<String> {
        match self
            .converter
            .convert_to_style_with_rng(text, style, &mut self.rng)
        {
            Some(converted) => Ok(converted),
            None => {
                let hint = self
                    .converter
                    .available_styles()
                    .into_iter()
                    .find(|name| name.eq_ignore_ascii_case(style));
                match hint {
                    Some(name) => Err(anyhow!("style not found: \"{style}\" (did you mean \"{name}\"?)")),
                    None => Err(anyhow!(
                        "style not found: \"{style}\" (run `fancytext list` to see available styles)"
                    )),
                }
            }
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize output")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use clap::Parser;

    #[derive(Default)]
    struct Memory {
        contents: Option<String>,
    }

    impl ClipboardSink for Memory {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn run(args: &[&str], stdin: &str) -> (Result<()>, String) {
        let cli = Cli::try_parse_from(std::iter::once("fancytext").chain(args.iter().copied()))
            .unwrap();
        let mut clipboard = Memory::default();
        let mut app = App::new(&cli, Presenter::plain().unwrap(), &mut clipboard).unwrap();
        let mut out = Vec::<u8>::new();
        let result = app.run(&cli.command, &mut stdin.as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_convert_from_argument() {
        let (result, out) = run(&["convert", "-s", "Leet Speak", "LEET"], "");
        result.unwrap();
        assert_eq!(out, "|337\n");
    }

    #[test]
    fn test_convert_from_stdin() {
        let (result, out) = run(&["convert", "-s", "Fullwidth"], "A B\n");
        result.unwrap();
        assert_eq!(out, "Ａ　Ｂ\n");
    }

    #[test]
    fn test_unknown_style_hints_at_case() {
        let (result, out) = run(&["convert", "-s", "bold", "x"], "");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("style not found: \"bold\""), "{message}");
        assert!(message.contains("did you mean \"Bold\""), "{message}");
        assert!(out.is_empty());
    }

    #[test]
    fn test_zalgo_intensity_zero_leaves_text_alone() {
        let (result, out) = run(&["convert", "-s", "Zalgo", "--zalgo-intensity", "0", "calm"], "");
        result.unwrap();
        assert_eq!(out, "calm\n");
    }

    #[test]
    fn test_seed_makes_zalgo_reproducible() {
        let args = ["convert", "-s", "Zalgo", "--seed", "42", "spooky"];
        let (first, a) = run(&args, "");
        let (second, b) = run(&args, "");
        first.unwrap();
        second.unwrap();
        assert_eq!(a, b);
        assert_ne!(a, "spooky\n");
    }

    #[test]
    fn test_copy_places_text_on_clipboard() {
        let cli = Cli::try_parse_from(["fancytext", "copy", "-s", "Bold", "hi"]).unwrap();
        let mut clipboard = Memory::default();
        {
            let mut app = App::new(&cli, Presenter::plain().unwrap(), &mut clipboard).unwrap();
            let mut out = Vec::<u8>::new();
            app.run(&cli.command, &mut std::io::empty(), &mut out).unwrap();
            let notes: Vec<_> = app.notifications_mut().iter().map(|n| n.to_string()).collect();
            assert_eq!(notes, ["✓ Text copied!"]);
        }
        assert_eq!(clipboard.contents.as_deref(), Some("𝐡𝐢"));
    }

    #[test]
    fn test_bad_stylesheet_path_fails_early() {
        let cli = Cli::try_parse_from(["fancytext", "list", "--styles", "/no/such/file.yaml"])
            .unwrap();
        let mut clipboard = Memory::default();
        let err = App::new(&cli, Presenter::plain().unwrap(), &mut clipboard)
            .err()
            .unwrap();
        assert!(err.to_string().contains("/no/such/file.yaml"), "{err}");
    }
}
