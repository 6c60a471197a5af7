//! End-to-end runs of the command line front end with injected I/O.

use std::io::Write as _;

use clap::Parser;
use fancytext_clap::{App, ClipboardError, ClipboardSink, Cli, Presenter, Severity};
use tempfile::NamedTempFile;

#[derive(Default)]
struct MemoryClipboard {
    contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard {
    attempts: u32,
}

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        self.attempts += 1;
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("fancytext").chain(args.iter().copied())).unwrap()
}

fn run_with(cli: &Cli, clipboard: &mut dyn ClipboardSink, stdin: &str) -> anyhow::Result<String> {
    let mut app = App::new(cli, Presenter::plain()?, clipboard)?;
    let mut out = Vec::<u8>::new();
    app.run(&cli.command, &mut stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    run_with(&parse(args), &mut MemoryClipboard::default(), "")
}

fn stylesheet(extension: &str, body: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn all_lists_every_style_in_order() {
    let out = run(&["all", "Hi"]).unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 26);
    assert!(lines[0].starts_with("Bold "), "{}", lines[0]);
    assert!(lines[0].ends_with("𝐇𝐢"), "{}", lines[0]);
    assert!(lines[25].starts_with("Square "), "{}", lines[25]);
}

#[test]
fn all_filters_by_category_then_search() {
    let out = run(&["all", "Hi", "--category", "special", "--search", "LINE"]).unwrap();
    let names: Vec<_> = out
        .lines()
        .map(|l| l.split("  ").next().unwrap().trim())
        .collect();
    assert_eq!(names, ["Underline", "Double Underline", "Overline"]);
}

#[test]
fn all_search_matches_converted_text() {
    let out = run(&["all", "LEET", "--search", "|337"]).unwrap();
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("Leet Speak"));
}

#[test]
fn all_reports_when_nothing_matches() {
    let out = run(&["all", "x", "--search", "no such style"]).unwrap();
    assert_eq!(out, "no matching styles\n");
}

#[test]
fn all_reads_stdin_and_marks_empty_output() {
    let cli = parse(&["all", "--category", "special", "--search", "underline"]);
    let out = run_with(&cli, &mut MemoryClipboard::default(), "\n").unwrap();
    assert!(out.lines().all(|l| l.ends_with("(empty)")), "{out}");
}

#[test]
fn all_json_output() {
    let out = run(&["all", "abc", "--output", "json", "--search", "reverse"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "name": "Reverse", "text": "ɔqɐ", "category": "special" }])
    );
}

#[test]
fn convert_prints_only_the_text() {
    assert_eq!(run(&["convert", "--style", "Script", "Hello"]).unwrap(), "𝓗𝓮𝓵𝓵𝓸\n");
}

#[test]
fn convert_unknown_style_fails() {
    let err = run(&["convert", "--style", "StyleInexistant", "Test"]).unwrap_err();
    assert!(err.to_string().contains("style not found"), "{err}");
}

#[test]
fn list_json_has_categories() {
    let out = run(&["list", "--output", "json"]).unwrap();
    let value: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
    assert_eq!(value.len(), 26);
    assert_eq!(value[0], serde_json::json!({ "name": "Bold", "category": "standard" }));
    assert_eq!(value[16]["category"], "special");
}

#[test]
fn list_search_is_case_insensitive() {
    let out = run(&["list", "--search", "FRAKTUR"]).unwrap();
    assert_eq!(out, "Fraktur       standard\nBold Fraktur  standard\n");
}

#[test]
fn stylesheet_styles_are_listed_and_usable() {
    let yaml = stylesheet(".yaml", "Greek:\n  a: α\n  b: β\n");
    let json = stylesheet(".json", r#"{"Runes": {"f": "ᚠ"}}"#);
    let yaml_path = yaml.path().to_str().unwrap();
    let json_path = json.path().to_str().unwrap();

    let converted = run(&[
        "convert", "--style", "Greek", "--styles", yaml_path, "--styles", json_path, "abc",
    ])
    .unwrap();
    assert_eq!(converted, "αβc\n");

    let listed = run(&["list", "--category", "standard", "--styles", yaml_path, "--styles", json_path])
        .unwrap();
    let names: Vec<_> = listed.lines().map(|l| l.split("  ").next().unwrap().trim()).collect();
    assert_eq!(names.len(), 18);
    assert_eq!(&names[16..], ["Greek", "Runes"]);
}

#[test]
fn stylesheet_clashing_with_builtin_is_rejected() {
    let yaml = stylesheet(".yaml", "Bold:\n  a: b\n");
    let err = run(&["list", "--styles", yaml.path().to_str().unwrap()]).unwrap_err();
    assert!(format!("{err:#}").contains("Bold"), "{err:#}");
}

#[test]
fn copy_succeeds_and_notifies() {
    let cli = parse(&["copy", "--style", "Bubble Text", "hi"]);
    let mut clipboard = MemoryClipboard::default();
    let mut out = Vec::<u8>::new();
    let notes = {
        let mut app = App::new(&cli, Presenter::plain().unwrap(), &mut clipboard).unwrap();
        app.run(&cli.command, &mut std::io::empty(), &mut out).unwrap();
        let mut notes = Vec::new();
        app.notifications_mut().drain(|n| notes.push(n));
        notes
    };
    assert_eq!(clipboard.contents.as_deref(), Some("ⓗⓘ"));
    assert_eq!(String::from_utf8(out).unwrap(), "ⓗⓘ\n");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Success);
    assert_eq!(notes[0].to_string(), "✓ Text copied!");
}

#[test]
fn copy_failure_retries_then_notifies() {
    let cli = parse(&["copy", "--style", "Bold", "--retries", "2", "hi"]);
    let mut clipboard = BrokenClipboard { attempts: 0 };
    let (result, notes) = {
        let mut app = App::new(&cli, Presenter::plain().unwrap(), &mut clipboard).unwrap();
        let result = app.run(&cli.command, &mut std::io::empty(), &mut Vec::<u8>::new());
        let notes: Vec<_> = app.notifications_mut().iter().map(|n| n.to_string()).collect();
        (result, notes)
    };
    assert!(result.is_err());
    assert_eq!(clipboard.attempts, 2);
    assert_eq!(notes, ["✕ Copy failed"]);
}
