//! # Fancytext-clap - command line front end for `fancytext`
//!
//! Wraps the [`fancytext`] conversion engine in a `clap` command line
//! tool. The pieces are usable on their own:
//!
//! * [`cli`]: argument definitions (`all`, `convert`, `list`, `copy`)
//! * [`source`]: reads the input text from an argument or stdin
//! * [`present`]: filters results and renders them as aligned, styled text
//! * [`clipboard`]: the [`ClipboardSink`] trait and its system implementation
//! * [`notify`]: a bounded queue of user-facing notifications
//! * [`app`]: ties them together behind [`App::run`]
//!
//! ```rust
//! use clap::Parser;
//! use fancytext_clap::{App, Cli, Presenter, SystemClipboard};
//!
//! let cli = Cli::try_parse_from(["fancytext", "convert", "--style", "Bold", "Hi"]).unwrap();
//! let mut clipboard = SystemClipboard::new();
//! let mut app = App::new(&cli, Presenter::plain().unwrap(), &mut clipboard).unwrap();
//!
//! let mut out = Vec::<u8>::new();
//! app.run(&cli.command, &mut std::io::empty(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "𝐇𝐢\n");
//! ```

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod notify;
pub mod present;
pub mod source;

pub use app::{build_registry, App};
pub use cli::{CategoryFilter, Cli, Command, LogLevelArg, OutputFormat};
pub use clipboard::{copy_with_retry, ClipboardError, ClipboardSink, SystemClipboard};
pub use notify::{Notification, NotificationQueue, Severity};
pub use present::{Presenter, ResultFilter, Theme};
