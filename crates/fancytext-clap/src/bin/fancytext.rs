use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use fancytext_clap::{App, Cli, LogLevelArg, Presenter, SystemClipboard, Theme};
use terminal_size::{terminal_size, Width};

fn init_logging(level: Option<LogLevelArg>) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level.to_level_filter());
    }
    builder.format_timestamp(None).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut clipboard = SystemClipboard::new();
    match run(&cli, &mut clipboard) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("command failed: {err:?}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, clipboard: &mut SystemClipboard) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let use_color = interactive && console::colors_enabled();
    let max_width = if interactive {
        terminal_size().map(|(Width(w), _)| usize::from(w))
    } else {
        None
    };
    let stderr_color = io::stderr().is_terminal() && console::colors_enabled_stderr();

    let presenter =
        Presenter::new(Theme::default(), use_color, max_width)?.with_summary(interactive);
    let mut app = App::new(cli, presenter, clipboard)?;
    let outcome = app.run(&cli.command, &mut io::stdin().lock(), &mut stdout.lock());
    app.notifications_mut()
        .drain(|n| eprintln!("{}", n.render(stderr_color)));
    outcome
}
