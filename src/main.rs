// quotty: Random Quote Widget for the Terminal

use std::io;

use anyhow::Result;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};

use quotty::config::AppConfig;
use quotty::page::Page;
use quotty::quotes::QuoteStore;
use quotty::telemetry;
use quotty::terminal::TerminalGuard;
use quotty::ui::App;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    telemetry::init_tracing(&config);

    // Configuration errors surface here, before the terminal is taken over
    let store = QuoteStore::builtin()?;
    let mut app = App::from_config(store, &config, Page::standard())?;

    // The guard restores the terminal on every exit path, panics included
    let guard = TerminalGuard::new();
    guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    guard.enter_alt_screen(&mut stdout)?;
    guard.enable_mouse_capture(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);
    drop(guard);

    if let Err(err) = &res {
        tracing::error!(error = %err, "widget stopped");
    }
    res
}
