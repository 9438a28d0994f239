//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — bootstrap, event loop, terminal event translation
//! - **[`panes`]** — render functions for the quote box, controls and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: build it with [`App::bootstrap`]
//! and call [`App::run`] to start the event loop.
//!
//! [`App::bootstrap`]: app::App::bootstrap
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
