//! # Introduction
//!
//! quotty shows a random quote in the terminal and swaps it for another one
//! when the "Next quote" button is clicked or the spacebar is pressed. The same
//! quote never appears twice in a row (unless there is only one).
//!
//! ## Flow
//!
//! ```text
//! Bootstrap → Input Controller → Selector → Renderer → Page → TUI
//! ```
//!
//! 1. [`quotes`] — the immutable [`quotes::QuoteStore`] and the
//!    [`quotes::Selector`] that picks the next index.
//! 2. [`render`] — [`render::Renderer`] publishes the selected quote, the
//!    counter and the border colour into the [`page`].
//! 3. [`input`] — [`input::Controller`] maps clicks and keys to renders and
//!    runs the press-feedback revert timer.
//! 4. [`page`] — named display slots shared by the renderer, the controller
//!    and the UI.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! [`config`] and [`telemetry`] hold the CLI flags and the optional trace log;
//! [`terminal`] puts the terminal back the way it was on exit or panic.

pub mod config;
pub mod errors;
pub mod input;
pub mod page;
pub mod quotes;
pub mod render;
pub mod telemetry;
pub mod terminal;
pub mod ui;
