//! TUI pane rendering modules
//!
//! Each pane reads what it needs from the [`Page`](crate::page::Page) and
//! writes back the area it was drawn into, so pointer clicks can be matched
//! to elements on the next event.
//!
//! - [`quote`]: quote box with the coloured left border, plus the counter line
//! - [`controls`]: the "Next quote" button and the note field
//! - [`status`]: status bar with keybindings and state indicators

pub mod controls;
pub mod quote;
pub mod status;

pub use controls::render_controls;
pub use quote::render_quote_pane;
pub use status::render_status_bar;
