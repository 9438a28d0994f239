//! Publishing a freshly selected quote to the page
//!
//! [`Renderer::render`] is the single state transition of the widget: pick a
//! quote, bump the counter, and write quote text, author, counter and border
//! colour into their slots. It resolves every slot before touching state, so a
//! page with a missing slot is left exactly as it was.

pub mod color;

pub use color::{Hsl, HUE_PALETTE};

use crate::errors::QuoteError;
use crate::page::{Page, SlotId};
use crate::quotes::{QuoteStore, Selector, Session};
use rand::rngs::StdRng;
use rand::Rng;

/// Slots a render writes into
pub const RENDER_SLOTS: [SlotId; 4] = [
    SlotId::Quote,
    SlotId::Author,
    SlotId::Counter,
    SlotId::QuoteBox,
];

/// What a single render published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedQuote {
    pub index: usize,
    pub counter: u64,
    pub border_color: Hsl,
}

/// Owns the store, the selector and the session state
#[derive(Debug)]
pub struct Renderer<R: Rng = StdRng> {
    store: QuoteStore,
    selector: Selector<R>,
    session: Session,
}

impl<R: Rng> Renderer<R> {
    pub fn new(store: QuoteStore, selector: Selector<R>) -> Self {
        Renderer {
            store,
            selector,
            session: Session::new(),
        }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Number of successful renders so far
    pub fn counter(&self) -> u64 {
        self.session.counter
    }

    /// Draw the next quote index without rendering it
    pub fn select_next(&mut self) -> usize {
        self.selector.select_next(self.store.len(), &mut self.session)
    }

    /// Select a quote and publish it to `page`
    pub fn render(&mut self, page: &mut Page) -> Result<RenderedQuote, QuoteError> {
        page.require(&RENDER_SLOTS)?;

        let index = self.select_next();
        // The store is never empty and the selector stays in 0..len.
        let quote = self.store.get(index).ok_or(QuoteError::EmptyStore)?;
        self.session.counter += 1;
        let counter = self.session.counter;
        let border_color = Hsl::for_counter(counter);

        page.element_mut(SlotId::Quote)?.text = format!("\"{}\"", quote.text());
        page.element_mut(SlotId::Author)?.text = quote.author().to_string();
        page.element_mut(SlotId::Counter)?.text = counter.to_string();
        page.element_mut(SlotId::QuoteBox)?.border_left_color = Some(border_color);

        tracing::debug!(index, counter, color = %border_color, "rendered quote");

        Ok(RenderedQuote {
            index,
            counter,
            border_color,
        })
    }
}
