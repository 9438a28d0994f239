//! Named display slots the widget reads and writes
//!
//! A [`Page`] is the set of screen elements the renderer publishes into and
//! the input controller listens on. The TUI draws whatever the page holds;
//! the renderer and controller never touch ratatui widgets directly, so both
//! can be tested against a page alone.

use crate::errors::QuoteError;
use crate::render::Hsl;
use ratatui::layout::Rect;
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifiers of every element the widget knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// Quote body text
    Quote,
    /// Author name text
    Author,
    /// Running counter text
    Counter,
    /// Container whose left border carries the decorative colour
    QuoteBox,
    /// The "Next quote" button
    Next,
    /// Free-form text-entry field
    Note,
}

impl SlotId {
    pub const ALL: [SlotId; 6] = [
        SlotId::Quote,
        SlotId::Author,
        SlotId::Counter,
        SlotId::QuoteBox,
        SlotId::Next,
        SlotId::Note,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SlotId::Quote => "quote",
            SlotId::Author => "author-name",
            SlotId::Counter => "quote-counter",
            SlotId::QuoteBox => "quote-box",
            SlotId::Next => "next",
            SlotId::Note => "note",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Visual transform applied to a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    Normal,
    /// Scaled down to 95% for keyboard press feedback
    Pressed,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Normal => write!(f, "none"),
            Transform::Pressed => write!(f, "scale(0.95)"),
        }
    }
}

/// One element on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub text: String,
    pub border_left_color: Option<Hsl>,
    pub transform: Transform,
    /// Keyboard input belongs to this element while it has focus
    pub text_entry: bool,
    /// Where the element was last drawn, for pointer hit-testing
    pub area: Option<Rect>,
}

impl Element {
    pub fn with_text(text: impl Into<String>) -> Self {
        Element {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn text_entry() -> Self {
        Element {
            text_entry: true,
            ..Default::default()
        }
    }

    /// Whether a terminal cell lies inside the last drawn area
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|r| {
            column >= r.x
                && column < r.x.saturating_add(r.width)
                && row >= r.y
                && row < r.y.saturating_add(r.height)
        })
    }
}

/// The set of elements plus keyboard focus
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: FxHashMap<SlotId, Element>,
    focused: Option<SlotId>,
}

impl Page {
    /// A page with no elements
    pub fn empty() -> Self {
        Self::default()
    }

    /// The page layout the TUI draws: every slot present, focus on the button
    pub fn standard() -> Self {
        let mut page = Page::empty();
        page.insert(SlotId::Quote, Element::default());
        page.insert(SlotId::Author, Element::default());
        page.insert(SlotId::Counter, Element::with_text("0"));
        page.insert(SlotId::QuoteBox, Element::default());
        page.insert(SlotId::Next, Element::with_text("Next quote"));
        page.insert(SlotId::Note, Element::text_entry());
        page.focused = Some(SlotId::Next);
        page
    }

    pub fn insert(&mut self, id: SlotId, element: Element) {
        self.elements.insert(id, element);
    }

    pub fn remove(&mut self, id: SlotId) -> Option<Element> {
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.elements.remove(&id)
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn element(&self, id: SlotId) -> Result<&Element, QuoteError> {
        self.elements.get(&id).ok_or(QuoteError::MissingSlot(id))
    }

    pub fn element_mut(&mut self, id: SlotId) -> Result<&mut Element, QuoteError> {
        self.elements.get_mut(&id).ok_or(QuoteError::MissingSlot(id))
    }

    /// Text of an element, or "" when it is absent
    pub fn text(&self, id: SlotId) -> &str {
        self.elements.get(&id).map_or("", |e| e.text.as_str())
    }

    /// Fail with the first of `ids` that is not on the page
    pub fn require(&self, ids: &[SlotId]) -> Result<(), QuoteError> {
        match ids.iter().find(|id| !self.contains(**id)) {
            Some(id) => Err(QuoteError::MissingSlot(*id)),
            None => Ok(()),
        }
    }

    pub fn focused(&self) -> Option<SlotId> {
        self.focused
    }

    /// Move focus to an element; absent elements cannot take focus
    pub fn focus(&mut self, id: SlotId) -> Result<(), QuoteError> {
        self.element(id)?;
        self.focused = Some(id);
        Ok(())
    }

    /// Whether keyboard input currently goes to a text-entry field
    pub fn focus_in_text_entry(&self) -> bool {
        self.focused
            .and_then(|id| self.elements.get(&id))
            .is_some_and(|e| e.text_entry)
    }

    /// Record where an element was drawn
    pub fn set_area(&mut self, id: SlotId, area: Rect) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.area = Some(area);
        }
    }

    /// The element under a terminal cell, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<SlotId> {
        SlotId::ALL
            .into_iter()
            .find(|id| self.elements.get(id).is_some_and(|e| e.contains(column, row)))
    }
}
