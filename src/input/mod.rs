//! Input controller: turns clicks and key presses into renders
//!
//! Two triggers lead to a render. A pointer click on the `next` control calls
//! [`Controller::click_trigger`]. The spacebar (outside a text-entry field)
//! prevents the default action, calls the same `click_trigger`, and then shows
//! press feedback on the control for [`PRESS_FEEDBACK`]. The feedback revert is
//! a [`scheduler::Task`] fired later by [`Controller::tick`].
//!
//! The controller only knows [`InputEvent`]s; translating terminal events into
//! them is the UI's job.

pub mod bindings;
pub mod scheduler;

pub use bindings::{Bindings, Command, Key};
pub use scheduler::{Scheduler, Task};

use crate::errors::QuoteError;
use crate::page::{Page, SlotId, Transform};
use crate::render::{RenderedQuote, Renderer};
use rand::Rng;
use std::time::{Duration, Instant};

/// How long the trigger stays visually pressed after a spacebar activation
pub const PRESS_FEEDBACK: Duration = Duration::from_millis(100);

/// Elements that take keyboard focus, in Tab order
const FOCUS_ORDER: [SlotId; 2] = [SlotId::Next, SlotId::Note];

/// Backend-independent input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer button pressed at a terminal cell
    Click { column: u16, row: u16 },
    /// Key pressed
    Key(Key),
}

/// Visual state of the trigger control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Idle,
    Pressed,
}

/// Result of handling one event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Set when a render happened
    pub rendered: Option<RenderedQuote>,
    /// The key's default action (scrolling, typing) was suppressed
    pub default_prevented: bool,
    pub quit: bool,
}

#[derive(Debug)]
pub struct Controller {
    bindings: Bindings,
    scheduler: Scheduler,
}

impl Controller {
    /// Wire the controller to a page. The trigger control must exist.
    pub fn setup(page: &Page, bindings: Bindings) -> Result<Self, QuoteError> {
        page.element(SlotId::Next)?;
        Ok(Controller {
            bindings,
            scheduler: Scheduler::new(),
        })
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Current press-feedback state of the trigger
    pub fn feedback(&self, page: &Page) -> Feedback {
        match page.element(SlotId::Next).map(|e| e.transform) {
            Ok(Transform::Pressed) => Feedback::Pressed,
            _ => Feedback::Idle,
        }
    }

    /// Handle one input event at time `now`
    pub fn handle<R: Rng>(
        &mut self,
        event: InputEvent,
        page: &mut Page,
        renderer: &mut Renderer<R>,
        now: Instant,
    ) -> Result<Outcome, QuoteError> {
        match event {
            InputEvent::Click { column, row } => {
                self.handle_click(column, row, page, renderer)
            }
            InputEvent::Key(key) => self.handle_key(key, page, renderer, now),
        }
    }

    /// Activation path shared by the pointer and the spacebar
    pub fn click_trigger<R: Rng>(
        &mut self,
        page: &mut Page,
        renderer: &mut Renderer<R>,
    ) -> Result<RenderedQuote, QuoteError> {
        page.element(SlotId::Next)?;
        renderer.render(page)
    }

    /// Fire every deferred task due at `now`; returns how many ran.
    ///
    /// All due tasks run even if one fails; the first failure is returned.
    pub fn tick(&mut self, page: &mut Page, now: Instant) -> Result<usize, QuoteError> {
        let due = self.scheduler.take_due(now);
        let mut first_err = None;
        for task in &due {
            let result = match *task {
                Task::ResetTransform(id) => page
                    .element_mut(id)
                    .map(|e| e.transform = Transform::Normal),
            };
            if let Err(err) = result {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(due.len()),
        }
    }

    fn handle_click<R: Rng>(
        &mut self,
        column: u16,
        row: u16,
        page: &mut Page,
        renderer: &mut Renderer<R>,
    ) -> Result<Outcome, QuoteError> {
        let mut outcome = Outcome::default();
        match page.hit_test(column, row) {
            Some(SlotId::Next) => {
                page.focus(SlotId::Next)?;
                outcome.rendered = Some(self.click_trigger(page, renderer)?);
            }
            Some(SlotId::Note) => page.focus(SlotId::Note)?,
            _ => {}
        }
        Ok(outcome)
    }

    fn handle_key<R: Rng>(
        &mut self,
        key: Key,
        page: &mut Page,
        renderer: &mut Renderer<R>,
        now: Instant,
    ) -> Result<Outcome, QuoteError> {
        let mut outcome = Outcome::default();

        if page.focus_in_text_entry() {
            match self.bindings.command_in_text_entry(key) {
                Some(command) => self.run_command(command, page, renderer, now, &mut outcome)?,
                None => edit_focused_field(key, page)?,
            }
            return Ok(outcome);
        }

        if let Some(command) = self.bindings.command_for(key) {
            self.run_command(command, page, renderer, now, &mut outcome)?;
        }
        Ok(outcome)
    }

    fn run_command<R: Rng>(
        &mut self,
        command: Command,
        page: &mut Page,
        renderer: &mut Renderer<R>,
        now: Instant,
        outcome: &mut Outcome,
    ) -> Result<(), QuoteError> {
        match command {
            Command::PressTrigger => {
                outcome.default_prevented = true;
                outcome.rendered = Some(self.click_trigger(page, renderer)?);
                page.element_mut(SlotId::Next)?.transform = Transform::Pressed;
                self.scheduler
                    .schedule(now, PRESS_FEEDBACK, Task::ResetTransform(SlotId::Next));
            }
            Command::ActivateFocused => {
                if page.focused() == Some(SlotId::Next) {
                    outcome.rendered = Some(self.click_trigger(page, renderer)?);
                }
            }
            Command::FocusNext => move_focus(page, 1)?,
            Command::FocusPrev => move_focus(page, FOCUS_ORDER.len() - 1)?,
            Command::Quit => outcome.quit = true,
        }
        Ok(())
    }
}

/// Cycle focus through the focusable elements present on the page
fn move_focus(page: &mut Page, step: usize) -> Result<(), QuoteError> {
    let available: Vec<SlotId> = FOCUS_ORDER
        .into_iter()
        .filter(|id| page.contains(*id))
        .collect();
    if available.is_empty() {
        return Ok(());
    }
    let current = page
        .focused()
        .and_then(|id| available.iter().position(|a| *a == id));
    let next = match current {
        Some(pos) => available[(pos + step) % available.len()],
        None => available[0],
    };
    page.focus(next)
}

/// Apply a key to the focused text-entry field
fn edit_focused_field(key: Key, page: &mut Page) -> Result<(), QuoteError> {
    let Some(id) = page.focused() else {
        return Ok(());
    };
    let field = page.element_mut(id)?;
    match key {
        Key::Space => field.text.push(' '),
        Key::Char(c) => field.text.push(c),
        Key::Backspace => {
            field.text.pop();
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::{QuoteStore, Selector};
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> InputEvent {
        InputEvent::Click { column, row }
    }

    fn fixture() -> (Controller, Page, Renderer) {
        let mut page = Page::standard();
        page.set_area(SlotId::Next, Rect::new(10, 20, 14, 3));
        page.set_area(SlotId::Note, Rect::new(30, 20, 20, 3));
        let controller = Controller::setup(&page, Bindings::standard()).unwrap();
        let renderer = Renderer::new(QuoteStore::builtin().unwrap(), Selector::seeded(5));
        (controller, page, renderer)
    }

    #[test]
    fn test_setup_requires_trigger() {
        let mut page = Page::standard();
        page.remove(SlotId::Next);
        assert_eq!(
            Controller::setup(&page, Bindings::standard()).unwrap_err(),
            QuoteError::MissingSlot(SlotId::Next)
        );
    }

    #[test]
    fn test_space_in_text_entry_types_instead_of_rendering() {
        let (mut controller, mut page, mut renderer) = fixture();
        page.focus(SlotId::Note).unwrap();
        let now = Instant::now();

        let outcome = controller
            .handle(InputEvent::Key(Key::Space), &mut page, &mut renderer, now)
            .unwrap();

        assert_eq!(outcome, Outcome::default());
        assert_eq!(renderer.counter(), 0);
        assert_eq!(page.text(SlotId::Note), " ");
        assert_eq!(controller.feedback(&page), Feedback::Idle);
        assert!(controller.scheduler().is_empty());
    }

    #[test]
    fn test_space_renders_with_feedback_then_reverts() {
        let (mut controller, mut page, mut renderer) = fixture();
        let now = Instant::now();

        let outcome = controller
            .handle(InputEvent::Key(Key::Space), &mut page, &mut renderer, now)
            .unwrap();

        assert!(outcome.default_prevented);
        assert_eq!(outcome.rendered.map(|r| r.counter), Some(1));
        assert_eq!(renderer.counter(), 1);
        assert_eq!(controller.feedback(&page), Feedback::Pressed);

        assert_eq!(controller.tick(&mut page, now + Duration::from_millis(50)).unwrap(), 0);
        assert_eq!(controller.feedback(&page), Feedback::Pressed);
        assert_eq!(controller.tick(&mut page, now + PRESS_FEEDBACK).unwrap(), 1);
        assert_eq!(controller.feedback(&page), Feedback::Idle);
    }

    #[test]
    fn test_tick_runs_remaining_tasks_after_a_failure() {
        let (mut controller, mut page, mut renderer) = fixture();
        let now = Instant::now();
        controller
            .scheduler
            .schedule(now, PRESS_FEEDBACK, Task::ResetTransform(SlotId::Note));
        controller
            .handle(InputEvent::Key(Key::Space), &mut page, &mut renderer, now)
            .unwrap();
        page.remove(SlotId::Note);

        let err = controller.tick(&mut page, now + PRESS_FEEDBACK).unwrap_err();
        assert_eq!(err, QuoteError::MissingSlot(SlotId::Note));
        assert_eq!(controller.feedback(&page), Feedback::Idle);
        assert!(controller.scheduler().is_empty());
    }

    #[test]
    fn test_rapid_presses_schedule_independent_reverts() {
        let (mut controller, mut page, mut renderer) = fixture();
        let start = Instant::now();
        let second = start + Duration::from_millis(60);

        controller
            .handle(InputEvent::Key(Key::Space), &mut page, &mut renderer, start)
            .unwrap();
        controller
            .handle(InputEvent::Key(Key::Space), &mut page, &mut renderer, second)
            .unwrap();
        assert_eq!(renderer.counter(), 2);
        assert_eq!(controller.scheduler().pending(), 2);

        controller.tick(&mut page, start + PRESS_FEEDBACK).unwrap();
        assert_eq!(controller.feedback(&page), Feedback::Idle);
        controller.tick(&mut page, second + PRESS_FEEDBACK).unwrap();
        assert_eq!(controller.feedback(&page), Feedback::Idle);
        assert!(controller.scheduler().is_empty());
    }

    #[test]
    fn test_click_on_trigger_renders_without_feedback() {
        let (mut controller, mut page, mut renderer) = fixture();
        let now = Instant::now();

        for expected in 1..=3u64 {
            let outcome = controller
                .handle(click(12, 21), &mut page, &mut renderer, now)
                .unwrap();
            assert_eq!(outcome.rendered.map(|r| r.counter), Some(expected));
            assert!(!outcome.default_prevented);
        }
        assert_eq!(controller.feedback(&page), Feedback::Idle);
        assert!(controller.scheduler().is_empty());
    }

    #[test]
    fn test_click_elsewhere_does_nothing() {
        let (mut controller, mut page, mut renderer) = fixture();
        let outcome = controller
            .handle(click(0, 0), &mut page, &mut renderer, Instant::now())
            .unwrap();
        assert_eq!(outcome, Outcome::default());
        assert_eq!(renderer.counter(), 0);
    }

    #[test]
    fn test_click_on_note_focuses_it() {
        let (mut controller, mut page, mut renderer) = fixture();
        controller
            .handle(click(31, 21), &mut page, &mut renderer, Instant::now())
            .unwrap();
        assert_eq!(page.focused(), Some(SlotId::Note));
        assert_eq!(renderer.counter(), 0);
    }

    #[test]
    fn test_other_keys_have_no_effect() {
        let (mut controller, mut page, mut renderer) = fixture();
        let outcome = controller
            .handle(InputEvent::Key(Key::Char('x')), &mut page, &mut renderer, Instant::now())
            .unwrap();
        assert_eq!(outcome, Outcome::default());
        assert_eq!(renderer.counter(), 0);
        assert_eq!(page.text(SlotId::Note), "");
    }

    #[test]
    fn test_enter_activates_only_focused_trigger() {
        let (mut controller, mut page, mut renderer) = fixture();
        let now = Instant::now();

        let outcome = controller
            .handle(InputEvent::Key(Key::Enter), &mut page, &mut renderer, now)
            .unwrap();
        assert!(outcome.rendered.is_some());
        assert_eq!(controller.feedback(&page), Feedback::Idle);

        page.focus(SlotId::Note).unwrap();
        let outcome = controller
            .handle(InputEvent::Key(Key::Enter), &mut page, &mut renderer, now)
            .unwrap();
        assert!(outcome.rendered.is_none());
        assert_eq!(renderer.counter(), 1);
    }

    #[test]
    fn test_tab_cycles_focus_and_q_types_in_note() {
        let (mut controller, mut page, mut renderer) = fixture();
        let now = Instant::now();

        controller
            .handle(InputEvent::Key(Key::Tab), &mut page, &mut renderer, now)
            .unwrap();
        assert_eq!(page.focused(), Some(SlotId::Note));

        let outcome = controller
            .handle(InputEvent::Key(Key::Char('q')), &mut page, &mut renderer, now)
            .unwrap();
        assert!(!outcome.quit);
        assert_eq!(page.text(SlotId::Note), "q");

        controller
            .handle(InputEvent::Key(Key::Backspace), &mut page, &mut renderer, now)
            .unwrap();
        assert_eq!(page.text(SlotId::Note), "");

        controller
            .handle(InputEvent::Key(Key::BackTab), &mut page, &mut renderer, now)
            .unwrap();
        assert_eq!(page.focused(), Some(SlotId::Next));

        let outcome = controller
            .handle(InputEvent::Key(Key::Char('q')), &mut page, &mut renderer, now)
            .unwrap();
        assert!(outcome.quit);
    }
}
