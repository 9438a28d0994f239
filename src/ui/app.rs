//! Main TUI application state and logic

use crate::config::AppConfig;
use crate::errors::QuoteError;
use crate::input::{Bindings, Controller, InputEvent, Key, Outcome};
use crate::page::{Page, SlotId};
use crate::quotes::{QuoteStore, Selector};
use crate::render::Renderer;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::time::{Duration, Instant};

use super::theme::DEFAULT_THEME;

/// Longest wait for input when no deferred task is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The main application state
pub struct App<R: Rng = StdRng> {
    /// Display slots and focus
    pub page: Page,

    /// Quote store, selector and session state
    pub renderer: Renderer<R>,

    /// Input bindings and deferred tasks
    pub controller: Controller,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App<StdRng> {
    /// Bootstrap with the selector configured from the CLI
    pub fn from_config(
        store: QuoteStore,
        config: &AppConfig,
        page: Page,
    ) -> Result<Self, QuoteError> {
        let selector = match config.seed {
            Some(seed) => Selector::seeded(seed),
            None => Selector::from_entropy(),
        };
        App::bootstrap(store, selector, page)
    }
}

impl<R: Rng> App<R> {
    /// Wire the input controller, render the first quote, and announce startup.
    ///
    /// Fails without rendering anything if the trigger control is missing.
    pub fn bootstrap(
        store: QuoteStore,
        selector: Selector<R>,
        mut page: Page,
    ) -> Result<Self, QuoteError> {
        let controller = Controller::setup(&page, Bindings::standard())?;
        let mut renderer = Renderer::new(store, selector);
        renderer.render(&mut page)?;

        tracing::info!("Random quote widget loaded successfully");
        tracing::info!("Press the button or spacebar to get a new quote");

        Ok(App {
            page,
            renderer,
            controller,
            should_quit: false,
            status_message: String::from("Ready!"),
        })
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            // Wake up in time for the next deferred task
            let timeout = self
                .controller
                .scheduler()
                .poll_timeout(Instant::now(), IDLE_POLL);
            if event::poll(timeout)? {
                if let Some(input) = translate_event(&event::read()?) {
                    self.handle_input(input, Instant::now())?;
                }
            }

            self.controller.tick(&mut self.page, Instant::now())?;
        }

        Ok(())
    }

    /// Feed one input event through the controller
    pub fn handle_input(
        &mut self,
        input: InputEvent,
        now: Instant,
    ) -> Result<Outcome, QuoteError> {
        let outcome = self
            .controller
            .handle(input, &mut self.page, &mut self.renderer, now)?;

        if outcome.quit {
            self.should_quit = true;
        }
        if let Some(rendered) = outcome.rendered {
            self.status_message = format!(
                "Quote {} of {}",
                rendered.index + 1,
                self.renderer.store().len()
            );
        } else if self.page.focus_in_text_entry() {
            self.status_message = "Typing a note".to_string();
        }
        Ok(outcome)
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Title, quote box, controls, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let title = Paragraph::new(Line::from(Span::styled(
            " Random Quote Generator ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        super::panes::render_quote_pane(frame, chunks[1], &mut self.page);
        super::panes::render_controls(frame, chunks[2], &mut self.page);

        let feedback = self.controller.feedback(&self.page);
        super::panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            self.page.text(SlotId::Counter),
            feedback,
            self.page.focus_in_text_entry(),
        );
    }
}

/// Translate a terminal event into widget input
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            translate_key(key).map(InputEvent::Key)
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some(InputEvent::Click {
                column: mouse.column,
                row: mouse.row,
            })
        }
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Key> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::CtrlC),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Esc => Some(Key::Esc),
        _ => None,
    }
}
