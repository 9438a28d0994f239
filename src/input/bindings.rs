//! Key-to-command table, built once when the controller is set up

use rustc_hash::FxHashMap;

/// Keys the widget understands, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Tab,
    BackTab,
    Backspace,
    Esc,
    CtrlC,
    Char(char),
}

/// Something the controller does in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Activate the trigger control with press feedback (spacebar path)
    PressTrigger,
    /// Activate the trigger control if it has focus (Enter on a button)
    ActivateFocused,
    FocusNext,
    FocusPrev,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Bindings {
    keys: FxHashMap<Key, Command>,
}

impl Bindings {
    /// Default table
    pub fn standard() -> Self {
        let mut keys = FxHashMap::default();
        keys.insert(Key::Space, Command::PressTrigger);
        keys.insert(Key::Enter, Command::ActivateFocused);
        keys.insert(Key::Tab, Command::FocusNext);
        keys.insert(Key::BackTab, Command::FocusPrev);
        keys.insert(Key::Esc, Command::Quit);
        keys.insert(Key::CtrlC, Command::Quit);
        keys.insert(Key::Char('q'), Command::Quit);
        keys.insert(Key::Char('Q'), Command::Quit);
        Bindings { keys }
    }

    pub fn command_for(&self, key: Key) -> Option<Command> {
        self.keys.get(&key).copied()
    }

    /// Bindings that still apply while a text-entry field has focus.
    ///
    /// Everything else, the spacebar included, goes to the field.
    pub fn command_in_text_entry(&self, key: Key) -> Option<Command> {
        match key {
            Key::Tab | Key::BackTab | Key::Esc | Key::CtrlC => self.command_for(key),
            _ => None,
        }
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_presses_trigger() {
        let bindings = Bindings::standard();
        assert_eq!(bindings.command_for(Key::Space), Some(Command::PressTrigger));
        assert_eq!(bindings.command_for(Key::Char('x')), None);
    }

    #[test]
    fn test_text_entry_keeps_only_navigation() {
        let bindings = Bindings::standard();
        assert_eq!(bindings.command_in_text_entry(Key::Space), None);
        assert_eq!(bindings.command_in_text_entry(Key::Char('q')), None);
        assert_eq!(bindings.command_in_text_entry(Key::Enter), None);
        assert_eq!(
            bindings.command_in_text_entry(Key::Tab),
            Some(Command::FocusNext)
        );
        assert_eq!(bindings.command_in_text_entry(Key::Esc), Some(Command::Quit));
    }
}
