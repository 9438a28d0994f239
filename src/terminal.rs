//! Terminal-state guard so the shell is usable again after exit, error or panic.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, Write},
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock,
    },
};

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALT_SCREEN_ENABLED: AtomicBool = AtomicBool::new(false);
static MOUSE_CAPTURE_ENABLED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// Restores whatever terminal modes were switched on through it when dropped.
///
/// Create it before touching the terminal; every mode is recorded only after
/// it was successfully enabled.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Create a guard and install the shared panic hook (once).
    #[must_use]
    pub fn new() -> Self {
        install_panic_hook();
        TerminalGuard
    }

    pub fn enable_raw_mode(&self) -> io::Result<()> {
        enable_raw_mode()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    pub fn enter_alt_screen(&self, out: &mut impl Write) -> io::Result<()> {
        execute!(out, EnterAlternateScreen)?;
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    pub fn enable_mouse_capture(&self, out: &mut impl Write) -> io::Result<()> {
        execute!(out, EnableMouseCapture)?;
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for TerminalGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Undo raw mode, mouse capture and the alternate screen, then show the cursor.
///
/// Each step runs even if an earlier one fails.
pub fn restore_terminal() {
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
    }
    let mut stdout = io::stdout();
    if MOUSE_CAPTURE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    if ALT_SCREEN_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = execute!(stdout, Show);
    let _ = stdout.flush();
}

/// Restore the terminal before the default panic message is printed
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            tracing::error!(%location, "panic");
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("write refused"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("flush refused"))
        }
    }

    fn test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn test_new_installs_panic_hook() {
        let _lock = test_lock().lock().expect("test lock");
        let _guard = TerminalGuard::new();
        assert!(PANIC_HOOK_INSTALLED.get().is_some());
    }

    #[test]
    fn test_drop_restores_every_mode() {
        let _lock = test_lock().lock().expect("test lock");
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);
        MOUSE_CAPTURE_ENABLED.store(true, Ordering::SeqCst);
        {
            let _guard = TerminalGuard::new();
        }
        assert!(!RAW_MODE_ENABLED.load(Ordering::SeqCst));
        assert!(!ALT_SCREEN_ENABLED.load(Ordering::SeqCst));
        assert!(!MOUSE_CAPTURE_ENABLED.load(Ordering::SeqCst));
    }

    #[test]
    fn test_failed_setup_step_is_not_recorded_but_earlier_ones_are_undone() {
        let _lock = test_lock().lock().expect("test lock");
        // Raw mode already on when entering the alternate screen fails
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        ALT_SCREEN_ENABLED.store(false, Ordering::SeqCst);
        MOUSE_CAPTURE_ENABLED.store(false, Ordering::SeqCst);

        let result = (|| -> io::Result<()> {
            let guard = TerminalGuard::new();
            guard.enter_alt_screen(&mut FailingWriter)?;
            guard.enable_mouse_capture(&mut FailingWriter)?;
            Ok(())
        })();

        assert!(result.is_err());
        assert!(!ALT_SCREEN_ENABLED.load(Ordering::SeqCst));
        assert!(!MOUSE_CAPTURE_ENABLED.load(Ordering::SeqCst));
        assert!(!RAW_MODE_ENABLED.load(Ordering::SeqCst));
    }

    #[test]
    fn test_mouse_capture_error_leaves_flag_clear() {
        let _lock = test_lock().lock().expect("test lock");
        MOUSE_CAPTURE_ENABLED.store(false, Ordering::SeqCst);
        let guard = TerminalGuard::new();
        let err = guard
            .enable_mouse_capture(&mut FailingWriter)
            .expect_err("write error should bubble up");
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(!MOUSE_CAPTURE_ENABLED.load(Ordering::SeqCst));
    }
}
