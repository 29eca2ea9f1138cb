//! Raw mode and alternate screen for the portfolio view.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// One-shot terminal restore, run on drop or from the panic hook,
/// whichever comes first.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    pub fn new(restore: impl FnOnce() + Send + 'static) -> Self {
        Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        }
    }

    /// Run the restore now. Returns `false` if it already ran.
    pub fn restore(&self) -> bool {
        run_once(&self.restore)
    }

    pub fn is_armed(&self) -> bool {
        self.restore
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Restore the terminal before the panic message is printed. The hook
    /// only holds a weak handle, so it goes inert once the guard is dropped.
    pub fn restore_on_panic(&self) {
        let restore: Weak<Mutex<Option<Restore>>> = Arc::downgrade(&self.restore);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(restore) = restore.upgrade() {
                run_once(&restore);
            }
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) -> bool {
    let restore = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    match restore {
        Some(restore) => {
            restore();
            true
        }
        None => false,
    }
}

fn leave_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Enter raw mode on the alternate screen. The guard is armed before the
/// screen switch, so a failure part way through still restores the terminal.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(leave_terminal);
    guard.restore_on_panic();

    execute!(io::stdout(), EnterAlternateScreen, Clear(ClearType::All), Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_guard() -> (TerminalGuard, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let guard = TerminalGuard::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (guard, calls)
    }

    #[test]
    fn drop_restores_once() {
        let (guard, calls) = counting_guard();
        assert!(guard.is_armed());
        drop(guard);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn explicit_restore_is_not_repeated_on_drop() {
        let (guard, calls) = counting_guard();
        assert!(guard.restore());
        assert!(!guard.is_armed());
        assert!(!guard.restore());
        drop(guard);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panic_restores_before_unwinding_past_the_guard() {
        let (guard, calls) = counting_guard();
        guard.restore_on_panic();

        let result = std::panic::catch_unwind(|| panic!("render blew up"));
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!guard.is_armed());

        drop(guard);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
