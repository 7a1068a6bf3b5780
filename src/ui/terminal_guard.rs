use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal when dropped, or from the panic hook if the UI
/// thread panics first. Cleanup runs at most once.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn install(cleanup: Cleanup) -> Self {
        let slot = Arc::new(Mutex::new(Some(cleanup)));

        let hook_slot = Arc::clone(&slot);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&hook_slot);
            default_hook(info);
        }));

        Self { cleanup: slot }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.cleanup);
    }
}

fn run_once(slot: &Mutex<Option<Cleanup>>) {
    if let Ok(mut slot) = slot.lock() {
        if let Some(cleanup) = slot.take() {
            cleanup();
        }
    }
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = enter_guarded(
        || {
            enable_raw_mode()?;
            let mut stdout = io::stdout();
            stdout.execute(EnterAlternateScreen)?;
            stdout.execute(Hide)?;
            Ok(())
        },
        Box::new(restore_terminal),
    )?;

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok((terminal, guard))
}

/// Install the guard before `enter` touches the terminal, so a partial
/// setup is undone when `enter` fails.
fn enter_guarded<E>(enter: E, cleanup: Cleanup) -> io::Result<TerminalGuard>
where
    E: FnOnce() -> io::Result<()>,
{
    let guard = TerminalGuard::install(cleanup);
    enter()?;
    Ok(guard)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_cleanup() -> (Cleanup, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let cleanup: Cleanup = Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (cleanup, runs)
    }

    #[test]
    fn failed_setup_still_restores() {
        let (cleanup, runs) = counting_cleanup();

        let result = enter_guarded(|| Err(io::Error::other("alternate screen refused")), cleanup);

        assert!(result.is_err());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn successful_setup_restores_on_drop_only() {
        let (cleanup, runs) = counting_cleanup();

        let guard = enter_guarded(|| Ok(()), cleanup).unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cleanup_runs_at_most_once() {
        let (cleanup, runs) = counting_cleanup();

        let guard = enter_guarded(|| Ok(()), cleanup).unwrap();
        run_once(&guard.cleanup);
        drop(guard);

        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
