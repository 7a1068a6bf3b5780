use crate::counter::CounterStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the counter screen until the user quits or terminal I/O fails.
pub fn run(store: CounterStore) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(store);
    let events = EventHandler::new()?;

    let result = drive(&mut app, &events, |app| {
        terminal.draw(|frame| draw(frame, app))?;
        Ok(())
    });
    drop(guard);

    let state = app.store().state();
    match &result {
        Ok(()) => tracing::info!(
            current = state.current,
            total = state.total,
            "Counter screen closed"
        ),
        Err(err) => tracing::error!(error = %err, "Counter screen failed"),
    }
    result
}

/// Draw, wait for an event, apply it; repeat until the app quits.
///
/// Draw and input errors end the loop and are returned as-is.
pub fn drive<D>(app: &mut App, events: &EventHandler, mut draw_frame: D) -> io::Result<()>
where
    D: FnMut(&App) -> io::Result<()>,
{
    loop {
        draw_frame(app)?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Redraw => {}
            AppEvent::Error(err) => return Err(err),
        }
    }
}
