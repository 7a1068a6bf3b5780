use crate::counter::CounterStore;
use crate::observable::Subscription;
use crate::ui::presentation::{Control, CounterView};
use parking_lot::Mutex;
use std::sync::Arc;

/// Screen state for the counter UI.
///
/// The view is fed by subscriptions on the store's observables. Both
/// subscriptions are owned here, so dropping the `App` unsubscribes.
pub struct App {
    should_quit: bool,
    store: CounterStore,
    view: Arc<Mutex<CounterView>>,
    _subscriptions: [Subscription; 2],
}

impl App {
    pub fn new(store: CounterStore) -> Self {
        let view = Arc::new(Mutex::new(CounterView::default()));

        let current_view = Arc::clone(&view);
        let current = store.current().subscribe(move |value| {
            current_view.lock().current = *value;
        });
        let total_view = Arc::clone(&view);
        let total = store.total().subscribe(move |value| {
            total_view.lock().total = *value;
        });

        Self {
            should_quit: false,
            store,
            view,
            _subscriptions: [current, total],
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn view(&self) -> CounterView {
        *self.view.lock()
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    /// Press `control`. Hidden controls cannot be pressed.
    ///
    /// Returns whether the press was accepted.
    pub fn press(&mut self, control: Control) -> bool {
        if !self.view().is_visible(control) {
            return false;
        }
        match control {
            Control::Increment => self.store.increment(),
            Control::Decrement => self.store.decrement(),
            Control::Reset => self.store.reset(),
        }
        true
    }
}
