use crate::counter::intent::CounterIntent;
use crate::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => CounterState {
                current: state.current.saturating_add(1),
                total: state.total.saturating_add(1),
            },
            CounterIntent::Decrement => CounterState {
                current: state.current.saturating_sub(1),
                ..state
            },
            CounterIntent::Reset => CounterState::default(),
        }
    }
}
