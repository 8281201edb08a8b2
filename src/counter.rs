//! Counter sub-program.
//!
//! A self-contained (state, message, update, view) unit: it owns exactly one
//! concern (the count) and can neither observe nor dispatch anything outside
//! it. Composed into [`App`](crate::App) under the `Msg::Counter` tag.

use crate::{Dispatcher, Program};

/// State slice owned by the counter. Opaque to every other sub-program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
}

/// Messages the counter can emit and handle. Closed set: the compiler
/// rejects any update that leaves a variant unmatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterMsg {
    Increment,
    Decrement,
}

/// View value derived from [`CounterState`].
///
/// The callbacks close over a dispatcher scoped to [`CounterMsg`], so a
/// renderer wiring them to UI events can only ever feed counter messages
/// back into the loop.
pub struct CounterView {
    pub count: i64,
    pub on_increment: Box<dyn Fn() + Send>,
    pub on_decrement: Box<dyn Fn() + Send>,
}

/// The counter sub-program.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counter;

impl Program<CounterMsg, CounterState, CounterView> for Counter {
    fn init(&self) -> CounterState {
        CounterState { count: 0 }
    }

    fn update(&self, msg: CounterMsg, state: &CounterState) -> CounterState {
        match msg {
            CounterMsg::Increment => CounterState {
                count: state.count + 1,
            },
            CounterMsg::Decrement => CounterState {
                count: state.count - 1,
            },
        }
    }

    fn view(&self, state: &CounterState, dispatcher: &Dispatcher<CounterMsg>) -> CounterView {
        let increment = dispatcher.clone();
        let decrement = dispatcher.clone();
        CounterView {
            count: state.count,
            on_increment: Box::new(move || increment.dispatch(CounterMsg::Increment)),
            on_decrement: Box::new(move || decrement.dispatch(CounterMsg::Decrement)),
        }
    }
}
