//! Composite coordinator: composes the counter and text input sub-programs
//! behind a single update loop.
//!
//! The coordinator owns the aggregate [`State`] (both sub-states plus the
//! [`Page`] selector) and the single routing [`Program::update`]. Each
//! composite [`Msg`] variant is handled by exactly one arm: the wrapper
//! variants delegate to the matching sub-update and rebuild the aggregate
//! with that one slice replaced; `SwitchPage` replaces only the selector.
//! Sub-state therefore outlives its own visibility: switching away from a
//! page and back never resets it.

use crate::counter::{Counter, CounterMsg, CounterState, CounterView};
use crate::text_input::{InputTextMsg, InputTextState, InputTextView, TextInput};
use crate::{Dispatcher, Program};

/// Which sub-program is currently rendered. Stored in [`State`], never
/// derived, and only ever changed by [`Msg::SwitchPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Counter,
    TextInput,
}

/// Aggregate state: the disjoint union of every sub-state plus the selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub counter: CounterState,
    pub input_text: InputTextState,
    pub page: Page,
}

/// Composite message type.
///
/// One wrapper variant per sub-program, carrying that sub-program's message,
/// plus top-level-only variants no sub-program can emit. The wrapper
/// variants double as the injection functions: `Msg::Counter` is a
/// `fn(CounterMsg) -> Msg`, handed to [`Dispatcher::map`] to derive each
/// sub-program's scoped dispatch handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Counter(CounterMsg),
    InputText(InputTextMsg),
    SwitchPage(Page),
}

/// Page-switch controls, present on every page.
///
/// `on_switch` dispatches [`Msg::SwitchPage`] against the top-level
/// dispatcher; page switching is a top-level concern no sub-program can
/// trigger or observe.
pub struct PageControls {
    pub active: Page,
    pub on_switch: Box<dyn Fn(Page) + Send>,
}

impl PageControls {
    fn new(active: Page, dispatcher: &Dispatcher<Msg>) -> Self {
        let switch = dispatcher.clone();
        PageControls {
            active,
            on_switch: Box::new(move |page| switch.dispatch(Msg::SwitchPage(page))),
        }
    }
}

/// Composite view: one variant per [`Page`], each carrying the page-switch
/// controls plus the embedded sub-view. Selection is total over the
/// selector; there is no fallthrough arm.
pub enum PageView {
    Counter {
        controls: PageControls,
        body: CounterView,
    },
    TextInput {
        controls: PageControls,
        body: InputTextView,
    },
}

/// The composed application program.
#[derive(Clone, Copy, Debug, Default)]
pub struct App {
    counter: Counter,
    text_input: TextInput,
}

impl Program<Msg, State, PageView> for App {
    fn init(&self) -> State {
        State {
            counter: self.counter.init(),
            input_text: self.text_input.init(),
            page: Page::Counter,
        }
    }

    fn update(&self, msg: Msg, state: &State) -> State {
        match msg {
            Msg::Counter(m) => State {
                counter: self.counter.update(m, &state.counter),
                ..state.clone()
            },
            Msg::InputText(m) => State {
                input_text: self.text_input.update(m, &state.input_text),
                ..state.clone()
            },
            Msg::SwitchPage(page) => State {
                page,
                ..state.clone()
            },
        }
    }

    fn view(&self, state: &State, dispatcher: &Dispatcher<Msg>) -> PageView {
        let controls = PageControls::new(state.page, dispatcher);
        match state.page {
            Page::Counter => PageView::Counter {
                controls,
                body: self
                    .counter
                    .view(&state.counter, &dispatcher.map(Msg::Counter)),
            },
            Page::TextInput => PageView::TextInput {
                controls,
                body: self
                    .text_input
                    .view(&state.input_text, &dispatcher.map(Msg::InputText)),
            },
        }
    }
}
