use std::sync::{Arc, Mutex};

use mvu_compose::{
    App, CounterState, Dispatcher, InputTextState, Msg, Page, PageView, Renderer, State,
    TestDriver, TestRenderer, TestRuntime,
};

mod render_pipeline_tests;
mod view_selection_tests;

pub(crate) type AppRenderer = Box<dyn Renderer<PageView> + Send>;
pub(crate) type AppDriver = TestDriver<Msg, State, PageView, App, AppRenderer>;

/// Host the composed app in a manually-stepped runtime.
pub(crate) fn composed_app() -> (AppDriver, TestRenderer<PageView>) {
    let renderer = TestRenderer::new();
    let runtime = TestRuntime::new(App::default(), renderer.boxed());
    let driver = runtime.run();

    (driver, renderer)
}

/// A top-level dispatcher that records every composite message it receives,
/// standing in for the host event loop.
pub(crate) fn capturing_dispatcher() -> (Dispatcher<Msg>, Arc<Mutex<Vec<Msg>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let dispatcher = Dispatcher::new(move |msg| sink.lock().unwrap().push(msg));

    (dispatcher, seen)
}

/// A composite state with every slice away from its default, so tests can
/// tell "untouched" apart from "reset".
pub(crate) fn populated_state(page: Page) -> State {
    State {
        counter: CounterState { count: 2 },
        input_text: InputTextState {
            text: "hi".to_string(),
            is_upper_case: false,
        },
        page,
    }
}
