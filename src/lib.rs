//! Composition primitives for Model-View-Update (MVU) programs.
//!
//! Decomposes one monolithic (state, message, update, view) quadruple into
//! independently defined, independently testable sub-programs, and recomposes
//! them behind a single top-level update loop. No sub-program can observe or
//! dispatch state/messages that are not its own:
//!
//! - each sub-program implements [`Program`] over its own closed message enum
//!   and its own state slice;
//! - the composite message enum wraps each sub-program's messages in one
//!   tagged variant (the variant constructor is the injection function);
//! - [`Dispatcher::map`] pre-composes that injection over the top-level
//!   dispatch, so a sub-view's callbacks are incapable of producing any other
//!   composite message, by construction of their type;
//! - the composite's `update` routes on the tag in a single exhaustive match,
//!   rebuilding the aggregate state with exactly one slice replaced.
//!
//! The crate ships two leaf sub-programs ([`Counter`], [`TextInput`]) and the
//! composite [`App`] that threads a [`Page`] selector through them, plus a
//! minimal synchronous [`Runtime`] host. Programs are effect-free: `update`
//! is a pure total function of (message, state) to state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mvu_compose::{App, PageView, Renderer, Runtime};
//!
//! struct ConsoleRenderer;
//!
//! impl Renderer<PageView> for ConsoleRenderer {
//!     fn render(&mut self, view: PageView) {
//!         match view {
//!             PageView::Counter { body, .. } => println!("count: {}", body.count),
//!             PageView::TextInput { body, .. } => println!("text: {}", body.label),
//!         }
//!     }
//! }
//!
//! let mut runtime = Runtime::new(App::default(), ConsoleRenderer);
//! runtime.run();
//! ```
//!
//! Routing and isolation are plain pure-function behavior, testable without
//! any host:
//!
//! ```rust
//! use mvu_compose::{App, CounterMsg, Msg, Page, Program};
//!
//! let app = App::default();
//! let state = app.init();
//!
//! // Lifting then routing is equivalent to the direct sub-update...
//! let after = app.update(Msg::Counter(CounterMsg::Increment), &state);
//! assert_eq!(after.counter.count, 1);
//!
//! // ...and touches nothing else.
//! assert_eq!(after.input_text, state.input_text);
//! assert_eq!(after.page, state.page);
//!
//! // Sub-state survives page switches.
//! let away = app.update(Msg::SwitchPage(Page::TextInput), &after);
//! let back = app.update(Msg::SwitchPage(Page::Counter), &away);
//! assert_eq!(back.counter.count, 1);
//! ```

// Module declarations
mod app;
mod counter;
mod dispatcher;
mod program;
mod renderer;
mod runtime;
mod text_input;

// Public re-exports
pub use app::{App, Msg, Page, PageControls, PageView, State};
pub use counter::{Counter, CounterMsg, CounterState, CounterView};
pub use dispatcher::Dispatcher;
pub use program::Program;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use text_input::{InputTextMsg, InputTextState, InputTextView, TextInput};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestDriver, TestRuntime};
