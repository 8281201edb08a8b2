//! The runtime that orchestrates the message loop.

use core::marker::PhantomData;

use crossbeam_channel::Receiver;

use crate::{Dispatcher, Program, Renderer};

/// The runtime that orchestrates the message loop.
///
/// This is the host for a composed program. It:
/// 1. Seeds the state via [`Program::init`]
/// 2. Processes messages through [`Program::update`], one at a time, to completion
/// 3. Derives a View from the new state via [`Program::view`]
/// 4. Delivers the View to the [`Renderer`]
///
/// The runtime creates a single root [`Dispatcher`] whose clones (and mapped
/// derivatives) live inside View callbacks. Messages may be dispatched from
/// any thread; they are queued via a lock-free channel and processed
/// sequentially on the thread where [`Runtime::run`] was called, each update
/// running to completion before the next message is taken. Update and view
/// are pure, so the loop performs no effect execution of any kind.
///
/// For testing with manual control, use [`TestRuntime`] with a
/// [`crate::TestRenderer`].
///
/// See the [crate-level documentation](crate) for a complete example.
///
/// # Type Parameters
///
/// * `Msg` - The message type of the hosted program
/// * `State` - The state type of the hosted program
/// * `View` - The view type produced by the program's view function
/// * `P` - The program implementation type (implements [`Program`])
/// * `R` - The renderer implementation type (implements [`Renderer`])
pub struct Runtime<Msg, State, View, P, R>
where
    Msg: Send,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    program: P,
    renderer: R,
    msg_receiver: Receiver<Msg>,
    state: State,
    dispatcher: Dispatcher<Msg>,
    _view: PhantomData<View>,
}

impl<Msg, State, View, P, R> Runtime<Msg, State, View, P, R>
where
    Msg: Send + 'static,
    State: 'static,
    View: 'static,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    /// Create a new runtime.
    ///
    /// Seeds the state from [`Program::init`] and sets up the message queue.
    /// Nothing is rendered until [`Runtime::run`] is called.
    ///
    /// # Arguments
    ///
    /// * `program` - The program to host (a leaf or a composite)
    /// * `renderer` - Platform rendering implementation for materializing Views
    pub fn new(program: P, renderer: R) -> Self {
        let (msg_sender, msg_receiver) = crossbeam_channel::unbounded();
        let dispatcher = Dispatcher::from_sender(msg_sender);
        let state = program.init();

        Runtime {
            program,
            renderer,
            msg_receiver,
            state,
            dispatcher,
            _view: PhantomData,
        }
    }

    /// Render the initial view and run the message processing loop.
    ///
    /// - Derives the initial View from the seeded state via [`Program::view`].
    /// - Renders the initial View.
    /// - Processes messages from the queue in a loop, blocking between
    ///   messages, until every dispatch handle has been dropped.
    ///
    /// Messages can be dispatched from any thread via the [`Dispatcher`], but
    /// are always processed sequentially on the thread that called `run`.
    pub fn run(&mut self) {
        let initial_view = self.program.view(&self.state, &self.dispatcher);
        self.renderer.render(initial_view);

        // Message processing loop
        loop {
            match self.msg_receiver.recv() {
                Ok(msg) => self.step(msg),
                Err(_) => break, // Channel closed
            }
        }
    }

    fn step(&mut self, msg: Msg) {
        // Update state with the message
        let new_state = self.program.update(msg, &self.state);

        // Derive the view and render
        let view = self.program.view(&new_state, &self.dispatcher);
        self.renderer.render(view);

        // Store the new state
        self.state = new_state;
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual message processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestRuntime::run`]. Provides methods to manually dispatch
/// messages and drain the message queue for precise control in tests, plus
/// access to the current composite state for property assertions.
///
/// See [`TestRuntime`] for usage.
pub struct TestDriver<Msg, State, View, P, R>
where
    Msg: Send + 'static,
    State: 'static,
    View: 'static,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    runtime: Runtime<Msg, State, View, P, R>,
}

#[cfg(any(test, feature = "testing"))]
impl<Msg, State, View, P, R> TestDriver<Msg, State, View, P, R>
where
    Msg: Send + 'static,
    State: 'static,
    View: 'static,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    /// Process all queued messages.
    ///
    /// This processes messages until the queue is empty. Call this after
    /// dispatching messages (directly or through View callbacks) to drive
    /// the loop in tests.
    pub fn process_messages(&mut self) {
        self.runtime.process_queued_messages();
    }

    /// Get a clone of the root dispatch handle.
    ///
    /// In production this handle only reaches View callbacks; tests may use
    /// it to stand in for the UI event handlers that would call it.
    pub fn dispatcher(&self) -> Dispatcher<Msg> {
        self.runtime.dispatcher.clone()
    }

    /// Get the current state, for assertions.
    pub fn state(&self) -> &State {
        &self.runtime.state
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime with manual message processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Unlike [`Runtime`], this runtime does not block waiting for messages.
/// Tests dispatch messages (through captured View callbacks or the driver's
/// [`dispatcher`](TestDriver::dispatcher)) and then call
/// [`process_messages`](TestDriver::process_messages) to drain the queue.
///
/// This provides precise control over message timing in tests.
///
/// ```rust
/// use mvu_compose::{App, Msg, CounterMsg, TestRenderer, TestRuntime};
///
/// let renderer = TestRenderer::new();
/// let runtime = TestRuntime::new(App::default(), renderer.boxed());
/// let mut driver = runtime.run();
///
/// driver.dispatcher().dispatch(Msg::Counter(CounterMsg::Increment));
/// driver.process_messages(); // Manually process queued messages
///
/// assert_eq!(driver.state().counter.count, 1);
/// ```
pub struct TestRuntime<Msg, State, View, P, R>
where
    Msg: Send + 'static,
    State: 'static,
    View: 'static,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    runtime: Runtime<Msg, State, View, P, R>,
}

#[cfg(any(test, feature = "testing"))]
impl<Msg, State, View, P, R> TestRuntime<Msg, State, View, P, R>
where
    Msg: Send + 'static,
    State: 'static,
    View: 'static,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    /// Create a new test runtime.
    ///
    /// Seeds the state from [`Program::init`]; messages are enqueued without
    /// being automatically processed.
    ///
    /// # Arguments
    ///
    /// * `program` - The program to host (a leaf or a composite)
    /// * `renderer` - Renderer for materializing Views (usually a
    ///   [`crate::TestRenderer`])
    pub fn new(program: P, renderer: R) -> Self {
        TestRuntime {
            runtime: Runtime::new(program, renderer),
        }
    }

    /// Render the initial view and return a driver for manual processing.
    pub fn run(mut self) -> TestDriver<Msg, State, View, P, R> {
        let initial_view = self
            .runtime
            .program
            .view(&self.runtime.state, &self.runtime.dispatcher);
        self.runtime.renderer.render(initial_view);

        TestDriver {
            runtime: self.runtime,
        }
    }
}

impl<Msg, State, View, P, R> Runtime<Msg, State, View, P, R>
where
    Msg: Send + 'static,
    State: 'static,
    View: 'static,
    P: Program<Msg, State, View>,
    R: Renderer<View>,
{
    /// Process all queued messages (for testing).
    ///
    /// Exposed to [`TestDriver`] to manually drive message processing.
    #[cfg(any(test, feature = "testing"))]
    fn process_queued_messages(&mut self) {
        while let Ok(msg) = self.msg_receiver.try_recv() {
            self.step(msg);
        }
    }
}
