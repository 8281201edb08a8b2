//! Program trait defining the MVU contract.

use crate::Dispatcher;

/// A self-contained MVU program: an isolated state type, a closed message
/// type, and pure `update`/`view` functions over them.
///
/// The same contract is implemented by leaf sub-programs (e.g.
/// [`Counter`](crate::Counter)) and by composites (e.g. [`App`](crate::App))
/// that route messages to embedded sub-programs. A program never observes
/// state or messages other than its own; composition happens entirely in
/// the parent via message lifting and [`Dispatcher::map`].
///
/// Implementations must provide three pure functions:
/// - [`init`](Self::init): Produce the program's initial state
/// - [`update`](Self::update): Transform (Msg, State) → State
/// - [`view`](Self::view): Derive a View value from State with dispatch capability
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait Program<Msg: Send, State, View> {
    /// Produce the initial state.
    ///
    /// Called once at startup by the host, before any message is processed.
    /// Composite programs seed their aggregate from each child's `init`.
    fn init(&self) -> State;

    /// Reduce a message to an updated state.
    ///
    /// This is a pure, total function: every message variant must be handled
    /// (exhaustiveness is enforced by the compiler over the closed message
    /// enum), it never blocks or performs I/O, and the previous state value
    /// is left untouched. All state changes happen through this function.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process
    /// * `state` - The current state
    ///
    /// # Returns
    ///
    /// The new state.
    fn update(&self, msg: Msg, state: &State) -> State;

    /// Derive a renderable View value from the current state.
    ///
    /// The provided [`Dispatcher`] allows the View to contain callbacks that
    /// feed messages back into the loop; it is the only channel through which
    /// a view may cause anything to happen. A composite hands each embedded
    /// sub-view a wrapped dispatcher ([`Dispatcher::map`]) so the sub-view can
    /// only ever emit its own message type.
    ///
    /// # Arguments
    ///
    /// * `state` - The current state
    /// * `dispatcher` - Dispatch handle for creating callbacks
    ///
    /// # Returns
    ///
    /// A View derived from the state, ready for rendering via
    /// [`Renderer::render`](crate::Renderer::render).
    fn view(&self, state: &State, dispatcher: &Dispatcher<Msg>) -> View;
}
