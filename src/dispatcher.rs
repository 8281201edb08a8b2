//! Dispatch handles for embedding callbacks in views.

use std::sync::Arc;

use crossbeam_channel::Sender;

/// Dispatch handle that can be embedded in View callbacks.
///
/// Clone this handle to create callbacks in your View that feed messages
/// back into the runtime when invoked (e.g., by user interaction). Clones
/// are cheap: they share the underlying dispatch closure.
///
/// The root `Dispatcher` of a runtime enqueues onto the runtime's message
/// queue. Derived handles produced by [`map`](Self::map) pre-compose an
/// injection function, which is how sub-program isolation is enforced: a
/// sub-program handed only a mapped dispatcher is incapable of producing a
/// composite message outside its own tagged variant.
///
/// # Example
///
/// ```rust
/// use mvu_compose::Dispatcher;
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Debug, PartialEq)]
/// enum SubMsg { Poke }
///
/// #[derive(Debug, PartialEq)]
/// enum Msg { Sub(SubMsg) }
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let dispatcher = Dispatcher::new(move |msg: Msg| sink.lock().unwrap().push(msg));
///
/// // A handle scoped to SubMsg: every dispatch arrives pre-wrapped.
/// let sub = dispatcher.map(Msg::Sub);
/// sub.dispatch(SubMsg::Poke);
///
/// assert_eq!(*seen.lock().unwrap(), vec![Msg::Sub(SubMsg::Poke)]);
/// ```
pub struct Dispatcher<Msg: Send>(Arc<dyn Fn(Msg) + Send + Sync>);

impl<Msg: Send> Clone for Dispatcher<Msg> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Msg: Send + 'static> Dispatcher<Msg> {
    /// Create a dispatcher from a raw dispatch function.
    ///
    /// Hosts embedding this crate into their own event loop can build the
    /// root handle directly from whatever their loop consumes.
    pub fn new<F>(dispatch: F) -> Self
    where
        F: Fn(Msg) + Send + Sync + 'static,
    {
        Self(Arc::new(dispatch))
    }

    /// Create a dispatcher that enqueues onto a runtime message queue.
    ///
    /// A send after the runtime has shut down is dropped; dispatch is only
    /// meaningful while the queue's receiver lives.
    pub(crate) fn from_sender(sender: Sender<Msg>) -> Self {
        Self::new(move |msg| {
            sender.send(msg).ok();
        })
    }

    /// Dispatch a message.
    ///
    /// This hands the message to the underlying dispatch function (for the
    /// root handle, queueing it for processing by the runtime). Multiple
    /// threads can safely call this method concurrently.
    pub fn dispatch(&self, msg: Msg) {
        (self.0)(msg)
    }

    /// Derive a sub-program-scoped dispatcher by pre-composing an injection
    /// function.
    ///
    /// `lift` wraps a sub-message into its designated variant of the parent
    /// message type; enum tuple constructors work directly
    /// (`dispatcher.map(Msg::Counter)`). The derived handle shares the
    /// parent's dispatch path, so `sub.dispatch(m)` is exactly
    /// `parent.dispatch(lift(m))` for every `m`.
    pub fn map<Sub, F>(&self, lift: F) -> Dispatcher<Sub>
    where
        Sub: Send + 'static,
        F: Fn(Sub) -> Msg + Send + Sync + 'static,
    {
        let parent = self.clone();
        Dispatcher::new(move |sub| parent.dispatch(lift(sub)))
    }
}
