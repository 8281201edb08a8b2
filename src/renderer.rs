//! Renderer abstraction for materializing views.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for materializing View values.
///
/// Implement this trait to integrate a composed program with your rendering
/// system (UI framework, terminal, embedded display, etc.). The renderer is
/// the coordinator's sole output boundary: it receives the View value and is
/// responsible for attaching the View's callbacks to real UI events.
///
/// The [`render`](Self::render) method is called once with the initial view
/// and then once per processed message, receiving a fresh View derived from
/// the current state via [`Program::view`](crate::Program::view).
///
/// # Example
///
/// ```rust
/// use mvu_compose::Renderer;
///
/// struct View {
///     message: &'static str,
/// }
///
/// struct ConsoleRenderer;
///
/// impl Renderer<View> for ConsoleRenderer {
///     fn render(&mut self, view: View) {
///         println!("{}", view.message);
///     }
/// }
/// ```
pub trait Renderer<View> {
    /// Render the given view.
    ///
    /// Views may contain callbacks (via [`Dispatcher`](crate::Dispatcher))
    /// that feed messages back into the runtime when invoked.
    ///
    /// # Arguments
    ///
    /// * `view` - The view to render, derived from the current state
    fn render(&mut self, view: View);
}

impl<View> Renderer<View> for Box<dyn Renderer<View> + Send> {
    fn render(&mut self, view: View) {
        (**self).render(view);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Views for assertions.
///
/// Only available with the `testing` feature.
///
/// Use this with [`TestRuntime`](crate::TestRuntime) to capture and inspect
/// View values in integration tests, including invoking their embedded
/// callbacks to simulate user interaction.
///
/// # Example
///
/// ```rust
/// use mvu_compose::{App, PageView, TestRenderer, TestRuntime};
///
/// let renderer = TestRenderer::new();
/// let runtime = TestRuntime::new(App::default(), renderer.boxed());
/// let _driver = runtime.run();
///
/// renderer.with_renders(|renders| {
///     assert!(matches!(renders[0], PageView::Counter { .. }));
/// });
/// ```
pub struct TestRenderer<View> {
    renders: Arc<Mutex<Vec<View>>>,
}

#[cfg(any(test, feature = "testing"))]
struct InternalTestRenderer<View> {
    renders: Arc<Mutex<Vec<View>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<View> Renderer<View> for InternalTestRenderer<View> {
    fn render(&mut self, view: View) {
        self.renders.lock().push(view);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<View> Clone for TestRenderer<View> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<View> Renderer<View> for TestRenderer<View> {
    fn render(&mut self, view: View) {
        self.renders.lock().push(view);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<View: 'static + Send> Default for TestRenderer<View> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<View: 'static + Send> TestRenderer<View> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a boxed renderer to pass to the runtime.
    ///
    /// The returned renderer shares the same capture storage as this
    /// TestRenderer, so you can use [`with_renders`](Self::with_renders) to
    /// inspect captured Views.
    pub fn boxed(&self) -> Box<dyn Renderer<View> + Send> {
        Box::new(InternalTestRenderer {
            renders: self.renders.clone(),
        })
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives a reference to the Vec of all captured Views.
    /// This allows you to make assertions on rendered output or execute
    /// embedded callbacks to simulate user interaction.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use mvu_compose::TestRenderer;
    /// # struct View { count: i64, on_click: Box<dyn Fn() + Send> }
    /// # let renderer = TestRenderer::<View>::new();
    ///
    /// // Compute render count
    /// let count = renderer.with_renders(|renders| renders.len());
    ///
    /// // Make assertions on rendered Views
    /// renderer.with_renders(|renders| {
    ///     // assert_eq!(renders[0].count, 42);
    /// });
    ///
    /// // Execute a specific View callback
    /// renderer.with_renders(|renders| {
    ///     // (renders[0].on_click)();
    /// });
    /// ```
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<View>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
