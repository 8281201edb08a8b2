use mockall::Sequence;
use mvu_compose::{App, CounterMsg, Msg, Page, PageView, Renderer, TestRuntime};

mockall::mock! {
    PageRenderer {}

    impl Renderer<PageView> for PageRenderer {
        fn render(&mut self, view: PageView);
    }
}

fn counter_count(view: &PageView) -> Option<i64> {
    match view {
        PageView::Counter { body, .. } => Some(body.count),
        PageView::TextInput { .. } => None,
    }
}

#[test]
fn given_no_messages_should_render_exactly_once() {
    let mut renderer = MockPageRenderer::new();
    renderer
        .expect_render()
        .times(1)
        .withf(|view| counter_count(view) == Some(0))
        .return_const(());

    let runtime = TestRuntime::new(App::default(), renderer);
    let _driver = runtime.run();
}

#[test]
fn given_a_message_should_render_once_per_processed_message() {
    let mut seq = Sequence::new();
    let mut renderer = MockPageRenderer::new();
    renderer
        .expect_render()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|view| counter_count(view) == Some(0))
        .return_const(());
    renderer
        .expect_render()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|view| counter_count(view) == Some(1))
        .return_const(());
    renderer
        .expect_render()
        .times(1)
        .in_sequence(&mut seq)
        .withf(|view| matches!(view, PageView::TextInput { .. }))
        .return_const(());

    let runtime = TestRuntime::new(App::default(), renderer);
    let mut driver = runtime.run();

    driver.dispatcher().dispatch(Msg::Counter(CounterMsg::Increment));
    driver.dispatcher().dispatch(Msg::SwitchPage(Page::TextInput));
    driver.process_messages();
}

#[test]
fn given_no_processing_call_should_not_render_queued_messages() {
    let mut renderer = MockPageRenderer::new();
    renderer.expect_render().times(1).return_const(());

    let runtime = TestRuntime::new(App::default(), renderer);
    let driver = runtime.run();

    // Queued but never processed: the initial render stays the only one.
    driver.dispatcher().dispatch(Msg::Counter(CounterMsg::Increment));
}
