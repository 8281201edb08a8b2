use super::{capturing_dispatcher, populated_state};
use mvu_compose::{
    App, CounterMsg, InputTextMsg, Msg, Page, PageView, Program,
};

#[test]
fn given_the_counter_page_view_should_embed_the_counter_body() {
    let app = App::default();
    let (dispatcher, _seen) = capturing_dispatcher();

    match app.view(&populated_state(Page::Counter), &dispatcher) {
        PageView::Counter { controls, body } => {
            assert_eq!(controls.active, Page::Counter);
            assert_eq!(body.count, 2);
        }
        PageView::TextInput { .. } => panic!("Expected the counter page"),
    }
}

#[test]
fn given_the_input_page_view_should_embed_the_input_body() {
    let app = App::default();
    let (dispatcher, _seen) = capturing_dispatcher();

    match app.view(&populated_state(Page::TextInput), &dispatcher) {
        PageView::TextInput { controls, body } => {
            assert_eq!(controls.active, Page::TextInput);
            assert_eq!(body.text, "hi");
        }
        PageView::Counter { .. } => panic!("Expected the text input page"),
    }
}

// Scenario: the uppercase form exists only in the rendered label.
#[test]
fn given_the_uppercase_toggle_on_the_label_should_be_uppercased_at_view_time() {
    let app = App::default();
    let (dispatcher, _seen) = capturing_dispatcher();

    let mut state = populated_state(Page::TextInput);
    state = app.update(Msg::InputText(InputTextMsg::UppercaseToggled(true)), &state);
    assert!(state.input_text.is_upper_case);
    assert_eq!(state.input_text.text, "hi");

    match app.view(&state, &dispatcher) {
        PageView::TextInput { body, .. } => {
            assert_eq!(body.label, "HI");
            assert_eq!(body.text, "hi");
        }
        PageView::Counter { .. } => panic!("Expected the text input page"),
    }
}

#[test]
fn given_an_embedded_body_its_callbacks_should_emit_only_tagged_messages() {
    let app = App::default();
    let (dispatcher, seen) = capturing_dispatcher();

    match app.view(&populated_state(Page::Counter), &dispatcher) {
        PageView::Counter { body, .. } => {
            (body.on_increment)();
            (body.on_decrement)();
        }
        PageView::TextInput { .. } => panic!("Expected the counter page"),
    }

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Msg::Counter(CounterMsg::Increment),
            Msg::Counter(CounterMsg::Decrement),
        ]
    );
}

#[test]
fn given_page_controls_switching_should_dispatch_against_the_top_level() {
    let app = App::default();
    let (dispatcher, seen) = capturing_dispatcher();

    match app.view(&populated_state(Page::TextInput), &dispatcher) {
        PageView::TextInput { controls, body } => {
            (body.on_text_changed)("typed".to_string());
            (controls.on_switch)(Page::Counter);
        }
        PageView::Counter { .. } => panic!("Expected the text input page"),
    }

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Msg::InputText(InputTextMsg::TextChanged("typed".to_string())),
            Msg::SwitchPage(Page::Counter),
        ]
    );
}

#[test]
fn given_identical_inputs_view_should_be_deterministic() {
    let app = App::default();
    let (dispatcher, _seen) = capturing_dispatcher();
    let state = populated_state(Page::TextInput);

    let labels: Vec<String> = (0..2)
        .map(|_| match app.view(&state, &dispatcher) {
            PageView::TextInput { body, .. } => body.label,
            PageView::Counter { .. } => panic!("Expected the text input page"),
        })
        .collect();

    assert_eq!(labels[0], labels[1]);
}
