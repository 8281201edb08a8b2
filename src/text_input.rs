//! Text input sub-program.
//!
//! Owns a line of text and an uppercase display toggle. The uppercased form
//! is derived in `view` only; state always holds the text as typed.

use crate::{Dispatcher, Program};

/// State slice owned by the text input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputTextState {
    pub text: String,
    pub is_upper_case: bool,
}

/// Messages the text input can emit and handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputTextMsg {
    TextChanged(String),
    UppercaseToggled(bool),
}

/// View value derived from [`InputTextState`].
///
/// `label` is the display form: uppercased when the toggle is on, computed
/// at view time and never written back into state.
pub struct InputTextView {
    pub label: String,
    pub text: String,
    pub is_upper_case: bool,
    pub on_text_changed: Box<dyn Fn(String) + Send>,
    pub on_uppercase_toggled: Box<dyn Fn(bool) + Send>,
}

/// The text input sub-program.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextInput;

impl Program<InputTextMsg, InputTextState, InputTextView> for TextInput {
    fn init(&self) -> InputTextState {
        InputTextState {
            text: String::new(),
            is_upper_case: false,
        }
    }

    fn update(&self, msg: InputTextMsg, state: &InputTextState) -> InputTextState {
        match msg {
            InputTextMsg::TextChanged(text) => InputTextState {
                text,
                ..state.clone()
            },
            InputTextMsg::UppercaseToggled(is_upper_case) => InputTextState {
                is_upper_case,
                ..state.clone()
            },
        }
    }

    fn view(&self, state: &InputTextState, dispatcher: &Dispatcher<InputTextMsg>) -> InputTextView {
        let changed = dispatcher.clone();
        let toggled = dispatcher.clone();
        let label = if state.is_upper_case {
            state.text.to_uppercase()
        } else {
            state.text.clone()
        };
        InputTextView {
            label,
            text: state.text.clone(),
            is_upper_case: state.is_upper_case,
            on_text_changed: Box::new(move |text| {
                changed.dispatch(InputTextMsg::TextChanged(text))
            }),
            on_uppercase_toggled: Box::new(move |on| {
                toggled.dispatch(InputTextMsg::UppercaseToggled(on))
            }),
        }
    }
}
