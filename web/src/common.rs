//! Form helpers.
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Value of the form control that fired the event.
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };

    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }

    if let Some(textarea) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return textarea.value();
    }

    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }

    String::new()
}

/// Keeps `state` in sync with a form control.
pub fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(event_value(&e));
    })
}

/// Parses a whole naira amount, ignoring separators.
pub fn parse_amount(value: &str) -> Option<u64> {
    let digits = value
        .trim()
        .trim_start_matches('₦')
        .replace(|c: char| c == ',' || c.is_whitespace(), "");

    digits.parse().ok().filter(|amount| *amount > 0)
}

#[cfg(test)]
#[path = "./common_test.rs"]
mod common_test;
