#![cfg(target_arch = "wasm32")]
//! Tests for `components/form`.
use alumni_ui::components::SubmitButton;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

// ********************
// *** SubmitButton ***
// ********************

#[derive(Properties, PartialEq)]
struct AppProps {
    busy: bool,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <SubmitButton busy={props.busy} busy_label={"Saving..."}>{ "Save" }</SubmitButton>
    }
}

fn mount(busy: bool) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<App>::with_root_and_props(root.clone(), AppProps { busy }).render();
    root
}

#[wasm_bindgen_test]
async fn submit_button_should_disable_while_busy() {
    let root = mount(true);
    TimeoutFuture::new(10).await;

    let button = root.query_selector("button").unwrap().unwrap();
    assert!(button.has_attribute("disabled"));
    assert_eq!(Some("Saving...".to_string()), button.text_content());
}

#[wasm_bindgen_test]
async fn submit_button_should_be_enabled_when_idle() {
    let root = mount(false);
    TimeoutFuture::new(10).await;

    let button = root.query_selector("button").unwrap().unwrap();
    assert!(!button.has_attribute("disabled"));
    assert_eq!(Some("Save".to_string()), button.text_content());
}
