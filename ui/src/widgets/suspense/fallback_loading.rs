//! Placeholder shown while a view loads.
use yew::prelude::*;

/// Properties for the [`Loading`] component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class={classes!("alumni-ui-loading")} aria-busy={"true"}>
            if let Some(text) = props.text.clone() {
                { text }
            } else {
                { "Loading..." }
            }
        </div>
    }
}
