//! Submit button that reflects an in flight request.
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    #[prop_or_default]
    pub class: Classes,

    /// Request is in flight.
    /// Disables the button and shows `busy_label`.
    #[prop_or_default]
    pub busy: bool,

    #[prop_or_default]
    pub disabled: bool,

    #[prop_or(AttrValue::from("Working..."))]
    pub busy_label: AttrValue,

    /// Button type, defaults to `submit`.
    #[prop_or(AttrValue::from("submit"))]
    pub r#type: AttrValue,

    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,

    #[prop_or_default]
    pub children: Children,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let class = classes!(
        "alumni-ui-submit",
        props.busy.then_some("busy"),
        props.class.clone()
    );

    html! {
        <button
            {class}
            type={props.r#type.clone()}
            disabled={props.busy || props.disabled}
            onclick={props.onclick.clone()}>

            if props.busy {
                { &props.busy_label }
            } else {
                { for props.children.iter() }
            }
        </button>
    }
}
