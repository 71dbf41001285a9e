//! Display a message.
use crate::types::MessageType;
use yew::prelude::*;

// ***************
// *** Message ***
// ***************

#[derive(Properties, PartialEq)]
pub struct MessageProps {
    #[prop_or_default]
    pub class: Classes,

    pub message: AttrValue,
    pub kind: MessageType,

    #[prop_or_default]
    pub details: Option<AttrValue>,

    /// Called when the message is dismissed.
    /// The dismiss button is only shown if set.
    #[prop_or_default]
    pub onclose: Option<Callback<()>>,
}

#[function_component(Message)]
pub fn message(props: &MessageProps) -> Html {
    let onclose = props.onclose.clone().map(|onclose| {
        Callback::from(move |_: MouseEvent| {
            onclose.emit(());
        })
    });

    let kind_class = match props.kind {
        MessageType::Info => "message-info",
        MessageType::Success => "message-success",
        MessageType::Warning => "message-warning",
        MessageType::Error => "message-error",
    };

    let class = classes!("alumni-ui-message", kind_class, props.class.clone());

    html! {
        <div {class} role={"alert"}>
            <div class={"message-title"}>{ &props.message }</div>
            if let Some(details) = props.details.as_ref() {
                <div class={"message-details"}>{ details }</div>
            }

            if let Some(onclick) = onclose {
                <button class={"message-close"} type={"button"} {onclick}>{ "×" }</button>
            }
        </div>
    }
}
