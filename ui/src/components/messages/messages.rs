//! Display messages to user.
use super::message::Message as MessageUi;
use crate::types::Message;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

// ****************
// *** Messages ***
// ****************

#[derive(Properties, PartialEq)]
pub struct MessagesProps {
    /// Messages to display, oldest first.
    pub messages: Vec<Rc<Message>>,

    /// Called with the id of a dismissed message.
    #[prop_or_default]
    pub onclose: Callback<Uuid>,
}

#[function_component(Messages)]
pub fn messages(props: &MessagesProps) -> Html {
    html! {
        <div class={classes!("alumni-ui-messages")}>
            { props.messages.iter().map(|message| {
                let id = *message.id();
                let onclose = props.onclose.reform(move |_| id);

                html! {
                    <MessageUi
                        key={id.to_string()}
                        kind={message.kind.clone()}
                        message={message.message.clone()}
                        details={message.details().map(|details| AttrValue::from(details.to_string()))}
                        onclose={Some(onclose)} />
                }
            }).collect::<Html>() }
        </div>
    }
}
