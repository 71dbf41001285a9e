//! A UI card.
use yew::prelude::*;

/// Card interface.
pub trait CardUi {
    /// Card title.
    /// Displayed in an `h3` tag.
    fn title(&self) -> &str;

    /// Image shown above the title.
    fn image(&self) -> Option<&str> {
        None
    }

    /// Card body.
    fn body(&self) -> Html;

    /// Card footer.
    fn footer(&self) -> Option<Html> {
        None
    }
}

/// Properties for a Card.
#[derive(Properties, PartialEq)]
pub struct CardProps<T: PartialEq + CardUi> {
    /// Item to display.
    pub item: T,

    /// Callback to exececute when the card is clicked.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// Card component.
#[function_component(Card)]
pub fn card<T>(props: &CardProps<T>) -> Html
where
    T: 'static + PartialEq + CardUi,
{
    let class = classes!("card", props.onclick.is_some().then_some("clickable"));

    html! {
        <div {class} onclick={props.onclick.clone()}>
            if let Some(src) = props.item.image() {
                <img class={"card-image"} src={src.to_string()} alt={props.item.title().to_string()} />
            }

            <h3 class={classes!("title")}>{ props.item.title() }</h3>
            <div class={classes!("body")}>{ props.item.body() }</div>
            if let Some(footer) = props.item.footer() {
                <div class={classes!("footer")}>{ footer }</div>
            }
        </div>
    }
}
