use crate::components::card::{Card, CardProps, CardUi};
use alumni_core::records::Member;
use yew::prelude::*;

impl CardUi for Member {
    fn title(&self) -> &str {
        &self.name
    }

    fn image(&self) -> Option<&str> {
        self.profile_pic.as_deref().filter(|url| !url.is_empty())
    }

    fn body(&self) -> Html {
        html! {
            <>
            if let Some(year) = self.graduation_year {
                <p class={"graduation-year"}>{ format!("Class of {year}") }</p>
            }

            if let Some(location) = self.location.as_ref() {
                <p class={"location"}>{ location }</p>
            }

            if let Some(bio) = self.bio.as_ref() {
                <p class={"bio"}>{ bio }</p>
            }
            </>
        }
    }
}

pub type MemberCardProps = CardProps<Member>;

#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    html! {
        <Card<Member> item={props.item.clone()} onclick={props.onclick.clone()} />
    }
}
