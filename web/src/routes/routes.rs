use super::access_gate::AccessGate;
use crate::pages::{
    admin::Admin,
    auth::{Login, ResetPassword, Signup},
    directory::Directory,
    donations::{DonationSuccess, Donations},
    events::Events,
    forums::Forums,
    gallery::Gallery,
    home::Home,
    news::News,
    not_found::NotFound,
    profile::Profile,
};
use alumni_core::access::View;
use yew::prelude::*;
use yew_router::prelude::*;

// Routes
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/login")]
    Login,

    #[at("/signup")]
    Signup,

    /// Target of the emailed reset link.
    #[at("/reset-password/:token")]
    ResetPassword { token: String },

    #[at("/profile")]
    Profile,

    /// Member directory.
    #[at("/directory")]
    Directory,

    #[at("/events")]
    Events,

    /// News and board minutes.
    #[at("/news")]
    News,

    #[at("/forums")]
    Forums,

    #[at("/gallery")]
    Gallery,

    #[at("/donations")]
    Donations,

    /// Return url of the payment provider.
    #[at("/donations/success")]
    DonationSuccess,

    /// Admin dashboard.
    #[at("/admin")]
    Admin,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&Route> for View {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => View::Home,
            Route::Login => View::Login,
            Route::Signup => View::Signup,
            Route::ResetPassword { token } => View::ResetPassword(token.clone()),
            Route::Profile => View::Profile,
            Route::Directory => View::Directory,
            Route::Events => View::Events,
            Route::News => View::News,
            Route::Forums => View::Forums,
            Route::Gallery => View::Gallery,
            Route::Donations => View::Donations,
            Route::DonationSuccess => View::DonationSuccess,
            Route::Admin => View::Admin,
            Route::NotFound => View::NotFound,
        }
    }
}

impl From<&View> for Route {
    fn from(view: &View) -> Self {
        match view {
            View::Home => Route::Home,
            View::Login => Route::Login,
            View::Signup => Route::Signup,
            View::ResetPassword(token) => Route::ResetPassword {
                token: token.clone(),
            },
            View::Profile => Route::Profile,
            View::Directory => Route::Directory,
            View::Events => Route::Events,
            View::News => Route::News,
            View::Forums => Route::Forums,
            View::Gallery => Route::Gallery,
            View::Donations => Route::Donations,
            View::DonationSuccess => Route::DonationSuccess,
            View::Admin => Route::Admin,
            View::NotFound => Route::NotFound,
        }
    }
}

/// Renders the page for the route.
/// Every page is wrapped in an [`AccessGate`].
pub fn switch(route: Route) -> Html {
    let view = View::from(&route);
    let page = match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::ResetPassword { token } => html! { <ResetPassword {token} /> },
        Route::Profile => html! { <Profile /> },
        Route::Directory => html! { <Directory /> },
        Route::Events => html! { <Events /> },
        Route::News => html! { <News /> },
        Route::Forums => html! { <Forums /> },
        Route::Gallery => html! { <Gallery /> },
        Route::Donations => html! { <Donations /> },
        Route::DonationSuccess => html! { <DonationSuccess /> },
        Route::Admin => html! { <Admin /> },
        Route::NotFound => html! { <NotFound /> },
    };

    html! {
        <AccessGate {view}>{ page }</AccessGate>
    }
}

#[cfg(test)]
#[path = "./routes_test.rs"]
mod routes_test;
