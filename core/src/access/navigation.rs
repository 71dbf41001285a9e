//! Navigation links exposed to the current session.
use super::view::View;
use crate::system::Session;

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub view: View,
    pub label: &'static str,
}

impl NavLink {
    fn new(view: View, label: &'static str) -> Self {
        Self { view, label }
    }
}

fn member_links() -> Vec<NavLink> {
    vec![
        NavLink::new(View::Profile, "Profile"),
        NavLink::new(View::Directory, "Directory"),
        NavLink::new(View::Events, "Events"),
        NavLink::new(View::News, "News"),
        NavLink::new(View::Forums, "Forums"),
        NavLink::new(View::Gallery, "Gallery"),
        NavLink::new(View::Donations, "Donate"),
    ]
}

fn admin_links() -> Vec<NavLink> {
    vec![NavLink::new(View::Admin, "Admin")]
}

/// Links to show for the session.
/// Empty when anonymous, member links for alumni,
/// member and admin links for admins.
pub fn visible_links(session: &Session) -> Vec<NavLink> {
    if !session.is_authenticated() {
        return Vec::new();
    }

    let mut links = member_links();
    if session.is_admin() {
        links.extend(admin_links());
    }

    links
}

#[cfg(test)]
#[path = "./navigation_test.rs"]
mod navigation_test;
