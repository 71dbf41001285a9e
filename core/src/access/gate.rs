//! Render or redirect decisions.
use super::view::{Requirement, View};
use crate::system::Session;

/// Outcome of the access gate for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render,

    /// Navigate to the view instead of rendering.
    Redirect(View),
}

impl Decision {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Decides whether a view with the given requirement may render.
///
/// | Requirement | anonymous | alumni | admin |
/// |---|---|---|---|
/// | public | render | render | render |
/// | member only | login | render | render |
/// | admin only | home | home | render |
///
/// Derived fresh on every call, never cached.
pub fn authorize(session: &Session, requirement: Requirement) -> Decision {
    match requirement {
        Requirement::Public => Decision::Render,
        Requirement::MemberOnly => {
            if session.is_authenticated() {
                Decision::Render
            } else {
                Decision::Redirect(View::Login)
            }
        }
        Requirement::AdminOnly => {
            if session.is_admin() {
                Decision::Render
            } else {
                Decision::Redirect(View::Home)
            }
        }
    }
}

#[cfg(test)]
#[path = "./gate_test.rs"]
mod gate_test;
