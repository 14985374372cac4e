//! Choosing what a composite control renders as.
//!
//! A control that can be a link, a button or plain content decides once per
//! render with [`dispatch`], from which props it was given.

use formkit_dom::{Handler, Tag};

/// The interactive role a control renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Non-interactive content.
    #[default]
    Static,
    /// Navigates to a target.
    Navigational,
    /// Runs a handler when activated.
    Actionable,
}

impl Role {
    /// Tag used for this role.
    pub fn tag(self) -> Tag {
        match self {
            Self::Static => Tag::Div,
            Self::Navigational => Tag::A,
            Self::Actionable => Tag::Button,
        }
    }
}

/// The props dispatch looks at.
#[derive(Debug, Clone, Default)]
pub struct DispatchInput {
    pub navigation_target: Option<String>,
    pub activation_handler: Option<Handler>,
    pub explicit_role: Option<Role>,
}

impl DispatchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigation_target(mut self, target: impl Into<String>) -> Self {
        self.navigation_target = Some(target.into());
        self
    }

    pub fn activation_handler(mut self, handler: Handler) -> Self {
        self.activation_handler = Some(handler);
        self
    }

    pub fn explicit_role(mut self, role: Role) -> Self {
        self.explicit_role = Some(role);
        self
    }
}

/// Pick the role for `input`.
///
/// An explicit role always wins. Otherwise a navigation target makes the
/// control navigational, even if an activation handler is also present; an
/// activation handler alone makes it actionable; anything else is static.
pub fn dispatch(input: &DispatchInput) -> Role {
    if let Some(role) = input.explicit_role {
        return role;
    }
    if input.navigation_target.is_some() {
        return Role::Navigational;
    }
    if input.activation_handler.is_some() {
        return Role::Actionable;
    }
    Role::Static
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_beats_handler() {
        let input = DispatchInput::new()
            .navigation_target("/x")
            .activation_handler(Handler::new(|_| {}));
        assert_eq!(dispatch(&input), Role::Navigational);
    }

    #[test]
    fn test_explicit_role_beats_everything() {
        let input = DispatchInput::new()
            .navigation_target("/x")
            .activation_handler(Handler::new(|_| {}))
            .explicit_role(Role::Static);
        assert_eq!(dispatch(&input), Role::Static);
    }

    #[test]
    fn test_handler_alone_is_actionable() {
        let input = DispatchInput::new().activation_handler(Handler::new(|_| {}));
        assert_eq!(dispatch(&input), Role::Actionable);
    }

    #[test]
    fn test_nothing_is_static() {
        assert_eq!(dispatch(&DispatchInput::new()), Role::Static);
        assert_eq!(Role::default().tag(), Tag::Div);
    }
}
