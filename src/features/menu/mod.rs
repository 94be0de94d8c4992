//! # Menu Feature
//!
//! Static welcome, about and FAQ screens with button navigation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod action;
pub mod buttons;
pub mod content;

use serenity::builder::CreateComponents;

pub use action::MenuAction;

/// A rendered menu screen
pub struct MenuReply {
    pub content: &'static str,
    pub components: CreateComponents,
}

/// Render a static screen; `None` for actions that need state (contact flow)
pub fn render(action: MenuAction) -> Option<MenuReply> {
    let reply = match action {
        MenuAction::Start => MenuReply {
            content: content::WELCOME_TEXT,
            components: buttons::main_menu(),
        },
        MenuAction::About => MenuReply {
            content: content::ABOUT_TEXT,
            components: buttons::back_menu(),
        },
        MenuAction::FaqMenu => MenuReply {
            content: content::FAQ_HEADER,
            components: buttons::faq_menu(),
        },
        MenuAction::FaqAnswer(number) => MenuReply {
            content: content::faq_topic(number)?.answer,
            components: buttons::back_menu(),
        },
        MenuAction::RequestContact | MenuAction::ShareContact => return None,
    };
    Some(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_static_screens() {
        assert_eq!(
            render(MenuAction::Start).map(|r| r.content),
            Some(content::WELCOME_TEXT)
        );
        assert_eq!(
            render(MenuAction::FaqAnswer(2)).map(|r| r.content),
            content::faq_topic(2).map(|t| t.answer)
        );
        assert!(render(MenuAction::FaqAnswer(9)).is_none());
    }

    #[test]
    fn test_contact_actions_are_not_static() {
        assert!(render(MenuAction::RequestContact).is_none());
        assert!(render(MenuAction::ShareContact).is_none());
    }
}
