//! Routing of slash command names and button ids to menu actions.

use super::content::FAQ_TOPICS;

/// Button custom ids
pub const START_ID: &str = "start";
pub const BACK_ID: &str = "back";
pub const ABOUT_ID: &str = "about";
pub const FAQ_ID: &str = "faq";
pub const CONTACT_ID: &str = "contact";
pub const LEAVE_CONTACT_ID: &str = "leave_contact";
pub const SHARE_CONTACT_ID: &str = "share_contact";
pub const FAQ_PREFIX: &str = "faq_";

/// What the user asked the menu to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    About,
    FaqMenu,
    /// 1-based FAQ topic number
    FaqAnswer(usize),
    RequestContact,
    ShareContact,
}

impl MenuAction {
    /// Map a slash command name (`/start`, `/about`, ...) to an action
    pub fn from_command(name: &str) -> Option<Self> {
        match name.trim_start_matches('/') {
            "start" => Some(Self::Start),
            "about" => Some(Self::About),
            "faq" => Some(Self::FaqMenu),
            "contact" => Some(Self::RequestContact),
            _ => None,
        }
    }

    /// Map a button custom id to an action
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            START_ID | BACK_ID => Some(Self::Start),
            ABOUT_ID => Some(Self::About),
            FAQ_ID => Some(Self::FaqMenu),
            CONTACT_ID | LEAVE_CONTACT_ID => Some(Self::RequestContact),
            SHARE_CONTACT_ID => Some(Self::ShareContact),
            id => id
                .strip_prefix(FAQ_PREFIX)
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| (1..=FAQ_TOPICS.len()).contains(n))
                .map(Self::FaqAnswer),
        }
    }

    /// Custom id for the nth FAQ button
    pub fn faq_custom_id(number: usize) -> String {
        format!("{FAQ_PREFIX}{number}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands() {
        assert_eq!(MenuAction::from_command("start"), Some(MenuAction::Start));
        assert_eq!(MenuAction::from_command("/about"), Some(MenuAction::About));
        assert_eq!(MenuAction::from_command("faq"), Some(MenuAction::FaqMenu));
        assert_eq!(
            MenuAction::from_command("contact"),
            Some(MenuAction::RequestContact)
        );
        assert_eq!(MenuAction::from_command("ping"), None);
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(MenuAction::from_custom_id("back"), Some(MenuAction::Start));
        assert_eq!(
            MenuAction::from_custom_id("leave_contact"),
            Some(MenuAction::RequestContact)
        );
        assert_eq!(
            MenuAction::from_custom_id("share_contact"),
            Some(MenuAction::ShareContact)
        );
        assert_eq!(
            MenuAction::from_custom_id("faq_3"),
            Some(MenuAction::FaqAnswer(3))
        );
    }

    #[test]
    fn test_faq_ids_out_of_range() {
        assert_eq!(MenuAction::from_custom_id("faq_0"), None);
        assert_eq!(MenuAction::from_custom_id("faq_6"), None);
        assert_eq!(MenuAction::from_custom_id("faq_x"), None);
        assert_eq!(MenuAction::from_custom_id("unknown_button"), None);
    }

    #[test]
    fn test_faq_custom_id_round_trips() {
        for n in 1..=FAQ_TOPICS.len() {
            let id = MenuAction::faq_custom_id(n);
            assert_eq!(MenuAction::from_custom_id(&id), Some(MenuAction::FaqAnswer(n)));
        }
    }
}
