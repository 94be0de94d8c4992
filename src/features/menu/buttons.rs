//! # Menu Button Components
//!
//! Button builders for the main menu, FAQ menu, contact request and reminder.

use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;

use super::action::{MenuAction, ABOUT_ID, BACK_ID, FAQ_ID, LEAVE_CONTACT_ID, SHARE_CONTACT_ID};
use super::content::FAQ_TOPICS;

const LEAVE_CONTACT_LABEL: &str = "🚀 Оставить заявку";

/// Main menu: leave a request on its own row, FAQ and About below
pub fn main_menu() -> CreateComponents {
    let mut components = CreateComponents::default();

    components
        .create_action_row(|row| {
            row.create_button(|btn| {
                btn.custom_id(LEAVE_CONTACT_ID)
                    .label(LEAVE_CONTACT_LABEL)
                    .style(ButtonStyle::Primary)
            })
        })
        .create_action_row(|row| {
            row.create_button(|btn| {
                btn.custom_id(FAQ_ID)
                    .label("❓ FAQ")
                    .style(ButtonStyle::Secondary)
            })
            .create_button(|btn| {
                btn.custom_id(ABOUT_ID)
                    .label("ℹ️ О компании")
                    .style(ButtonStyle::Secondary)
            })
        });

    components
}

/// Single "back" button returning to the welcome screen
pub fn back_menu() -> CreateComponents {
    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_button(|btn| {
            btn.custom_id(BACK_ID)
                .label("⬅️ Назад")
                .style(ButtonStyle::Secondary)
        })
    });
    components
}

/// FAQ topics two per row, "back" appended to the last row
///
/// Discord allows at most five action rows per message.
pub fn faq_menu() -> CreateComponents {
    let mut components = CreateComponents::default();

    let topics: Vec<(String, &str)> = FAQ_TOPICS
        .iter()
        .enumerate()
        .map(|(idx, topic)| (MenuAction::faq_custom_id(idx + 1), topic.title))
        .collect();

    let mut rows = topics.chunks(2).peekable();
    while let Some(chunk) = rows.next() {
        let is_last = rows.peek().is_none();
        components.create_action_row(|row| {
            for (custom_id, title) in chunk {
                row.create_button(|btn| {
                    btn.custom_id(custom_id)
                        .label(*title)
                        .style(ButtonStyle::Primary)
                });
            }
            if is_last {
                row.create_button(|btn| {
                    btn.custom_id(BACK_ID)
                        .label("⬅️ Назад")
                        .style(ButtonStyle::Secondary)
                });
            }
            row
        });
    }

    components
}

/// Button that opens the contact form
pub fn share_contact_button() -> CreateComponents {
    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_button(|btn| {
            btn.custom_id(SHARE_CONTACT_ID)
                .label("📞 Отправить контакт")
                .style(ButtonStyle::Success)
        })
    });
    components
}

/// Buttons attached to the follow-up reminder
pub fn reminder_buttons() -> CreateComponents {
    let mut components = CreateComponents::default();
    components.create_action_row(|row| {
        row.create_button(|btn| {
            btn.custom_id(LEAVE_CONTACT_ID)
                .label(LEAVE_CONTACT_LABEL)
                .style(ButtonStyle::Primary)
        })
    });
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(components: &CreateComponents) -> Vec<String> {
        components.0.iter().map(|row| row.to_string()).collect()
    }

    #[test]
    fn test_main_menu_layout() {
        let rows = rendered(&main_menu());
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains(LEAVE_CONTACT_ID));
        assert!(rows[1].contains(FAQ_ID));
        assert!(rows[1].contains(ABOUT_ID));
    }

    #[test]
    fn test_faq_menu_fits_discord_row_limit() {
        let rows = rendered(&faq_menu());
        assert!(rows.len() <= 5);
        for n in 1..=FAQ_TOPICS.len() {
            let id = MenuAction::faq_custom_id(n);
            assert!(rows.iter().any(|row| row.contains(&format!("\"{id}\""))));
        }
        assert!(rows.last().map(|r| r.contains(BACK_ID)).unwrap_or(false));
    }

    #[test]
    fn test_reminder_offers_leave_contact() {
        let rows = rendered(&reminder_buttons());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains(LEAVE_CONTACT_ID));
    }

    #[test]
    fn test_share_contact_button() {
        let rows = rendered(&share_contact_button());
        assert!(rows[0].contains(SHARE_CONTACT_ID));
    }
}
