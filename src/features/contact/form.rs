//! Contact form shown when a user shares their details, and forwarding of
//! the submission to the admin channel.

use anyhow::{Context as _, Result};
use log::info;
use serenity::http::Http;
use serenity::model::application::component::{ActionRowComponent, InputTextStyle};
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::modal::ModalSubmitInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::id::ChannelId;

pub const CONTACT_MODAL_ID: &str = "contact_form";
pub const NAME_INPUT_ID: &str = "contact_name";
pub const CONTACT_INPUT_ID: &str = "contact_value";

/// What the user typed into the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub contact: String,
}

impl ContactSubmission {
    /// Build from `(custom_id, value)` pairs; `None` when the contact field is blank
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Option<Self> {
        let mut name = None;
        let mut contact = None;

        for (custom_id, value) in fields {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match custom_id {
                NAME_INPUT_ID => name = Some(value.to_string()),
                CONTACT_INPUT_ID => contact = Some(value.to_string()),
                _ => {}
            }
        }

        contact.map(|contact| Self { name, contact })
    }

    /// Read the submitted values out of a modal interaction
    pub fn from_modal(interaction: &ModalSubmitInteraction) -> Option<Self> {
        let fields = interaction
            .data
            .components
            .iter()
            .flat_map(|row| row.components.iter())
            .filter_map(|component| match component {
                ActionRowComponent::InputText(input) => {
                    Some((input.custom_id.as_str(), input.value.as_str()))
                }
                _ => None,
            });
        Self::from_fields(fields)
    }

    /// Message posted to the admin channel
    pub fn admin_message(&self, user_id: u64, user_tag: &str) -> String {
        let name = self.name.as_deref().unwrap_or(user_tag);
        format!(
            "📥 **Новая заявка**\n**Имя:** {name}\n**Контакт:** {}\n**Пользователь:** <@{user_id}> ({user_tag})",
            self.contact
        )
    }
}

/// Respond to a button press with the contact form modal
pub async fn show_contact_form(
    http: &Http,
    interaction: &MessageComponentInteraction,
) -> Result<()> {
    interaction
        .create_interaction_response(http, |response| {
            response
                .kind(InteractionResponseType::Modal)
                .interaction_response_data(|modal| {
                    modal
                        .custom_id(CONTACT_MODAL_ID)
                        .title("Оставить заявку")
                        .components(|c| {
                            c.create_action_row(|row| {
                                row.create_input_text(|input| {
                                    input
                                        .custom_id(NAME_INPUT_ID)
                                        .label("Как к вам обращаться")
                                        .style(InputTextStyle::Short)
                                        .placeholder("Имя")
                                        .required(true)
                                        .max_length(100)
                                })
                            })
                            .create_action_row(|row| {
                                row.create_input_text(|input| {
                                    input
                                        .custom_id(CONTACT_INPUT_ID)
                                        .label("Телефон или другой контакт")
                                        .style(InputTextStyle::Short)
                                        .placeholder("+7 900 000-00-00")
                                        .required(true)
                                        .min_length(3)
                                        .max_length(100)
                                })
                            })
                        })
                })
        })
        .await?;
    Ok(())
}

/// Post the submission to the admin channel
pub async fn forward_to_admin(
    http: &Http,
    admin_channel: ChannelId,
    submission: &ContactSubmission,
    user_id: u64,
    user_tag: &str,
) -> Result<()> {
    admin_channel
        .send_message(http, |m| m.content(submission.admin_message(user_id, user_tag)))
        .await
        .with_context(|| {
            format!("Failed to forward contact of user {user_id} to admin channel {admin_channel}")
        })?;
    info!("📨 Forwarded contact of user {user_id} to admin channel {admin_channel}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_with_name_and_contact() {
        let submission = ContactSubmission::from_fields([
            (NAME_INPUT_ID, " Анна "),
            (CONTACT_INPUT_ID, "+7 900 123-45-67"),
        ]);
        assert_eq!(
            submission,
            Some(ContactSubmission {
                name: Some("Анна".to_string()),
                contact: "+7 900 123-45-67".to_string(),
            })
        );
    }

    #[test]
    fn test_blank_contact_is_rejected() {
        let submission =
            ContactSubmission::from_fields([(NAME_INPUT_ID, "Анна"), (CONTACT_INPUT_ID, "   ")]);
        assert!(submission.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let submission =
            ContactSubmission::from_fields([("other", "x"), (CONTACT_INPUT_ID, "@anna")]);
        assert_eq!(submission.map(|s| s.name), Some(None));
    }

    #[test]
    fn test_admin_message_falls_back_to_user_tag() {
        let submission = ContactSubmission {
            name: None,
            contact: "@anna".to_string(),
        };
        let text = submission.admin_message(42, "anna#0001");
        assert!(text.contains("**Имя:** anna#0001"));
        assert!(text.contains("<@42>"));
        assert!(text.contains("@anna"));
    }
}
