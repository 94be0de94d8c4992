//! Menu slash commands: /start, /about, /faq, /contact

use serenity::builder::CreateApplicationCommand;

/// Creates menu commands
pub fn create_commands() -> Vec<CreateApplicationCommand> {
    [
        ("start", "Главное меню"),
        ("about", "О компании Pro-traffic"),
        ("faq", "Частые вопросы"),
        ("contact", "Оставить контакт для связи с менеджером"),
    ]
    .into_iter()
    .map(|(name, description)| {
        CreateApplicationCommand::default()
            .name(name)
            .description(description)
            .to_owned()
    })
    .collect()
}
