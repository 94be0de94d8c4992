//! Static copy shown by the bot.

pub const WELCOME_TEXT: &str = "👋🏻 Добро пожаловать в Pro-traffic.

Чтобы оставить заявку на продвижение,
нажмите кнопку ниже — мы напишем вам в личные сообщения.

Если нужно задать вопрос или связаться с менеджером,
используйте соответствующий раздел.

Без звонков и навязывания.";

pub const ABOUT_TEXT: &str = "Pro-traffic — это новая модель продвижения бизнеса в цифровом маркетинге.

Наша миссия — сделать маркетинг доступным
и экономически оправданным для малого и среднего бизнеса.

Мы убрали всё, что раздувает стоимость услуг:
посредников, лишние роли и уровни согласований.

В проекте участвуют только те,
кто напрямую влияет на результат:
вы, ваш бизнес, ИИ и специалисты,
которые реально работают над продвижением.";

pub const FAQ_HEADER: &str = "Частые вопросы:";

pub const CONTACT_PROMPT: &str = "Нажмите кнопку ниже, чтобы отправить контакт.";

pub const CONTACT_THANKS: &str = "Спасибо. Менеджер свяжется с вами в личных сообщениях.";

pub const CONTACT_MISSING: &str = "Пожалуйста, укажите контакт, по которому менеджер сможет с вами связаться.";

pub const REMINDER_TEXT: &str = "Напоминаем, что вы можете задать вопрос по рекламе.

Если решите оставить заявку —
для вас действует разовая скидка 10%.

Промокод: protraff-2026
Просто укажите его менеджеру при общении.";

pub const UNKNOWN_ACTION: &str = "Неизвестное действие. Попробуйте /start.";

/// One entry of the FAQ menu
pub struct FaqTopic {
    pub title: &'static str,
    pub answer: &'static str,
}

pub static FAQ_TOPICS: [FaqTopic; 5] = [
    FaqTopic {
        title: "Как устроена работа",
        answer: "Мы работаем по компактной и эффективной модели.

В проекте участвуют:
— ИИ для анализа ниши, конкурентов и офферов
— таргетолог как технический специалист
— маркетолог, отвечающий за стратегию и воронку
— ИИ-инструменты для создания и тестирования креативов

Без лишних ролей и посредников.",
    },
    FaqTopic {
        title: "Почему нет менеджеров",
        answer: "Такие роли оправданы при масштабировании крупных команд.

Для малого и среднего бизнеса
они часто увеличивают стоимость,
не влияя напрямую на результат.

Мы выстроили процесс
с прямой и понятной коммуникацией
между бизнесом и специалистами.",
    },
    FaqTopic {
        title: "Почему ИИ, а не дизайнер",
        answer: "ИИ — это рациональный инструмент.

Он позволяет быстрее создавать креативы,
тестировать больше гипотез
и направлять бюджет в рекламу,
а не в содержание штата.",
    },
    FaqTopic {
        title: "Подойдёт ли формат",
        answer: "Формат подойдёт,
если у вас малый или средний бизнес
и нужен понятный запуск рекламы
без перегруженных процессов.",
    },
    FaqTopic {
        title: "Что после заявки",
        answer: "После того как вы оставите контакт,
менеджер свяжется с вами в личных сообщениях.

Мы уточним задачу
и предложим дальнейшие шаги.

Без звонков и навязывания.",
    },
];

/// FAQ topic by 1-based number
pub fn faq_topic(number: usize) -> Option<&'static FaqTopic> {
    number.checked_sub(1).and_then(|idx| FAQ_TOPICS.get(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_topic_lookup_is_one_based() {
        assert_eq!(faq_topic(1).map(|t| t.title), Some("Как устроена работа"));
        assert_eq!(faq_topic(5).map(|t| t.title), Some("Что после заявки"));
        assert!(faq_topic(0).is_none());
        assert!(faq_topic(6).is_none());
    }

    #[test]
    fn test_reminder_mentions_promo_code() {
        assert!(REMINDER_TEXT.contains("protraff-2026"));
        assert!(REMINDER_TEXT.contains("10%"));
    }
}
