//! Static page content: testimonials, FAQ, about stats, payment categories, contacts.
//!
//! Translatable copy is referenced by key; the web layer resolves the text.
use serde::Serialize;

/// A customer testimonial. Quoted verbatim, never translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: u32,
    pub name: &'static str,
    /// Star rating in `1..=5`
    pub rating: u8,
    pub text: &'static str,
}

impl Review {
    /// First letter of the reviewer's name, used for the avatar.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

pub const REVIEWS: &[Review] = &[
    Review {
        id: 1,
        name: "Александр",
        rating: 5,
        text: "Быстрая доставка UC, всё пришло за 2 минуты!",
    },
    Review {
        id: 2,
        name: "Мария",
        rating: 5,
        text: "Отличные цены и бонусы. Покупаю только здесь!",
    },
    Review {
        id: 3,
        name: "Дмитрий",
        rating: 5,
        text: "Надёжный магазин, оплата криптой прошла без проблем",
    },
];

/// One FAQ accordion item. Question and answer live under `faq.<id>.*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry { id: "delivery" },
    FaqEntry { id: "data" },
    FaqEntry { id: "crypto" },
    FaqEntry { id: "missing" },
    FaqEntry { id: "refund" },
];

/// Headline number in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutStat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const ABOUT_STATS: &[AboutStat] = &[
    AboutStat {
        value: "50K+",
        label_key: "about.stats.clients",
    },
    AboutStat {
        value: "2",
        label_key: "about.stats.delivery",
    },
    AboutStat {
        value: "24/7",
        label_key: "about.stats.support",
    },
    AboutStat {
        value: "100%",
        label_key: "about.stats.guarantee",
    },
];

/// Payment category tile shown on the page (not the checkout methods).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentCategory {
    pub icon: &'static str,
    pub label_key: &'static str,
}

pub const PAYMENT_CATEGORIES: &[PaymentCategory] = &[
    PaymentCategory {
        icon: "💳",
        label_key: "payment.categories.cards",
    },
    PaymentCategory {
        icon: "👛",
        label_key: "payment.categories.wallets",
    },
    PaymentCategory {
        icon: "📱",
        label_key: "payment.categories.mobile",
    },
    PaymentCategory {
        icon: "₿",
        label_key: "payment.categories.crypto",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Telegram,
    WhatsApp,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub title: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

pub const CONTACTS: &[ContactChannel] = &[
    ContactChannel {
        kind: ContactKind::Telegram,
        title: "Telegram",
        handle: "@ucshop_support",
        href: "https://t.me/ucshop_support",
    },
    ContactChannel {
        kind: ContactKind::WhatsApp,
        title: "WhatsApp",
        handle: "+7 900 123-45-67",
        href: "https://wa.me/79001234567",
    },
    ContactChannel {
        kind: ContactKind::Email,
        title: "Email",
        handle: "support@ucshop.ru",
        href: "mailto:support@ucshop.ru",
    },
];

/// Social profiles linked from the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub title: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        title: "Instagram",
        icon: "📷",
        href: "https://instagram.com/ucshop",
    },
    SocialLink {
        title: "YouTube",
        icon: "▶️",
        href: "https://youtube.com/@ucshop",
    },
    SocialLink {
        title: "Telegram",
        icon: "✈️",
        href: "https://t.me/ucshop_support",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_ratings_are_in_range() {
        for review in REVIEWS {
            assert!((1..=5).contains(&review.rating), "review {}", review.id);
            assert!(!review.text.is_empty());
        }
    }

    #[test]
    fn review_initial_handles_cyrillic() {
        assert_eq!(REVIEWS[0].initial(), Some('А'));
    }

    #[test]
    fn faq_ids_are_unique() {
        let mut ids: Vec<&str> = FAQ.iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FAQ.len());
    }

    #[test]
    fn footer_telegram_matches_support_contact() {
        let social = SOCIAL_LINKS
            .iter()
            .find(|link| link.title == "Telegram")
            .expect("telegram link");
        let contact = CONTACTS
            .iter()
            .find(|c| c.kind == ContactKind::Telegram)
            .expect("telegram contact");
        assert_eq!(social.href, contact.href);
        assert_eq!(SOCIAL_LINKS.len(), 3);
    }
}
