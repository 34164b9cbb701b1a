//! Checkout payment methods and the external DonationAlerts page
use crate::catalog::Package;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Base URL of the external confirmation page for [`PaymentMethod::DonationAlerts`].
pub const DONATION_ALERTS_URL: &str = "https://www.donationalerts.com/r/ucshop";

/// Payment method offered in the purchase dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Sberbank,
    Tinkoff,
    Sbp,
    Crypto,
    DonationAlerts,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl PaymentMethod {
    pub const ALL: [Self; 5] = [
        Self::Sberbank,
        Self::Tinkoff,
        Self::Sbp,
        Self::Crypto,
        Self::DonationAlerts,
    ];

    /// Internal key, stable across releases.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sberbank => "sberbank",
            Self::Tinkoff => "tinkoff",
            Self::Sbp => "sbp",
            Self::Crypto => "crypto",
            Self::DonationAlerts => "donationalerts",
        }
    }

    /// Display label stored on purchase records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sberbank => "Карта Сбербанк",
            Self::Tinkoff => "Карта Тинькофф",
            Self::Sbp => "СБП",
            Self::Crypto => "Криптовалюта",
            Self::DonationAlerts => "DonationAlerts",
        }
    }

    /// Whether paying sends the customer to an external page.
    #[must_use]
    pub const fn is_redirect(self) -> bool {
        matches!(self, Self::DonationAlerts)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

/// Build the DonationAlerts URL for a package bought for `player_id`.
///
/// Carries the price as `amount`, a human-readable `message` and the raw
/// `player_id`. No token is attached; confirmation happens out of band.
#[must_use]
pub fn donation_url(package: &Package, player_id: &str) -> String {
    let message = format!("Покупка {} UC для игрока {player_id}", package.amount);
    format!(
        "{DONATION_ALERTS_URL}?amount={}&message={}&player_id={}",
        package.price,
        percent_encode(&message),
        percent_encode(player_id)
    )
}

/// Percent-encode a query value byte by byte, leaving RFC 3986 unreserved characters.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_package;

    #[test]
    fn labels_match_lookup_table() {
        assert_eq!(PaymentMethod::Sberbank.label(), "Карта Сбербанк");
        assert_eq!(PaymentMethod::DonationAlerts.label(), "DonationAlerts");
        assert_eq!(PaymentMethod::ALL.len(), 5);
    }

    #[test]
    fn only_donation_alerts_redirects() {
        let redirecting: Vec<_> = PaymentMethod::ALL
            .into_iter()
            .filter(|m| m.is_redirect())
            .collect();
        assert_eq!(redirecting, vec![PaymentMethod::DonationAlerts]);
    }

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!(
            "DonationAlerts".parse::<PaymentMethod>(),
            Ok(PaymentMethod::DonationAlerts)
        );
        assert_eq!(" sbp ".parse::<PaymentMethod>(), Ok(PaymentMethod::Sbp));
        assert_eq!(
            "paypal".parse::<PaymentMethod>(),
            Err(UnknownPaymentMethod("paypal".to_string()))
        );
    }

    #[test]
    fn serde_uses_internal_keys() {
        let json = serde_json::to_string(&PaymentMethod::DonationAlerts).unwrap();
        assert_eq!(json, "\"donationalerts\"");
        let back: PaymentMethod = serde_json::from_str("\"tinkoff\"").unwrap();
        assert_eq!(back, PaymentMethod::Tinkoff);
    }

    #[test]
    fn donation_url_embeds_amount_and_player() {
        let pkg = find_package(1).unwrap();
        let url = donation_url(pkg, "7000001");
        assert!(url.starts_with(DONATION_ALERTS_URL));
        assert!(url.contains("?amount=60&"));
        assert!(url.contains("&player_id=7000001"));
        assert!(!url.contains(' '));
        assert_eq!(
            query_value(&url, "message").as_deref(),
            Some("Покупка 60 UC для игрока 7000001")
        );
        assert_eq!(query_value(&url, "amount").as_deref(), Some("60"));
        assert_eq!(query_value(&url, "player_id").as_deref(), Some("7000001"));
    }

    #[test]
    fn donation_url_message_survives_reserved_player_ids() {
        let pkg = find_package(4).unwrap();
        let url = donation_url(pkg, "id&x=1 #2");
        assert_eq!(
            query_value(&url, "message").as_deref(),
            Some("Покупка 1800 UC для игрока id&x=1 #2")
        );
        assert_eq!(query_value(&url, "player_id").as_deref(), Some("id&x=1 #2"));
    }

    fn query_value(url: &str, name: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))?;
        let bytes = raw.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = std::str::from_utf8(bytes.get(i + 1..i + 3)?).ok()?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).ok()
    }

    #[test]
    fn percent_encoding_covers_utf8_and_reserved() {
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("Ы"), "%D0%AB");
        assert_eq!(percent_encode("safe-_.~"), "safe-_.~");
    }
}
