//! Purchase records as persisted in the browser
use crate::catalog::Package;
use crate::payment::PaymentMethod;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Settlement state of a purchase.
///
/// Nothing ever moves a record out of its initial status; `Failed` is only
/// accepted when reading existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Completed,
    Pending,
    Failed,
}

impl PurchaseStatus {
    /// Initial status for a purchase paid with `method`.
    #[must_use]
    pub const fn for_method(method: PaymentMethod) -> Self {
        if method.is_redirect() {
            Self::Pending
        } else {
            Self::Completed
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

/// One submitted purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: String,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
    pub amount: u32,
    pub price: u32,
    pub player_id: String,
    /// Display label of the payment method, not its key
    pub payment_method: String,
    pub status: PurchaseStatus,
}

impl PurchaseRecord {
    /// Build the record for `package` bought by `player_id` at `at`.
    ///
    /// The timestamp is truncated to milliseconds so that the stored form
    /// round-trips exactly.
    #[must_use]
    pub fn new(
        id: String,
        at: DateTime<Utc>,
        package: &Package,
        player_id: &str,
        method: PaymentMethod,
    ) -> Self {
        Self {
            id,
            date: at.trunc_subsecs(3),
            amount: package.amount,
            price: package.price,
            player_id: player_id.to_string(),
            payment_method: method.label().to_string(),
            status: PurchaseStatus::for_method(method),
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
