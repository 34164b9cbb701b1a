//! UC SHOP storefront core
//!
//! Platform-agnostic storefront logic: the package catalog, static page content,
//! purchase records with their persisted history, and the checkout flow.
//! This crate has no browser dependencies; storage and time are injected.

pub mod catalog;
pub mod checkout;
pub mod clock;
pub mod content;
pub mod history;
pub mod payment;
pub mod record;
pub mod storage;

// Re-export commonly used types
pub use catalog::{Package, find_package, packages};
pub use checkout::{
    Checkout, CheckoutError, CheckoutState, ExternalAction, MIN_PLAYER_ID_LEN, Notice,
    SubmitOutcome, validate_player_id,
};
pub use clock::{FixedClock, SystemClock};
pub use content::{
    ABOUT_STATS, AboutStat, CONTACTS, ContactChannel, ContactKind, FAQ, FaqEntry,
    PAYMENT_CATEGORIES, PaymentCategory, REVIEWS, Review, SOCIAL_LINKS, SocialLink,
};
pub use history::{HISTORY_KEY, HistoryError, LoadIssue, PurchaseHistory};
pub use payment::{DONATION_ALERTS_URL, PaymentMethod, UnknownPaymentMethod, donation_url};
pub use record::{PurchaseRecord, PurchaseStatus};
pub use storage::{MemoryStorage, MemoryStorageError};

use chrono::{DateTime, Utc};

/// Trait for abstracting key-value persistence
/// Platform-specific implementations should provide this
pub trait RecordStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), Self::Error>;

    /// Delete the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Source of the current time for record ids and timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
