//! Purchase dialog state and the submit flow
use crate::catalog::{Package, find_package};
use crate::clock::SystemClock;
use crate::history::PurchaseHistory;
use crate::payment::{PaymentMethod, donation_url};
use crate::record::PurchaseRecord;
use crate::{Clock, RecordStorage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest player id accepted at checkout.
pub const MIN_PLAYER_ID_LEN: usize = 6;

/// Transient UI state owned by the storefront screen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutState {
    pub selected_package: Option<u32>,
    pub player_id: String,
    pub payment_method: PaymentMethod,
    pub purchase_open: bool,
    pub history_open: bool,
}

impl CheckoutState {
    #[must_use]
    pub fn selected(&self) -> Option<&'static Package> {
        self.selected_package.and_then(find_package)
    }

    fn reset_form(&mut self) {
        self.player_id.clear();
        self.payment_method = PaymentMethod::default();
    }
}

/// User-facing message produced by the flow. The view layer picks the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    InvalidPlayerId { min_len: usize },
    NoPackageSelected,
    PurchaseCompleted { amount: u32 },
    AwaitingPayment { amount: u32 },
}

impl Notice {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::InvalidPlayerId { .. } | Self::NoPackageSelected)
    }
}

/// Side effect the caller must perform outside the controller.
///
/// Nothing reports back whether it happened; a record created alongside it
/// stays `pending`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExternalAction {
    OpenPaymentPage { url: String, record_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: PurchaseRecord,
    pub notice: Notice,
    pub external: Option<ExternalAction>,
    /// False when the record could only be kept in memory
    pub persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("no package selected")]
    NoPackageSelected,
    #[error("unknown package id {0}")]
    UnknownPackage(u32),
    #[error("player id must be at least {min_len} characters")]
    InvalidPlayerId { min_len: usize },
}

impl CheckoutError {
    /// Notice to show the customer; the dialog stays open.
    #[must_use]
    pub const fn notice(&self) -> Notice {
        match self {
            Self::NoPackageSelected | Self::UnknownPackage(_) => Notice::NoPackageSelected,
            Self::InvalidPlayerId { min_len } => Notice::InvalidPlayerId { min_len: *min_len },
        }
    }
}

/// Trim `raw` and check it is long enough to be a player id.
///
/// Length counts characters, not bytes. No other format check is applied.
///
/// # Errors
///
/// Returns [`CheckoutError::InvalidPlayerId`] when the trimmed id is shorter
/// than [`MIN_PLAYER_ID_LEN`].
pub fn validate_player_id(raw: &str) -> Result<&str, CheckoutError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_PLAYER_ID_LEN {
        return Err(CheckoutError::InvalidPlayerId {
            min_len: MIN_PLAYER_ID_LEN,
        });
    }
    Ok(trimmed)
}

/// Checkout controller: view state plus the history it appends to.
#[derive(Debug, Clone)]
pub struct Checkout<S, C = SystemClock> {
    state: CheckoutState,
    history: PurchaseHistory<S>,
    clock: C,
}

impl<S: RecordStorage> Checkout<S, SystemClock> {
    /// Load the stored history and start with closed dialogs.
    pub fn load(storage: S) -> Self {
        Self::with_clock(PurchaseHistory::load(storage), SystemClock)
    }
}

impl<S: RecordStorage, C: Clock> Checkout<S, C> {
    pub fn with_clock(history: PurchaseHistory<S>, clock: C) -> Self {
        Self {
            state: CheckoutState::default(),
            history,
            clock,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    #[must_use]
    pub const fn history(&self) -> &PurchaseHistory<S> {
        &self.history
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Remember `package` and open the purchase dialog.
    pub fn select_package(&mut self, package: &Package) {
        self.state.selected_package = Some(package.id);
        self.state.purchase_open = true;
    }

    pub fn set_player_id(&mut self, player_id: impl Into<String>) {
        self.state.player_id = player_id.into();
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.state.payment_method = method;
    }

    /// Close the purchase dialog without submitting. Form fields are kept.
    pub fn close_purchase(&mut self) {
        self.state.purchase_open = false;
    }

    pub fn open_history(&mut self) {
        self.state.history_open = true;
    }

    pub fn close_history(&mut self) {
        self.state.history_open = false;
    }

    /// Validate the form and record the purchase.
    ///
    /// On success the record is prepended to the history, the dialog closes
    /// and the form resets. The redirect method also yields an
    /// [`ExternalAction`] for the caller to perform.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid package is selected or the player id is
    /// too short; nothing changes in that case.
    pub fn submit(&mut self) -> Result<SubmitOutcome, CheckoutError> {
        let package_id = self
            .state
            .selected_package
            .ok_or(CheckoutError::NoPackageSelected)?;
        let package = find_package(package_id).ok_or(CheckoutError::UnknownPackage(package_id))?;
        let player_id = validate_player_id(&self.state.player_id)?.to_string();
        let method = self.state.payment_method;

        let now = self.clock.now();
        let id = self.history.next_id(now);
        let record = PurchaseRecord::new(id, now, package, &player_id, method);

        let external = method
            .is_redirect()
            .then(|| ExternalAction::OpenPaymentPage {
                url: donation_url(package, &player_id),
                record_id: record.id.clone(),
            });
        let notice = if method.is_redirect() {
            Notice::AwaitingPayment {
                amount: package.amount,
            }
        } else {
            Notice::PurchaseCompleted {
                amount: package.amount,
            }
        };

        let persisted = self.history.append(record.clone()).is_ok();

        self.state.purchase_open = false;
        self.state.reset_form();

        Ok(SubmitOutcome {
            record,
            notice,
            external,
            persisted,
        })
    }

    /// Empty the history and close both dialogs.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored history cannot be removed.
    pub fn reset(&mut self) -> Result<(), crate::history::HistoryError> {
        self.state = CheckoutState::default();
        self.history.clear()
    }
}
