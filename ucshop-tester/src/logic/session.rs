use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use ucshop_core::{
    Checkout, CheckoutError, CheckoutState, FixedClock, LoadIssue, MIN_PLAYER_ID_LEN,
    MemoryStorage, Package, PaymentMethod, PurchaseHistory, PurchaseRecord, SubmitOutcome,
    find_package, packages,
};

/// Gap between consecutive purchases unless a script holds the clock still.
const PURCHASE_SPACING_MS: i64 = 1_500;

pub type Script = fn(&mut ShopSession) -> Result<()>;
pub type Expectation = fn(&SessionSummary) -> Result<()>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("package {0} is not in the catalog")]
    UnknownPackage(u32),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// What a scenario does with a session and what must hold afterwards.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub script: Script,
    pub expectations: Vec<Expectation>,
}

impl SessionPlan {
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self {
            script,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

/// One customer session against an in-memory store, driven by a seeded RNG.
pub struct ShopSession {
    seed: u64,
    rng: ChaCha8Rng,
    storage: MemoryStorage,
    checkout: Checkout<MemoryStorage, FixedClock>,
    log: Vec<String>,
    outcomes: Vec<SubmitOutcome>,
    rejections: Vec<CheckoutError>,
    reloaded: Option<Vec<PurchaseRecord>>,
}

impl ShopSession {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let storage = MemoryStorage::new();
        let clock = FixedClock::new(session_start(seed));
        let checkout = Checkout::with_clock(PurchaseHistory::load(storage.clone()), clock);
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            storage,
            checkout,
            log: Vec::new(),
            outcomes: Vec::new(),
            rejections: Vec::new(),
            reloaded: None,
        }
    }

    #[must_use]
    pub const fn storage(&self) -> &MemoryStorage {
        &self.storage
    }

    #[must_use]
    pub const fn checkout(&self) -> &Checkout<MemoryStorage, FixedClock> {
        &self.checkout
    }

    pub fn note(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    pub fn random_package(&mut self) -> Package {
        packages()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(packages()[0])
    }

    /// Any method that settles on the spot.
    pub fn random_direct_method(&mut self) -> PaymentMethod {
        let direct: Vec<PaymentMethod> = PaymentMethod::ALL
            .into_iter()
            .filter(|m| !m.is_redirect())
            .collect();
        direct
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
    }

    pub fn random_method(&mut self) -> PaymentMethod {
        PaymentMethod::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
    }

    pub fn random_count(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.rng.gen_range(range)
    }

    /// Numeric id of a plausible length, sometimes padded with whitespace.
    pub fn random_player_id(&mut self) -> String {
        let len = self.rng.gen_range(MIN_PLAYER_ID_LEN..=12);
        let digits: String = (0..len)
            .map(|i| {
                let low = u8::from(i == 0);
                char::from(b'0' + self.rng.gen_range(low..=9))
            })
            .collect();
        if self.rng.gen_bool(0.2) {
            format!("  {digits} ")
        } else {
            digits
        }
    }

    /// Id that is too short once trimmed.
    pub fn random_short_player_id(&mut self) -> String {
        let len = self.rng.gen_range(0..MIN_PLAYER_ID_LEN);
        let core: String = (0..len)
            .map(|_| char::from(self.rng.gen_range(b'a'..=b'z')))
            .collect();
        let pad = " ".repeat(self.rng.gen_range(0..4));
        format!("{pad}{core}{pad}")
    }

    /// Pick `package_id`, fill the form and submit it.
    ///
    /// # Errors
    ///
    /// Returns the checkout rejection, which is also kept for the summary.
    pub fn purchase(
        &mut self,
        package_id: u32,
        player_id: &str,
        method: PaymentMethod,
    ) -> Result<SubmitOutcome, SessionError> {
        let package = find_package(package_id).ok_or(SessionError::UnknownPackage(package_id))?;
        self.checkout.select_package(package);
        self.fill_and_submit(player_id, method)
    }

    /// Fill the form for whatever package is selected and submit it.
    ///
    /// # Errors
    ///
    /// Returns the checkout rejection, which is also kept for the summary.
    pub fn fill_and_submit(
        &mut self,
        player_id: &str,
        method: PaymentMethod,
    ) -> Result<SubmitOutcome, SessionError> {
        self.checkout.set_player_id(player_id);
        self.checkout.set_payment_method(method);
        match self.checkout.submit() {
            Ok(outcome) => {
                self.note(format!(
                    "bought {} UC for {} via {} as '{}' -> {} ({})",
                    outcome.record.amount,
                    outcome.record.price,
                    method.key(),
                    outcome.record.player_id,
                    outcome.record.id,
                    outcome.record.status.key()
                ));
                self.outcomes.push(outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                self.note(format!("rejected '{player_id}' via {}: {err}", method.key()));
                self.rejections.push(err.clone());
                Err(err.into())
            }
        }
    }

    /// Move the session clock forward between purchases.
    pub fn wait(&mut self) {
        self.checkout.clock().advance_millis(PURCHASE_SPACING_MS);
    }

    /// Replace the checkout with one loaded from the current store, keeping
    /// the clock. Form state and dialogs start over.
    pub fn restart(&mut self) {
        let clock = self.checkout.clock().clone();
        self.checkout = Checkout::with_clock(PurchaseHistory::load(self.storage.clone()), clock);
        self.note(format!(
            "restarted with {} stored records",
            self.checkout.history().len()
        ));
    }

    /// Read the store again as a fresh page load would.
    pub fn reload(&mut self) {
        let history = PurchaseHistory::load(self.storage.clone());
        self.note(format!("reloaded {} records", history.len()));
        self.reloaded = Some(history.all().to_vec());
    }

    #[must_use]
    pub fn finish(self) -> SessionSummary {
        let history = self.checkout.history();
        SessionSummary {
            seed: self.seed,
            log: self.log,
            outcomes: self.outcomes,
            rejections: self.rejections,
            state: self.checkout.state().clone(),
            history: history.all().to_vec(),
            total: history.total(),
            load_issue: history.load_issue().cloned(),
            reloaded: self.reloaded,
            stored: self.storage.raw(ucshop_core::HISTORY_KEY),
        }
    }
}

/// Everything a scenario expectation can inspect after the script ran.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub seed: u64,
    pub log: Vec<String>,
    pub outcomes: Vec<SubmitOutcome>,
    pub rejections: Vec<CheckoutError>,
    pub state: CheckoutState,
    pub history: Vec<PurchaseRecord>,
    pub total: u64,
    pub load_issue: Option<LoadIssue>,
    pub reloaded: Option<Vec<PurchaseRecord>>,
    pub stored: Option<Vec<u8>>,
}

impl SessionSummary {
    /// Last few session steps, newest last.
    #[must_use]
    pub fn tail(&self, n: usize) -> String {
        if self.log.is_empty() {
            return "no steps recorded".to_string();
        }
        let skip = self.log.len().saturating_sub(n);
        self.log[skip..].join(" | ")
    }
}

/// Runs plans against fresh sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionRunner {
    verbose: bool,
}

impl SessionRunner {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Execute `plan` with `seed`. A script error is returned as-is; the
    /// summary is still produced for the expectations.
    pub fn run_plan(&self, plan: &SessionPlan, seed: u64) -> (SessionSummary, Option<String>) {
        let mut session = ShopSession::new(seed);
        let script_error = (plan.script)(&mut session).err().map(|e| format!("{e:#}"));
        if self.verbose
            && let Some(err) = &script_error
        {
            log::warn!("script for seed {seed} stopped early: {err}");
        }
        (session.finish(), script_error)
    }
}

/// Start of a session's clock; seeds spread sessions over a year of 2024.
fn session_start(seed: u64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH);
    let offset_ms = i64::try_from(seed % 31_536_000_000).unwrap_or(0);
    base + chrono::Duration::milliseconds(offset_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_respect_lengths() {
        let mut session = ShopSession::new(7);
        for _ in 0..50 {
            let id = session.random_player_id();
            assert!(id.trim().chars().count() >= MIN_PLAYER_ID_LEN, "{id:?}");
            let short = session.random_short_player_id();
            assert!(short.trim().chars().count() < MIN_PLAYER_ID_LEN, "{short:?}");
        }
    }

    #[test]
    fn same_seed_draws_same_values() {
        let mut a = ShopSession::new(1337);
        let mut b = ShopSession::new(1337);
        assert_eq!(a.random_player_id(), b.random_player_id());
        assert_eq!(a.random_package(), b.random_package());
        assert_eq!(a.random_method(), b.random_method());
    }

    #[test]
    fn direct_methods_never_redirect() {
        let mut session = ShopSession::new(3);
        for _ in 0..30 {
            assert!(!session.random_direct_method().is_redirect());
        }
    }

    #[test]
    fn purchase_and_rejection_are_logged() {
        let mut session = ShopSession::new(11);
        session
            .purchase(2, "5123456", PaymentMethod::Sberbank)
            .expect("valid purchase");
        session.wait();
        let err = session
            .purchase(2, "abc", PaymentMethod::Sberbank)
            .expect_err("short id");
        assert!(matches!(
            err,
            SessionError::Checkout(CheckoutError::InvalidPlayerId { .. })
        ));
        let summary = session.finish();
        assert_eq!(summary.outcomes.len(), 1);
        assert_eq!(summary.rejections.len(), 1);
        assert_eq!(summary.history.len(), 1);
        assert_eq!(summary.total, 300);
        assert!(summary.stored.is_some());
        assert!(summary.tail(1).contains("rejected"));
    }

    #[test]
    fn unknown_package_is_reported() {
        let mut session = ShopSession::new(5);
        let err = session
            .purchase(99, "5123456", PaymentMethod::Sbp)
            .expect_err("unknown package");
        assert!(matches!(err, SessionError::UnknownPackage(99)));
    }

    #[test]
    fn reload_reads_shared_storage() {
        let mut session = ShopSession::new(21);
        session
            .purchase(1, "7000001", PaymentMethod::DonationAlerts)
            .expect("redirect purchase");
        session.reload();
        let summary = session.finish();
        assert_eq!(summary.reloaded.as_deref(), Some(summary.history.as_slice()));
    }

    #[test]
    fn run_plan_keeps_script_errors() {
        fn failing(_: &mut ShopSession) -> Result<()> {
            anyhow::bail!("boom")
        }
        let (summary, err) = SessionRunner::new(false).run_plan(&SessionPlan::new(failing), 4);
        assert_eq!(summary.seed, 4);
        assert_eq!(err.as_deref(), Some("boom"));
    }
}
