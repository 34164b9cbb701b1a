//! Purchase history persisted under a single storage key.
//!
//! The whole list is read once when the page mounts and rewritten on every
//! append. Records are kept most-recent first.
use crate::RecordStorage;
use crate::record::PurchaseRecord;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Storage key holding the serialized record list.
pub const HISTORY_KEY: &str = "ucshop.purchases";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not serialize purchase history: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("could not write purchase history: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a load fell back to an empty history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// The backing store could not be read at all.
    Unreadable(String),
    /// A value was stored but did not parse as a record list.
    Corrupt(String),
}

#[derive(Debug, Clone)]
pub struct PurchaseHistory<S> {
    storage: S,
    records: Vec<PurchaseRecord>,
    load_issue: Option<LoadIssue>,
}

impl<S: RecordStorage> PurchaseHistory<S> {
    /// Read the stored list once.
    ///
    /// A missing key gives an empty history. Unreadable storage and
    /// unparsable data also give an empty history; the cause is logged and
    /// kept in [`Self::load_issue`]. The stored value is left untouched until
    /// the next write.
    pub fn load(storage: S) -> Self {
        let (records, load_issue) = match storage.get(HISTORY_KEY) {
            Ok(None) => (Vec::new(), None),
            Ok(Some(bytes)) => parse_records(&bytes),
            Err(err) => {
                log::warn!("purchase history unreadable, starting empty: {err}");
                (Vec::new(), Some(LoadIssue::Unreadable(err.to_string())))
            }
        };
        Self {
            storage,
            records,
            load_issue,
        }
    }

    /// All records, most recent first.
    #[must_use]
    pub fn all(&self) -> &[PurchaseRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of prices over every record.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.price)).sum()
    }

    #[must_use]
    pub const fn load_issue(&self) -> Option<&LoadIssue> {
        self.load_issue.as_ref()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Time-derived id for a record created at `at`.
    ///
    /// Milliseconds since the epoch; a numeric suffix is added when a record
    /// with that id already exists.
    #[must_use]
    pub fn next_id(&self, at: DateTime<Utc>) -> String {
        let base = at.timestamp_millis().to_string();
        if !self.contains_id(&base) {
            return base;
        }
        (2_u32..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| !self.contains_id(candidate))
            .unwrap_or(base)
    }

    fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Prepend `record` and rewrite the stored list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written. The record stays in
    /// memory for the rest of the session either way.
    pub fn append(&mut self, record: PurchaseRecord) -> Result<(), HistoryError> {
        log::info!(
            "recording purchase {} ({} UC, {} RUB, {})",
            record.id,
            record.amount,
            record.price,
            record.status.key()
        );
        self.records.insert(0, record);
        self.persist().inspect_err(|err| {
            log::error!("purchase history not persisted: {err}");
        })
    }

    /// Drop every record and the stored key.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored key cannot be removed.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.records.clear();
        self.load_issue = None;
        self.storage
            .remove(HISTORY_KEY)
            .map_err(|err| HistoryError::Storage(Box::new(err)))
    }

    fn persist(&self) -> Result<(), HistoryError> {
        let bytes = serde_json::to_vec(&self.records)?;
        self.storage
            .set(HISTORY_KEY, &bytes)
            .map_err(|err| HistoryError::Storage(Box::new(err)))
    }
}

fn parse_records(bytes: &[u8]) -> (Vec<PurchaseRecord>, Option<LoadIssue>) {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return (Vec::new(), None);
    }
    match serde_json::from_slice::<Vec<PurchaseRecord>>(bytes) {
        Ok(records) => (records, None),
        Err(err) => {
            log::warn!("purchase history corrupt, starting empty: {err}");
            (Vec::new(), Some(LoadIssue::Corrupt(err.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_package;
    use crate::payment::PaymentMethod;
    use crate::storage::MemoryStorage;
    use chrono::TimeZone;

    fn record(id: &str, package_id: u32, method: PaymentMethod) -> PurchaseRecord {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        PurchaseRecord::new(
            id.to_string(),
            at,
            find_package(package_id).unwrap(),
            "1234567",
            method,
        )
    }

    #[test]
    fn missing_key_loads_empty_without_issue() {
        let history = PurchaseHistory::load(MemoryStorage::new());
        assert!(history.is_empty());
        assert_eq!(history.total(), 0);
        assert!(history.load_issue().is_none());
    }

    #[test]
    fn append_prepends_and_writes_through() {
        let storage = MemoryStorage::new();
        let mut history = PurchaseHistory::load(storage.clone());
        history.append(record("1", 1, PaymentMethod::Sbp)).unwrap();
        history.append(record("2", 2, PaymentMethod::Crypto)).unwrap();

        assert_eq!(history.all()[0].id, "2");
        assert_eq!(history.all()[1].id, "1");
        let stored: Vec<PurchaseRecord> =
            serde_json::from_slice(&storage.raw(HISTORY_KEY).unwrap()).unwrap();
        assert_eq!(stored, history.all());
    }

    #[test]
    fn total_sums_prices() {
        let mut history = PurchaseHistory::load(MemoryStorage::new());
        history.append(record("1", 1, PaymentMethod::Sbp)).unwrap();
        history.append(record("2", 6, PaymentMethod::Sbp)).unwrap();
        assert_eq!(history.total(), 6060);
    }

    #[test]
    fn corrupt_value_loads_empty_and_is_reported() {
        let storage = MemoryStorage::new();
        storage.seed(HISTORY_KEY, "{not json");
        let history = PurchaseHistory::load(storage.clone());
        assert!(history.is_empty());
        assert!(matches!(history.load_issue(), Some(LoadIssue::Corrupt(_))));
        assert_eq!(storage.raw(HISTORY_KEY).unwrap(), b"{not json".to_vec());
    }

    #[test]
    fn unreadable_storage_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        let history = PurchaseHistory::load(storage);
        assert!(matches!(
            history.load_issue(),
            Some(LoadIssue::Unreadable(_))
        ));
    }

    #[test]
    fn failed_write_keeps_record_in_memory() {
        let storage = MemoryStorage::new();
        let mut history = PurchaseHistory::load(storage.clone());
        storage.set_read_only(true);
        let err = history.append(record("1", 3, PaymentMethod::Sberbank));
        assert!(matches!(err, Err(HistoryError::Storage(_))));
        assert_eq!(history.len(), 1);
        assert!(storage.raw(HISTORY_KEY).is_none());
    }

    #[test]
    fn next_id_avoids_collisions() {
        let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let mut history = PurchaseHistory::load(MemoryStorage::new());
        assert_eq!(history.next_id(at), "1700000000000");
        history.append(record("1700000000000", 1, PaymentMethod::Sbp)).unwrap();
        assert_eq!(history.next_id(at), "1700000000000-2");
        history.append(record("1700000000000-2", 1, PaymentMethod::Sbp)).unwrap();
        assert_eq!(history.next_id(at), "1700000000000-3");
    }

    #[test]
    fn clear_removes_stored_key() {
        let storage = MemoryStorage::new();
        let mut history = PurchaseHistory::load(storage.clone());
        history.append(record("1", 1, PaymentMethod::Sbp)).unwrap();
        history.clear().unwrap();
        assert!(history.is_empty());
        assert!(storage.raw(HISTORY_KEY).is_none());
    }
}
