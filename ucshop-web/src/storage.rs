//! `localStorage` adapter for the purchase history.
use crate::dom;
use ucshop_core::RecordStorage;

/// Record storage backed by the browser's `localStorage`.
///
/// Off the browser every call reports [`BrowserStorageError::Unavailable`],
/// so a server-rendered page starts with an empty history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("{0}")]
    Unavailable(#[from] dom::DomError),
    #[error("localStorage rejected {op}: {message}")]
    Rejected { op: &'static str, message: String },
    #[error("stored value is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

fn storage() -> Result<web_sys::Storage, BrowserStorageError> {
    Ok(dom::local_storage()?)
}

fn rejected(op: &'static str) -> impl FnOnce(wasm_bindgen::JsValue) -> BrowserStorageError {
    move |e| BrowserStorageError::Rejected {
        op,
        message: dom::js_error_message(&e),
    }
}

impl RecordStorage for BrowserStorage {
    type Error = BrowserStorageError;

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, Self::Error> {
        let value = storage()?.get_item(key).map_err(rejected("read"))?;
        Ok(value.map(String::into_bytes))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), Self::Error> {
        let text = String::from_utf8(value.to_vec())?;
        storage()?.set_item(key, &text).map_err(rejected("write"))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        storage()?.remove_item(key).map_err(rejected("remove"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucshop_core::{HISTORY_KEY, LoadIssue, PurchaseHistory};

    #[test]
    fn host_storage_is_unavailable() {
        assert!(matches!(
            BrowserStorage.get(HISTORY_KEY),
            Err(BrowserStorageError::Unavailable(_))
        ));
    }

    #[test]
    fn host_history_loads_empty_with_issue() {
        let history = PurchaseHistory::load(BrowserStorage);
        assert!(history.is_empty());
        assert!(matches!(
            history.load_issue(),
            Some(LoadIssue::Unreadable(_))
        ));
    }
}
