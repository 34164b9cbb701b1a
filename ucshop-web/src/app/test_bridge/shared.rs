use serde::Serialize;
use ucshop_core::{Checkout, CheckoutState, Clock, LoadIssue, Notice, PurchaseRecord, RecordStorage};

/// JSON shape returned by `__ucshopTest.state()`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeSnapshot {
    pub view: CheckoutState,
    pub history: Vec<PurchaseRecord>,
    pub total: u64,
    pub load_issue: Option<String>,
    pub form_error: Option<Notice>,
    pub toast: Option<String>,
}

pub fn snapshot_of<S: RecordStorage, C: Clock>(
    checkout: &Checkout<S, C>,
    form_error: Option<&Notice>,
    toast: Option<&str>,
) -> BridgeSnapshot {
    let history = checkout.history();
    BridgeSnapshot {
        view: checkout.state().clone(),
        history: history.all().to_vec(),
        total: history.total(),
        load_issue: history.load_issue().map(|issue| match issue {
            LoadIssue::Unreadable(msg) => format!("unreadable: {msg}"),
            LoadIssue::Corrupt(msg) => format!("corrupt: {msg}"),
        }),
        form_error: form_error.cloned(),
        toast: toast.map(str::to_string),
    }
}
