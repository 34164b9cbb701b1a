use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use thirtyfour::prelude::*;
use ucshop_core::{CheckoutState, PurchaseRecord};

/// Page state as reported by `window.__ucshopTest.state()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BridgeState {
    pub view: CheckoutState,
    pub history: Vec<PurchaseRecord>,
    pub total: u64,
    pub load_issue: Option<String>,
    pub form_error: Option<Value>,
    pub toast: Option<String>,
}

impl BridgeState {
    /// `kind` tag of the inline form error, if any.
    #[must_use]
    pub fn form_error_kind(&self) -> Option<&str> {
        self.form_error
            .as_ref()
            .and_then(|notice| notice.get("kind"))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__ucshopTest", vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("__ucshopTest is not available. Did you pass ?test=1 in the base URL?");
        }
        Ok(())
    }

    /// Clear the stored history and close every dialog.
    pub async fn reset(&self) -> Result<()> {
        self.driver
            .execute("window.__ucshopTest.reset()", vec![])
            .await
            .context("calling __ucshopTest.reset")?;
        Ok(())
    }

    pub async fn state(&self) -> Result<BridgeState> {
        let result = self
            .driver
            .execute("return window.__ucshopTest.state()", vec![])
            .await?;
        parse_state(result.json().clone())
    }
}

fn parse_state(value: Value) -> Result<BridgeState> {
    serde_json::from_value(value).context("parsing bridge state")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use ucshop_core::PurchaseStatus;

    #[test]
    fn parses_snapshot_with_history() {
        let state = parse_state(json!({
            "view": {
                "selected_package": 2,
                "player_id": "",
                "payment_method": "sberbank",
                "purchase_open": false,
                "history_open": false
            },
            "history": [{
                "id": "1720000000000",
                "date": "2024-07-03T09:46:40.000Z",
                "amount": 325,
                "price": 300,
                "playerId": "5123456",
                "paymentMethod": "Карта Сбербанк",
                "status": "completed"
            }],
            "total": 300,
            "loadIssue": null,
            "formError": null,
            "toast": "Покупка 325 UC успешно оформлена"
        }))
        .unwrap();
        assert_eq!(state.view.selected_package, Some(2));
        assert_eq!(state.history[0].status, PurchaseStatus::Completed);
        assert_eq!(state.total, 300);
        assert!(state.form_error_kind().is_none());
    }

    #[test]
    fn missing_fields_default() {
        let state = parse_state(json!({
            "formError": { "kind": "invalid_player_id", "min_len": 6 }
        }))
        .unwrap();
        assert!(state.history.is_empty());
        assert!(!state.view.purchase_open);
        assert_eq!(state.form_error_kind(), Some("invalid_player_id"));
    }
}
