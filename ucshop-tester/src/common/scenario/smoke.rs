use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, fill_purchase_form,
    open_storefront, submit_purchase,
};
use crate::logic::{SessionPlan, SessionSummary, ShopSession};
use ucshop_core::{Package, PaymentMethod, PurchaseStatus};

/// Millisecond timestamp, optionally with a collision suffix.
#[must_use]
pub fn is_record_id(id: &str) -> bool {
    regex::Regex::new(r"^\d{13}(-\d+)?$")
        .map(|re| re.is_match(id))
        .unwrap_or(false)
}

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> SessionPlan {
        SessionPlan::new(smoke_script).with_expectation(smoke_expectation)
    }
}

/// Package and player id a seed stands for, shared by both test modes.
pub fn pick_for_seed(seed: u64) -> (Package, String) {
    let mut session = ShopSession::new(seed);
    let package = session.random_package();
    let player_id = session.random_player_id();
    (package, player_id)
}

fn smoke_script(session: &mut ShopSession) -> Result<()> {
    let package = session.random_package();
    let player_id = session.random_player_id();
    let method = session.random_direct_method();
    session.purchase(package.id, &player_id, method)?;
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open_storefront(driver, ctx).await?;
        let (package, player_id) = pick_for_seed(ctx.seed);

        fill_purchase_form(driver, package.id, &player_id).await?;
        if ctx.verbose {
            println!("  🛒 Package {} selected for '{player_id}'", package.id);
        }
        submit_purchase(driver).await?;

        let state = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("  📊 Final state: {state:?}");
        }

        anyhow::ensure!(!state.view.purchase_open, "dialog should close after purchase");
        anyhow::ensure!(state.toast.is_some(), "no confirmation toast shown");
        let record = state.history.first().context("no record after purchase")?;
        anyhow::ensure!(
            state.history.len() == 1,
            "expected one record, got {}",
            state.history.len()
        );
        anyhow::ensure!(
            record.amount == package.amount && record.price == package.price,
            "record {} UC / {} does not match package {}",
            record.amount,
            record.price,
            package.id
        );
        anyhow::ensure!(record.player_id == player_id.trim(), "player id not trimmed");
        anyhow::ensure!(
            record.status == PurchaseStatus::Completed,
            "default method should complete immediately"
        );
        anyhow::ensure!(
            state.total == u64::from(package.price),
            "total {} != {}",
            state.total,
            package.price
        );

        let badge = driver
            .find(By::Css("[data-testid='history-count']"))
            .await
            .context("history badge missing")?;
        anyhow::ensure!(badge.text().await?.trim() == "1", "history badge should read 1");
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", Self::plan()))
    }
}

pub fn smoke_expectation(summary: &SessionSummary) -> Result<()> {
    let outcome = summary
        .outcomes
        .first()
        .context("smoke purchase did not go through")?;
    let record = summary.history.first().context("history is empty")?;

    anyhow::ensure!(
        summary.history.len() == 1,
        "expected one record, got {}",
        summary.history.len()
    );
    anyhow::ensure!(record == &outcome.record, "stored record differs from outcome");
    anyhow::ensure!(
        is_record_id(&record.id),
        "record id {} is not a millisecond timestamp",
        record.id
    );
    anyhow::ensure!(
        record.status == PurchaseStatus::Completed,
        "direct payment should complete, got {}",
        record.status.key()
    );
    anyhow::ensure!(outcome.external.is_none(), "direct payment must not redirect");
    anyhow::ensure!(outcome.persisted, "record was not persisted");
    anyhow::ensure!(
        summary.total == u64::from(record.price),
        "total {} != price {}",
        summary.total,
        record.price
    );
    anyhow::ensure!(!summary.state.purchase_open, "dialog should close");
    anyhow::ensure!(
        summary.state.player_id.is_empty()
            && summary.state.payment_method == PaymentMethod::default(),
        "form should reset after purchase"
    );
    anyhow::ensure!(summary.stored.is_some(), "nothing written to storage");
    anyhow::ensure!(
        summary.load_issue.is_none(),
        "fresh store reported {:?}",
        summary.load_issue
    );
    Ok(())
}
