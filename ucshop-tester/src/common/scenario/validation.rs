use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario, fill_purchase_form,
    open_storefront, submit_purchase,
};
use crate::logic::{SessionPlan, SessionSummary, ShopSession};
use ucshop_core::{CheckoutError, MIN_PLAYER_ID_LEN};

/// Short ids tried per session after the empty-selection attempt.
const SHORT_ATTEMPTS: usize = 3;

pub struct ValidationScenario;

impl ValidationScenario {
    fn plan() -> SessionPlan {
        SessionPlan::new(validation_script).with_expectation(validation_expectation)
    }
}

fn validation_script(session: &mut ShopSession) -> Result<()> {
    let method = session.random_method();
    let player_id = session.random_player_id();
    if session.fill_and_submit(&player_id, method).is_ok() {
        anyhow::bail!("submit without a package was accepted");
    }

    for _ in 0..SHORT_ATTEMPTS {
        let package = session.random_package();
        let short = session.random_short_player_id();
        if session.purchase(package.id, &short, method).is_ok() {
            anyhow::bail!("short id {short:?} was accepted");
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for ValidationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        open_storefront(driver, ctx).await?;
        let (package, short) = {
            let mut session = ShopSession::new(ctx.seed);
            let package = session.random_package();
            let short = session.random_short_player_id();
            (package, short)
        };

        fill_purchase_form(driver, package.id, &short).await?;
        submit_purchase(driver).await?;

        let state = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("  📊 State after '{short}': {state:?}");
        }
        anyhow::ensure!(state.history.is_empty(), "short id created a record");
        anyhow::ensure!(state.view.purchase_open, "dialog should stay open");
        anyhow::ensure!(
            state.form_error_kind() == Some("invalid_player_id"),
            "expected invalid_player_id, got {:?}",
            state.form_error
        );

        let message = driver
            .find(By::Id("purchase-player-id-error"))
            .await
            .context("inline error not shown")?;
        let text = message.text().await?;
        anyhow::ensure!(
            text.contains(&MIN_PLAYER_ID_LEN.to_string()),
            "inline error should mention the minimum length: {text}"
        );
        Ok(())
    }
}

impl CombinedScenario for ValidationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Player Id Validation", Self::plan()))
    }
}

fn validation_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        summary.history.is_empty() && summary.outcomes.is_empty(),
        "no record may be created, got {}",
        summary.history.len()
    );
    anyhow::ensure!(summary.stored.is_none(), "storage was written");
    anyhow::ensure!(
        summary.rejections.len() == SHORT_ATTEMPTS + 1,
        "expected {} rejections, got {}",
        SHORT_ATTEMPTS + 1,
        summary.rejections.len()
    );
    anyhow::ensure!(
        matches!(summary.rejections[0], CheckoutError::NoPackageSelected),
        "first attempt should fail for the missing package: {}",
        summary.rejections[0]
    );
    anyhow::ensure!(
        summary.rejections[1..].iter().all(|err| matches!(
            err,
            CheckoutError::InvalidPlayerId { min_len } if *min_len == MIN_PLAYER_ID_LEN
        )),
        "short ids should fail validation"
    );
    anyhow::ensure!(summary.state.purchase_open, "dialog should stay open");
    Ok(())
}
