use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;
use crate::logic::SessionPlan;

pub mod catalog;
pub mod checkout;
pub mod smoke;
pub mod validation;

/// Time the page gets to re-render after a DOM interaction.
const SETTLE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub seed: u64,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SessionPlan,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, plan: SessionPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Scenario that only exercises the checkout logic.
#[derive(Debug, Clone)]
pub struct LogicScenario {
    name: &'static str,
    plan: SessionPlan,
}

impl LogicScenario {
    #[must_use]
    pub const fn new(name: &'static str, plan: SessionPlan) -> Self {
        Self { name, plan }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser implementation", self.name)
    }
}

impl CombinedScenario for LogicScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.plan.clone()))
    }
}

/// Load the storefront with the bridge attached and an empty history.
pub async fn open_storefront(driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
    driver.goto(&ctx.base_url).await?;
    driver
        .find(By::Css("#catalog"))
        .await
        .context("catalog section not rendered")?;
    ctx.bridge.ensure_available().await?;
    ctx.bridge.reset().await?;
    settle().await;
    let state = ctx.bridge.state().await?;
    anyhow::ensure!(
        state.history.is_empty() && state.load_issue.is_none(),
        "reset left {} records (load issue: {:?})",
        state.history.len(),
        state.load_issue
    );
    Ok(())
}

/// Click the buy button of `package_id` and type `player_id` into the dialog.
pub async fn fill_purchase_form(driver: &WebDriver, package_id: u32, player_id: &str) -> Result<()> {
    driver
        .find(By::Css(format!("button[data-package='{package_id}']")))
        .await
        .with_context(|| format!("buy button for package {package_id}"))?
        .click()
        .await?;
    let input = driver
        .find(By::Id("player-id"))
        .await
        .context("purchase dialog did not open")?;
    input.clear().await?;
    input.send_keys(player_id).await?;
    Ok(())
}

pub async fn submit_purchase(driver: &WebDriver) -> Result<()> {
    driver.find(By::Id("purchase-submit")).await?.click().await?;
    settle().await;
    Ok(())
}

async fn settle() {
    tokio::time::sleep(SETTLE).await;
}

const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", "Smoke Test"),
    ("validation", "Player Id Validation"),
    ("redirect", "DonationAlerts Redirect"),
    ("history-totals", "History Order and Totals"),
    ("catalog-integrity", "Catalog Integrity"),
    ("resubmission", "Repeated Submission"),
    ("storage-faults", "Corrupt and Read-only Storage"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "validation" | "invalid-id" => Some(Box::new(validation::ValidationScenario)),
        "redirect" | "donationalerts" => Some(Box::new(checkout::redirect_scenario())),
        "history-totals" | "totals" => Some(Box::new(checkout::history_totals_scenario())),
        "catalog-integrity" | "catalog" => Some(Box::new(catalog::catalog_integrity_scenario())),
        "resubmission" | "double-submit" => Some(Box::new(checkout::resubmission_scenario())),
        "storage-faults" | "storage" => Some(Box::new(checkout::storage_faults_scenario())),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}
