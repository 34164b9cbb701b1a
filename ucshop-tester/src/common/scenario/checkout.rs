use anyhow::{Context, Result};
use std::collections::HashSet;

use super::LogicScenario;
use crate::logic::{SessionPlan, SessionSummary, ShopSession};
use ucshop_core::{
    DONATION_ALERTS_URL, ExternalAction, HISTORY_KEY, LoadIssue, Notice, PaymentMethod,
    PurchaseStatus,
};

/// Most purchases a history-totals session makes.
const MAX_PURCHASES: usize = 8;

pub fn redirect_scenario() -> LogicScenario {
    LogicScenario::new(
        "DonationAlerts Redirect",
        SessionPlan::new(redirect_script).with_expectation(redirect_expectation),
    )
}

pub fn history_totals_scenario() -> LogicScenario {
    LogicScenario::new(
        "History Order and Totals",
        SessionPlan::new(history_totals_script).with_expectation(history_totals_expectation),
    )
}

pub fn resubmission_scenario() -> LogicScenario {
    LogicScenario::new(
        "Repeated Submission",
        SessionPlan::new(resubmission_script).with_expectation(resubmission_expectation),
    )
}

pub fn storage_faults_scenario() -> LogicScenario {
    LogicScenario::new(
        "Corrupt and Read-only Storage",
        SessionPlan::new(storage_faults_script).with_expectation(storage_faults_expectation),
    )
}

fn redirect_script(session: &mut ShopSession) -> Result<()> {
    session.purchase(1, "7000001", PaymentMethod::DonationAlerts)?;
    session.wait();
    let package = session.random_package();
    let player_id = session.random_player_id();
    session.purchase(package.id, &player_id, PaymentMethod::DonationAlerts)?;
    Ok(())
}

fn redirect_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        summary.outcomes.len() == 2,
        "expected two redirect purchases, got {}",
        summary.outcomes.len()
    );
    for outcome in &summary.outcomes {
        let record = &outcome.record;
        let package = summary_package(record.amount, record.price)?;
        anyhow::ensure!(
            record.status == PurchaseStatus::Pending,
            "redirect purchase {} should be pending",
            record.id
        );
        anyhow::ensure!(
            outcome.notice
                == Notice::AwaitingPayment {
                    amount: package.amount
                },
            "unexpected notice {:?}",
            outcome.notice
        );
        let Some(ExternalAction::OpenPaymentPage { url, record_id }) = &outcome.external else {
            anyhow::bail!("redirect purchase {} has no payment page", record.id);
        };
        anyhow::ensure!(record_id == &record.id, "payment page for the wrong record");
        anyhow::ensure!(
            url.starts_with(DONATION_ALERTS_URL),
            "payment page {url} is not on DonationAlerts"
        );
        anyhow::ensure!(
            url.contains(&format!("amount={}&", package.price)),
            "payment page {url} does not carry the price"
        );
        anyhow::ensure!(
            url.ends_with(&format!("player_id={}", record.player_id)),
            "payment page {url} does not carry player {}",
            record.player_id
        );
    }
    let first = &summary.outcomes[0].record;
    anyhow::ensure!(
        first.amount == 60 && first.player_id == "7000001",
        "fixed purchase recorded as {} UC for {}",
        first.amount,
        first.player_id
    );
    Ok(())
}

fn summary_package(amount: u32, price: u32) -> Result<&'static ucshop_core::Package> {
    ucshop_core::packages()
        .iter()
        .find(|p| p.amount == amount && p.price == price)
        .with_context(|| format!("no package for {amount} UC at {price}"))
}

fn history_totals_script(session: &mut ShopSession) -> Result<()> {
    let count = session.random_count(1..=MAX_PURCHASES);
    for _ in 0..count {
        let package = session.random_package();
        let player_id = session.random_player_id();
        let method = session.random_method();
        session.purchase(package.id, &player_id, method)?;
        session.wait();
    }
    session.reload();
    Ok(())
}

fn history_totals_expectation(summary: &SessionSummary) -> Result<()> {
    let expected_total: u64 = summary
        .outcomes
        .iter()
        .map(|o| u64::from(o.record.price))
        .sum();
    anyhow::ensure!(
        summary.total == expected_total,
        "total {} != sum of prices {expected_total}",
        summary.total
    );

    let newest_first: Vec<_> = summary.outcomes.iter().rev().map(|o| &o.record).collect();
    let history: Vec<_> = summary.history.iter().collect();
    anyhow::ensure!(history == newest_first, "history is not newest first");

    for record in &summary.history {
        let expected = if record.payment_method == PaymentMethod::DonationAlerts.label() {
            PurchaseStatus::Pending
        } else {
            PurchaseStatus::Completed
        };
        anyhow::ensure!(
            record.status == expected,
            "record {} via {} has status {}",
            record.id,
            record.payment_method,
            record.status.key()
        );
    }

    let reloaded = summary.reloaded.as_ref().context("session was not reloaded")?;
    anyhow::ensure!(
        reloaded == &summary.history,
        "reloaded history differs from the session"
    );
    Ok(())
}

fn resubmission_script(session: &mut ShopSession) -> Result<()> {
    let package = session.random_package();
    let player_id = session.random_player_id();
    let method = session.random_direct_method();
    session.purchase(package.id, &player_id, method)?;
    // Same form again within the same millisecond.
    session.purchase(package.id, &player_id, method)?;
    Ok(())
}

fn resubmission_expectation(summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        summary.history.len() == 2,
        "expected two records, got {}",
        summary.history.len()
    );
    let (newer, older) = (&summary.history[0], &summary.history[1]);
    anyhow::ensure!(newer.id != older.id, "duplicate record id {}", newer.id);
    anyhow::ensure!(
        newer.id == format!("{}-2", older.id),
        "second id {} should extend {}",
        newer.id,
        older.id
    );
    anyhow::ensure!(
        newer.date == older.date,
        "both records should carry the same timestamp"
    );
    Ok(())
}

fn storage_faults_script(session: &mut ShopSession) -> Result<()> {
    session.storage().seed(HISTORY_KEY, "{not json");
    session.restart();
    anyhow::ensure!(
        matches!(
            session.checkout().history().load_issue(),
            Some(LoadIssue::Corrupt(_))
        ),
        "corrupt data was not reported"
    );
    anyhow::ensure!(
        session.checkout().history().is_empty(),
        "corrupt data produced records"
    );

    let package = session.random_package();
    let player_id = session.random_player_id();
    session.purchase(package.id, &player_id, PaymentMethod::Sbp)?;
    session.wait();

    session.storage().set_read_only(true);
    let package = session.random_package();
    session.purchase(package.id, &player_id, PaymentMethod::Crypto)?;
    session.reload();
    Ok(())
}

fn storage_faults_expectation(summary: &SessionSummary) -> Result<()> {
    let persisted: Vec<bool> = summary.outcomes.iter().map(|o| o.persisted).collect();
    anyhow::ensure!(
        persisted == [true, false],
        "expected the first write to land and the second to fail, got {persisted:?}"
    );
    anyhow::ensure!(
        summary.history.len() == 2,
        "session should keep both records, got {}",
        summary.history.len()
    );
    let reloaded = summary.reloaded.as_ref().context("session was not reloaded")?;
    anyhow::ensure!(
        reloaded.len() == 1 && reloaded[0] == summary.history[1],
        "only the first record should be stored"
    );
    let ids: HashSet<&str> = summary.history.iter().map(|r| r.id.as_str()).collect();
    anyhow::ensure!(ids.len() == summary.history.len(), "duplicate ids");
    for record in &summary.history {
        summary_package(record.amount, record.price)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::CombinedScenario;
    use crate::logic::SessionRunner;

    fn run(scenario: &LogicScenario, seeds: std::ops::Range<u64>) {
        let logic = scenario.as_logic_scenario().expect("logic plan");
        let runner = SessionRunner::new(false);
        for seed in seeds {
            let (summary, err) = runner.run_plan(&logic.plan, seed);
            assert!(err.is_none(), "{} seed {seed}: {err:?}", logic.name);
            for expectation in &logic.plan.expectations {
                expectation(&summary)
                    .unwrap_or_else(|e| panic!("{} seed {seed}: {e:#}", logic.name));
            }
        }
    }

    #[test]
    fn redirect_plan_passes() {
        run(&redirect_scenario(), 0..10);
    }

    #[test]
    fn history_totals_plan_passes() {
        run(&history_totals_scenario(), 0..25);
    }

    #[test]
    fn resubmission_plan_passes() {
        run(&resubmission_scenario(), 0..10);
    }

    #[test]
    fn storage_faults_plan_passes() {
        run(&storage_faults_scenario(), 0..10);
    }

    #[test]
    fn redirect_expectation_rejects_direct_purchases() {
        let mut session = ShopSession::new(3);
        session
            .purchase(1, "7000001", PaymentMethod::Sberbank)
            .unwrap();
        session.wait();
        session
            .purchase(2, "7000001", PaymentMethod::Sberbank)
            .unwrap();
        let err = redirect_expectation(&session.finish()).expect_err("not pending");
        assert!(err.to_string().contains("pending"));
    }
}
