use anyhow::Result;
use std::collections::HashSet;

use super::LogicScenario;
use crate::logic::{SessionPlan, SessionSummary, ShopSession};
use ucshop_core::{FAQ, PaymentMethod, REVIEWS, find_package, packages};

pub fn catalog_integrity_scenario() -> LogicScenario {
    LogicScenario::new(
        "Catalog Integrity",
        SessionPlan::new(catalog_script)
            .with_expectation(packages_expectation)
            .with_expectation(content_expectation),
    )
}

/// Buy every package once so each catalog entry passes through checkout.
fn catalog_script(session: &mut ShopSession) -> Result<()> {
    for package in packages() {
        let player_id = session.random_player_id();
        let method = session.random_method();
        session.purchase(package.id, &player_id, method)?;
        session.wait();
    }
    Ok(())
}

fn packages_expectation(summary: &SessionSummary) -> Result<()> {
    let catalog = packages();
    anyhow::ensure!(!catalog.is_empty(), "catalog is empty");

    let ids: HashSet<u32> = catalog.iter().map(|p| p.id).collect();
    anyhow::ensure!(ids.len() == catalog.len(), "package ids are not unique");

    let popular = catalog.iter().filter(|p| p.popular).count();
    anyhow::ensure!(popular == 1, "expected one popular package, got {popular}");

    for pair in catalog.windows(2) {
        anyhow::ensure!(
            pair[0].price < pair[1].price && pair[0].amount < pair[1].amount,
            "packages {} and {} are out of order",
            pair[0].id,
            pair[1].id
        );
    }

    for package in catalog {
        anyhow::ensure!(
            find_package(package.id) == Some(package),
            "lookup of package {} failed",
            package.id
        );
        let bonus = package.bonus.unwrap_or(0);
        anyhow::ensure!(
            package.base_amount() + bonus == package.amount,
            "package {} bonus does not add up",
            package.id
        );
        anyhow::ensure!(package.price > 0, "package {} is free", package.id);
    }

    anyhow::ensure!(
        summary.history.len() == catalog.len(),
        "expected a record per package, got {}",
        summary.history.len()
    );
    for (record, package) in summary.history.iter().rev().zip(catalog) {
        anyhow::ensure!(
            record.amount == package.amount && record.price == package.price,
            "record {} does not match package {}",
            record.id,
            package.id
        );
    }
    Ok(())
}

fn content_expectation(_summary: &SessionSummary) -> Result<()> {
    anyhow::ensure!(
        REVIEWS.iter().all(|r| (1..=5).contains(&r.rating)),
        "review rating outside 1..=5"
    );
    let faq_ids: HashSet<&str> = FAQ.iter().map(|f| f.id).collect();
    anyhow::ensure!(faq_ids.len() == FAQ.len(), "FAQ ids are not unique");

    let keys: HashSet<&str> = PaymentMethod::ALL.iter().map(|m| m.key()).collect();
    anyhow::ensure!(
        keys.len() == PaymentMethod::ALL.len(),
        "payment method keys are not unique"
    );
    let redirects = PaymentMethod::ALL.iter().filter(|m| m.is_redirect()).count();
    anyhow::ensure!(redirects == 1, "expected one redirect method, got {redirects}");
    for method in PaymentMethod::ALL {
        anyhow::ensure!(
            method.key().parse::<PaymentMethod>().ok() == Some(method),
            "method {} does not parse back",
            method.key()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::CombinedScenario;
    use crate::logic::SessionRunner;

    #[test]
    fn catalog_plan_passes() {
        let logic = catalog_integrity_scenario()
            .as_logic_scenario()
            .expect("logic plan");
        assert_eq!(logic.plan.expectations.len(), 2);
        let (summary, err) = SessionRunner::new(false).run_plan(&logic.plan, 77);
        assert!(err.is_none(), "{err:?}");
        packages_expectation(&summary).expect("packages ok");
        content_expectation(&summary).expect("content ok");
    }

    #[test]
    fn empty_session_fails_record_check() {
        let err = packages_expectation(&ShopSession::new(1).finish()).expect_err("no records");
        assert!(err.to_string().contains("record per package"));
    }
}
