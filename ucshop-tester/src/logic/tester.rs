use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::session::{SessionPlan, SessionRunner, SessionSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    runner: SessionRunner,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self {
            runner: SessionRunner::new(verbose),
            verbose,
        }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let (successes, failures, performance_data) =
            self.run_iterations(&scenario.plan, seed, iterations);

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }

    fn run_iterations(
        &self,
        plan: &SessionPlan,
        seed: u64,
        iterations: usize,
    ) -> (usize, Vec<String>, Vec<Duration>) {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let (summary, script_error) = self.runner.run_plan(plan, iteration_seed);

            let failure = script_error
                .map(|err| format!("script failed: {err}"))
                .or_else(|| evaluate_expectations(plan, &summary));

            if let Some(err) = failure {
                failures.push(format!(
                    "Iteration {} (seed {}, records {}, total {}): {} | {}",
                    i + 1,
                    summary.seed,
                    summary.history.len(),
                    summary.total,
                    err,
                    summary.tail(3)
                ));
                if self.verbose {
                    println!(
                        "  ❌ Iteration {}/{} failed: {}",
                        i + 1,
                        iterations,
                        err.red()
                    );
                }
            } else {
                successes += 1;
                let duration = start_time.elapsed();
                performance_data.push(duration);
                if self.verbose {
                    println!(
                        "  ✅ Iteration {}/{} passed ({duration:?}) records:{} total:{}",
                        i + 1,
                        iterations,
                        summary.history.len(),
                        summary.total
                    );
                }
            }
        }

        (successes, failures, performance_data)
    }
}

fn evaluate_expectations(plan: &SessionPlan, summary: &SessionSummary) -> Option<String> {
    plan.expectations
        .iter()
        .find_map(|expectation| expectation(summary).err().map(|err| format!("{err:#}")))
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::session::ShopSession;
    use ucshop_core::PaymentMethod;

    fn buy_one(session: &mut ShopSession) -> anyhow::Result<()> {
        session.purchase(3, "5123456", PaymentMethod::Tinkoff)?;
        Ok(())
    }

    fn expect_one_record(summary: &SessionSummary) -> anyhow::Result<()> {
        anyhow::ensure!(summary.history.len() == 1, "expected one record");
        Ok(())
    }

    fn expect_two_records(summary: &SessionSummary) -> anyhow::Result<()> {
        anyhow::ensure!(summary.history.len() == 2, "expected two records");
        Ok(())
    }

    #[test]
    fn passing_plan_counts_every_iteration() {
        let scenario = TestScenario::new(
            "One Purchase",
            SessionPlan::new(buy_one).with_expectation(expect_one_record),
        );
        let results = LogicTester::new(false).run_scenario(&scenario, &[1, 2], 3);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].successful_iterations, 3);
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn failing_expectation_is_reported_with_context() {
        let scenario = TestScenario::new(
            "Wrong Count",
            SessionPlan::new(buy_one).with_expectation(expect_two_records),
        );
        let results = LogicTester::new(false).run_scenario(&scenario, &[9], 2);
        let result = &results[0];
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("expected two records"));
        assert!(result.failures[0].contains("seed 9"));
    }

    #[test]
    fn results_serialize_durations_as_millis() {
        let result = ScenarioResult {
            scenario_name: "Smoke".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 12);
        assert_eq!(json["performance_data"][0], 12);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(12));
    }
}
