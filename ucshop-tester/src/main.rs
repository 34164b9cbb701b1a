mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, TestBridge, new_session};
use common::scenario::{ScenarioCtx, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, parse_seeds, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Checkout logic against an in-memory store (fast, no browser)
    Logic,
    /// Browser automation through WebDriver (slow, captures screenshots)
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "ucshop-tester", version)]
#[command(about = "Automated QA for the UC SHOP storefront - checkout logic and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated, decimal or 0x-hex)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the storefront (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&split_csv(&args.seeds))?;
    log::debug!("scenarios {scenarios:?} seeds {seeds:?}");

    let logic_results = run_logic_scenarios(&args, &scenarios, &seeds);
    let browser_failures = run_browser_scenarios(&args, &scenarios, &seeds).await?;

    write_reports(&args, &logic_results, start_time)?;

    if browser_failures > 0 || logic_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛒 UC SHOP Automated Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn parse_browser_kind(name: &str) -> Option<BrowserKind> {
    BrowserKind::from_str(name, true).ok()
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn scenario_artifacts_dir(args: &Args, kind: BrowserKind, scenario: &str, seed: u64) -> String {
    artifacts_dir(&args.artifacts_dir, &kind.label(), scenario, seed)
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        if let Some(logic_scenario) = scenario.as_logic_scenario() {
            results.extend(logic_tester.run_scenario(&logic_scenario, seeds, args.iterations));
        } else {
            eprintln!(
                "⚠️  Scenario {} has no logic test implementation",
                scenario_name.yellow()
            );
        }
    }

    results
}

/// Run browser scenarios and return how many failed.
async fn run_browser_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Result<usize> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(0);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let mut failures = 0;
    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = parse_browser_kind(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &build_browser_config(args)).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, scenarios, seeds, kind, &driver).await;
        if let Err(e) = driver.quit().await {
            log::warn!("closing {kind:?} session failed: {e}");
        }
    }

    Ok(failures)
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let label = kind.label();
    let mut failures = 0;
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            continue;
        };
        for &seed in seeds {
            let ctx = ScenarioCtx {
                base_url: args.base_url.clone(),
                seed,
                bridge: TestBridge::new(driver),
                verbose: args.verbose,
            };

            let scenario_start = Instant::now();
            match scenario.run_browser(driver, &ctx).await {
                Ok(()) => {
                    println!(
                        "✅ [{} seed {seed}] {scenario_name} - {:?}",
                        label.green(),
                        scenario_start.elapsed()
                    );
                }
                Err(e) => {
                    failures += 1;
                    eprintln!(
                        "❌ [{} seed {seed}] {scenario_name} - {:?}: {e:#}",
                        label.red(),
                        scenario_start.elapsed()
                    );
                    let dir = scenario_artifacts_dir(args, kind, scenario_name, seed);
                    if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                        log::warn!("could not capture artifacts in {dir}: {capture_err:#}");
                    }
                }
            }
        }
    }
    failures
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => {
            logic::reports::generate_json_report(&mut output_target, results)?;
        }
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# UC SHOP Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/?test=1".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ucshop-{}-{name}", std::process::id()))
    }

    fn sample_result(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: "Smoke Test".to_string(),
            seed: 1337,
            passed,
            iterations_run: 3,
            successful_iterations: if passed { 3 } else { 2 },
            failures: if passed {
                Vec::new()
            } else {
                vec!["failure".to_string()]
            },
            average_duration: Duration::from_millis(10),
            performance_data: vec![Duration::from_millis(10)],
        }
    }

    #[test]
    fn args_parse_from_command_line() {
        let args = Args::try_parse_from([
            "ucshop-tester",
            "--mode",
            "both",
            "--report",
            "markdown",
            "--browsers",
            "firefox",
            "--headless",
            "windowed",
        ])
        .unwrap();
        assert!(matches!(args.mode, TestMode::Both));
        assert_eq!(args.report, ReportFormat::Markdown);
        assert!(!args.headless.is_headless());
        assert!(Args::try_parse_from(["ucshop-tester", "--report", "csv"]).is_err());
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let expanded = expand_scenarios("smoke,all");
        assert_eq!(expanded[0], "smoke");
        assert_eq!(expanded.len(), list_scenarios().len());
        assert!(expanded.contains(&"storage-faults".to_string()));
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("redirect,smoke");
        assert_eq!(expanded, vec!["redirect".to_string(), "smoke".to_string()]);
    }

    #[test]
    fn run_logic_scenarios_runs_every_seed() {
        let results = run_logic_scenarios(
            &base_args(),
            &["smoke".to_string(), "redirect".to_string(), "nope".to_string()],
            &[1, 2],
        );
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let args = Args {
            mode: TestMode::Browser,
            ..base_args()
        };
        assert!(run_logic_scenarios(&args, &["smoke".to_string()], &[42]).is_empty());
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let path = temp("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(path.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("history-totals"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn write_reports_emits_json_for_results() {
        let path = temp("report.json");
        let args = Args {
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(true)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("scenario_name"));
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let path = temp("report.md");
        let args = Args {
            report: ReportFormat::Markdown,
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("No scenarios executed"));
    }

    #[test]
    fn write_reports_console_includes_total_time() {
        let path = temp("report.txt");
        let args = Args {
            report: ReportFormat::Console,
            output: Some(path.clone()),
            ..base_args()
        };
        write_reports(&args, &[sample_result(false)], Instant::now()).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Logic Test Results Summary"));
        assert!(content.contains("Total time"));
    }

    #[test]
    fn parse_browser_kind_handles_known_and_unknown() {
        assert_eq!(parse_browser_kind("chrome"), Some(BrowserKind::Chrome));
        assert_eq!(parse_browser_kind("Firefox"), Some(BrowserKind::Firefox));
        assert!(parse_browser_kind("unknown").is_none());
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let args = Args {
            headless: HeadlessMode::Windowed,
            hub: Some("http://remote.example".to_string()),
            ..base_args()
        };
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://remote.example"));
    }

    #[test]
    fn scenario_artifacts_dir_includes_seed() {
        let dir = scenario_artifacts_dir(&base_args(), BrowserKind::Chrome, "smoke", 42);
        assert!(dir.contains("chrome/smoke/seed-42"));
    }

    #[test]
    fn run_browser_scenarios_skips_when_not_enabled() {
        let failures = tokio_test::block_on(run_browser_scenarios(
            &base_args(),
            &["smoke".to_string()],
            &[42],
        ))
        .expect("browser scenarios should skip");
        assert_eq!(failures, 0);
    }

    #[test]
    fn run_browser_scenarios_ignores_unknown_browser() {
        let args = Args {
            mode: TestMode::Browser,
            browsers: "unknown".to_string(),
            ..base_args()
        };
        let failures =
            tokio_test::block_on(run_browser_scenarios(&args, &["smoke".to_string()], &[42]))
                .expect("unknown browser should be skipped");
        assert_eq!(failures, 0);
    }
}
