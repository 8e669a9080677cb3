//! `cascade-engine` - analyze a decision document from the command line.
//!
//! Usage: `cascade-engine <decision.json | -> [decision-maker-id]`
//!
//! Prints the `DecisionAnalysis` as JSON on stdout; logs go to stderr.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cascade_engine::adapters::{
    FixedDutyClock, InMemoryConsequenceSource, InMemoryPrecedentSource, PolicyFile,
    StaticBaselineProvider,
};
use cascade_engine::application::{AnalyzeDecisionCommand, AnalyzeDecisionHandler};
use cascade_engine::config::{AppConfig, LoggingConfig};
use cascade_engine::domain::analysis::AnalysisPolicy;
use cascade_engine::domain::decision::Decision;
use cascade_engine::ports::DutyClock;

const DEFAULT_DECISION_MAKER: &str = "duty-officer";
const POLICY_PATH_VAR: &str = "CASCADE_ENGINE__ENGINE__POLICY_PATH";

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&logging.level)
        .with_context(|| format!("Invalid log filter '{}'", logging.level))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn read_decision(source: &str) -> Result<Decision> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read decision from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read decision file {}", source))?
    };
    serde_json::from_str(&raw).context("Decision document is not valid JSON")
}

async fn build_handler(config: &AppConfig) -> Result<AnalyzeDecisionHandler> {
    let duty_clock: Arc<dyn DutyClock> =
        Arc::new(FixedDutyClock::new(config.engine.default_time_on_duty_minutes));

    if config.engine.uses_reference_policy() {
        warn!(
            env_var = POLICY_PATH_VAR,
            example = "demos/policy.yaml",
            "No policy file configured; no consequence templates are loaded, so options score 0 and rank by confidence"
        );
    }

    let handler = match &config.engine.policy_path {
        Some(path) => {
            let file = Arc::new(PolicyFile::load(path).await?);
            let policy = config.engine.apply_to(file.analysis_policy());
            AnalyzeDecisionHandler::new(file.clone(), file.clone(), file, duty_clock, policy)
        }
        None => AnalyzeDecisionHandler::new(
            Arc::new(InMemoryConsequenceSource::new()),
            Arc::new(StaticBaselineProvider::reference()),
            Arc::new(InMemoryPrecedentSource::new()),
            duty_clock,
            config.engine.apply_to(AnalysisPolicy::default()),
        ),
    };
    Ok(handler)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next() else {
        bail!("Usage: cascade-engine <decision.json | -> [decision-maker-id]");
    };
    let decision_maker_id = args
        .next()
        .unwrap_or_else(|| DEFAULT_DECISION_MAKER.to_string());

    let decision = read_decision(&source)?;
    info!(decision_id = %decision.id, options = decision.options.len(), "Analyzing decision");

    let handler = build_handler(&config).await?;
    let result = handler
        .handle(AnalyzeDecisionCommand {
            decision,
            decision_maker_id,
        })
        .await?;

    println!("{}", serde_json::to_string_pretty(&result.analysis)?);
    Ok(())
}
