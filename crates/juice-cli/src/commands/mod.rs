pub mod generator;
pub mod oracle;

use std::fs;
use std::path::Path;

use colored::Colorize;
use miette::{IntoDiagnostic, WrapErr};
use serde::Serialize;
use serde::de::DeserializeOwned;

use juice_oracle::oracle::FateAnswer;
use juice_oracle::{EngineConfig, OracleSession, ResultDetail, RollRecord, RollResult};

/// Build a session from the global flags.
pub fn session(seed: Option<u64>, exchange_cap: Option<u32>) -> OracleSession {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "starting oracle session");
    let mut config = EngineConfig::default().with_seed(seed);
    if let Some(cap) = exchange_cap {
        config = config.with_exchange_cap(cap);
    }
    OracleSession::new(config)
}

/// How results are printed.
pub struct Output {
    pub json: bool,
}

impl Output {
    /// Print one result.
    pub fn result(&self, result: &RollResult) -> miette::Result<()> {
        if self.json {
            let record = record(result)?;
            let json = serde_json::to_string_pretty(&record).into_diagnostic()?;
            println!("{json}");
        } else {
            print_result(result, 0);
        }
        Ok(())
    }

    /// Print several results, as a JSON array in JSON mode.
    pub fn results(&self, results: &[RollResult]) -> miette::Result<()> {
        if self.json {
            let records = results.iter().map(record).collect::<miette::Result<Vec<_>>>()?;
            let json = serde_json::to_string_pretty(&records).into_diagnostic()?;
            println!("{json}");
        } else {
            for result in results {
                print_result(result, 0);
            }
        }
        Ok(())
    }

    /// Print a status line in text mode; JSON mode stays machine-readable.
    pub fn note(&self, text: &str) {
        if !self.json {
            println!("  {}", text.dimmed());
        }
    }
}

fn record(result: &RollResult) -> miette::Result<RollRecord> {
    result
        .to_record()
        .into_diagnostic()
        .wrap_err("failed to encode result")
}

fn print_result(result: &RollResult, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    let interpretation = result.interpretation.as_deref().unwrap_or("");
    println!(
        "{indent}{} {}",
        format!("{}:", result.label).bold(),
        colorize(result, interpretation)
    );
    if !result.dice.is_empty() {
        let dice: Vec<String> = result.dice.iter().map(|d| d.to_string()).collect();
        println!(
            "{indent}  {}",
            format!("[{}] = {}", dice.join(", "), result.total).dimmed()
        );
    }
    for child in &result.children {
        print_result(child, depth + 1);
    }
}

fn colorize(result: &RollResult, text: &str) -> colored::ColoredString {
    match &result.detail {
        ResultDetail::FateCheck(detail) => match detail.answer {
            answer if answer.is_yes() => text.green(),
            answer if answer.is_no() => text.red(),
            FateAnswer::InvalidAssumption => text.yellow(),
            _ => text.normal(),
        },
        _ => text.normal(),
    }
}

/// Read a generator state file. A missing path or file means "start fresh".
pub fn load_state<S: DeserializeOwned>(path: Option<&Path>) -> miette::Result<Option<S>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no state file, starting fresh");
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read state file {}", path.display()))?;
    let state = serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid state file {}", path.display()))?;
    Ok(Some(state))
}

/// Write a generator state file, if a path was given.
pub fn save_state<S: Serialize>(path: Option<&Path>, state: &S) -> miette::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let json = serde_json::to_string_pretty(state).into_diagnostic()?;
    fs::write(path, json)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write state file {}", path.display()))
}
