use juice_dice::RollMode;
use juice_oracle::OracleSession;
use juice_oracle::oracle::{ChallengeOptions, DcSkew, FateCheckOptions, Likelihood};
use miette::IntoDiagnostic;

use super::Output;

pub fn roll(
    session: &mut OracleSession,
    out: &Output,
    expr: &str,
    advantage: bool,
    disadvantage: bool,
) -> miette::Result<()> {
    let mode = if advantage {
        RollMode::Advantage
    } else if disadvantage {
        RollMode::Disadvantage
    } else {
        RollMode::Straight
    };
    let result = session.roll_notation(expr, mode).into_diagnostic()?;
    out.result(&result)
}

pub fn skew(session: &mut OracleSession, out: &Output, skew: i32) -> miette::Result<()> {
    out.result(&session.skewed_d6(skew))
}

pub fn fate(
    session: &mut OracleSession,
    out: &Output,
    likelihood: Option<&str>,
    left: bool,
    right: bool,
) -> miette::Result<()> {
    let likelihood = match likelihood {
        Some(s) => Likelihood::from_setting(s),
        None => session.config().default_likelihood,
    };
    let mut options = FateCheckOptions::new(likelihood);
    if left || right {
        options = options.with_primary_left(left);
    }
    out.result(&session.fate_check(options))
}

pub fn challenge(
    session: &mut OracleSession,
    out: &Output,
    easy: bool,
    hard: bool,
) -> miette::Result<()> {
    let options = ChallengeOptions {
        skew: DcSkew::from_flags(easy, hard),
    };
    out.result(&session.challenge(options))
}
