//! Oracle session.
//!
//! `OracleSession` owns a dice source and the engine configuration, runs
//! resolvers and generators, and expands the follow-up signals resolvers
//! return into embedded child results.

use juice_dice::{DiceExpr, DiceSource, RollMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::EngineConfig;
use crate::error::OracleResult;
use crate::generator::dialog::{self, Conversation, DialogState};
use crate::generator::dungeon::{self, DungeonOptions, DungeonState};
use crate::generator::trap::{self, TrapOptions};
use crate::generator::wilderness::{self, EncounterOptions, WildernessState};
use crate::generator::{Generated, monster};
use crate::oracle::challenge::{self, ChallengeOptions};
use crate::oracle::fate_check::{self, FateCheckOptions};
use crate::oracle::{FollowUp, Outcome, details, dice, event, next_scene, price};
use crate::result::RollResult;

/// Deepest chain of follow-ups expanded under one roll.
pub const MAX_FOLLOW_UP_DEPTH: usize = 3;

/// A session of oracle rolls sharing one dice source.
#[derive(Debug)]
pub struct OracleSession<R: DiceSource = StdRng> {
    rng: R,
    config: EngineConfig,
}

impl OracleSession<StdRng> {
    /// Create a session with a `StdRng` seeded from the config.
    pub fn new(config: EngineConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { rng, config }
    }
}

impl Default for OracleSession<StdRng> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: DiceSource> OracleSession<R> {
    /// Create a session drawing from the given source.
    pub fn with_source(rng: R, config: EngineConfig) -> Self {
        Self { rng, config }
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the follow-up an outcome asks for and embed it as a child,
    /// recursing until no follow-up remains or the depth limit is hit.
    fn expand(&mut self, outcome: Outcome, depth: usize) -> RollResult {
        let Outcome { result, follow_up } = outcome;
        let Some(follow_up) = follow_up else {
            return result;
        };
        if depth >= MAX_FOLLOW_UP_DEPTH {
            tracing::warn!(%follow_up, depth, "follow-up depth limit reached, not expanding");
            return result;
        }
        tracing::debug!(%follow_up, depth, "expanding follow-up");
        let child = match follow_up {
            FollowUp::RandomEvent => event::resolve(&mut self.rng),
            FollowUp::History => details::history(&mut self.rng),
            FollowUp::Property => details::property(&mut self.rng),
        };
        let child = self.expand(child, depth + 1);
        result.with_child(child)
    }

    fn finish(&mut self, outcome: Outcome) -> RollResult {
        self.expand(outcome, 0)
    }

    /// Roll a dice expression.
    pub fn roll(&mut self, expr: DiceExpr, mode: RollMode) -> RollResult {
        let outcome = dice::roll_expression(&mut self.rng, expr, mode);
        self.finish(outcome)
    }

    /// Parse and roll a dice expression such as `2d6+1` or `4dF`.
    pub fn roll_notation(&mut self, notation: &str, mode: RollMode) -> OracleResult<RollResult> {
        let expr = DiceExpr::parse(notation)?;
        Ok(self.roll(expr, mode))
    }

    /// Roll a skewed d6.
    pub fn skewed_d6(&mut self, skew: i32) -> RollResult {
        let outcome = dice::roll_skewed(&mut self.rng, skew);
        self.finish(outcome)
    }

    /// Ask a yes/no question.
    pub fn fate_check(&mut self, options: FateCheckOptions) -> RollResult {
        let outcome = fate_check::resolve(&mut self.rng, options);
        self.finish(outcome)
    }

    /// Ask a yes/no question at the configured default likelihood.
    pub fn fate_check_default(&mut self) -> RollResult {
        let options = FateCheckOptions::new(self.config.default_likelihood);
        self.fate_check(options)
    }

    /// Roll for the next scene.
    pub fn next_scene(&mut self) -> RollResult {
        let outcome = next_scene::resolve(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll a random event.
    pub fn random_event(&mut self) -> RollResult {
        let outcome = event::resolve(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll a color.
    pub fn color(&mut self) -> RollResult {
        let outcome = details::color(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll a property with intensity.
    pub fn property(&mut self) -> RollResult {
        let outcome = details::property(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll a detail modifier, expanding History and Property entries.
    pub fn detail(&mut self) -> RollResult {
        let outcome = details::detail(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll a history hook.
    pub fn history(&mut self) -> RollResult {
        let outcome = details::history(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll a physical and a mental challenge.
    pub fn challenge(&mut self, options: ChallengeOptions) -> RollResult {
        let outcome = challenge::resolve(&mut self.rng, options);
        self.finish(outcome)
    }

    /// Roll a consequence.
    pub fn pay_the_price(&mut self) -> RollResult {
        let outcome = price::resolve(&mut self.rng);
        self.finish(outcome)
    }

    /// Roll one dialog exchange.
    pub fn dialog(&mut self, state: Option<&DialogState>) -> Generated<DialogState> {
        dialog::generate(&mut self.rng, state)
    }

    /// Roll dialog exchanges up to the configured cap.
    pub fn conversation(&mut self, state: Option<&DialogState>) -> Conversation {
        dialog::generate_conversation(&mut self.rng, state, self.config.dialog_exchange_cap)
    }

    /// Roll the next dungeon area.
    pub fn dungeon(
        &mut self,
        state: Option<&DungeonState>,
        options: DungeonOptions,
    ) -> Generated<DungeonState> {
        dungeon::generate(&mut self.rng, state, options)
    }

    /// Run the trap procedure.
    pub fn trap(&mut self, options: TrapOptions) -> RollResult {
        let outcome = trap::resolve(&mut self.rng, options);
        self.finish(outcome)
    }

    /// Start in a random hex, or move to the next one.
    pub fn wilderness(&mut self, state: Option<&WildernessState>) -> Generated<WildernessState> {
        wilderness::transition(&mut self.rng, state)
    }

    /// Roll a wilderness encounter.
    pub fn encounter(&mut self, state: &WildernessState, options: &EncounterOptions) -> RollResult {
        let outcome = wilderness::encounter(&mut self.rng, state, options);
        self.finish(outcome)
    }

    /// Roll a monster for the state's environment.
    pub fn monster(&mut self, state: &WildernessState) -> RollResult {
        let outcome = monster::generate(&mut self.rng, state);
        self.finish(outcome)
    }
}
