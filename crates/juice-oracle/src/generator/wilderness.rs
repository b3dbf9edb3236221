//! Wilderness travel: hex-to-hex environment drift and encounters.
//!
//! The environment is a row on a ten-step scale from Arctic to Desert.
//! Moving to a new hex drifts the row by two Fate dice, clamped so it
//! collapses onto the ends instead of wrapping. The terrain type follows
//! the environment with one more Fate die of wobble.

use juice_dice::{DiceSource, FateDie, RollMode};
use serde::{Deserialize, Serialize};

use super::Generated;
use super::monster;
use crate::oracle::Outcome;
use crate::result::{ResultDetail, RollResult};
use crate::table::{LookupTable, TableEntry, WordList};

/// Lowest environment or type row.
pub const MIN_ROW: i32 = 1;

/// Highest environment or type row.
pub const MAX_ROW: i32 = 10;

/// The broad environment of a hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// Ice and snow.
    Arctic,
    /// High peaks.
    Mountains,
    /// Underground.
    Cavern,
    /// Rolling hills.
    Hills,
    /// Open plains.
    Grassland,
    /// Woodland.
    Forest,
    /// Wetlands.
    Swamp,
    /// Lakes and rivers.
    Water,
    /// Shoreline.
    Coast,
    /// Sand and scrub.
    Desert,
}

impl Environment {
    /// The environment on a row, clamping out-of-range rows.
    pub fn from_row(row: i32) -> Self {
        *ENVIRONMENT.lookup_or(ENVIRONMENT.clamp(row), &Self::Grassland)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arctic => write!(f, "Arctic"),
            Self::Mountains => write!(f, "Mountains"),
            Self::Cavern => write!(f, "Cavern"),
            Self::Hills => write!(f, "Hills"),
            Self::Grassland => write!(f, "Grassland"),
            Self::Forest => write!(f, "Forest"),
            Self::Swamp => write!(f, "Swamp"),
            Self::Water => write!(f, "Water"),
            Self::Coast => write!(f, "Coast"),
            Self::Desert => write!(f, "Desert"),
        }
    }
}

/// Environment rows.
pub const ENVIRONMENT: LookupTable<Environment> = LookupTable::new(
    "Environment",
    &[
        TableEntry::single(1, Environment::Arctic),
        TableEntry::single(2, Environment::Mountains),
        TableEntry::single(3, Environment::Cavern),
        TableEntry::single(4, Environment::Hills),
        TableEntry::single(5, Environment::Grassland),
        TableEntry::single(6, Environment::Forest),
        TableEntry::single(7, Environment::Swamp),
        TableEntry::single(8, Environment::Water),
        TableEntry::single(9, Environment::Coast),
        TableEntry::single(10, Environment::Desert),
    ],
);

/// Terrain type rows, read one-indexed.
pub const TERRAIN_TYPE: WordList = WordList::new(
    "Terrain Type",
    &[
        "Frozen",
        "Rocky",
        "Subterranean",
        "Rolling",
        "Open",
        "Wooded",
        "Boggy",
        "Riverine",
        "Coastal",
        "Arid",
    ],
);

fn clamp_row(row: i32) -> i32 {
    row.clamp(MIN_ROW, MAX_ROW)
}

/// Where the party is and whether they know it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildernessState {
    /// Environment row, 1-10.
    pub environment_row: i32,
    /// Terrain type row, 1-10.
    pub type_row: i32,
    /// The party is lost.
    pub lost: bool,
}

impl WildernessState {
    /// The current environment.
    pub fn environment(self) -> Environment {
        Environment::from_row(self.environment_row)
    }

    /// The current terrain type.
    pub fn terrain(self) -> &'static str {
        TERRAIN_TYPE.pick_one_indexed(clamp_row(self.type_row) as u32)
    }

    /// Pull out-of-range rows back onto the table.
    pub fn clamped(self) -> Self {
        let clamped = Self {
            environment_row: clamp_row(self.environment_row),
            type_row: clamp_row(self.type_row),
            lost: self.lost,
        };
        if clamped != self {
            tracing::warn!(
                environment_row = self.environment_row,
                type_row = self.type_row,
                "wilderness state out of range, clamping"
            );
        }
        clamped
    }

    /// Apply an encounter trigger. Rolling Destination/Lost leaves the
    /// party lost until they find a path.
    pub fn apply_trigger(self, trigger: EncounterTrigger) -> Self {
        Self {
            lost: match trigger {
                EncounterTrigger::DestinationOrLost => true,
                EncounterTrigger::FoundPath => false,
            },
            ..self
        }
    }
}

/// Kind-specific fields of a wilderness transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildernessDetail {
    /// State before the move; `None` when starting fresh.
    pub previous: Option<WildernessState>,
    /// The new environment.
    pub environment: Environment,
    /// The new terrain type.
    pub terrain: String,
    /// Net environment drift from the Fate dice.
    pub drift: i32,
    /// State after the move.
    pub state: WildernessState,
}

/// Start in a random hex, or move to the next one.
pub fn transition<R: DiceSource>(
    rng: &mut R,
    state: Option<&WildernessState>,
) -> Generated<WildernessState> {
    let previous = state.map(|s| s.clamped());
    let (mut dice, environment_row, drift, lost) = match previous {
        None => {
            let roll = rng.roll_die(10) as i32;
            (vec![roll], roll, 0, false)
        }
        Some(prev) => {
            let fate = rng.roll_fate_dice(2);
            let drift = FateDie::sum(&fate);
            let dice = fate.iter().map(|d| d.value()).collect();
            (dice, clamp_row(prev.environment_row + drift), drift, prev.lost)
        }
    };
    let wobble = rng.roll_fate_die();
    dice.push(wobble.value());

    let next = WildernessState {
        environment_row,
        type_row: clamp_row(environment_row + wobble.value()),
        lost,
    };
    let environment = next.environment();
    let terrain = next.terrain();
    let result = RollResult::new(
        "Wilderness",
        dice,
        environment_row,
        ResultDetail::WildernessTransition(WildernessDetail {
            previous,
            environment,
            terrain: terrain.to_string(),
            drift,
            state: next,
        }),
    )
    .with_interpretation(format!("{terrain} {environment}"));

    Generated {
        result,
        state: next,
    }
}

/// Situational modifiers on the encounter roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WildernessModifier {
    /// The party has a map.
    HasMap,
    /// The party has a guide.
    Guide,
    /// The terrain is dangerous.
    DangerousTerrain,
    /// The weather is bad.
    BadWeather,
}

impl WildernessModifier {
    /// Contribution to the net skew.
    pub fn skew(self) -> i32 {
        match self {
            Self::HasMap | Self::Guide => 1,
            Self::DangerousTerrain | Self::BadWeather => -1,
        }
    }
}

/// Options for an encounter roll.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncounterOptions {
    /// Modifiers in play.
    pub modifiers: Vec<WildernessModifier>,
}

impl EncounterOptions {
    /// Net skew across all modifiers.
    pub fn net_skew(&self) -> i32 {
        self.modifiers.iter().map(|m| m.skew()).sum()
    }

    /// Pool mode for the encounter die.
    pub fn roll_mode(&self) -> RollMode {
        RollMode::from_net_skew(self.net_skew())
    }
}

/// What the party runs into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    /// Reach the destination, or get lost.
    DestinationOrLost,
    /// A river or road.
    RiverRoad,
    /// A natural hazard.
    NaturalHazard,
    /// A monster.
    Monster,
    /// A change in the weather.
    Weather,
    /// A notable feature.
    Feature,
    /// A challenge to overcome.
    Challenge,
    /// A dungeon entrance.
    Dungeon,
    /// A settlement.
    Settlement,
    /// Something that moves the plot forward.
    AdvancePlot,
}

impl std::fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DestinationOrLost => write!(f, "Destination/Lost"),
            Self::RiverRoad => write!(f, "River/Road"),
            Self::NaturalHazard => write!(f, "Natural Hazard"),
            Self::Monster => write!(f, "Monster"),
            Self::Weather => write!(f, "Weather"),
            Self::Feature => write!(f, "Feature"),
            Self::Challenge => write!(f, "Challenge"),
            Self::Dungeon => write!(f, "Dungeon"),
            Self::Settlement => write!(f, "Settlement"),
            Self::AdvancePlot => write!(f, "Advance Plot"),
        }
    }
}

/// Encounter d10; lost parties roll a d6 and only see the first six rows.
pub const ENCOUNTER: LookupTable<EncounterKind> = LookupTable::new(
    "Wilderness Encounter",
    &[
        TableEntry::single(1, EncounterKind::DestinationOrLost),
        TableEntry::single(2, EncounterKind::RiverRoad),
        TableEntry::single(3, EncounterKind::NaturalHazard),
        TableEntry::single(4, EncounterKind::Monster),
        TableEntry::single(5, EncounterKind::Weather),
        TableEntry::single(6, EncounterKind::Feature),
        TableEntry::single(7, EncounterKind::Challenge),
        TableEntry::single(8, EncounterKind::Dungeon),
        TableEntry::single(9, EncounterKind::Settlement),
        TableEntry::single(10, EncounterKind::AdvancePlot),
    ],
);

/// A state change an encounter calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterTrigger {
    /// The party reached its destination or became lost.
    DestinationOrLost,
    /// A lost party found a river or road to follow.
    FoundPath,
}

/// Kind-specific fields of an encounter roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterDetail {
    /// The kept die.
    pub roll: u32,
    /// Die size rolled (d6 while lost).
    pub sides: u32,
    /// Pool mode from the net skew.
    pub mode: RollMode,
    /// Modifiers in play.
    pub modifiers: Vec<WildernessModifier>,
    /// The encounter.
    pub encounter: EncounterKind,
    /// State change the encounter calls for, for the caller to apply.
    pub trigger: Option<EncounterTrigger>,
    /// The party was lost when rolling.
    pub lost: bool,
}

/// Roll a wilderness encounter. A monster encounter cascades into the
/// monster table for the current environment.
pub fn encounter<R: DiceSource>(
    rng: &mut R,
    state: &WildernessState,
    options: &EncounterOptions,
) -> Outcome {
    let state = state.clamped();
    let sides = if state.lost { 6 } else { 10 };
    let mode = options.roll_mode();
    let pool = rng.roll_pool(mode, 1, sides);
    let roll = pool.chosen_sum();
    let encounter = *ENCOUNTER.lookup_or(roll as i32, &EncounterKind::Feature);

    let trigger = match (encounter, state.lost) {
        (EncounterKind::DestinationOrLost, false) => Some(EncounterTrigger::DestinationOrLost),
        (EncounterKind::RiverRoad, true) => Some(EncounterTrigger::FoundPath),
        _ => None,
    };
    if let Some(trigger) = trigger {
        tracing::debug!(?trigger, "wilderness encounter trigger");
    }

    let mut text = format!("{encounter} in {} {}", state.terrain(), state.environment());
    if trigger == Some(EncounterTrigger::FoundPath) {
        text.push_str(", a way out");
    }

    let mut result = RollResult::new(
        "Wilderness Encounter",
        pool.all_dice().into_iter().map(|d| d as i32).collect(),
        roll as i32,
        ResultDetail::WildernessEncounter(EncounterDetail {
            roll,
            sides,
            mode,
            modifiers: options.modifiers.clone(),
            encounter,
            trigger,
            lost: state.lost,
        }),
    )
    .with_interpretation(text);

    if encounter == EncounterKind::Monster {
        result = result.with_child(monster::generate(rng, &state).result);
    }
    Outcome::done(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultKind;
    use juice_dice::ScriptedDice;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at(environment_row: i32, lost: bool) -> WildernessState {
        WildernessState {
            environment_row,
            type_row: environment_row,
            lost,
        }
    }

    fn encounter_detail(outcome: &Outcome) -> &EncounterDetail {
        match &outcome.result.detail {
            ResultDetail::WildernessEncounter(d) => d,
            other => panic!("expected encounter, got {:?}", other.kind()),
        }
    }

    #[test]
    fn tables_cover_d10() {
        assert!(ENVIRONMENT.is_contiguous());
        assert_eq!(ENVIRONMENT.covered_range(), Some((1, 10)));
        assert!(ENCOUNTER.is_contiguous());
        assert_eq!(ENCOUNTER.covered_range(), Some((1, 10)));
        assert_eq!(TERRAIN_TYPE.len(), 10);
    }

    #[test]
    fn initialize_rolls_d10_and_wobble() {
        let mut dice = ScriptedDice::new(Vec::new());
        dice.push(6).push_fate(FateDie::Minus);
        let g = transition(&mut dice, None);
        assert_eq!(g.state.environment_row, 6);
        assert_eq!(g.state.type_row, 5);
        assert_eq!(g.state.environment(), Environment::Forest);
        assert_eq!(g.state.terrain(), "Open");
        assert_eq!(g.result.dice, vec![6, -1]);
        assert!(!g.state.lost);
    }

    #[test]
    fn drift_clamps_at_the_top() {
        let mut dice = ScriptedDice::new(Vec::new());
        dice.push_fate(FateDie::Plus)
            .push_fate(FateDie::Plus)
            .push_fate(FateDie::Plus);
        let g = transition(&mut dice, Some(&at(10, false)));
        assert_eq!(g.state.environment_row, 10);
        assert_eq!(g.state.type_row, 10);
        assert_eq!(g.state.environment(), Environment::Desert);
    }

    #[test]
    fn drift_clamps_at_the_bottom() {
        let mut dice = ScriptedDice::new(Vec::new());
        dice.push_fate(FateDie::Minus)
            .push_fate(FateDie::Minus)
            .push_fate(FateDie::Minus);
        let g = transition(&mut dice, Some(&at(2, true)));
        assert_eq!(g.state.environment_row, 1);
        assert_eq!(g.state.type_row, 1);
        assert!(g.state.lost);
    }

    #[test]
    fn malformed_state_is_clamped() {
        let state = WildernessState {
            environment_row: 42,
            type_row: -3,
            lost: false,
        };
        assert_eq!(state.clamped(), at(10, false));
    }

    #[test]
    fn lost_party_rolls_d6() {
        let outcome = encounter(&mut ScriptedDice::new([9]), &at(5, true), &EncounterOptions::default());
        assert_eq!(encounter_detail(&outcome).sides, 6);
        assert_eq!(encounter_detail(&outcome).roll, 6);
        assert_eq!(encounter_detail(&outcome).encounter, EncounterKind::Feature);
    }

    #[test]
    fn destination_or_lost_triggers_when_not_lost() {
        let outcome = encounter(&mut ScriptedDice::new([1]), &at(5, false), &EncounterOptions::default());
        assert_eq!(
            encounter_detail(&outcome).trigger,
            Some(EncounterTrigger::DestinationOrLost)
        );
        let lost = encounter(&mut ScriptedDice::new([1]), &at(5, true), &EncounterOptions::default());
        assert_eq!(encounter_detail(&lost).trigger, None);
    }

    #[test]
    fn river_road_finds_path_when_lost() {
        let outcome = encounter(&mut ScriptedDice::new([2]), &at(5, true), &EncounterOptions::default());
        assert_eq!(encounter_detail(&outcome).trigger, Some(EncounterTrigger::FoundPath));
        let found = at(5, true).apply_trigger(EncounterTrigger::FoundPath);
        assert!(!found.lost);
        let lost = at(5, false).apply_trigger(EncounterTrigger::DestinationOrLost);
        assert!(lost.lost);
    }

    #[test]
    fn modifiers_pick_the_pool_mode() {
        let options = EncounterOptions {
            modifiers: vec![WildernessModifier::HasMap, WildernessModifier::Guide],
        };
        assert_eq!(options.roll_mode(), RollMode::Advantage);
        let outcome = encounter(&mut ScriptedDice::new([3, 9]), &at(5, false), &options);
        assert_eq!(encounter_detail(&outcome).roll, 9);

        let options = EncounterOptions {
            modifiers: vec![WildernessModifier::HasMap, WildernessModifier::BadWeather],
        };
        assert_eq!(options.roll_mode(), RollMode::Straight);

        let options = EncounterOptions {
            modifiers: vec![WildernessModifier::DangerousTerrain],
        };
        assert_eq!(options.roll_mode(), RollMode::Disadvantage);
    }

    #[test]
    fn monster_encounter_cascades() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut dice = ScriptedDice::new([4]);
        let outcome = encounter(&mut dice, &at(2, false), &EncounterOptions::default());
        assert!(outcome.result.child(ResultKind::Monster).is_some());
        let other = encounter(&mut rng, &at(2, false), &EncounterOptions::default());
        let is_monster = encounter_detail(&other).encounter == EncounterKind::Monster;
        assert_eq!(other.result.child(ResultKind::Monster).is_some(), is_monster);
    }

    proptest! {
        #[test]
        fn environment_stays_on_the_table(seed in any::<u64>(), steps in 1usize..40) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = transition(&mut rng, None).state;
            for _ in 0..steps {
                state = transition(&mut rng, Some(&state)).state;
                prop_assert!((MIN_ROW..=MAX_ROW).contains(&state.environment_row));
                prop_assert!((MIN_ROW..=MAX_ROW).contains(&state.type_row));
                prop_assert!((state.type_row - state.environment_row).abs() <= 1);
            }
        }
    }
}
