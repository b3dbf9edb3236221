//! Monster encounters by environment.
//!
//! Two d6 pick the monster. Doubles are always bandits. Otherwise the first
//! die reads the environment's six-entry row and the second die sets the
//! tier: higher is elite, lower is weak. Forests hide fey in their sixth
//! slot, read from a separate d6 table. A count d6 decides how many show up.

use juice_dice::{DiceSource, RollMode};
use serde::{Deserialize, Serialize};

use super::wilderness::{Environment, WildernessState};
use crate::oracle::Outcome;
use crate::result::{ResultDetail, RollResult};
use crate::table::{LookupTable, TableEntry};

/// What doubles on the monster dice always bring.
pub const BANDITS: &str = "Bandits";

/// Forest fey, read when a forest row rolls its sixth slot.
pub const FEY: [&str; 6] = ["Pixie", "Sprite", "Dryad", "Satyr", "Redcap", "Fey Noble"];

/// Slot of the forest row that defers to [`FEY`].
pub const FEY_SLOT: u32 = 6;

/// The six monsters of an environment's row.
pub fn monster_row(environment: Environment) -> [&'static str; 6] {
    match environment {
        Environment::Arctic => [
            "Snow Wolf",
            "Ice Troll",
            "Yeti",
            "Frost Giant",
            "Winter Wraith",
            "White Dragon",
        ],
        Environment::Mountains => [
            "Giant Eagle",
            "Ogre",
            "Griffon",
            "Hill Giant",
            "Wyvern",
            "Stone Golem",
        ],
        Environment::Cavern => [
            "Giant Bat",
            "Goblin",
            "Giant Spider",
            "Troglodyte",
            "Ooze",
            "Deep Horror",
        ],
        Environment::Hills => [
            "Giant Boar",
            "Orc",
            "Hobgoblin",
            "Ogre",
            "Werewolf",
            "Manticore",
        ],
        Environment::Grassland => [
            "Wild Horse",
            "Gnoll",
            "Lion",
            "Centaur",
            "Bulette",
            "Chimera",
        ],
        Environment::Forest => [
            "Wolf",
            "Giant Spider",
            "Dire Bear",
            "Werewolf",
            "Treant",
            "Fey",
        ],
        Environment::Swamp => [
            "Giant Frog",
            "Crocodile",
            "Lizardfolk",
            "Will-o'-Wisp",
            "Hag",
            "Black Dragon",
        ],
        Environment::Water => [
            "Giant Eel",
            "Giant Crab",
            "Merfolk",
            "Sea Raider",
            "Sea Serpent",
            "Kraken",
        ],
        Environment::Coast => [
            "Giant Crab",
            "Harpy",
            "Pirate",
            "Merrow",
            "Sea Hag",
            "Dragon Turtle",
        ],
        Environment::Desert => [
            "Giant Scorpion",
            "Jackal",
            "Mummy",
            "Lamia",
            "Sand Worm",
            "Blue Dragon",
        ],
    }
}

/// Monster tier from the second die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterModifier {
    /// Weaker than usual.
    Weak,
    /// Stronger than usual.
    Elite,
}

impl std::fmt::Display for MonsterModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Elite => write!(f, "Elite"),
        }
    }
}

/// How the group size is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountRule {
    /// A lone monster.
    One,
    /// 1d3+1.
    Few,
    /// 1d6+2.
    Pack,
}

/// Count d6.
pub const COUNT: LookupTable<CountRule> = LookupTable::new(
    "Monster Count",
    &[
        TableEntry::new(1, 3, CountRule::One),
        TableEntry::new(4, 5, CountRule::Few),
        TableEntry::single(6, CountRule::Pack),
    ],
);

/// Kind-specific fields of a monster encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterDetail {
    /// Environment the monster was drawn for.
    pub environment: Environment,
    /// The row die.
    pub row_die: u32,
    /// The tier die.
    pub tier_die: u32,
    /// Doubles brought bandits.
    pub bandits: bool,
    /// The fey d6, when a forest row deferred to the fey table.
    pub fey_roll: Option<u32>,
    /// The monster.
    pub monster: String,
    /// Weak or elite; `None` for bandits.
    pub modifier: Option<MonsterModifier>,
    /// The kept count die.
    pub count_roll: u32,
    /// Pool mode for the count die.
    pub count_mode: RollMode,
    /// Extra dice added to the group size.
    pub extra_dice: Vec<u32>,
    /// How many show up.
    pub count: u32,
}

/// Roll a monster encounter for the state's environment.
pub fn generate<R: DiceSource>(rng: &mut R, state: &WildernessState) -> Outcome {
    let environment = state.environment();
    let row_die = rng.roll_die(6);
    let tier_die = rng.roll_die(6);
    let mut dice = vec![row_die, tier_die];

    let bandits = row_die == tier_die;
    let mut fey_roll = None;
    let (monster, modifier) = if bandits {
        tracing::debug!(row_die, "monster doubles, bandits");
        (BANDITS, None)
    } else {
        let mut monster = monster_row(environment)[(row_die - 1) as usize];
        if environment == Environment::Forest && row_die == FEY_SLOT {
            let roll = rng.roll_die(6);
            dice.push(roll);
            fey_roll = Some(roll);
            monster = FEY[(roll - 1) as usize];
        }
        let modifier = if tier_die > row_die {
            MonsterModifier::Elite
        } else {
            MonsterModifier::Weak
        };
        (monster, Some(modifier))
    };

    let count_mode = match environment {
        Environment::Forest => RollMode::Disadvantage,
        _ => RollMode::Straight,
    };
    let pool = rng.roll_pool(count_mode, 1, 6);
    let count_roll = pool.chosen_sum();
    dice.extend(pool.all_dice());
    let (extra_dice, count) = match *COUNT.lookup_or(count_roll as i32, &CountRule::One) {
        CountRule::One => (Vec::new(), 1),
        CountRule::Few => {
            let extra = rng.roll_die(3);
            (vec![extra], extra + 1)
        }
        CountRule::Pack => {
            let extra = rng.roll_die(6);
            (vec![extra], extra + 2)
        }
    };
    dice.extend(extra_dice.iter().copied());

    let text = match modifier {
        Some(modifier) => format!("{count} × {modifier} {monster}"),
        None => format!("{count} × {monster}"),
    };
    let result = RollResult::new(
        "Monster",
        dice.into_iter().map(|d| d as i32).collect(),
        count as i32,
        ResultDetail::Monster(MonsterDetail {
            environment,
            row_die,
            tier_die,
            bandits,
            fey_roll,
            monster: monster.to_string(),
            modifier,
            count_roll,
            count_mode,
            extra_dice,
            count,
        }),
    )
    .with_interpretation(text);
    Outcome::done(result)
}
