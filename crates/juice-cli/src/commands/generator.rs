use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use juice_dice::RollMode;
use juice_oracle::OracleSession;
use juice_oracle::generator::dialog::DialogState;
use juice_oracle::generator::wilderness::{EncounterOptions, WildernessModifier, WildernessState};
use juice_oracle::generator::{DungeonOptions, DungeonState, Generated, TrapOptions};
use juice_oracle::oracle::DcSkew;
use juice_oracle::{ResultDetail, RollResult};

use super::{Output, load_state, save_state};

pub fn dialog(
    session: &mut OracleSession,
    out: &Output,
    path: Option<&Path>,
    bulk: bool,
) -> miette::Result<()> {
    let state: Option<DialogState> = load_state(path)?;
    if bulk {
        let convo = session.conversation(state.as_ref());
        if out.json {
            out.results(&convo.exchanges)?;
        } else {
            print_conversation(&convo.exchanges);
        }
        save_state(path, &convo.state)
    } else {
        let Generated { result, state } = session.dialog(state.as_ref());
        out.result(&result)?;
        if !state.active {
            out.note("the conversation is over; the next roll starts a new one");
        }
        save_state(path, &state)
    }
}

fn print_conversation(exchanges: &[RollResult]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Move", "Square", "Subject", "Dice"]);
    for (idx, exchange) in exchanges.iter().enumerate() {
        let ResultDetail::DialogGrid(detail) = &exchange.detail else {
            continue;
        };
        let movement = match detail.direction {
            Some(direction) => direction.to_string(),
            None => "End".to_string(),
        };
        let dice: Vec<String> = exchange.dice.iter().map(|d| d.to_string()).collect();
        table.add_row(vec![
            (idx + 1).to_string(),
            movement,
            detail.label.clone(),
            detail.subject.word.clone(),
            dice.join(", "),
        ]);
    }
    println!("{table}");
}

/// Dungeon command flags.
pub struct DungeonFlags<'a> {
    pub two_pass: bool,
    pub passage: bool,
    pub passage_mode: &'a str,
    pub condition: bool,
    pub occupied: bool,
}

pub fn dungeon(
    session: &mut OracleSession,
    out: &Output,
    path: Option<&Path>,
    flags: DungeonFlags<'_>,
) -> miette::Result<()> {
    let passage_mode = RollMode::parse(flags.passage_mode).unwrap_or_else(|| {
        tracing::warn!(mode = flags.passage_mode, "unknown passage mode, rolling straight");
        RollMode::default()
    });
    let options = DungeonOptions {
        two_pass: flags.two_pass,
        include_passage: flags.passage,
        passage_mode,
        include_condition: flags.condition,
        occupied: flags.occupied,
    };
    let state: Option<DungeonState> = load_state(path)?;
    let Generated { result, state } = session.dungeon(state.as_ref(), options);
    out.result(&result)?;
    if state.stop_map_generation {
        out.note("the map is complete");
    }
    save_state(path, &state)
}

pub fn trap(
    session: &mut OracleSession,
    out: &Output,
    searching: bool,
    easy: bool,
    hard: bool,
    check: Option<i32>,
) -> miette::Result<()> {
    let options = TrapOptions {
        searching,
        skew: DcSkew::from_flags(easy, hard),
        check,
    };
    out.result(&session.trap(options))
}

/// Wilderness command flags.
#[derive(Clone, Copy)]
pub struct WildernessFlags {
    pub map: bool,
    pub guide: bool,
    pub dangerous: bool,
    pub weather: bool,
    pub apply_trigger: bool,
}

impl WildernessFlags {
    fn options(self) -> EncounterOptions {
        let modifiers = [
            (self.map, WildernessModifier::HasMap),
            (self.guide, WildernessModifier::Guide),
            (self.dangerous, WildernessModifier::DangerousTerrain),
            (self.weather, WildernessModifier::BadWeather),
        ]
        .into_iter()
        .filter_map(|(on, modifier)| on.then_some(modifier))
        .collect();
        EncounterOptions { modifiers }
    }
}

pub fn wilderness_move(
    session: &mut OracleSession,
    out: &Output,
    path: Option<&Path>,
) -> miette::Result<()> {
    let state: Option<WildernessState> = load_state(path)?;
    let Generated { result, state } = session.wilderness(state.as_ref());
    out.result(&result)?;
    save_state(path, &state)
}

/// Encounters and monsters need a current hex; without a state file one is
/// rolled first.
fn current_hex(
    session: &mut OracleSession,
    out: &Output,
    path: Option<&Path>,
) -> miette::Result<WildernessState> {
    let state: Option<WildernessState> = load_state(path)?;
    match state {
        Some(state) => Ok(state),
        None => {
            let Generated { result, state } = session.wilderness(None);
            out.note(&format!("no current hex, starting in {}", state.terrain()));
            tracing::debug!(result = %result, "rolled a starting hex");
            save_state(path, &state)?;
            Ok(state)
        }
    }
}

pub fn wilderness_encounter(
    session: &mut OracleSession,
    out: &Output,
    path: Option<&Path>,
    flags: WildernessFlags,
) -> miette::Result<()> {
    let state = current_hex(session, out, path)?;
    let result = session.encounter(&state, &flags.options());
    out.result(&result)?;

    let trigger = match &result.detail {
        ResultDetail::WildernessEncounter(detail) => detail.trigger,
        _ => None,
    };
    if let (Some(trigger), true) = (trigger, flags.apply_trigger) {
        let next = state.apply_trigger(trigger);
        if next.lost != state.lost {
            out.note(if next.lost {
                "the party is lost"
            } else {
                "the party found its way"
            });
        }
        save_state(path, &next)?;
    }
    Ok(())
}

pub fn wilderness_monster(
    session: &mut OracleSession,
    out: &Output,
    path: Option<&Path>,
) -> miette::Result<()> {
    let state = current_hex(session, out, path)?;
    out.result(&session.monster(&state))
}
