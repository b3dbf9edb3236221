//! Plain structured records for history display and export.
//!
//! A [`RollRecord`] flattens a [`RollResult`] into the fields a caller needs
//! to store and rebuild it: the kind tag, the common fields, the
//! kind-specific detail as a JSON object, and the children as records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ResultDetail, ResultKind, RollResult};
use crate::error::{OracleError, OracleResult};

/// A serialized roll result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The result kind.
    pub kind: ResultKind,
    /// Human-readable name of the roll.
    pub label: String,
    /// Raw die values.
    pub dice: Vec<i32>,
    /// Numeric total.
    pub total: i32,
    /// Text interpretation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    /// Kind-specific fields.
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Embedded child records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RollRecord>,
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
}

impl RollResult {
    /// Flatten into a record, children included.
    pub fn to_record(&self) -> OracleResult<RollRecord> {
        let metadata = match serde_json::to_value(&self.detail)? {
            Value::Object(mut map) => {
                map.remove("kind");
                map
            }
            _ => Map::new(),
        };
        let children = self
            .children
            .iter()
            .map(RollResult::to_record)
            .collect::<OracleResult<Vec<_>>>()?;
        Ok(RollRecord {
            kind: self.kind(),
            label: self.label.clone(),
            dice: self.dice.clone(),
            total: self.total,
            interpretation: self.interpretation.clone(),
            metadata,
            children,
            timestamp: self.timestamp,
        })
    }

    /// Rebuild a result from a record, children included.
    pub fn from_record(record: RollRecord) -> OracleResult<Self> {
        let RollRecord {
            kind,
            label,
            dice,
            total,
            interpretation,
            mut metadata,
            children,
            timestamp,
        } = record;
        metadata.insert("kind".to_string(), Value::String(kind.as_str().to_string()));
        let detail: ResultDetail = serde_json::from_value(Value::Object(metadata)).map_err(
            |source| OracleError::MalformedRecord {
                kind: kind.to_string(),
                source,
            },
        )?;
        let children = children
            .into_iter()
            .map(RollResult::from_record)
            .collect::<OracleResult<Vec<_>>>()?;
        Ok(Self {
            label,
            dice,
            total,
            interpretation,
            detail,
            children,
            timestamp,
        })
    }
}

impl RollRecord {
    /// Encode as a JSON string.
    pub fn to_json(&self) -> OracleResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a JSON string. An unrecognised kind tag is reported as
    /// [`OracleError::UnknownKind`].
    pub fn from_json(json: &str) -> OracleResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let unknown = value
            .get("kind")
            .and_then(Value::as_str)
            .filter(|tag| ResultKind::parse(tag).is_none());
        if let Some(tag) = unknown {
            return Err(OracleError::UnknownKind(tag.to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use juice_dice::{DiceExpr, Die, RollMode};

    use super::*;
    use crate::config::EngineConfig;
    use crate::generator::wilderness::{EncounterOptions, WildernessModifier};
    use crate::generator::{DungeonOptions, DungeonState, TrapOptions};
    use crate::oracle::{ChallengeOptions, FateCheckOptions};
    use crate::result::WordDetail;
    use crate::session::OracleSession;

    fn history() -> RollResult {
        RollResult::summed(
            "History",
            vec![4],
            ResultDetail::History(WordDetail {
                table: "History".to_string(),
                roll: 4,
                word: "Current Thread".to_string(),
            }),
        )
        .with_interpretation("Current Thread")
    }

    #[test]
    fn record_drops_kind_from_metadata() {
        let record = history().to_record().unwrap();
        assert_eq!(record.kind, ResultKind::History);
        assert!(!record.metadata.contains_key("kind"));
        assert_eq!(record.metadata["word"], "Current Thread");
    }

    #[test]
    fn record_round_trip_keeps_children() {
        let parent = history().with_child(history());
        let record = parent.to_record().unwrap();
        let json = record.to_json().unwrap();
        let back = RollResult::from_record(RollRecord::from_json(&json).unwrap()).unwrap();
        assert_eq!(back, parent);
        assert_eq!(back.children.len(), 1);
    }

    fn collect_kinds(result: &RollResult, seen: &mut HashSet<ResultKind>) {
        seen.insert(result.kind());
        for child in &result.children {
            collect_kinds(child, seen);
        }
    }

    fn roll_everything(session: &mut OracleSession) -> Vec<RollResult> {
        let dungeon = DungeonOptions {
            include_passage: true,
            include_condition: true,
            passage_mode: RollMode::Advantage,
            ..DungeonOptions::default()
        };
        let finished = DungeonState {
            stop_map_generation: true,
            ..DungeonState::default()
        };
        let hex = session.wilderness(None);
        let encounter = EncounterOptions {
            modifiers: vec![WildernessModifier::DangerousTerrain],
        };
        vec![
            session.roll(DiceExpr::new(2, Die::D6).with_modifier(1), RollMode::Disadvantage),
            session.skewed_d6(-2),
            session.fate_check(FateCheckOptions::default().with_primary_left(true)),
            session.next_scene(),
            session.random_event(),
            session.color(),
            session.property(),
            session.detail(),
            session.history(),
            session.challenge(ChallengeOptions::default()),
            session.pay_the_price(),
            session.dialog(None).result,
            session.dungeon(None, dungeon).result,
            session.dungeon(Some(&finished), dungeon).result,
            session.trap(TrapOptions {
                check: Some(12),
                ..TrapOptions::default()
            }),
            session.encounter(&hex.state, &encounter),
            session.monster(&hex.state),
            hex.result,
        ]
    }

    #[test]
    fn every_kind_round_trips_through_records() {
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut session = OracleSession::new(EngineConfig::default().with_seed(seed));
            for result in roll_everything(&mut session) {
                collect_kinds(&result, &mut seen);
                let json = result.to_record().unwrap().to_json().unwrap();
                let back = RollResult::from_record(RollRecord::from_json(&json).unwrap()).unwrap();
                assert_eq!(back, result, "seed {seed}, kind {}", result.kind());
            }
        }
        for kind in ResultKind::all() {
            assert!(seen.contains(kind), "{kind} never rolled");
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let json = r#"{"kind":"horoscope","label":"x","dice":[],"total":0,"timestamp":"2024-01-01T00:00:00Z"}"#;
        assert!(matches!(
            RollRecord::from_json(json),
            Err(OracleError::UnknownKind(k)) if k == "horoscope"
        ));
    }

    #[test]
    fn mismatched_metadata_is_malformed() {
        let mut record = history().to_record().unwrap();
        record.kind = ResultKind::FateCheck;
        assert!(matches!(
            RollResult::from_record(record),
            Err(OracleError::MalformedRecord { .. })
        ));
    }
}
