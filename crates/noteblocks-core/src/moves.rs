//! Relocation records and the bounded per-block move history.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::defaults::MAX_MOVES_HISTORY;

macro_rules! int_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            #[default]
            $($variant = $value),+
        }

        impl $name {
            pub fn as_i64(&self) -> i64 {
                *self as i64
            }
        }

        impl TryFrom<i64> for $name {
            type Error = String;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                match value {
                    $(v if v == $value => Ok(Self::$variant),)+
                    other => Err(format!("Invalid {}: {}", stringify!($name), other)),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.as_i64())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = i64::deserialize(deserializer)?;
                Self::try_from(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

int_enum! {
    /// What a block was moved from or to. Serialized as an integer.
    DestinationType { Space = 0, Note = 1, Block = 2 }
}

int_enum! {
    /// Why a block was moved. Serialized as an integer.
    MoveReason { Manual = 0, Router = 1 }
}

/// A single relocation of a block.
///
/// Fields absent from a stored record load as their zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Move {
    pub from_type: DestinationType,
    pub from_id: Uuid,
    pub to_type: DestinationType,
    pub to_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub reason: MoveReason,
    /// Router confidence in `[0, 1]`; 1.0 for manual moves.
    pub accuracy: f64,
    pub reasoning: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub reasoning_keywords: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub space_keywords: Vec<String>,
}

impl Move {
    /// A user-initiated move.
    pub fn manual(from_type: DestinationType, from_id: Uuid, to_type: DestinationType, to_id: Uuid) -> Self {
        Self {
            from_type,
            from_id,
            to_type,
            to_id,
            timestamp: Utc::now(),
            reason: MoveReason::Manual,
            accuracy: 1.0,
            reasoning: String::new(),
            reasoning_keywords: Vec::new(),
            space_keywords: Vec::new(),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Most recent moves of a block, oldest first.
///
/// Holds at most [`MAX_MOVES_HISTORY`] records; pushing beyond that evicts
/// the oldest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveHistory(VecDeque<Move>);

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Move) {
        if self.0.len() == MAX_MOVES_HISTORY {
            self.0.pop_front();
        }
        self.0.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.0.iter()
    }

    pub fn latest(&self) -> Option<&Move> {
        self.0.back()
    }
}

impl Extend<Move> for MoveHistory {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut history = Self::new();
        history.extend(iter);
        history
    }
}

impl Serialize for MoveHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for MoveHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Option::<Vec<Move>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(records.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(n: u128) -> Move {
        Move::manual(
            DestinationType::Space,
            Uuid::from_u128(n),
            DestinationType::Note,
            Uuid::from_u128(n + 1000),
        )
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = MoveHistory::new();
        for n in 0..25 {
            history.push(record(n));
        }
        assert_eq!(history.len(), MAX_MOVES_HISTORY);
        let ids: Vec<u128> = history.iter().map(|m| m.from_id.as_u128()).collect();
        assert_eq!(ids, (5..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_deserialize_keeps_most_recent() {
        let records: Vec<Move> = (0..22).map(record).collect();
        let json = serde_json::to_string(&records).unwrap();
        let history: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), MAX_MOVES_HISTORY);
        assert_eq!(history.iter().next().unwrap().from_id, Uuid::from_u128(2));
        assert_eq!(history.latest().unwrap().from_id, Uuid::from_u128(21));
    }

    #[test]
    fn test_record_missing_fields_loads_zeroed() {
        let record: Move = serde_json::from_value(json!({
            "from_type": 0,
            "from_id": "11111111-1111-4111-8111-111111111111",
            "to_type": 1,
            "to_id": "22222222-2222-4222-8222-222222222222",
            "reason": 1
        }))
        .unwrap();
        assert_eq!(record.timestamp, DateTime::<Utc>::default());
        assert_eq!(record.accuracy, 0.0);
        assert_eq!(record.reason, MoveReason::Router);
        assert!(record.reasoning.is_empty());
        assert!(record.reasoning_keywords.is_empty());
    }

    #[test]
    fn test_deserialize_null_history() {
        let history: MoveHistory = serde_json::from_value(json!(null)).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_enums_serialize_as_integers() {
        let value = serde_json::to_value(record(1)).unwrap();
        assert_eq!(value["from_type"], json!(0));
        assert_eq!(value["to_type"], json!(1));
        assert_eq!(value["reason"], json!(0));

        assert_eq!(DestinationType::try_from(2).unwrap(), DestinationType::Block);
        assert_eq!(MoveReason::try_from(1).unwrap(), MoveReason::Router);
        assert!(MoveReason::try_from(7).is_err());
        assert!(serde_json::from_value::<DestinationType>(json!(9)).is_err());
    }

    #[test]
    fn test_move_null_keywords() {
        let value = json!({
            "from_type": 0,
            "from_id": Uuid::nil(),
            "to_type": 2,
            "to_id": Uuid::nil(),
            "timestamp": "2024-01-01T00:00:00Z",
            "reason": 1,
            "accuracy": 0.8,
            "reasoning": "",
            "reasoning_keywords": null,
            "space_keywords": ["travel"]
        });
        let parsed: Move = serde_json::from_value(value).unwrap();
        assert!(parsed.reasoning_keywords.is_empty());
        assert_eq!(parsed.space_keywords, vec!["travel"]);
    }
}
