use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const PLAYER_WIN: &str = "player_win";
pub const AI_WIN: &str = "ai_win";

/// Aggregate counters for every game reported since process start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub total_games: u64,
    pub player_wins: u64,
    pub ai_wins: u64,
    pub highest_score: u64,
}

impl GameStats {
    /// Returns the record with `update` applied, leaving `self` untouched.
    ///
    /// Every field is computed before anything is returned, so a failure
    /// never yields a half-applied record.
    pub fn apply(&self, update: &StatsUpdate) -> Result<GameStats, StatsError> {
        let mut next = *self;

        if let Some(result) = &update.result {
            next.total_games = increment(next.total_games, "total_games")?;
            match result {
                GameResult::PlayerWin => {
                    next.player_wins = increment(next.player_wins, "player_wins")?;
                }
                GameResult::AiWin => {
                    next.ai_wins = increment(next.ai_wins, "ai_wins")?;
                }
                GameResult::Other(_) => {}
            }
        }

        if let Some(score) = update.score {
            next.highest_score = next.highest_score.max(score);
        }

        Ok(next)
    }
}

fn increment(value: u64, field: &str) -> Result<u64, StatsError> {
    value
        .checked_add(1)
        .ok_or_else(|| StatsError::Internal(format!("{} counter overflow", field)))
}

/// Outcome carried by the `result` field of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    PlayerWin,
    AiWin,
    /// Anything else. Still counted as a played game.
    Other(String),
}

impl GameResult {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(tag) => Self::from_tag(tag),
            other => GameResult::Other(other.to_string()),
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            PLAYER_WIN => GameResult::PlayerWin,
            AI_WIN => GameResult::AiWin,
            other => GameResult::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            GameResult::PlayerWin => PLAYER_WIN,
            GameResult::AiWin => AI_WIN,
            GameResult::Other(tag) => tag,
        }
    }
}

impl FromStr for GameResult {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GameResult::from_tag(s))
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Parsed body of `POST /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsUpdate {
    pub result: Option<GameResult>,
    /// Negative scores are dropped here, they can never beat the zero floor.
    pub score: Option<u64>,
}

impl StatsUpdate {
    /// Parses a raw request body.
    ///
    /// Missing, malformed or `null` bodies are a bad request. Arrays and
    /// strings are searched for the field names: when neither appears the
    /// update is empty, otherwise the fields cannot be read and the body is
    /// an internal fault. Numbers and booleans are always a fault.
    pub fn from_body(body: &[u8]) -> Result<Self, StatsError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(StatsError::no_json_data());
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|_| StatsError::no_json_data())?;

        match value {
            Value::Null => Err(StatsError::no_json_data()),
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            other => Self::from_non_object(&other),
        }
    }

    fn from_non_object(value: &Value) -> Result<Self, StatsError> {
        let mentions = |field: &str| match value {
            Value::Array(items) => items.iter().any(|item| item.as_str() == Some(field)),
            Value::String(text) => text.contains(field),
            _ => true,
        };

        match ["result", "score"].into_iter().find(|field| mentions(*field)) {
            Some(field) => Err(StatsError::Internal(format!(
                "cannot read field `{}` from a JSON {}",
                field,
                json_kind(value)
            ))),
            None => Ok(Self::default()),
        }
    }

    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            result: fields.get("result").map(GameResult::from_value),
            score: fields.get("score").and_then(Value::as_u64),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(body: Value) -> StatsUpdate {
        StatsUpdate::from_body(body.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn parses_recognized_tags_and_integer_score() {
        let parsed = update(json!({"result": "player_win", "score": 42}));
        assert_eq!(parsed.result, Some(GameResult::PlayerWin));
        assert_eq!(parsed.score, Some(42));

        let parsed = update(json!({"result": "ai_win"}));
        assert_eq!(parsed.result, Some(GameResult::AiWin));
        assert_eq!(parsed.score, None);
    }

    #[test]
    fn any_result_value_is_kept_as_other() {
        assert_eq!(
            update(json!({"result": "draw"})).result,
            Some(GameResult::Other("draw".to_string()))
        );
        assert_eq!(
            update(json!({"result": 7})).result,
            Some(GameResult::Other("7".to_string()))
        );
        assert_eq!(
            update(json!({"result": null})).result,
            Some(GameResult::Other("null".to_string()))
        );
    }

    #[test]
    fn non_integer_scores_are_ignored() {
        assert_eq!(update(json!({"score": 12.5})).score, None);
        assert_eq!(update(json!({"score": "99"})).score, None);
        assert_eq!(update(json!({"score": true})).score, None);
        assert_eq!(update(json!({"score": null})).score, None);
        assert_eq!(update(json!({"score": -3})).score, None);
    }

    #[test]
    fn scores_beyond_i64_are_kept() {
        let parsed = update(json!({"score": 10_000_000_000_000_000_000u64}));
        assert_eq!(parsed.score, Some(10_000_000_000_000_000_000));

        let next = GameStats::default().apply(&parsed).unwrap();
        assert_eq!(next.highest_score, 10_000_000_000_000_000_000);
    }

    #[test]
    fn empty_invalid_and_null_bodies_are_bad_requests() {
        for body in ["", "   ", "{not json", "null"] {
            assert_eq!(
                StatsUpdate::from_body(body.as_bytes()),
                Err(StatsError::no_json_data()),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn non_object_json_naming_a_field_is_an_internal_fault() {
        let cases: [(&[u8], &str); 4] = [
            (b"[\"result\"]", "cannot read field `result` from a JSON array"),
            (b"[1, \"score\"]", "cannot read field `score` from a JSON array"),
            (b"\"my score\"", "cannot read field `score` from a JSON string"),
            (b"42", "cannot read field `result` from a JSON number"),
        ];

        for (body, message) in cases {
            assert_eq!(
                StatsUpdate::from_body(body),
                Err(StatsError::Internal(message.to_string()))
            );
        }
        assert!(StatsUpdate::from_body(b"true").is_err());
    }

    #[test]
    fn non_object_json_without_fields_is_an_empty_update() {
        for body in ["[]", "[\"player_win\", 3]", "\"abc\""] {
            assert_eq!(
                StatsUpdate::from_body(body.as_bytes()),
                Ok(StatsUpdate::default()),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn apply_counts_unrecognized_result_as_game_only() {
        let next = GameStats::default()
            .apply(&StatsUpdate {
                result: Some(GameResult::Other("draw".to_string())),
                score: None,
            })
            .unwrap();
        assert_eq!(
            next,
            GameStats {
                total_games: 1,
                ..GameStats::default()
            }
        );
    }

    #[test]
    fn apply_keeps_the_highest_score() {
        let stats = GameStats {
            highest_score: 50,
            ..GameStats::default()
        };
        let lower = stats
            .apply(&StatsUpdate {
                result: None,
                score: Some(10),
            })
            .unwrap();
        assert_eq!(lower.highest_score, 50);

        let higher = stats
            .apply(&StatsUpdate {
                result: None,
                score: Some(51),
            })
            .unwrap();
        assert_eq!(higher.highest_score, 51);
    }

    #[test]
    fn apply_reports_overflow_without_partial_update() {
        let stats = GameStats {
            total_games: u64::MAX,
            ..GameStats::default()
        };
        let err = stats
            .apply(&StatsUpdate {
                result: Some(GameResult::PlayerWin),
                score: Some(5),
            })
            .unwrap_err();
        assert_eq!(
            err,
            StatsError::Internal("total_games counter overflow".to_string())
        );
        assert_eq!(stats.total_games, u64::MAX);
        assert_eq!(stats.highest_score, 0);
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        assert_eq!("player_win".parse::<GameResult>().unwrap(), GameResult::PlayerWin);
        assert_eq!(GameResult::AiWin.to_string(), "ai_win");
        assert_eq!(GameResult::Other("tie".to_string()).as_tag(), "tie");
    }
}
