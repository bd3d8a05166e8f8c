use serde::{Deserialize, Serialize};

/// Outcome of a finished game from one team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Result for the named side given a final score.
    pub fn from_scores(own_score: i32, opponent_score: i32) -> Self {
        if own_score > opponent_score {
            MatchResult::Win
        } else if own_score < opponent_score {
            MatchResult::Loss
        } else {
            MatchResult::Draw
        }
    }
}
