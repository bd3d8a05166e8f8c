use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{leagues, memberships, picks};
use crate::models::common::MatchResult;
use crate::models::game::Game;
use crate::models::membership::MemberStatus;
use crate::models::pick::PickResult;

const POINTS_FOR_WIN: i32 = 3;
const POINTS_FOR_DRAW: i32 = 1;

#[derive(Debug, Default, Serialize)]
pub struct AppliedResults {
    pub picks_settled: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub eliminations: usize,
}

/// Service that settles picks once a game has a final score: pick results,
/// points, strikes, and eliminations.
pub struct ScoringService {
    pool: PgPool,
}

impl ScoringService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply a finished game's score to every pick referencing it. The same
    /// game can be picked across many leagues, so strike limits are looked
    /// up per league.
    pub async fn apply_game_result(&self, game: &Game) -> Result<AppliedResults, sqlx::Error> {
        let (home_score, away_score) = match (game.home_score, game.away_score) {
            (Some(h), Some(a)) => (h, a),
            _ => {
                tracing::warn!("Game {} has no final score to apply", game.id);
                return Ok(AppliedResults::default());
            }
        };

        let affected = picks::picks_for_game(&self.pool, game.id).await?;
        let mut max_strikes_by_league: HashMap<Uuid, i32> = HashMap::new();
        let mut applied = AppliedResults::default();

        for pick in affected {
            let result = if pick.team_id == game.home_team_id {
                MatchResult::from_scores(home_score, away_score)
            } else {
                MatchResult::from_scores(away_score, home_score)
            };

            // Settling is idempotent per pick
            if pick.result != PickResult::Unset {
                continue;
            }

            let (pick_result, points_delta, strikes_delta) = match result {
                MatchResult::Win => (PickResult::Win, POINTS_FOR_WIN, 0),
                MatchResult::Draw => (PickResult::Draw, POINTS_FOR_DRAW, 0),
                MatchResult::Loss => (PickResult::Loss, 0, 1),
            };

            picks::set_result(&self.pool, pick.id, pick_result).await?;

            let member = memberships::apply_score_delta(
                &self.pool,
                pick.league_id,
                pick.user_id,
                points_delta,
                strikes_delta,
            ).await?;

            applied.picks_settled += 1;
            match result {
                MatchResult::Win => applied.wins += 1,
                MatchResult::Draw => applied.draws += 1,
                MatchResult::Loss => applied.losses += 1,
            }

            if let Some(member) = member {
                let max_strikes = match max_strikes_by_league.get(&pick.league_id) {
                    Some(limit) => *limit,
                    None => {
                        let limit = leagues::get_league(&self.pool, pick.league_id)
                            .await?
                            .map(|l| l.max_strikes)
                            .unwrap_or(i32::MAX);
                        max_strikes_by_league.insert(pick.league_id, limit);
                        limit
                    }
                };

                if member.strikes >= max_strikes && member.status == MemberStatus::Active {
                    memberships::set_status(
                        &self.pool,
                        pick.league_id,
                        pick.user_id,
                        MemberStatus::Eliminated,
                    ).await?;
                    applied.eliminations += 1;
                    tracing::info!(
                        "User {} eliminated from league {} ({} strikes)",
                        pick.user_id, pick.league_id, member.strikes
                    );
                }
            }
        }

        tracing::info!(
            "Settled {} picks for game {} ({} wins, {} draws, {} losses, {} eliminations)",
            applied.picks_settled, game.id, applied.wins, applied.draws, applied.losses, applied.eliminations
        );
        Ok(applied)
    }
}
