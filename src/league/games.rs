use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::games;
use crate::league::eligibility::EligibilityService;
use crate::models::game::{Game, GameWithStatus};
use crate::models::league::League;

/// Service responsible for presenting games to league members
pub struct GameService {
    pool: PgPool,
    eligibility: EligibilityService,
}

impl GameService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            eligibility: EligibilityService::new(),
        }
    }

    /// All games of the league's competition/season for a week, annotated
    /// with the status the engine computes at `now` and whether a pick from
    /// the game is still allowed.
    pub async fn week_games(
        &self,
        league: &League,
        week: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<GameWithStatus>, sqlx::Error> {
        let games_for_week =
            games::list_games_for_week(&self.pool, &league.competition, &league.season, week).await?;

        let team_names = self.team_name_map(&league.competition).await?;

        Ok(games_for_week
            .into_iter()
            .map(|game| self.annotate(game, &team_names, now))
            .collect())
    }

    pub async fn get_game_with_status(
        &self,
        game_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<GameWithStatus>, sqlx::Error> {
        let game = match games::get_game(&self.pool, game_id).await? {
            Some(game) => game,
            None => return Ok(None),
        };

        let team_names = self.team_name_map(&game.competition).await?;
        Ok(Some(self.annotate(game, &team_names, now)))
    }

    async fn team_name_map(&self, competition: &str) -> Result<HashMap<Uuid, String>, sqlx::Error> {
        let teams = games::list_teams(&self.pool, competition).await?;
        Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
    }

    fn annotate(
        &self,
        game: Game,
        team_names: &HashMap<Uuid, String>,
        now: DateTime<Utc>,
    ) -> GameWithStatus {
        let display_status = self.eligibility.game_status(&game, now);
        let pickable = self.eligibility.can_pick_from_game(&game, now);

        let unknown = || "Unknown".to_string();
        GameWithStatus {
            home_team_name: team_names.get(&game.home_team_id).cloned().unwrap_or_else(unknown),
            away_team_name: team_names.get(&game.away_team_id).cloned().unwrap_or_else(unknown),
            display_status,
            pickable,
            game,
        }
    }
}
