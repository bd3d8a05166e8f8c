use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::league::{LeagueStandingsResponse, MemberStanding};

/// Service responsible for survivor standings
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Members ordered by points, fewest strikes breaking ties. Eliminated
    /// members stay on the board; pending and removed ones do not appear.
    pub async fn get_league_standings(
        &self,
        league_id: Uuid,
    ) -> Result<LeagueStandingsResponse, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT
                lm.user_id,
                u.username,
                lm.points,
                lm.strikes,
                lm.status,
                COUNT(p.id) AS picks_made
            FROM league_members lm
            INNER JOIN users u ON u.id = lm.user_id
            LEFT JOIN picks p ON p.league_id = lm.league_id AND p.user_id = lm.user_id
            WHERE lm.league_id = $1 AND lm.status IN ('active', 'eliminated')
            GROUP BY lm.user_id, u.username, lm.points, lm.strikes, lm.status
            ORDER BY lm.points DESC, lm.strikes ASC, u.username ASC
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        let standings = rows
            .into_iter()
            .map(|row| MemberStanding {
                user_id: row.get("user_id"),
                username: row.get("username"),
                points: row.get("points"),
                strikes: row.get("strikes"),
                picks_made: row.get("picks_made"),
                status: row.get("status"),
            })
            .collect();

        Ok(LeagueStandingsResponse {
            league_id,
            standings,
            last_updated: Utc::now(),
        })
    }
}
