use sqlx::PgPool;
use uuid::Uuid;

use crate::models::game::{Game, ScheduleGameRequest, Team};

pub async fn insert_team(
    pool: &PgPool,
    name: &str,
    short_name: &str,
    competition: &str,
) -> Result<Team, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (id, name, short_name, competition, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(short_name)
    .bind(competition)
    .fetch_one(pool)
    .await
}

pub async fn get_team(pool: &PgPool, team_id: Uuid) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_teams(pool: &PgPool, competition: &str) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        "SELECT * FROM teams WHERE competition = $1 ORDER BY name ASC",
    )
    .bind(competition)
    .fetch_all(pool)
    .await
}

pub async fn insert_game(
    pool: &PgPool,
    request: &ScheduleGameRequest,
) -> Result<Game, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"
        INSERT INTO games (id, competition, season, week, home_team_id, away_team_id,
                           status, start_time, kickoff_date, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, 'not_started', $7, $8, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.competition)
    .bind(&request.season)
    .bind(request.week)
    .bind(request.home_team_id)
    .bind(request.away_team_id)
    .bind(request.start_time)
    .bind(request.kickoff_date)
    .fetch_one(pool)
    .await
}

pub async fn get_game(pool: &PgPool, game_id: Uuid) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
        .bind(game_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_games_for_week(
    pool: &PgPool,
    competition: &str,
    season: &str,
    week: i32,
) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"
        SELECT * FROM games
        WHERE competition = $1 AND season = $2 AND week = $3
        ORDER BY start_time ASC NULLS LAST
        "#,
    )
    .bind(competition)
    .bind(season)
    .bind(week)
    .fetch_all(pool)
    .await
}

/// Record a final score. Completed is terminal for the stored status;
/// only the manual override can present anything else afterwards.
pub async fn record_result(
    pool: &PgPool,
    game_id: Uuid,
    home_score: i32,
    away_score: i32,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"
        UPDATE games
        SET home_score = $1,
            away_score = $2,
            status = 'completed',
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(home_score)
    .bind(away_score)
    .bind(game_id)
    .fetch_optional(pool)
    .await
}

pub async fn set_status_override(
    pool: &PgPool,
    game_id: Uuid,
    status_override: Option<&str>,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"
        UPDATE games
        SET status_override = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(status_override)
    .bind(game_id)
    .fetch_optional(pool)
    .await
}
