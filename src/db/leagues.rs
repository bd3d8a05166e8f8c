use sqlx::PgPool;
use uuid::Uuid;

use crate::models::league::{CreateLeagueRequest, League};

pub async fn insert_league(
    pool: &PgPool,
    request: &CreateLeagueRequest,
    created_by: Uuid,
) -> Result<League, sqlx::Error> {
    let league = sqlx::query_as::<_, League>(
        r#"
        INSERT INTO leagues (id, name, competition, season, current_pick_week, current_game_week,
                             max_strikes, created_by, created_at, updated_at)
        VALUES ($1, $2, $3, $4, 0, 0, $5, $6, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(&request.competition)
    .bind(&request.season)
    .bind(request.max_strikes.unwrap_or(3))
    .bind(created_by)
    .fetch_one(pool)
    .await?;

    Ok(league)
}

pub async fn get_league(pool: &PgPool, league_id: Uuid) -> Result<Option<League>, sqlx::Error> {
    sqlx::query_as::<_, League>("SELECT * FROM leagues WHERE id = $1")
        .bind(league_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_leagues(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<League>, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        SELECT * FROM leagues
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn count_leagues(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM leagues")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}

pub async fn member_count(pool: &PgPool, league_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*) FROM league_members
        WHERE league_id = $1 AND status IN ('active', 'eliminated')
        "#,
    )
    .bind(league_id)
    .fetch_one(pool)
    .await?;
    Ok(count.0)
}

pub async fn update_settings(
    pool: &PgPool,
    league_id: Uuid,
    name: Option<&str>,
    max_strikes: Option<i32>,
) -> Result<Option<League>, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        UPDATE leagues
        SET name = COALESCE($1, name),
            max_strikes = COALESCE($2, max_strikes),
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(max_strikes)
    .bind(league_id)
    .fetch_optional(pool)
    .await
}

pub async fn update_week_pointers(
    pool: &PgPool,
    league_id: Uuid,
    current_pick_week: i32,
    current_game_week: i32,
) -> Result<Option<League>, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        UPDATE leagues
        SET current_pick_week = $1,
            current_game_week = $2,
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(current_pick_week)
    .bind(current_game_week)
    .bind(league_id)
    .fetch_optional(pool)
    .await
}
