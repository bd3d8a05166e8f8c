use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::models::pick::{Pick, PickResult, PickWithTeam};

pub async fn get_user_pick(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
    week: i32,
) -> Result<Option<Pick>, sqlx::Error> {
    sqlx::query_as::<_, Pick>(
        "SELECT * FROM picks WHERE league_id = $1 AND user_id = $2 AND week = $3",
    )
    .bind(league_id)
    .bind(user_id)
    .bind(week)
    .fetch_optional(pool)
    .await
}

pub async fn insert_pick(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
    week: i32,
    game_id: Uuid,
    team_id: Uuid,
) -> Result<Pick, sqlx::Error> {
    sqlx::query_as::<_, Pick>(
        r#"
        INSERT INTO picks (id, league_id, user_id, week, game_id, team_id, result, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, 'unset', NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(league_id)
    .bind(user_id)
    .bind(week)
    .bind(game_id)
    .bind(team_id)
    .fetch_one(pool)
    .await
}

pub async fn update_pick(
    pool: &PgPool,
    pick_id: Uuid,
    game_id: Uuid,
    team_id: Uuid,
) -> Result<Pick, sqlx::Error> {
    sqlx::query_as::<_, Pick>(
        r#"
        UPDATE picks
        SET game_id = $1, team_id = $2, updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(game_id)
    .bind(team_id)
    .bind(pick_id)
    .fetch_one(pool)
    .await
}

/// Survivor rule lookup: has this user already burned the team in an
/// earlier week of the same league?
pub async fn team_used_in_earlier_week(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
    team_id: Uuid,
    week: i32,
) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM picks
            WHERE league_id = $1 AND user_id = $2 AND team_id = $3 AND week < $4
        )
        "#,
    )
    .bind(league_id)
    .bind(user_id)
    .bind(team_id)
    .bind(week)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}

pub async fn list_week_picks(
    pool: &PgPool,
    league_id: Uuid,
    week: i32,
) -> Result<Vec<PickWithTeam>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.*, t.name AS team_name, u.username, g.start_time AS game_start
        FROM picks p
        INNER JOIN teams t ON t.id = p.team_id
        INNER JOIN users u ON u.id = p.user_id
        INNER JOIN games g ON g.id = p.game_id
        WHERE p.league_id = $1 AND p.week = $2
        ORDER BY u.username ASC
        "#,
    )
    .bind(league_id)
    .bind(week)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let pick = Pick::from_row(&row)?;
            Ok(PickWithTeam {
                pick,
                team_name: row.get("team_name"),
                username: row.get("username"),
                game_start: row.get("game_start"),
            })
        })
        .collect()
}

pub async fn picks_for_game(pool: &PgPool, game_id: Uuid) -> Result<Vec<Pick>, sqlx::Error> {
    sqlx::query_as::<_, Pick>("SELECT * FROM picks WHERE game_id = $1")
        .bind(game_id)
        .fetch_all(pool)
        .await
}

pub async fn set_result(
    pool: &PgPool,
    pick_id: Uuid,
    result: PickResult,
) -> Result<bool, sqlx::Error> {
    let updated = sqlx::query(
        r#"
        UPDATE picks
        SET result = $1, updated_at = NOW()
        WHERE id = $2
        "#,
    )
    .bind(result.as_str())
    .bind(pick_id)
    .execute(pool)
    .await?;

    Ok(updated.rows_affected() > 0)
}
