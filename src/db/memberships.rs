use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

use crate::models::membership::{LeagueMember, MemberRole, MemberStatus, MemberWithUser};

pub async fn insert_membership(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
    role: MemberRole,
    status: MemberStatus,
) -> Result<LeagueMember, sqlx::Error> {
    sqlx::query_as::<_, LeagueMember>(
        r#"
        INSERT INTO league_members (id, league_id, user_id, role, status, strikes, points, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, 0, 0, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(league_id)
    .bind(user_id)
    .bind(role.as_str())
    .bind(status.as_str())
    .fetch_one(pool)
    .await
}

pub async fn get_membership(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
) -> Result<Option<LeagueMember>, sqlx::Error> {
    sqlx::query_as::<_, LeagueMember>(
        "SELECT * FROM league_members WHERE league_id = $1 AND user_id = $2",
    )
    .bind(league_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_members(
    pool: &PgPool,
    league_id: Uuid,
) -> Result<Vec<MemberWithUser>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT lm.*, u.username
        FROM league_members lm
        INNER JOIN users u ON u.id = lm.user_id
        WHERE lm.league_id = $1
        ORDER BY lm.created_at ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let member = LeagueMember::from_row(&row)?;
            let username: String = row.get("username");
            Ok(MemberWithUser { member, username })
        })
        .collect()
}

pub async fn set_status(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
    status: MemberStatus,
) -> Result<Option<LeagueMember>, sqlx::Error> {
    sqlx::query_as::<_, LeagueMember>(
        r#"
        UPDATE league_members
        SET status = $1, updated_at = NOW()
        WHERE league_id = $2 AND user_id = $3
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(league_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Apply a scoring delta to one member and return the updated row so the
/// caller can check for elimination.
pub async fn apply_score_delta(
    pool: &PgPool,
    league_id: Uuid,
    user_id: Uuid,
    points_delta: i32,
    strikes_delta: i32,
) -> Result<Option<LeagueMember>, sqlx::Error> {
    sqlx::query_as::<_, LeagueMember>(
        r#"
        UPDATE league_members
        SET points = points + $1,
            strikes = strikes + $2,
            updated_at = NOW()
        WHERE league_id = $3 AND user_id = $4
        RETURNING *
        "#,
    )
    .bind(points_delta)
    .bind(strikes_delta)
    .bind(league_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
