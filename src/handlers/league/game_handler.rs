use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::league::LeagueService;
use crate::models::game::WeekGamesQuery;

#[tracing::instrument(
    name = "Get week games",
    skip(query, pool),
    fields(
        league_id = %league_id,
        week = ?query.week
    )
)]
pub async fn get_week_games(
    league_id: Uuid,
    query: web::Query<WeekGamesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    let league = match league_service.get_league(league_id).await {
        Ok(Some(league)) => league,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "League not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to load league {}: {}", league_id, e);
            return Ok(HttpResponse::InternalServerError().finish());
        }
    };

    let week = query.week.unwrap_or(league.current_pick_week);

    match league_service.games.week_games(&league, week, Utc::now()).await {
        Ok(games) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "week": week,
            "data": games,
            "total_count": games.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to get games for league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve games"
            })))
        }
    }
}
