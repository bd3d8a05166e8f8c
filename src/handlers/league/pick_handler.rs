use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::league_handler::unauthorized;
use crate::league::eligibility::EligibilityService;
use crate::league::league::LeagueService;
use crate::league::picks::PickError;
use crate::middleware::auth::Claims;
use crate::models::pick::{PickRequest, WeekPicksQuery};

fn pick_error_response(e: &PickError) -> HttpResponse {
    let body = json!({
        "success": false,
        "message": e.to_string()
    });
    match e {
        PickError::Database(_) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "Internal error"
        })),
        PickError::GameNotFound => HttpResponse::NotFound().json(body),
        PickError::NotAMember
        | PickError::MembershipPending
        | PickError::Eliminated
        | PickError::PicksHidden => HttpResponse::Forbidden().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[tracing::instrument(
    name = "Submit pick",
    skip(pick_request, pool, claims),
    fields(
        league_id = %league_id,
        username = %claims.username,
        week = %pick_request.week,
        team_id = %pick_request.team_id
    )
)]
pub async fn submit_pick(
    league_id: Uuid,
    pick_request: web::Json<PickRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

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

    match league_service.picks.submit_pick(&league, user_id, &pick_request, Utc::now()).await {
        Ok(pick) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": pick
        }))),
        Err(e) => {
            if e.is_denial() {
                tracing::info!("Pick denied for {}: {}", claims.username, e);
            } else {
                tracing::error!("Pick submission failed: {}", e);
            }
            Ok(pick_error_response(&e))
        }
    }
}

#[tracing::instrument(
    name = "Get my pick",
    skip(query, pool, claims),
    fields(
        league_id = %league_id,
        username = %claims.username
    )
)]
pub async fn get_my_pick(
    league_id: Uuid,
    query: web::Query<WeekPicksQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

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

    match league_service.picks.my_pick(&league, user_id, week).await {
        Ok(pick) => {
            // Lock-state flags drive the pick form in the UI
            let eligibility = EligibilityService::new();
            let has_pick = pick.is_some();
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "week": week,
                "data": pick,
                "picks_locked": eligibility.are_picks_locked(
                    league.current_pick_week,
                    league.current_game_week,
                    has_pick
                ),
                "pick_changes_disabled": eligibility.pick_changes_disabled(
                    league.current_pick_week,
                    league.current_game_week,
                    has_pick
                ),
                "can_make_first_pick": eligibility.can_make_first_pick(
                    league.current_pick_week,
                    league.current_game_week,
                    has_pick
                )
            })))
        }
        Err(e) => Ok(pick_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Get week picks",
    skip(query, pool, claims),
    fields(
        league_id = %league_id,
        username = %claims.username
    )
)]
pub async fn get_week_picks(
    league_id: Uuid,
    query: web::Query<WeekPicksQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

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

    let week = query.week.unwrap_or(league.current_game_week);

    match league_service.picks.week_picks(&league, user_id, week).await {
        Ok(picks) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "week": week,
            "data": picks,
            "total_count": picks.len()
        }))),
        Err(e) => Ok(pick_error_response(&e)),
    }
}
