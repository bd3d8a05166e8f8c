use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::league::LeagueService;
use crate::league::membership::MembershipError;
use crate::middleware::auth::Claims;
use crate::models::league::*;

pub(super) fn membership_error_response(e: &MembershipError) -> HttpResponse {
    let body = json!({
        "success": false,
        "message": e.to_string()
    });
    match e {
        MembershipError::Database(_) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "message": "Internal error"
        })),
        MembershipError::LeagueNotFound => HttpResponse::NotFound().json(body),
        MembershipError::NotAManager | MembershipError::NotAMember => {
            HttpResponse::Forbidden().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

pub(super) fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({
        "success": false,
        "message": "Invalid token subject"
    }))
}

#[tracing::instrument(
    name = "Create league",
    skip(league_request, pool, claims),
    fields(
        league_name = %league_request.name,
        created_by = %claims.username
    )
)]
pub async fn create_league(
    league_request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.create_league(league_request.into_inner(), user_id).await {
        Ok(summary) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": summary
        }))),
        Err(sqlx::Error::Protocol(message)) => Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": message
        }))),
        Err(e) => {
            tracing::error!("Failed to create league: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to create league"
            })))
        }
    }
}

#[tracing::instrument(
    name = "List leagues",
    skip(query, pool),
    fields(query = %query)
)]
pub async fn get_leagues(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_leagues(query.page, query.limit).await {
        Ok((leagues, total)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": leagues,
            "total_count": total
        }))),
        Err(sqlx::Error::Protocol(message)) => Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": message
        }))),
        Err(e) => {
            tracing::error!("Failed to list leagues: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve leagues"
            })))
        }
    }
}

#[tracing::instrument(name = "Get league", skip(pool), fields(league_id = %league_id))]
pub async fn get_league(
    league_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_league_summary(league_id).await {
        Ok(Some(summary)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": summary
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "League not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve league"
            })))
        }
    }
}

#[tracing::instrument(name = "Get league standings", skip(pool), fields(league_id = %league_id))]
pub async fn get_league_standings(
    league_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_league(league_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "League not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get league {}: {}", league_id, e);
            return Ok(HttpResponse::InternalServerError().finish());
        }
    }

    match league_service.standings.get_league_standings(league_id).await {
        Ok(standings) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": standings
        }))),
        Err(e) => {
            tracing::error!("Failed to get standings for league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve standings"
            })))
        }
    }
}

#[tracing::instrument(
    name = "Update league settings",
    skip(update, pool, claims),
    fields(
        league_id = %league_id,
        acting_user = %claims.username
    )
)]
pub async fn update_league_settings(
    league_id: Uuid,
    update: web::Json<LeagueSettingsUpdate>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.update_settings(league_id, &update, user_id).await {
        Ok(league) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": league
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Update league week pointers",
    skip(update, pool, claims),
    fields(
        league_id = %league_id,
        acting_user = %claims.username,
        pick_week = %update.current_pick_week,
        game_week = %update.current_game_week
    )
)]
pub async fn update_week_pointers(
    league_id: Uuid,
    update: web::Json<WeekPointerUpdate>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.update_week_pointers(league_id, &update, user_id).await {
        Ok(league) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": league
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}
