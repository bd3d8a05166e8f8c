use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::games;
use crate::league::games::GameService;
use crate::league::scoring::ScoringService;
use crate::league::validation::LeagueValidator;
use crate::middleware::auth::Claims;
use crate::models::game::{
    CreateTeamRequest, GameResultRequest, ScheduleGameRequest, StatusOverrideRequest, TeamListQuery,
};

#[tracing::instrument(
    name = "Create team",
    skip(request, pool, claims),
    fields(
        team_name = %request.name,
        competition = %request.competition,
        admin_user = %claims.username
    )
)]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.name.trim().is_empty() || request.short_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Team name and short name are required"
        })));
    }

    match games::insert_team(
        pool.get_ref(),
        request.name.trim(),
        request.short_name.trim(),
        request.competition.trim(),
    ).await {
        Ok(team) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": team
        }))),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(json!({
                "success": false,
                "message": "Team already exists for this competition"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to create team: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to create team"
            })))
        }
    }
}

#[tracing::instrument(
    name = "List teams",
    skip(query, pool),
    fields(competition = %query.competition)
)]
pub async fn list_teams(
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match games::list_teams(pool.get_ref(), &query.competition).await {
        Ok(teams) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": teams,
            "total_count": teams.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to list teams: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve teams"
            })))
        }
    }
}

#[tracing::instrument(
    name = "Schedule game",
    skip(request, pool, claims),
    fields(
        competition = %request.competition,
        season = %request.season,
        week = %request.week,
        admin_user = %claims.username
    )
)]
pub async fn schedule_game(
    request: web::Json<ScheduleGameRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.week < 1 {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Week number must be positive"
        })));
    }

    if request.home_team_id == request.away_team_id {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "A team cannot play itself"
        })));
    }

    for team_id in [request.home_team_id, request.away_team_id] {
        match games::get_team(pool.get_ref(), team_id).await {
            Ok(Some(team)) if team.competition == request.competition => {}
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "message": format!("Team {} is not registered for {}", team_id, request.competition)
                })))
            }
            Err(e) => {
                tracing::error!("Failed to look up team {}: {}", team_id, e);
                return Ok(HttpResponse::InternalServerError().finish());
            }
        }
    }

    match games::insert_game(pool.get_ref(), &request).await {
        Ok(game) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": game
        }))),
        Err(e) => {
            tracing::error!("Failed to schedule game: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to schedule game"
            })))
        }
    }
}

#[tracing::instrument(name = "Get game", skip(pool), fields(game_id = %game_id))]
pub async fn get_game(
    game_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let game_service = GameService::new(pool.get_ref().clone());

    match game_service.get_game_with_status(game_id, Utc::now()).await {
        Ok(Some(game)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": game
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Game not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get game {}: {}", game_id, e);
            Ok(HttpResponse::InternalServerError().finish())
        }
    }
}

/// Record a final score and settle every pick that referenced the game.
#[tracing::instrument(
    name = "Record game result",
    skip(result_request, pool, claims),
    fields(
        game_id = %game_id,
        admin_user = %claims.username
    )
)]
pub async fn record_game_result(
    game_id: Uuid,
    result_request: web::Json<GameResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    tracing::info!(
        "Recording game {} result: {} - {} by admin: {}",
        game_id, result_request.home_score, result_request.away_score, claims.username
    );

    let validator = LeagueValidator::new();
    if let Err(sqlx::Error::Protocol(message)) =
        validator.validate_game_scores(result_request.home_score, result_request.away_score)
    {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": message
        })));
    }

    let game = match games::record_result(
        pool.get_ref(),
        game_id,
        result_request.home_score,
        result_request.away_score,
    ).await {
        Ok(Some(game)) => game,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Game not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to record result for game {}: {}", game_id, e);
            return Ok(HttpResponse::InternalServerError().finish());
        }
    };

    let scoring_service = ScoringService::new(pool.get_ref().clone());

    match scoring_service.apply_game_result(&game).await {
        Ok(applied) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": {
                "game": game,
                "applied": applied
            }
        }))),
        Err(e) => {
            tracing::error!("Failed to settle picks for game {}: {}", game_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Result recorded but settling picks failed"
            })))
        }
    }
}

/// Force or clear a game's displayed status. The override wins over both
/// the stored status and the clock until it is cleared.
#[tracing::instrument(
    name = "Set game status override",
    skip(override_request, pool, claims),
    fields(
        game_id = %game_id,
        admin_user = %claims.username,
        status = ?override_request.status
    )
)]
pub async fn set_status_override(
    game_id: Uuid,
    override_request: web::Json<StatusOverrideRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let status = override_request.status.as_ref().map(|s| s.as_str());

    match games::set_status_override(pool.get_ref(), game_id, status).await {
        Ok(Some(game)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": game
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Game not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to set status override for game {}: {}", game_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to update game status"
            })))
        }
    }
}
