// src/routes/admin.rs
use actix_web::{get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::admin::game_management_handler;
use crate::middleware::auth::Claims;
use crate::models::game::{
    CreateTeamRequest, GameResultRequest, ScheduleGameRequest, StatusOverrideRequest, TeamListQuery,
};

/// Register a team for a competition
#[post("/teams")]
async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    game_management_handler::create_team(request, pool, claims).await
}

/// List a competition's teams
#[get("/teams")]
async fn list_teams(
    query: web::Query<TeamListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_management_handler::list_teams(query, pool).await
}

/// Add a game to the schedule
#[post("/games")]
async fn schedule_game(
    request: web::Json<ScheduleGameRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    game_management_handler::schedule_game(request, pool, claims).await
}

/// Get a game with its computed status
#[get("/games/{game_id}")]
async fn get_game(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let game_id = path.into_inner();
    game_management_handler::get_game(game_id, pool).await
}

/// Record a final score and settle picks
#[put("/games/{game_id}/result")]
async fn record_game_result(
    path: web::Path<Uuid>,
    result_request: web::Json<GameResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let game_id = path.into_inner();
    game_management_handler::record_game_result(game_id, result_request, pool, claims).await
}

/// Force or clear a game's displayed status
#[put("/games/{game_id}/status")]
async fn set_status_override(
    path: web::Path<Uuid>,
    override_request: web::Json<StatusOverrideRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let game_id = path.into_inner();
    game_management_handler::set_status_override(game_id, override_request, pool, claims).await
}
