// src/routes/league.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{game_handler, league_handler, membership_handler, pick_handler};
use crate::middleware::auth::Claims;
use crate::models::game::WeekGamesQuery;
use crate::models::league::{CreateLeagueRequest, LeagueSettingsUpdate, PaginationQuery, WeekPointerUpdate};
use crate::models::pick::{PickRequest, WeekPicksQuery};

/// Create a new league
#[post("")]
async fn create_league(
    league_request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    league_handler::create_league(league_request, pool, claims).await
}

/// List leagues (with pagination)
#[get("")]
async fn get_leagues(
    query: web::Query<PaginationQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_leagues(query, pool).await
}

/// Get a league with its member count
#[get("/{league_id}")]
async fn get_league(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::get_league(league_id, pool).await
}

/// Request to join a league
#[post("/{league_id}/join")]
async fn join_league(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    membership_handler::join_league(league_id, pool, claims).await
}

/// List league members (managers also see pending requests)
#[get("/{league_id}/members")]
async fn list_members(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    membership_handler::list_members(league_id, pool, claims).await
}

/// Approve a pending join request
#[post("/{league_id}/members/{user_id}/approve")]
async fn approve_member(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (league_id, user_id) = path.into_inner();
    membership_handler::approve_member(league_id, user_id, pool, claims).await
}

/// Reject a pending join request
#[post("/{league_id}/members/{user_id}/reject")]
async fn reject_member(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (league_id, user_id) = path.into_inner();
    membership_handler::reject_member(league_id, user_id, pool, claims).await
}

/// Remove a member from a league
#[delete("/{league_id}/members/{user_id}")]
async fn remove_member(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (league_id, user_id) = path.into_inner();
    membership_handler::remove_member(league_id, user_id, pool, claims).await
}

/// Reset a member's password to a temporary one
#[post("/{league_id}/members/{user_id}/reset_password")]
async fn reset_member_password(
    path: web::Path<(Uuid, Uuid)>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let (league_id, user_id) = path.into_inner();
    membership_handler::reset_member_password(league_id, user_id, pool, claims).await
}

/// Update league settings (manager only)
#[put("/{league_id}/settings")]
async fn update_settings(
    path: web::Path<Uuid>,
    update: web::Json<LeagueSettingsUpdate>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::update_league_settings(league_id, update, pool, claims).await
}

/// Update the pick/game week pointers (manager only)
#[put("/{league_id}/weeks")]
async fn update_weeks(
    path: web::Path<Uuid>,
    update: web::Json<WeekPointerUpdate>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::update_week_pointers(league_id, update, pool, claims).await
}

/// Get survivor standings
#[get("/{league_id}/standings")]
async fn get_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::get_league_standings(league_id, pool).await
}

/// Get a week's games with computed statuses
#[get("/{league_id}/games")]
async fn get_week_games(
    path: web::Path<Uuid>,
    query: web::Query<WeekGamesQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    game_handler::get_week_games(league_id, query, pool).await
}

/// Make or change the weekly pick
#[post("/{league_id}/picks")]
async fn submit_pick(
    path: web::Path<Uuid>,
    pick_request: web::Json<PickRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    pick_handler::submit_pick(league_id, pick_request, pool, claims).await
}

/// Get the caller's pick for a week
#[get("/{league_id}/picks/me")]
async fn get_my_pick(
    path: web::Path<Uuid>,
    query: web::Query<WeekPicksQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    pick_handler::get_my_pick(league_id, query, pool, claims).await
}

/// Get everyone's picks for a week (hidden until the gameweek starts)
#[get("/{league_id}/picks")]
async fn get_week_picks(
    path: web::Path<Uuid>,
    query: web::Query<WeekPicksQuery>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    pick_handler::get_week_picks(league_id, query, pool, claims).await
}
