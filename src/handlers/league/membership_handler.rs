use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::league_handler::{membership_error_response, unauthorized};
use crate::league::membership::MembershipService;
use crate::middleware::auth::Claims;

#[tracing::instrument(
    name = "Request to join league",
    skip(pool, claims),
    fields(
        league_id = %league_id,
        username = %claims.username
    )
)]
pub async fn join_league(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let membership_service = MembershipService::new(pool.get_ref().clone());

    match membership_service.request_to_join(league_id, user_id).await {
        Ok(member) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": member,
            "message": "Join request filed; a league manager must approve it"
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "List league members",
    skip(pool, claims),
    fields(
        league_id = %league_id,
        username = %claims.username
    )
)]
pub async fn list_members(
    league_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let membership_service = MembershipService::new(pool.get_ref().clone());

    match membership_service.list_members(league_id, user_id).await {
        Ok(members) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": members,
            "total_count": members.len()
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Approve join request",
    skip(pool, claims),
    fields(
        league_id = %league_id,
        target_user = %target_user_id,
        acting_user = %claims.username
    )
)]
pub async fn approve_member(
    league_id: Uuid,
    target_user_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let membership_service = MembershipService::new(pool.get_ref().clone());

    match membership_service.approve_request(league_id, target_user_id, user_id).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Reject join request",
    skip(pool, claims),
    fields(
        league_id = %league_id,
        target_user = %target_user_id,
        acting_user = %claims.username
    )
)]
pub async fn reject_member(
    league_id: Uuid,
    target_user_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let membership_service = MembershipService::new(pool.get_ref().clone());

    match membership_service.reject_request(league_id, target_user_id, user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Join request rejected"
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Remove league member",
    skip(pool, claims),
    fields(
        league_id = %league_id,
        target_user = %target_user_id,
        acting_user = %claims.username
    )
)]
pub async fn remove_member(
    league_id: Uuid,
    target_user_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let membership_service = MembershipService::new(pool.get_ref().clone());

    match membership_service.remove_member(league_id, target_user_id, user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Member removed"
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Reset member password",
    skip(pool, claims),
    fields(
        league_id = %league_id,
        target_user = %target_user_id,
        acting_user = %claims.username
    )
)]
pub async fn reset_member_password(
    league_id: Uuid,
    target_user_id: Uuid,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => return Ok(unauthorized()),
    };

    let membership_service = MembershipService::new(pool.get_ref().clone());

    match membership_service.reset_member_password(league_id, target_user_id, user_id).await {
        Ok(temp_password) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "temporary_password": temp_password,
            "message": "Share the temporary password with the member; it is not stored in plaintext"
        }))),
        Err(e) => Ok(membership_error_response(&e)),
    }
}
