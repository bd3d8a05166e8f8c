// src/handlers/auth_handler.rs
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::config::jwt::JwtSettings;
use crate::db::users;
use crate::middleware::auth::{Claims, AUTH_COOKIE_NAME};
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::user::UserStatus;
use crate::utils::password::verify_password;

fn auth_cookie(token: String) -> Cookie<'static> {
    // HTTP-only so browser scripts never see the token
    Cookie::build(AUTH_COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, jwt_settings),
    fields(
        username = %login_form.username
    )
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> HttpResponse {
    let user = match users::find_user_by_username(pool.get_ref(), &login_form.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return HttpResponse::Unauthorized().finish();
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Verify password
    if !verify_password(
        login_form.password.expose_secret(),
        user.password_hash.expose_secret(),
    ) {
        tracing::info!("Invalid password");
        return HttpResponse::Unauthorized().finish();
    }

    if user.status != UserStatus::Active {
        tracing::info!("Inactive account attempted login: {}", user.username);
        return HttpResponse::Unauthorized().finish();
    }

    // Generate JWT token
    let expiration = match Utc::now().checked_add_signed(Duration::hours(jwt_settings.expiration_hours)) {
        Some(expires_at) => expires_at.timestamp() as usize,
        None => {
            tracing::error!("Invalid token expiration configuration");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username,
        role: user.role,
        status: user.status,
        exp: expiration,
    };

    let token = match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    ) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Error generating JWT token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    // Token travels both ways: HTTP-only cookie for browsers, JSON body
    // for API clients that prefer the Bearer header
    HttpResponse::Ok()
        .cookie(auth_cookie(token.clone()))
        .json(LoginResponse { token })
}

#[tracing::instrument(name = "Logout user")]
pub async fn logout_user() -> HttpResponse {
    let mut removal = Cookie::build(AUTH_COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    removal.set_max_age(CookieDuration::ZERO);

    HttpResponse::Ok().cookie(removal).json(serde_json::json!({
        "success": true
    }))
}
