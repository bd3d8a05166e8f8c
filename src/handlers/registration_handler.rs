use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::PgPool;

use crate::db::users;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    if let Err(message) = validate_registration(&user_form) {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": message
        }));
    }

    let password_hash = hash_password(user_form.password.expose_secret());

    match users::insert_user(pool.get_ref(), &user_form.username, &user_form.email, &password_hash).await {
        Ok(user_id) => HttpResponse::Ok().json(json!({
            "success": true,
            "user_id": user_id
        })),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            HttpResponse::Conflict().json(json!({
                "success": false,
                "message": "Username or email already taken"
            }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

fn validate_registration(request: &RegistrationRequest) -> Result<(), &'static str> {
    let username = request.username.trim();
    if username.len() < 3 || username.len() > 50 {
        return Err("Username must be between 3 and 50 characters");
    }

    if !request.email.contains('@') {
        return Err("Invalid email address");
    }

    if request.password.expose_secret().len() < 8 {
        return Err("Password must be at least 8 characters");
    }

    Ok(())
}
