use actix_web::web;

pub mod admin;
pub mod auth;
pub mod backend_health;
pub mod league;
pub mod registration;

use crate::middleware::admin::AdminMiddleware;
use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login)
        .service(auth::logout);

    // League routes (require authentication)
    cfg.service(
        web::scope("/leagues")
            .wrap(AuthMiddleware)
            .service(league::create_league)
            .service(league::get_leagues)
            .service(league::get_league)
            .service(league::join_league)
            .service(league::list_members)
            .service(league::approve_member)
            .service(league::reject_member)
            .service(league::remove_member)
            .service(league::reset_member_password)
            .service(league::update_settings)
            .service(league::update_weeks)
            .service(league::get_standings)
            .service(league::get_week_games)
            .service(league::submit_pick)
            .service(league::get_my_pick)
            .service(league::get_week_picks)
    );

    // Schedule & result administration (require admin role)
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            .service(admin::create_team)
            .service(admin::list_teams)
            .service(admin::schedule_game)
            .service(admin::get_game)
            .service(admin::record_game_result)
            .service(admin::set_status_override)
    );
}
