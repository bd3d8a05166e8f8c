// src/models/league.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub competition: String,
    pub season: String,
    pub current_pick_week: i32,
    pub current_game_week: i32,
    pub max_strikes: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub competition: String,
    pub season: String,
    pub max_strikes: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueSettingsUpdate {
    pub name: Option<String>,
    pub max_strikes: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekPointerUpdate {
    pub current_pick_week: i32,
    pub current_game_week: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueSummary {
    pub league: League,
    pub member_count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemberStanding {
    pub user_id: Uuid,
    pub username: String,
    pub points: i32,
    pub strikes: i32,
    pub picks_made: i64,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueStandingsResponse {
    pub league_id: Uuid,
    pub standings: Vec<MemberStanding>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl fmt::Display for PaginationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page: {:?}, limit: {:?}", self.page, self.limit)
    }
}
