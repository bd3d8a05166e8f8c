// src/models/pick.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Pick {
    pub id: Uuid,
    pub league_id: Uuid,
    pub user_id: Uuid,
    pub week: i32,
    pub game_id: Uuid,
    pub team_id: Uuid,
    pub result: PickResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PickResult {
    Win,
    Loss,
    Draw,
    Unset,
}

impl PickResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickResult::Win => "win",
            PickResult::Loss => "loss",
            PickResult::Draw => "draw",
            PickResult::Unset => "unset",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PickRequest {
    pub week: i32,
    pub game_id: Uuid,
    pub team_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PickWithTeam {
    pub pick: Pick,
    pub team_name: String,
    pub username: String,
    pub game_start: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekPicksQuery {
    pub week: Option<i32>,
}
