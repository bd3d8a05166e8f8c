// src/models/game.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub competition: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Game {
    pub id: Uuid,
    pub competition: String,
    pub season: String,
    pub week: i32,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: GameStatus,
    pub status_override: Option<GameStatus>,
    pub start_time: Option<DateTime<Utc>>,
    pub kickoff_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// The instant the game kicks off, preferring the authoritative
    /// start_time over the coarser legacy kickoff_date.
    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        self.start_time.or(self.kickoff_date)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "not_started",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
        }
    }
}

impl From<String> for GameStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "in_progress" => GameStatus::InProgress,
            "completed" => GameStatus::Completed,
            _ => GameStatus::NotStarted,
        }
    }
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub short_name: String,
    pub competition: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamListQuery {
    pub competition: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScheduleGameRequest {
    pub competition: String,
    pub season: String,
    pub week: i32,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub start_time: Option<DateTime<Utc>>,
    pub kickoff_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}

/// Setting `status` to None clears a previously forced status.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusOverrideRequest {
    pub status: Option<GameStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameWithStatus {
    pub game: Game,
    pub home_team_name: String,
    pub away_team_name: String,
    pub display_status: GameStatus,
    pub pickable: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekGamesQuery {
    pub week: Option<i32>,
}
