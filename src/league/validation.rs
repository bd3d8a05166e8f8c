use crate::models::league::{CreateLeagueRequest, LeagueSettingsUpdate, WeekPointerUpdate};

/// Centralized validation for league operations
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate league creation request
    pub fn validate_create_league_request(&self, request: &CreateLeagueRequest) -> Result<(), sqlx::Error> {
        self.validate_league_name(&request.name)?;
        self.validate_competition_tag(&request.competition)?;
        self.validate_competition_tag(&request.season)?;

        if let Some(max_strikes) = request.max_strikes {
            self.validate_max_strikes(max_strikes)?;
        }

        Ok(())
    }

    /// Validate league settings update
    pub fn validate_settings_update(&self, update: &LeagueSettingsUpdate) -> Result<(), sqlx::Error> {
        if let Some(name) = &update.name {
            self.validate_league_name(name)?;
        }

        if let Some(max_strikes) = update.max_strikes {
            self.validate_max_strikes(max_strikes)?;
        }

        Ok(())
    }

    /// Validate league name
    pub fn validate_league_name(&self, name: &str) -> Result<(), sqlx::Error> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(sqlx::Error::Protocol("League name cannot be empty".into()));
        }

        if trimmed_name.len() > 100 {
            return Err(sqlx::Error::Protocol("League name too long (maximum 100 characters)".into()));
        }

        if trimmed_name.contains('\0') {
            return Err(sqlx::Error::Protocol("League name contains invalid characters".into()));
        }

        if !trimmed_name.chars().any(|c| c.is_alphanumeric()) {
            return Err(sqlx::Error::Protocol("League name must contain alphanumeric characters".into()));
        }

        Ok(())
    }

    /// Validate a competition or season tag (EPL, NFL, 2025-26, ...)
    pub fn validate_competition_tag(&self, tag: &str) -> Result<(), sqlx::Error> {
        let trimmed = tag.trim();

        if trimmed.is_empty() {
            return Err(sqlx::Error::Protocol("Competition/season tag cannot be empty".into()));
        }

        if trimmed.len() > 20 {
            return Err(sqlx::Error::Protocol("Competition/season tag too long (maximum 20 characters)".into()));
        }

        Ok(())
    }

    /// Validate the strike limit
    pub fn validate_max_strikes(&self, max_strikes: i32) -> Result<(), sqlx::Error> {
        if max_strikes < 1 {
            return Err(sqlx::Error::Protocol(
                format!("Strike limit must be positive: {}", max_strikes).into()
            ));
        }

        if max_strikes > 20 {
            return Err(sqlx::Error::Protocol(
                format!("Strike limit too high: {} (max 20)", max_strikes).into()
            ));
        }

        Ok(())
    }

    /// Validate week pointer updates. 0 is legal for both pointers and
    /// means "no week configured yet".
    pub fn validate_week_pointers(&self, update: &WeekPointerUpdate) -> Result<(), sqlx::Error> {
        self.validate_week_pointer(update.current_pick_week)?;
        self.validate_week_pointer(update.current_game_week)?;
        Ok(())
    }

    fn validate_week_pointer(&self, week: i32) -> Result<(), sqlx::Error> {
        if week < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Week pointer cannot be negative: {}", week).into()
            ));
        }

        if week > 100 {
            return Err(sqlx::Error::Protocol(
                format!("Week pointer too high: {} (max 100)", week).into()
            ));
        }

        Ok(())
    }

    /// Validate game scores
    pub fn validate_game_scores(&self, home_score: i32, away_score: i32) -> Result<(), sqlx::Error> {
        if home_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Home score cannot be negative: {}", home_score).into()
            ));
        }

        if away_score < 0 {
            return Err(sqlx::Error::Protocol(
                format!("Away score cannot be negative: {}", away_score).into()
            ));
        }

        const MAX_REASONABLE_SCORE: i32 = 200;
        if home_score > MAX_REASONABLE_SCORE || away_score > MAX_REASONABLE_SCORE {
            return Err(sqlx::Error::Protocol(
                format!("Score too high: {}-{} (max {})", home_score, away_score, MAX_REASONABLE_SCORE).into()
            ));
        }

        Ok(())
    }

    /// Validate pagination parameters
    pub fn validate_pagination(&self, page: Option<i64>, limit: Option<i64>) -> Result<(i64, i64), sqlx::Error> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(20);

        if page < 1 {
            return Err(sqlx::Error::Protocol("Page must be positive".into()));
        }

        if limit < 1 {
            return Err(sqlx::Error::Protocol("Limit must be positive".into()));
        }

        if limit > 100 {
            return Err(sqlx::Error::Protocol("Limit too high (max 100)".into()));
        }

        Ok((limit, (page - 1) * limit))
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
