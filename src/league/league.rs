use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{leagues, memberships};
use crate::league::games::GameService;
use crate::league::membership::{MembershipError, MembershipService};
use crate::league::picks::PickService;
use crate::league::scoring::ScoringService;
use crate::league::standings::StandingsService;
use crate::league::validation::LeagueValidator;
use crate::models::league::*;
use crate::models::membership::{MemberRole, MemberStatus};

/// Main league service that orchestrates all league-related operations
pub struct LeagueService {
    pool: PgPool,
    pub games: GameService,
    pub picks: PickService,
    pub membership: MembershipService,
    pub scoring: ScoringService,
    pub standings: StandingsService,
    validator: LeagueValidator,
}

impl LeagueService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: pool.clone(),
            games: GameService::new(pool.clone()),
            picks: PickService::new(pool.clone()),
            membership: MembershipService::new(pool.clone()),
            scoring: ScoringService::new(pool.clone()),
            standings: StandingsService::new(pool.clone()),
            validator: LeagueValidator::new(),
        }
    }

    /// Create a new league; the creator becomes its first approved manager.
    pub async fn create_league(
        &self,
        request: CreateLeagueRequest,
        created_by: Uuid,
    ) -> Result<LeagueSummary, sqlx::Error> {
        self.validator.validate_create_league_request(&request)?;

        let league = leagues::insert_league(&self.pool, &request, created_by).await?;

        memberships::insert_membership(
            &self.pool,
            league.id,
            created_by,
            MemberRole::Manager,
            MemberStatus::Active,
        ).await?;

        tracing::info!("League {} ({}) created by user {}", league.id, league.name, created_by);

        Ok(LeagueSummary {
            league,
            member_count: 1,
        })
    }

    pub async fn get_league(&self, league_id: Uuid) -> Result<Option<League>, sqlx::Error> {
        leagues::get_league(&self.pool, league_id).await
    }

    pub async fn get_league_summary(
        &self,
        league_id: Uuid,
    ) -> Result<Option<LeagueSummary>, sqlx::Error> {
        let league = match leagues::get_league(&self.pool, league_id).await? {
            Some(league) => league,
            None => return Ok(None),
        };
        let member_count = leagues::member_count(&self.pool, league_id).await?;
        Ok(Some(LeagueSummary { league, member_count }))
    }

    pub async fn list_leagues(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<(Vec<LeagueSummary>, i64), sqlx::Error> {
        let (limit, offset) = self.validator.validate_pagination(page, limit)?;

        let all = leagues::list_leagues(&self.pool, limit, offset).await?;
        let total = leagues::count_leagues(&self.pool).await?;

        let mut summaries = Vec::with_capacity(all.len());
        for league in all {
            let member_count = leagues::member_count(&self.pool, league.id).await?;
            summaries.push(LeagueSummary { league, member_count });
        }

        Ok((summaries, total))
    }

    /// Manager-only settings update (name, strike limit).
    pub async fn update_settings(
        &self,
        league_id: Uuid,
        update: &LeagueSettingsUpdate,
        acting_user_id: Uuid,
    ) -> Result<League, MembershipError> {
        if !self.membership.is_manager(league_id, acting_user_id).await? {
            return Err(MembershipError::NotAManager);
        }

        self.validator.validate_settings_update(update)?;

        let updated = leagues::update_settings(
            &self.pool,
            league_id,
            update.name.as_deref(),
            update.max_strikes,
        )
        .await?
        .ok_or(MembershipError::LeagueNotFound)?;

        tracing::info!("League {} settings updated by {}", league_id, acting_user_id);
        Ok(updated)
    }

    /// Manager-only week pointer update. Setting both pointers to the same
    /// positive value starts the gameweek and locks existing picks.
    pub async fn update_week_pointers(
        &self,
        league_id: Uuid,
        update: &WeekPointerUpdate,
        acting_user_id: Uuid,
    ) -> Result<League, MembershipError> {
        if !self.membership.is_manager(league_id, acting_user_id).await? {
            return Err(MembershipError::NotAManager);
        }

        self.validator.validate_week_pointers(update)?;

        let updated = leagues::update_week_pointers(
            &self.pool,
            league_id,
            update.current_pick_week,
            update.current_game_week,
        )
        .await?
        .ok_or(MembershipError::LeagueNotFound)?;

        tracing::info!(
            "League {} week pointers set to pick {} / game {} by {}",
            league_id, updated.current_pick_week, updated.current_game_week, acting_user_id
        );
        Ok(updated)
    }
}
