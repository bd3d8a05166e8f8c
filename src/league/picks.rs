use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{games, memberships, picks};
use crate::league::eligibility::EligibilityService;
use crate::models::league::League;
use crate::models::membership::{MemberRole, MemberStatus};
use crate::models::pick::{Pick, PickRequest, PickWithTeam};

#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("user is not a member of this league")]
    NotAMember,
    #[error("membership is still awaiting approval")]
    MembershipPending,
    #[error("member has been eliminated")]
    Eliminated,
    #[error("week {0} is not open for picking")]
    WrongWeek(i32),
    #[error("game not found")]
    GameNotFound,
    #[error("game does not belong to this league's current week")]
    GameOutsideWeek,
    #[error("team does not play in the chosen game")]
    TeamNotInGame,
    #[error("team was already used in an earlier week")]
    TeamAlreadyUsed,
    #[error("picks are locked for the current gameweek")]
    PicksLocked,
    #[error("the originally picked game has already kicked off")]
    ChangeWindowClosed,
    #[error("game has already started")]
    GameAlreadyStarted,
    #[error("picks are hidden until the gameweek starts")]
    PicksHidden,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl PickError {
    /// Denials map to 4xx responses; database failures to 500.
    pub fn is_denial(&self) -> bool {
        !matches!(self, PickError::Database(_))
    }
}

/// Service responsible for submitting and reading weekly picks
pub struct PickService {
    pool: PgPool,
    eligibility: EligibilityService,
}

impl PickService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            eligibility: EligibilityService::new(),
        }
    }

    /// Create or change the caller's pick for the league's current pick
    /// week. All survivor rules are enforced here; handlers only translate
    /// the outcome.
    pub async fn submit_pick(
        &self,
        league: &League,
        user_id: Uuid,
        request: &PickRequest,
        now: DateTime<Utc>,
    ) -> Result<Pick, PickError> {
        let membership = memberships::get_membership(&self.pool, league.id, user_id)
            .await?
            .ok_or(PickError::NotAMember)?;

        match membership.status {
            MemberStatus::Active => {}
            MemberStatus::Pending => return Err(PickError::MembershipPending),
            MemberStatus::Eliminated => return Err(PickError::Eliminated),
            MemberStatus::Removed => return Err(PickError::NotAMember),
        }

        if league.current_pick_week <= 0 || request.week != league.current_pick_week {
            return Err(PickError::WrongWeek(request.week));
        }

        let game = games::get_game(&self.pool, request.game_id)
            .await?
            .ok_or(PickError::GameNotFound)?;

        if game.competition != league.competition
            || game.season != league.season
            || game.week != request.week
        {
            return Err(PickError::GameOutsideWeek);
        }

        if game.home_team_id != request.team_id && game.away_team_id != request.team_id {
            return Err(PickError::TeamNotInGame);
        }

        if picks::team_used_in_earlier_week(&self.pool, league.id, user_id, request.team_id, request.week).await? {
            return Err(PickError::TeamAlreadyUsed);
        }

        let existing = picks::get_user_pick(&self.pool, league.id, user_id, request.week).await?;

        match existing {
            Some(current) => {
                if self.eligibility.are_picks_locked(
                    league.current_pick_week,
                    league.current_game_week,
                    true,
                ) {
                    return Err(PickError::PicksLocked);
                }

                // A missing game record on the old pick fails open, same as
                // a game without kickoff data.
                let can_change = match games::get_game(&self.pool, current.game_id).await? {
                    Some(picked_game) => self.eligibility.can_change_pick(&picked_game, now),
                    None => true,
                };
                if !can_change {
                    return Err(PickError::ChangeWindowClosed);
                }

                if !self.eligibility.can_pick_from_game(&game, now) {
                    return Err(PickError::GameAlreadyStarted);
                }

                let updated = picks::update_pick(&self.pool, current.id, game.id, request.team_id).await?;
                tracing::info!(
                    "User {} changed week {} pick in league {} to team {}",
                    user_id, request.week, league.id, request.team_id
                );
                Ok(updated)
            }
            None => {
                // First pick of the week: allowed even mid-gameweek as long
                // as the chosen game itself has not kicked off.
                if !self.eligibility.can_pick_from_game(&game, now) {
                    return Err(PickError::GameAlreadyStarted);
                }

                let created = picks::insert_pick(
                    &self.pool,
                    league.id,
                    user_id,
                    request.week,
                    game.id,
                    request.team_id,
                ).await?;
                tracing::info!(
                    "User {} picked team {} for week {} in league {}",
                    user_id, request.team_id, request.week, league.id
                );
                Ok(created)
            }
        }
    }

    /// The caller's own pick for a week.
    pub async fn my_pick(
        &self,
        league: &League,
        user_id: Uuid,
        week: i32,
    ) -> Result<Option<Pick>, PickError> {
        let membership = memberships::get_membership(&self.pool, league.id, user_id)
            .await?
            .ok_or(PickError::NotAMember)?;
        if membership.status == MemberStatus::Pending {
            return Err(PickError::MembershipPending);
        }

        Ok(picks::get_user_pick(&self.pool, league.id, user_id, week).await?)
    }

    /// Everyone's picks for a week. Hidden until the gameweek starts so
    /// members cannot copy each other pre-lock; managers see them early.
    pub async fn week_picks(
        &self,
        league: &League,
        requester_id: Uuid,
        week: i32,
    ) -> Result<Vec<PickWithTeam>, PickError> {
        let membership = memberships::get_membership(&self.pool, league.id, requester_id)
            .await?
            .ok_or(PickError::NotAMember)?;

        let is_manager = membership.role == MemberRole::Manager;
        let revealed = self
            .eligibility
            .has_gameweek_started(league.current_pick_week, league.current_game_week)
            && week == league.current_game_week;

        // Past weeks are always visible once decided
        let is_past_week = league.current_game_week > 0 && week < league.current_game_week;

        if !is_manager && !revealed && !is_past_week {
            return Err(PickError::PicksHidden);
        }

        Ok(picks::list_week_picks(&self.pool, league.id, week).await?)
    }
}
