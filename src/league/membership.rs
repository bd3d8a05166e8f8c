use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{leagues, memberships, users};
use crate::models::membership::{LeagueMember, MemberRole, MemberStatus, MemberWithUser};
use crate::utils::password::{generate_temp_password, hash_password};

#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("league not found")]
    LeagueNotFound,
    #[error("user is already a member of this league")]
    AlreadyMember,
    #[error("a join request is already pending")]
    AlreadyRequested,
    #[error("user is not a member of this league")]
    NotAMember,
    #[error("only league managers may do this")]
    NotAManager,
    #[error("no join request to act on")]
    NoPendingRequest,
    #[error("league managers cannot be removed")]
    CannotRemoveManager,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl MembershipError {
    pub fn is_denial(&self) -> bool {
        !matches!(self, MembershipError::Database(_))
    }
}

/// Service responsible for league membership lifecycle and manager-only
/// member administration.
pub struct MembershipService {
    pool: PgPool,
}

impl MembershipService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn is_manager(&self, league_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let membership = memberships::get_membership(&self.pool, league_id, user_id).await?;
        Ok(membership
            .map(|m| m.role == MemberRole::Manager && m.status == MemberStatus::Active)
            .unwrap_or(false))
    }

    async fn require_manager(&self, league_id: Uuid, user_id: Uuid) -> Result<(), MembershipError> {
        if !self.is_manager(league_id, user_id).await? {
            return Err(MembershipError::NotAManager);
        }
        Ok(())
    }

    /// File a join request. Previously removed members may re-apply.
    pub async fn request_to_join(
        &self,
        league_id: Uuid,
        user_id: Uuid,
    ) -> Result<LeagueMember, MembershipError> {
        if leagues::get_league(&self.pool, league_id).await?.is_none() {
            return Err(MembershipError::LeagueNotFound);
        }

        match memberships::get_membership(&self.pool, league_id, user_id).await? {
            None => {}
            Some(existing) => match existing.status {
                MemberStatus::Pending => return Err(MembershipError::AlreadyRequested),
                MemberStatus::Removed => {
                    let reopened =
                        memberships::set_status(&self.pool, league_id, user_id, MemberStatus::Pending)
                            .await?
                            .ok_or(MembershipError::NotAMember)?;
                    return Ok(reopened);
                }
                _ => return Err(MembershipError::AlreadyMember),
            },
        }

        let member = memberships::insert_membership(
            &self.pool,
            league_id,
            user_id,
            MemberRole::Member,
            MemberStatus::Pending,
        ).await?;

        tracing::info!("User {} requested to join league {}", user_id, league_id);
        Ok(member)
    }

    pub async fn approve_request(
        &self,
        league_id: Uuid,
        target_user_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<LeagueMember, MembershipError> {
        self.require_manager(league_id, acting_user_id).await?;

        let membership = memberships::get_membership(&self.pool, league_id, target_user_id)
            .await?
            .ok_or(MembershipError::NotAMember)?;

        if membership.status != MemberStatus::Pending {
            return Err(MembershipError::NoPendingRequest);
        }

        let approved = memberships::set_status(&self.pool, league_id, target_user_id, MemberStatus::Active)
            .await?
            .ok_or(MembershipError::NotAMember)?;

        tracing::info!("League {} membership approved for user {}", league_id, target_user_id);
        Ok(approved)
    }

    pub async fn reject_request(
        &self,
        league_id: Uuid,
        target_user_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<(), MembershipError> {
        self.require_manager(league_id, acting_user_id).await?;

        let membership = memberships::get_membership(&self.pool, league_id, target_user_id)
            .await?
            .ok_or(MembershipError::NotAMember)?;

        if membership.status != MemberStatus::Pending {
            return Err(MembershipError::NoPendingRequest);
        }

        memberships::set_status(&self.pool, league_id, target_user_id, MemberStatus::Removed).await?;

        tracing::info!("League {} join request rejected for user {}", league_id, target_user_id);
        Ok(())
    }

    pub async fn remove_member(
        &self,
        league_id: Uuid,
        target_user_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<(), MembershipError> {
        self.require_manager(league_id, acting_user_id).await?;

        let membership = memberships::get_membership(&self.pool, league_id, target_user_id)
            .await?
            .ok_or(MembershipError::NotAMember)?;

        if membership.role == MemberRole::Manager {
            return Err(MembershipError::CannotRemoveManager);
        }

        memberships::set_status(&self.pool, league_id, target_user_id, MemberStatus::Removed).await?;

        tracing::info!("User {} removed from league {} by {}", target_user_id, league_id, acting_user_id);
        Ok(())
    }

    /// Reset a member's password to a random temporary one. The plaintext
    /// is returned exactly once, to the acting manager.
    pub async fn reset_member_password(
        &self,
        league_id: Uuid,
        target_user_id: Uuid,
        acting_user_id: Uuid,
    ) -> Result<String, MembershipError> {
        self.require_manager(league_id, acting_user_id).await?;

        let membership = memberships::get_membership(&self.pool, league_id, target_user_id)
            .await?
            .ok_or(MembershipError::NotAMember)?;
        if membership.status == MemberStatus::Removed {
            return Err(MembershipError::NotAMember);
        }

        let temp_password = generate_temp_password();
        let updated = users::update_password(
            &self.pool,
            target_user_id,
            &hash_password(&temp_password),
        ).await?;

        if !updated {
            return Err(MembershipError::NotAMember);
        }

        tracing::info!(
            "Password reset for user {} in league {} by manager {}",
            target_user_id, league_id, acting_user_id
        );
        Ok(temp_password)
    }

    pub async fn list_members(
        &self,
        league_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<MemberWithUser>, MembershipError> {
        let requester = memberships::get_membership(&self.pool, league_id, requester_id)
            .await?
            .ok_or(MembershipError::NotAMember)?;

        let members = memberships::list_members(&self.pool, league_id).await?;

        // Pending requests are only the managers' business
        if requester.role == MemberRole::Manager {
            Ok(members)
        } else {
            Ok(members
                .into_iter()
                .filter(|m| {
                    m.member.status == MemberStatus::Active
                        || m.member.status == MemberStatus::Eliminated
                })
                .collect())
        }
    }
}
