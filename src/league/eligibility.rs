use chrono::{DateTime, Duration, Utc};

use crate::models::game::{Game, GameStatus};

/// Minutes after kickoff before a game without a recorded final score is
/// presented as completed.
/// TODO: NFL games routinely outrun this window while EPL games finish
/// well inside it; make the buffer a per-competition setting.
pub const COMPLETION_BUFFER_MINUTES: i64 = 150;

/// Decides, from timing and state data alone, whether pick actions are
/// permitted and what status a game should display. Every method is a pure
/// function of its arguments; callers supply `now` so request handlers and
/// tests evaluate against the same instant.
pub struct EligibilityService;

impl Default for EligibilityService {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityService {
    pub fn new() -> Self {
        Self
    }

    /// Effective status of a game at `now`.
    ///
    /// A manual override always wins. A stored `completed` is trusted even
    /// when the kickoff data would disagree, so a confirmed final score can
    /// never be reopened by stale or cleared timestamps. Without any kickoff
    /// instant the stored status stands. Otherwise the status is derived
    /// from the clock: in progress from the kickoff instant through the
    /// completion buffer inclusive, completed only strictly after it.
    pub fn game_status(&self, game: &Game, now: DateTime<Utc>) -> GameStatus {
        if let Some(forced) = &game.status_override {
            return forced.clone();
        }

        if game.status == GameStatus::Completed {
            return GameStatus::Completed;
        }

        let kickoff = match game.kickoff() {
            Some(instant) => instant,
            None => return game.status.clone(),
        };

        if now > kickoff + Duration::minutes(COMPLETION_BUFFER_MINUTES) {
            GameStatus::Completed
        } else if now >= kickoff {
            GameStatus::InProgress
        } else {
            GameStatus::NotStarted
        }
    }

    /// A team may only be picked from a game that has not kicked off.
    pub fn can_pick_from_game(&self, game: &Game, now: DateTime<Utc>) -> bool {
        self.game_status(game, now) == GameStatus::NotStarted
    }

    /// Whether an existing pick may still be swapped out.
    ///
    /// Deliberately time-based rather than status-based: a manual override
    /// or stale stored status on the previously picked game must not trap a
    /// user, and a game with no kickoff data fails open.
    pub fn can_change_pick(&self, picked_game: &Game, now: DateTime<Utc>) -> bool {
        match picked_game.kickoff() {
            Some(kickoff) => now <= kickoff,
            None => true,
        }
    }

    /// The gameweek is underway once the pick-week pointer has caught up
    /// with the game-week pointer. A pointer of 0 means no week has been
    /// configured yet and never counts as started.
    pub fn has_gameweek_started(&self, current_pick_week: i32, current_game_week: i32) -> bool {
        current_pick_week == current_game_week && current_pick_week > 0
    }

    /// Picks freeze once the gameweek is underway and the user holds one.
    /// A user without a pick keeps a one-time opportunity (see
    /// [`Self::can_make_first_pick`]).
    pub fn are_picks_locked(
        &self,
        current_pick_week: i32,
        current_game_week: i32,
        has_pick: bool,
    ) -> bool {
        self.has_gameweek_started(current_pick_week, current_game_week) && has_pick
    }

    /// Late joiners and first-time pickers may still submit during an
    /// active gameweek, constrained by [`Self::can_pick_from_game`] on the
    /// chosen game itself.
    pub fn can_make_first_pick(
        &self,
        current_pick_week: i32,
        current_game_week: i32,
        has_pick: bool,
    ) -> bool {
        self.has_gameweek_started(current_pick_week, current_game_week) && !has_pick
    }

    /// UI-facing alias of [`Self::are_picks_locked`].
    pub fn pick_changes_disabled(
        &self,
        current_pick_week: i32,
        current_game_week: i32,
        has_pick: bool,
    ) -> bool {
        self.are_picks_locked(current_pick_week, current_game_week, has_pick)
    }
}
