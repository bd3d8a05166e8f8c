use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use lastman_backend::league::eligibility::{EligibilityService, COMPLETION_BUFFER_MINUTES};
use lastman_backend::models::game::{Game, GameStatus};

fn game(
    status: GameStatus,
    status_override: Option<GameStatus>,
    start_time: Option<DateTime<Utc>>,
    kickoff_date: Option<DateTime<Utc>>,
) -> Game {
    Game {
        id: Uuid::new_v4(),
        competition: "EPL".to_string(),
        season: "2025-26".to_string(),
        week: 1,
        home_team_id: Uuid::new_v4(),
        away_team_id: Uuid::new_v4(),
        home_score: None,
        away_score: None,
        status,
        status_override,
        start_time,
        kickoff_date,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn manual_override_wins_over_timestamps() {
    let service = EligibilityService::new();
    let now = at(2025, 1, 1, 10, 0, 0);

    // Start is two days away, yet the override forces completed
    let future_start = Some(at(2025, 1, 3, 12, 0, 0));
    let forced = game(GameStatus::NotStarted, Some(GameStatus::Completed), future_start, None);
    assert_eq!(service.game_status(&forced, now), GameStatus::Completed);

    // The override is also the only way to walk a completed game back
    let long_finished = Some(at(2024, 12, 1, 12, 0, 0));
    let reopened = game(GameStatus::Completed, Some(GameStatus::InProgress), long_finished, None);
    assert_eq!(service.game_status(&reopened, now), GameStatus::InProgress);
}

#[test]
fn stored_completed_is_trusted_even_with_future_start() {
    let service = EligibilityService::new();
    let now = at(2025, 1, 1, 10, 0, 0);

    let stale = game(
        GameStatus::Completed,
        None,
        Some(at(2025, 6, 1, 12, 0, 0)),
        None,
    );
    assert_eq!(service.game_status(&stale, now), GameStatus::Completed);
}

#[test]
fn status_follows_the_clock_around_kickoff() {
    let service = EligibilityService::new();
    let start = Some(at(2025, 1, 1, 12, 0, 0));
    let g = game(GameStatus::NotStarted, None, start, None);

    assert_eq!(service.game_status(&g, at(2025, 1, 1, 11, 59, 59)), GameStatus::NotStarted);
    // Exactly at kickoff counts as underway
    assert_eq!(service.game_status(&g, at(2025, 1, 1, 12, 0, 0)), GameStatus::InProgress);
    assert_eq!(service.game_status(&g, at(2025, 1, 1, 14, 29, 59)), GameStatus::InProgress);
    // Exactly at the buffer boundary is still in progress
    assert_eq!(service.game_status(&g, at(2025, 1, 1, 14, 30, 0)), GameStatus::InProgress);
    assert_eq!(service.game_status(&g, at(2025, 1, 1, 14, 30, 1)), GameStatus::Completed);
}

#[test]
fn completion_buffer_spans_two_and_a_half_hours() {
    assert_eq!(COMPLETION_BUFFER_MINUTES, 150);

    let service = EligibilityService::new();
    let start = at(2025, 1, 1, 12, 0, 0);
    let g = game(GameStatus::NotStarted, None, Some(start), None);

    let just_inside = start + Duration::minutes(COMPLETION_BUFFER_MINUTES);
    let just_outside = just_inside + Duration::seconds(1);
    assert_eq!(service.game_status(&g, just_inside), GameStatus::InProgress);
    assert_eq!(service.game_status(&g, just_outside), GameStatus::Completed);
}

#[test]
fn missing_time_data_falls_back_to_stored_status() {
    let service = EligibilityService::new();
    let now = at(2025, 1, 1, 10, 0, 0);

    let unscheduled = game(GameStatus::NotStarted, None, None, None);
    assert_eq!(service.game_status(&unscheduled, now), GameStatus::NotStarted);

    let live = game(GameStatus::InProgress, None, None, None);
    assert_eq!(service.game_status(&live, now), GameStatus::InProgress);
}

#[test]
fn kickoff_date_is_used_when_start_time_is_absent() {
    let service = EligibilityService::new();
    let now = at(2025, 1, 1, 20, 0, 0);

    let g = game(
        GameStatus::NotStarted,
        None,
        None,
        Some(at(2025, 1, 1, 12, 0, 0)),
    );
    assert_eq!(service.game_status(&g, now), GameStatus::Completed);

    // start_time wins when both are present
    let both = game(
        GameStatus::NotStarted,
        None,
        Some(at(2025, 1, 2, 12, 0, 0)),
        Some(at(2025, 1, 1, 12, 0, 0)),
    );
    assert_eq!(service.game_status(&both, now), GameStatus::NotStarted);
}

#[test]
fn can_pick_only_from_games_that_have_not_started() {
    let service = EligibilityService::new();
    let now = at(2025, 1, 1, 12, 30, 0);

    let upcoming = game(GameStatus::NotStarted, None, Some(at(2025, 1, 1, 15, 0, 0)), None);
    assert!(service.can_pick_from_game(&upcoming, now));

    let underway = game(GameStatus::NotStarted, None, Some(at(2025, 1, 1, 12, 0, 0)), None);
    assert!(!service.can_pick_from_game(&underway, now));

    let finished = game(GameStatus::Completed, None, Some(at(2025, 1, 1, 8, 0, 0)), None);
    assert!(!service.can_pick_from_game(&finished, now));

    let forced_live = game(
        GameStatus::NotStarted,
        Some(GameStatus::InProgress),
        Some(at(2025, 1, 1, 15, 0, 0)),
        None,
    );
    assert!(!service.can_pick_from_game(&forced_live, now));
}

#[test]
fn changing_a_pick_depends_only_on_the_original_kickoff() {
    let service = EligibilityService::new();
    let start = at(2025, 1, 1, 12, 0, 0);

    // A stored status or override on the old game must not matter
    let picked = game(
        GameStatus::Completed,
        Some(GameStatus::Completed),
        Some(start),
        None,
    );
    assert!(service.can_change_pick(&picked, at(2025, 1, 1, 11, 0, 0)));
    // Boundary: exactly at kickoff the change still goes through
    assert!(service.can_change_pick(&picked, start));
    assert!(!service.can_change_pick(&picked, at(2025, 1, 1, 12, 0, 1)));

    // No time data at all fails open
    let untimed = game(GameStatus::NotStarted, None, None, None);
    assert!(service.can_change_pick(&untimed, at(2025, 1, 1, 23, 0, 0)));
}

#[test]
fn gameweek_starts_when_pointers_meet_and_are_positive() {
    let service = EligibilityService::new();

    assert!(service.has_gameweek_started(5, 5));
    assert!(!service.has_gameweek_started(0, 0));
    assert!(!service.has_gameweek_started(5, 6));
    assert!(!service.has_gameweek_started(6, 5));
}

#[test]
fn picks_lock_only_for_users_who_already_picked() {
    let service = EligibilityService::new();

    assert!(service.are_picks_locked(5, 5, true));
    assert!(!service.are_picks_locked(5, 5, false));
    assert!(!service.are_picks_locked(4, 5, true));
    assert!(!service.are_picks_locked(0, 0, true));
}

#[test]
fn first_pick_carve_out_during_active_gameweek() {
    let service = EligibilityService::new();

    assert!(service.can_make_first_pick(5, 5, false));
    assert!(!service.can_make_first_pick(5, 5, true));
    assert!(!service.can_make_first_pick(4, 5, false));
}

#[test]
fn pick_changes_disabled_mirrors_picks_locked() {
    let service = EligibilityService::new();

    for (pick_week, game_week, has_pick) in [
        (5, 5, true),
        (5, 5, false),
        (4, 5, true),
        (0, 0, true),
        (0, 0, false),
    ] {
        assert_eq!(
            service.pick_changes_disabled(pick_week, game_week, has_pick),
            service.are_picks_locked(pick_week, game_week, has_pick),
        );
    }
}

#[test]
fn status_computation_is_idempotent() {
    let service = EligibilityService::new();
    let now = at(2025, 1, 1, 13, 0, 0);
    let g = game(GameStatus::NotStarted, None, Some(at(2025, 1, 1, 12, 0, 0)), None);

    let first = service.game_status(&g, now);
    let second = service.game_status(&g, now);
    assert_eq!(first, second);
}
