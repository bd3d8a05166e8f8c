use lastman_backend::league::validation::LeagueValidator;
use lastman_backend::models::common::MatchResult;
use lastman_backend::models::league::{CreateLeagueRequest, LeagueSettingsUpdate, WeekPointerUpdate};

fn create_request(name: &str, max_strikes: Option<i32>) -> CreateLeagueRequest {
    CreateLeagueRequest {
        name: name.to_string(),
        competition: "EPL".to_string(),
        season: "2025-26".to_string(),
        max_strikes,
    }
}

#[test]
fn accepts_a_sensible_create_request() {
    let validator = LeagueValidator::new();
    assert!(validator
        .validate_create_league_request(&create_request("Office Survivor Pool", Some(3)))
        .is_ok());
}

#[test]
fn rejects_blank_and_oversized_league_names() {
    let validator = LeagueValidator::new();

    assert!(validator.validate_create_league_request(&create_request("   ", None)).is_err());
    assert!(validator.validate_create_league_request(&create_request("!!!", None)).is_err());
    let long_name = "x".repeat(101);
    assert!(validator.validate_create_league_request(&create_request(&long_name, None)).is_err());
}

#[test]
fn rejects_out_of_range_strike_limits() {
    let validator = LeagueValidator::new();

    assert!(validator.validate_create_league_request(&create_request("Pool", Some(0))).is_err());
    assert!(validator.validate_create_league_request(&create_request("Pool", Some(21))).is_err());
    assert!(validator.validate_create_league_request(&create_request("Pool", Some(1))).is_ok());
}

#[test]
fn rejects_empty_competition_tag() {
    let validator = LeagueValidator::new();
    let mut request = create_request("Pool", None);
    request.competition = "".to_string();
    assert!(validator.validate_create_league_request(&request).is_err());
}

#[test]
fn settings_update_validates_only_provided_fields() {
    let validator = LeagueValidator::new();

    let empty = LeagueSettingsUpdate { name: None, max_strikes: None };
    assert!(validator.validate_settings_update(&empty).is_ok());

    let bad_name = LeagueSettingsUpdate { name: Some(" ".to_string()), max_strikes: None };
    assert!(validator.validate_settings_update(&bad_name).is_err());
}

#[test]
fn week_pointers_allow_zero_but_not_negatives() {
    let validator = LeagueValidator::new();

    let unconfigured = WeekPointerUpdate { current_pick_week: 0, current_game_week: 0 };
    assert!(validator.validate_week_pointers(&unconfigured).is_ok());

    let negative = WeekPointerUpdate { current_pick_week: -1, current_game_week: 0 };
    assert!(validator.validate_week_pointers(&negative).is_err());

    let too_high = WeekPointerUpdate { current_pick_week: 101, current_game_week: 5 };
    assert!(validator.validate_week_pointers(&too_high).is_err());
}

#[test]
fn game_scores_must_be_non_negative() {
    let validator = LeagueValidator::new();

    assert!(validator.validate_game_scores(2, 1).is_ok());
    assert!(validator.validate_game_scores(0, 0).is_ok());
    assert!(validator.validate_game_scores(-1, 0).is_err());
    assert!(validator.validate_game_scores(0, 201).is_err());
}

#[test]
fn pagination_defaults_and_limits() {
    let validator = LeagueValidator::new();

    assert_eq!(validator.validate_pagination(None, None).unwrap(), (20, 0));
    assert_eq!(validator.validate_pagination(Some(3), Some(10)).unwrap(), (10, 20));
    assert!(validator.validate_pagination(Some(0), None).is_err());
    assert!(validator.validate_pagination(None, Some(101)).is_err());
}

#[test]
fn match_result_from_scores() {
    assert_eq!(MatchResult::from_scores(2, 1), MatchResult::Win);
    assert_eq!(MatchResult::from_scores(0, 3), MatchResult::Loss);
    assert_eq!(MatchResult::from_scores(1, 1), MatchResult::Draw);
}
