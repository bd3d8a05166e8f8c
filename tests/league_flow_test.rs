use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, promote_to_admin, spawn_app};

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn registration_rejects_duplicate_usernames() {
    let app = spawn_app().await;
    let client = Client::new();

    let request = json!({
        "username": "duplicated",
        "email": "duplicated@example.com",
        "password": "password123"
    });

    let first = client
        .post(format!("{}/register_user", app.address))
        .json(&request)
        .send()
        .await
        .expect("Failed to send request");
    assert!(first.status().is_success());

    let second = client
        .post(format!("{}/register_user", app.address))
        .json(&request)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status().as_u16(), 409);
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn login_sets_auth_cookie() {
    let app = spawn_app().await;
    let client = Client::new();

    let _ = client
        .post(format!("{}/register_user", app.address))
        .json(&json!({
            "username": "cookieuser",
            "email": "cookieuser@example.com",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    let login = client
        .post(format!("{}/login", app.address))
        .json(&json!({
            "username": "cookieuser",
            "password": "password123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(login.status().is_success());
    let set_cookie = login
        .headers()
        .get("set-cookie")
        .expect("No Set-Cookie header")
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("lastman_token="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn full_survivor_league_flow() {
    let app = spawn_app().await;
    let client = Client::new();

    let (manager_name, _) = create_test_user_and_login(&app.address).await;
    let (_player_name, player_token) = create_test_user_and_login(&app.address).await;

    // The manager also runs the schedule in this test; re-login after the
    // promotion so the token carries the admin role
    promote_to_admin(&app.db_pool, &manager_name).await;
    let login = client
        .post(format!("{}/login", app.address))
        .json(&json!({ "username": manager_name, "password": "password123" }))
        .send()
        .await
        .expect("Failed to re-login");
    let body: serde_json::Value = login.json().await.unwrap();
    let manager_token = body["token"].as_str().unwrap().to_string();

    // Competition setup: two teams and one week-1 game kicking off tomorrow
    let mut team_ids = Vec::new();
    for (name, short) in [("Arsenal", "ARS"), ("Chelsea", "CHE")] {
        let response = client
            .post(format!("{}/admin/teams", app.address))
            .bearer_auth(&manager_token)
            .json(&json!({ "name": name, "short_name": short, "competition": "EPL" }))
            .send()
            .await
            .expect("Failed to create team");
        assert_eq!(response.status().as_u16(), 201);
        let body: serde_json::Value = response.json().await.unwrap();
        team_ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let kickoff = Utc::now() + Duration::days(1);
    let response = client
        .post(format!("{}/admin/games", app.address))
        .bearer_auth(&manager_token)
        .json(&json!({
            "competition": "EPL",
            "season": "2025-26",
            "week": 1,
            "home_team_id": team_ids[0],
            "away_team_id": team_ids[1],
            "start_time": kickoff
        }))
        .send()
        .await
        .expect("Failed to schedule game");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let game_id = body["data"]["id"].as_str().unwrap().to_string();

    // League setup
    let response = client
        .post(format!("{}/leagues", app.address))
        .bearer_auth(&manager_token)
        .json(&json!({
            "name": "Office Survivor Pool",
            "competition": "EPL",
            "season": "2025-26",
            "max_strikes": 2
        }))
        .send()
        .await
        .expect("Failed to create league");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let league_id = body["data"]["league"]["id"].as_str().unwrap().to_string();

    // Player joins and is approved
    let response = client
        .post(format!("{}/leagues/{}/join", app.address, league_id))
        .bearer_auth(&player_token)
        .send()
        .await
        .expect("Failed to join league");
    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    let player_id = body["data"]["user_id"].as_str().unwrap().to_string();

    // Picking before approval is refused
    let response = client
        .post(format!("{}/leagues/{}/picks", app.address, league_id))
        .bearer_auth(&player_token)
        .json(&json!({ "week": 1, "game_id": game_id, "team_id": team_ids[0] }))
        .send()
        .await
        .expect("Failed to submit pick");
    assert_eq!(response.status().as_u16(), 403);

    let response = client
        .post(format!(
            "{}/leagues/{}/members/{}/approve",
            app.address, league_id, player_id
        ))
        .bearer_auth(&manager_token)
        .send()
        .await
        .expect("Failed to approve member");
    assert!(response.status().is_success());

    // Open week 1 for picking (gameweek not started yet: game pointer stays 0)
    let response = client
        .put(format!("{}/leagues/{}/weeks", app.address, league_id))
        .bearer_auth(&manager_token)
        .json(&json!({ "current_pick_week": 1, "current_game_week": 0 }))
        .send()
        .await
        .expect("Failed to set week pointers");
    assert!(response.status().is_success());

    // Pick goes through now
    let response = client
        .post(format!("{}/leagues/{}/picks", app.address, league_id))
        .bearer_auth(&player_token)
        .json(&json!({ "week": 1, "game_id": game_id, "team_id": team_ids[0] }))
        .send()
        .await
        .expect("Failed to submit pick");
    assert!(response.status().is_success());

    // Start the gameweek; the existing pick is now locked
    let response = client
        .put(format!("{}/leagues/{}/weeks", app.address, league_id))
        .bearer_auth(&manager_token)
        .json(&json!({ "current_pick_week": 1, "current_game_week": 1 }))
        .send()
        .await
        .expect("Failed to set week pointers");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/leagues/{}/picks", app.address, league_id))
        .bearer_auth(&player_token)
        .json(&json!({ "week": 1, "game_id": game_id, "team_id": team_ids[1] }))
        .send()
        .await
        .expect("Failed to submit pick");
    assert_eq!(response.status().as_u16(), 400);

    // Final score: the player's team loses, earning a strike
    let response = client
        .put(format!("{}/admin/games/{}/result", app.address, game_id))
        .bearer_auth(&manager_token)
        .json(&json!({ "home_score": 0, "away_score": 2 }))
        .send()
        .await
        .expect("Failed to record result");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/leagues/{}/standings", app.address, league_id))
        .bearer_auth(&player_token)
        .send()
        .await
        .expect("Failed to fetch standings");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    let standings = body["data"]["standings"].as_array().unwrap();
    let player_row = standings
        .iter()
        .find(|row| row["user_id"].as_str() == Some(player_id.as_str()))
        .expect("Player missing from standings");
    assert_eq!(player_row["strikes"].as_i64(), Some(1));
    assert_eq!(player_row["points"].as_i64(), Some(0));
}
