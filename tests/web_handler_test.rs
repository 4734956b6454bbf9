#![cfg(feature = "web")]
//! Web handler integration tests.
//!
//! Tests cover:
//! - League-wide and team-filtered rosters with 200 responses
//! - Upstream and inbound shape failures mapped to 400
//! - Unknown team names rejected before selection
//! - Rosters that fail delivery checks mapped to 500
//! - Unknown routes

mod common;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use magnificent7::adapters::web::{build_router, AppState, MAGNIFICENCE_PATH};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use common::*;

fn create_test_app(port: MockSnapshotPort) -> Router {
    build_router(AppState {
        snapshot_port: Arc::new(port),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

mod roster_tests {
    use super::*;

    #[tokio::test]
    async fn returns_seven_players() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::OK);
        let players = body.as_array().unwrap();
        assert_eq!(players.len(), 7);
        assert_eq!(
            players[0],
            json!({"name": "Alisson", "total_goals_assists": 1, "position": "GKP"})
        );
        assert_eq!(players[3]["name"], "Salah");
    }

    #[tokio::test]
    async fn positions_are_grouped_in_order() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (_, body) = get_json(app, MAGNIFICENCE_PATH).await;

        let positions: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["position"].as_str().unwrap())
            .collect();
        assert_eq!(positions, vec!["GKP", "DEF", "DEF", "MID", "MID", "MID", "FWD"]);
    }

    #[tokio::test]
    async fn team_name_filters_roster() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (status, body) = get_json(app, "/get-magnificence-data/?team_name=liverpool").await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "Alisson",
                "Alexander-Arnold",
                "Van Dijk",
                "Salah",
                "Szoboszlai",
                "Mac Allister",
                "Nunez"
            ]
        );
    }

    #[tokio::test]
    async fn empty_team_name_means_no_filter() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (status, body) = get_json(app, "/get-magnificence-data/?team_name=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[6]["name"], "Havertz");
    }
}

mod error_tests {
    use super::*;

    #[tokio::test]
    async fn upstream_failure_is_bad_request() {
        let app = create_test_app(MockSnapshotPort::failing("upstream returned 500"));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Failed to fetch data"}));
    }

    #[tokio::test]
    async fn inbound_shape_errors_are_reported_per_field() {
        let app = create_test_app(MockSnapshotPort::new(json!({
            "game_settings": [],
            "total_players": [],
            "elements": {},
        })));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "events": ["This field is required."],
                "game_settings": ["Expected a dictionary of items but got type \"list\"."],
                "phases": ["This field is required."],
                "teams": ["This field is required."],
                "total_players": ["A valid integer is required."],
                "elements": ["Expected a list of items but got type \"dict\"."],
                "element_stats": ["This field is required."],
                "element_types": ["This field is required."]
            })
        );
    }

    #[tokio::test]
    async fn unknown_team_is_bad_request() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (status, body) = get_json(app, "/get-magnificence-data/?team_name=FakeTeam").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "'FakeTeam' is not a valid team."}));
    }

    #[tokio::test]
    async fn short_roster_is_server_error() {
        let elements = vec![
            player_json("LeBron", 1, 1, 3, 0),
            player_json("Kobe", 2, 1, 4, 0),
            player_json("Salah", 3, 12, 5, 0),
        ];
        let app = create_test_app(MockSnapshotPort::new(snapshot_json(elements)));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"players": ["The list must only contain 7 players."]})
        );
    }

    #[tokio::test]
    async fn empty_snapshot_is_server_error() {
        let app = create_test_app(MockSnapshotPort::new(snapshot_json(vec![])));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.get("players").is_some());
    }

    #[tokio::test]
    async fn blank_names_are_server_error() {
        let mut elements = league_elements();
        for player in elements.iter_mut().filter(|p| p["element_type"] == json!(1)) {
            player["web_name"] = json!("");
        }
        let app = create_test_app(MockSnapshotPort::new(snapshot_json(elements)));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!([
                {"name": ["This field may not be blank."]},
                {}, {}, {}, {}, {}, {}
            ])
        );
    }

    #[tokio::test]
    async fn wrong_position_count_names_the_position() {
        let mut payload = league_snapshot_json();
        payload["element_types"][3]["singular_name_short"] = json!("GKP");
        let app = create_test_app(MockSnapshotPort::new(payload));

        let (status, body) = get_json(app, MAGNIFICENCE_PATH).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"position": ["Too many position count for GKP. There can only be 1 GKP."]})
        );
    }

    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (status, body) =
            get_json(app, "/get-magnificence-data/?team_name=a&team_name=b").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = create_test_app(MockSnapshotPort::new(league_snapshot_json()));

        let (status, body) = get_json(app, "/players").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "not found"}));
    }
}
