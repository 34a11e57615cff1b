//! Tests for the HTTP API, driving the router directly.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tictactoe_server::{GameService, router};
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(GameService::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Router failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, value)
}

async fn get_game(app: &Router) -> Value {
    let (status, body) = send(app, Method::GET, "/game", None).await;
    assert_eq!(status, StatusCode::OK);
    body
}

async fn play(app: &Router, row: i64, col: i64, player: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/move",
        Some(json!({"row": row, "col": col, "player": player})),
    )
    .await
}

fn initial() -> Value {
    json!({
        "board": [["", "", ""], ["", "", ""], ["", "", ""]],
        "current_player": "X",
        "winner": null,
        "is_draw": false
    })
}

#[tokio::test]
async fn test_get_game_fresh_state() {
    let app = app();
    assert_eq!(get_game(&app).await, initial());
}

#[tokio::test]
async fn test_get_game_is_idempotent() {
    let app = app();
    play(&app, 1, 1, "X").await;
    let first = get_game(&app).await;
    let second = get_game(&app).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_first_move() {
    let app = app();
    let (status, body) = play(&app, 0, 0, "X").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"][0][0], "X");
    assert_eq!(body["current_player"], "O");
    assert_eq!(get_game(&app).await, body);
}

#[tokio::test]
async fn test_win_then_game_over() {
    let app = app();
    for (row, col, player) in [(0, 0, "X"), (1, 0, "O"), (0, 1, "X"), (1, 1, "O")] {
        assert_eq!(play(&app, row, col, player).await.0, StatusCode::OK);
    }
    let (status, body) = play(&app, 0, 2, "X").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["winner"], "X");
    assert_eq!(body["is_draw"], false);

    let (status, err) = play(&app, 2, 2, "X").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err, json!({"detail": "Game is over", "error": "game_over"}));
    assert_eq!(get_game(&app).await, body);
}

#[tokio::test]
async fn test_out_of_turn() {
    let app = app();
    let (status, err) = play(&app, 0, 0, "O").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err, json!({"detail": "Not your turn", "error": "out_of_turn"}));
    assert_eq!(get_game(&app).await, initial());
}

#[tokio::test]
async fn test_cell_occupied() {
    let app = app();
    play(&app, 0, 0, "X").await;
    let (status, err) = play(&app, 0, 0, "O").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        err,
        json!({"detail": "Position already taken", "error": "cell_occupied"})
    );
    assert_eq!(get_game(&app).await["board"][0][0], "X");
}

#[tokio::test]
async fn test_draw() {
    let app = app();
    // X O X / X O O / O X X
    let moves = [
        (0, 0, "X"),
        (0, 1, "O"),
        (0, 2, "X"),
        (1, 1, "O"),
        (1, 0, "X"),
        (1, 2, "O"),
        (2, 1, "X"),
        (2, 0, "O"),
        (2, 2, "X"),
    ];
    let mut last = Value::Null;
    for (row, col, player) in moves {
        let (status, body) = play(&app, row, col, player).await;
        assert_eq!(status, StatusCode::OK);
        last = body;
    }
    assert_eq!(
        last,
        json!({
            "board": [["X", "O", "X"], ["X", "O", "O"], ["O", "X", "X"]],
            "current_player": "X",
            "winner": null,
            "is_draw": true
        })
    );
}

#[tokio::test]
async fn test_out_of_bounds() {
    let app = app();
    let (status, err) = play(&app, 5, 0, "X").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err, json!({"detail": "Invalid position", "error": "out_of_bounds"}));

    let (status, _) = play(&app, 0, -1, "X").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(get_game(&app).await, initial());
}

#[tokio::test]
async fn test_invalid_player() {
    let app = app();
    let (status, err) = play(&app, 0, 0, "Z").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        err,
        json!({"detail": "Player must be X or O", "error": "invalid_player"})
    );
    assert_eq!(get_game(&app).await, initial());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = app();

    for body in [
        json!({"row": 0, "player": "X"}),
        json!({"row": "zero", "col": 0, "player": "X"}),
        json!({"row": 0, "col": 0, "player": 1}),
        json!({"row": 1.5, "col": 0, "player": "X"}),
        json!([1, 2, 3]),
    ] {
        let (status, err) = send(&app, Method::POST, "/move", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(err["error"], "bad_request");
        assert!(err["detail"].is_string());
    }

    // Not JSON at all, and no content type.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/move")
                .body(Body::from("row=0&col=0"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(get_game(&app).await, initial());
}

async fn post_raw(app: &Router, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/move")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_huge_coordinates_are_out_of_bounds() {
    let app = app();

    for body in [
        r#"{"row": 99999999999999999999, "col": 0, "player": "X"}"#,
        r#"{"row": 0, "col": -99999999999999999999, "player": "X"}"#,
        r#"{"row": 18446744073709551615, "col": 0, "player": "X"}"#,
        r#"{"row": 1e300, "col": 0, "player": "X"}"#,
    ] {
        let (status, err) = post_raw(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err,
            json!({"detail": "Invalid position", "error": "out_of_bounds"})
        );
    }
    assert_eq!(get_game(&app).await, initial());
}

#[tokio::test]
async fn test_whole_float_coordinates_are_accepted() {
    let app = app();
    let (status, state) = post_raw(&app, r#"{"row": 1.0, "col": 2.0, "player": "X"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["board"][1][2], "X");
    assert_eq!(state["current_player"], "O");
}

#[tokio::test]
async fn test_reset_restores_initial_state() {
    let app = app();
    play(&app, 0, 0, "X").await;
    play(&app, 1, 1, "O").await;

    let (status, body) = send(&app, Method::POST, "/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, initial());
    assert_eq!(get_game(&app).await, initial());
}

#[tokio::test]
async fn test_turns_alternate() {
    let app = app();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)];
    let mut expected = "X";
    for (row, col) in moves {
        let (status, body) = play(&app, row, col, expected).await;
        assert_eq!(status, StatusCode::OK);
        expected = if expected == "X" { "O" } else { "X" };
        assert_eq!(body["current_player"], expected);
    }
}
