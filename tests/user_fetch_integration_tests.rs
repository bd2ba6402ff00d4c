use serde_json::json;
use user_autocomplete::{
    AppError,
    commands::{format_selected_user, format_user_list},
    config::Config,
    data_fetcher::{create_http_client_with_timeout, fetch_users, fetch_users_with_config},
    testing_utils::{SAMPLE_NAMES, TestDataBuilder},
    ui::{LoadState, UserPicker, screen_lines},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

async fn mock_users_server(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> Config {
    Config {
        users_endpoint: format!("{}/users", server.uri()),
        log_file_path: None,
        http_timeout_seconds: 5,
    }
}

/// Test that fetched users arrive formatted and sorted by last name
#[tokio::test]
async fn test_fetch_users_sorted_by_last_name() {
    let server = mock_users_server(TestDataBuilder::users_json(&SAMPLE_NAMES)).await;

    let users = fetch_users_with_config(&config_for(&server)).await.unwrap();
    let displays: Vec<&str> = users.iter().map(|u| u.display()).collect();

    assert_eq!(
        displays,
        vec![
            "Bauch, Clementine",
            "Dietrich, Chelsey",
            "DuBuque, Clementina",
            "Graham, Leanne",
            "Howell, Ervin",
            "Lebsack, Patricia",
            "Reichert, Glenna",
            "Runolfsdottir V, Nicholas",
            "Schulist, Dennis (Mrs.)",
            "Weissnat, Kurtis",
        ]
    );
}

/// Test that accented last names sort with their base letter and can be found without accents
#[tokio::test]
async fn test_accented_names_sort_and_search_without_accents() {
    let server = mock_users_server(TestDataBuilder::users_json(&[
        "Anna Zimmer",
        "Bob Ångström",
        "Carl Ebert",
        "José Núñez",
    ]))
    .await;

    let users = fetch_users_with_config(&config_for(&server)).await.unwrap();
    let keys: Vec<&str> = users.iter().map(|u| u.sortable_last_name()).collect();
    assert_eq!(keys, vec!["ångström", "ebert", "núñez", "zimmer"]);

    assert_eq!(format_user_list(&users, Some("nunez")), vec!["   4  Núñez, José"]);
}

/// Test that users sharing a last name keep the order the endpoint returned
#[tokio::test]
async fn test_equal_last_names_keep_response_order() {
    let server =
        mock_users_server(TestDataBuilder::users_json(&["Zoe Smith", "Adam Smith", "Eve Adams"]))
            .await;
    let client = create_http_client_with_timeout(5).unwrap();

    let users = fetch_users(&client, &format!("{}/users", server.uri()))
        .await
        .unwrap();
    let ids: Vec<u64> = users.iter().map(|u| u.user.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

/// Test a full picker session against fetched data
#[tokio::test]
async fn test_picker_flow_over_fetched_users() {
    let server = mock_users_server(TestDataBuilder::users_json(&SAMPLE_NAMES)).await;
    let users = fetch_users_with_config(&config_for(&server)).await.unwrap();

    let mut picker = UserPicker::new(users);
    for c in "clem".chars() {
        picker.push_char(c);
    }
    assert_eq!(picker.match_count(), 2);

    picker.move_down();
    let selected = picker.select_highlighted().map(|u| u.display().to_string());
    assert_eq!(selected.as_deref(), Some("DuBuque, Clementina"));

    let state = LoadState::Loaded(picker);
    let lines = screen_lines(&state, 48);
    assert!(lines.iter().any(|l| l.text == "10 Kulas Light"));
    assert!(lines.iter().any(|l| l.text == "Gwenborough, 92998-3874"));
}

/// Test the once-mode listing helpers against fetched data
#[tokio::test]
async fn test_once_mode_output_from_fetched_users() {
    let server = mock_users_server(TestDataBuilder::users_json(&SAMPLE_NAMES)).await;
    let users = fetch_users_with_config(&config_for(&server)).await.unwrap();

    let lines = format_user_list(&users, Some("howell"));
    assert_eq!(lines, vec!["   2  Howell, Ervin"]);

    let detail = format_selected_user(&users, 1).unwrap();
    assert_eq!(
        detail,
        vec!["Graham, Leanne", "1 Kulas Light", "Apt. 1", "Gwenborough, 92998-3874"]
    );
}

/// Test that records missing required fields are rejected as a schema mismatch
#[tokio::test]
async fn test_schema_mismatch_is_reported() {
    let server = mock_users_server(json!([{ "id": 1, "name": "Leanne Graham" }])).await;

    let result = fetch_users_with_config(&config_for(&server)).await;
    match result {
        Err(AppError::SchemaMismatch { url, .. }) => assert!(url.ends_with("/users")),
        other => panic!("Expected SchemaMismatch, got {other:?}"),
    }
}

/// Test that a server error becomes a failed load state with a readable message
#[tokio::test]
async fn test_server_error_becomes_failed_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = fetch_users_with_config(&config_for(&server)).await;
    assert!(matches!(
        result,
        Err(AppError::ApiServerError { status: 500, .. })
    ));

    let state = LoadState::from_fetch_result(result);
    let lines = screen_lines(&state, 200);
    assert!(lines[0].text.starts_with("Failed to load users: API server error (500)"));
}

/// Test that an empty array loads an empty picker
#[tokio::test]
async fn test_empty_user_list() {
    let server = mock_users_server(json!([])).await;

    let users = fetch_users_with_config(&config_for(&server)).await.unwrap();
    assert!(users.is_empty());

    let state = LoadState::from_fetch_result(Ok(users));
    let lines = screen_lines(&state, 48);
    assert!(lines.iter().any(|l| l.text == "No options"));
}
