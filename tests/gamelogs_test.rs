//! Integration tests for the public gamelogs client API

use msf_gamelogs::{
    core::RetryPolicy,
    msf::{build_daily_player_gamelogs_uri, validate_daily_player_gamelogs_uri},
    Config, DailyPlayerGamelogsOptions, MsfError, RequestOutcome, Service,
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

fn config_for(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        ..Config::default()
    }
    .with_season("2018-2019-regular")
    .with_api_key("test-key", "MYSPORTSFEEDS")
}

fn service_for(base_url: &str) -> Service {
    let policy = RetryPolicy {
        max_retries: 2,
        min_wait: Duration::from_millis(1),
        max_wait: Duration::from_millis(2),
    };
    Service::with_retry_policy(config_for(base_url), policy).unwrap()
}

fn options_for(service: &Service) -> DailyPlayerGamelogsOptions {
    let mut options = service.new_daily_player_gamelogs_options();
    options.date = "20180907".to_string();
    options.week = "1".to_string();
    options
}

#[test]
fn test_scenario_url_without_filters() {
    let service = service_for("https://api.example.com");
    let options = options_for(&service);

    validate_daily_player_gamelogs_uri(&options).unwrap();
    let uri = build_daily_player_gamelogs_uri(&options, "20180907000000");
    assert_eq!(
        uri,
        "https://api.example.com/v2.1/pull/nfl/2018-2019-regular/date/20180907/week/1/player_gamelogs.json?cachebuster=20180907000000"
    );
}

#[test]
fn test_scenario_url_with_team() {
    let service = service_for("https://api.example.com");
    let mut options = options_for(&service);
    options.team = "NE".to_string();

    let uri = build_daily_player_gamelogs_uri(&options, "20180907000000");
    assert!(uri.ends_with("&team=NE"));
    assert_eq!(uri.matches('&').count(), 1);
}

#[tokio::test]
async fn test_scenario_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"/player_gamelogs\.json$"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server.uri());
    let outcome: RequestOutcome = service
        .daily_player_gamelogs(&options_for(&service))
        .await
        .into();

    assert!(outcome.mapping.is_empty());
    assert_eq!(outcome.status, 404);
    assert!(matches!(
        outcome.error,
        Some(MsfError::HttpStatus { status: 404 })
    ));
}

#[tokio::test]
async fn test_scenario_malformed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server.uri());
    let outcome: RequestOutcome = service
        .daily_player_gamelogs(&options_for(&service))
        .await
        .into();

    assert!(outcome.mapping.is_empty());
    assert_eq!(outcome.status, 200);
    assert!(matches!(
        outcome.error,
        Some(MsfError::Decode { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_scenario_well_formed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(
            r"^/v2\.1/pull/nfl/2018-2019-regular/date/20180907/week/1/player_gamelogs\.json$",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lastUpdatedOn": "2018-09-10T14:22:31.584Z",
            "gamelogs": [
                {
                    "game": { "id": 45288, "week": 1 },
                    "player": { "id": 7312, "firstName": "Tom", "lastName": "Brady", "position": "QB" },
                    "team": { "id": 50, "abbreviation": "NE" },
                    "stats": { "passing": { "passYards": 277 } }
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server.uri());
    let mut options = options_for(&service);
    options.team = "NE".to_string();

    let outcome: RequestOutcome = service.daily_player_gamelogs(&options).await.into();

    assert!(outcome.is_success());
    assert_eq!(outcome.status, 200);
    let log = &outcome.mapping.gamelogs[0];
    assert_eq!(log.player.full_name(), "Tom Brady");
    assert_eq!(log.team.abbreviation.as_deref(), Some("NE"));
    assert_eq!(log.stat("passing", "passYards"), Some(277.0));
}

#[tokio::test]
async fn test_configured_credential_is_sent() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server.uri());
    service
        .daily_player_gamelogs(&options_for(&service))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let values: Vec<String> = requests[0]
        .headers
        .get_all("authorization")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0], "gzip");
    assert_eq!(values[1], service.config.authorization);
}
