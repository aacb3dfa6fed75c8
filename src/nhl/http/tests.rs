//! HTTP client tests against a mocked stats API

use super::*;
use crate::{cli::types::PlayerId, error::FailureKind};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn barkov() -> PlayerRef {
    PlayerRef {
        id: PlayerId::new(8475166),
        full_name: Some("Aleksander Barkov".to_string()),
        link: "/api/v1/people/8475166".to_string(),
    }
}

async fn client_for(server: &MockServer) -> NhlClient {
    NhlClient::new(server.uri(), AgeCutoff::default()).unwrap()
}

#[test]
fn test_base_url_constant() {
    assert_eq!(NHL_STATS_BASE_URL, "https://statsapi.web.nhl.com");
}

#[test]
fn test_trailing_slash_trimmed() {
    let client = NhlClient::new("http://localhost:9000/", AgeCutoff::default()).unwrap();
    assert_eq!(client.base_url(), "http://localhost:9000");
}

#[tokio::test]
async fn test_fetch_teams() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [
                { "id": 13, "name": "Florida Panthers", "firstYearOfPlay": "1993" },
                { "id": 54, "name": "Vegas Golden Knights", "firstYearOfPlay": "2017" }
            ]
        })))
        .mount(&server)
        .await;

    let teams = client_for(&server).await.fetch_teams().await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Florida Panthers");
    assert_eq!(teams[1].first_year_of_play, Season::new(2017));
}

#[tokio::test]
async fn test_fetch_roster_sends_season_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/13"))
        .and(query_param("expand", "team.roster"))
        .and(query_param("season", "20192020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{
                "id": 13,
                "roster": { "roster": [
                    { "person": { "id": 8475166, "fullName": "Aleksander Barkov", "link": "/api/v1/people/8475166" } }
                ]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let roster = client_for(&server)
        .await
        .fetch_roster(TeamId::new(13), Season::new(2019))
        .await
        .unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].person, barkov());
}

#[tokio::test]
async fn test_fetch_roster_without_roster_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/54"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "teams": [{ "id": 54, "name": "Vegas Golden Knights" }] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_roster(TeamId::new(54), Season::new(2010))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotFound);
}

#[tokio::test]
async fn test_fetch_personal_info_computes_age() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8475166"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [{
                "id": 8475166,
                "fullName": "Aleksander Barkov",
                "birthDate": "1995-09-02",
                "height": "6' 3\"",
                "weight": 213
            }]
        })))
        .mount(&server)
        .await;

    let info = client_for(&server)
        .await
        .fetch_personal_info(&barkov(), Season::new(2019))
        .await
        .unwrap();
    assert_eq!(info.full_name, "Aleksander Barkov");
    assert_eq!(info.weight, 213);
    assert_eq!(info.age.to_string(), "24-151");
}

#[tokio::test]
async fn test_fetch_personal_info_empty_people_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8475166"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "people": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_personal_info(&barkov(), Season::new(2019))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[tokio::test]
async fn test_fetch_seasonal_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8475166/stats"))
        .and(query_param("stats", "statsSingleSeason"))
        .and(query_param("season", "20192020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": [{ "splits": [{ "season": "20192020", "stat": { "goals": 20, "assists": 42 } }] }]
        })))
        .mount(&server)
        .await;

    let stats = client_for(&server)
        .await
        .fetch_seasonal_stats(&barkov(), Season::new(2019))
        .await
        .unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats.get("assists").map(|v| v.to_string()).as_deref(), Some("42"));
}

#[tokio::test]
async fn test_fetch_seasonal_stats_no_splits_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8475166/stats"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "stats": [{ "splits": [] }] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_seasonal_stats(&barkov(), Season::new(2011))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::NotFound);
}

#[tokio::test]
async fn test_http_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/people/8475166"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_personal_info(&barkov(), Season::new(2019))
        .await
        .unwrap_err();
    assert!(matches!(err, NhlError::NotFound { .. }));
}

#[tokio::test]
async fn test_http_500_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_teams().await.unwrap_err();
    assert!(matches!(err, NhlError::Http(_)));
    assert_eq!(err.kind(), FailureKind::NetworkFailure);
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_teams().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/teams/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "gone" })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.fetch_teams().await.unwrap_err();
    assert!(matches!(err, NhlError::Json(_)));
    assert_eq!(err.kind(), FailureKind::MalformedResponse);
}
