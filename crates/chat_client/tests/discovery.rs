use chat_client::{discover, ClientSettings, ReqwestChatApi};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DEAD: &str = "http://127.0.0.1:1";

async fn live_server(expected_checks: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "running": true })),
        )
        .expect(expected_checks)
        .mount(&server)
        .await;
    server
}

fn api() -> ReqwestChatApi {
    ReqwestChatApi::new(&ClientSettings::default()).expect("client")
}

#[tokio::test]
async fn first_reachable_candidate_wins_without_probing_later_ones() {
    let first = live_server(1).await;
    let second = live_server(0).await;
    let candidates = vec![first.uri(), second.uri()];

    let found = discover(&api(), &candidates).await;

    assert_eq!(found, Some(first.uri()));
    // Expectations are verified when the servers drop.
}

#[tokio::test]
async fn unreachable_candidate_is_skipped() {
    let live = live_server(1).await;
    let candidates = vec![DEAD.to_string(), live.uri()];

    let found = discover(&api(), &candidates).await;

    assert_eq!(found, Some(live.uri()));
}

#[tokio::test]
async fn non_success_status_counts_as_unreachable() {
    let broken = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&broken)
        .await;
    let live = live_server(1).await;
    let candidates = vec![broken.uri(), live.uri()];

    let found = discover(&api(), &candidates).await;

    assert_eq!(found, Some(live.uri()));
}

#[tokio::test]
async fn no_reachable_candidate_reports_none() {
    let candidates = vec![DEAD.to_string(), "http://127.0.0.1:2".to_string()];

    assert_eq!(discover(&api(), &candidates).await, None);
}

#[tokio::test]
async fn empty_candidate_list_reports_none() {
    assert_eq!(discover(&api(), &[]).await, None);
}

#[tokio::test]
async fn plain_text_ok_answer_counts_as_reachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;
    let candidates = vec![server.uri()];

    assert_eq!(discover(&api(), &candidates).await, Some(server.uri()));
}
