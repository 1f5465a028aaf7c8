//! Integration tests for the REST faculty store against a mock PostgREST server

use faculty_common::{FacultyError, FacultyRecord};
use faculty_ingest::config::StoreConfig;
use faculty_ingest::store::{FacultyStore, RestStore};
use faculty_ingest::{extract_str, load};
use wiremock::{
    matchers::{body_json, body_partial_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const API_KEY: &str = "test-anon-key";

fn store_for(server: &MockServer) -> RestStore {
    let config = StoreConfig::builder()
        .base_url(server.uri())
        .api_key(API_KEY)
        .build();

    RestStore::new(&config).expect("valid config")
}

#[tokio::test]
async fn test_clear_all_sends_match_all_filter() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/faculty"))
        .and(query_param("id", "neq.00000000-0000-0000-0000-000000000000"))
        .and(header("apikey", API_KEY))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server).clear_all().await.expect("clear succeeds");
}

#[tokio::test]
async fn test_insert_posts_flat_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/faculty"))
        .and(header("prefer", "return=minimal"))
        .and(body_json(serde_json::json!({
            "name": "Mr. Zakria Bacha",
            "designation": "Instructor",
            "department": "Computer Science",
            "campus": "Peshawar",
            "university": null
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let record = FacultyRecord::new("Mr. Zakria Bacha", "Instructor", "Computer Science")
        .with_campus(Some("Peshawar".to_string()));

    store_for(&server).insert(&record).await.expect("insert succeeds");
}

#[tokio::test]
async fn test_rejected_insert_maps_to_store_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/faculty"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_string(r#"{"code":"23505","message":"duplicate key value"}"#),
        )
        .mount(&server)
        .await;

    let err = store_for(&server)
        .insert(&FacultyRecord::new("A", "B", "General"))
        .await
        .expect_err("409 is a failure");

    match err {
        FacultyError::Store { status, message } => {
            assert_eq!(status, 409);
            assert!(message.contains("duplicate key value"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_store_is_network_error() {
    let config = StoreConfig::builder()
        .base_url("http://127.0.0.1:1")
        .api_key(API_KEY)
        .timeout_secs(2)
        .build();
    let store = RestStore::new(&config).expect("valid config");

    let err = store.clear_all().await.expect_err("nothing listens on port 1");
    assert!(matches!(err, FacultyError::Network(_)));
}

#[tokio::test]
async fn test_end_to_end_load() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/faculty"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // mounted first so it wins over the catch-all insert mock
    Mock::given(method("POST"))
        .and(path("/rest/v1/faculty"))
        .and(body_partial_json(serde_json::json!({ "name": "Mr. Hamza Raziq Khan" })))
        .respond_with(ResponseTemplate::new(400).set_body_string("null value in column"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/faculty"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let extraction = extract_str(
        "University : FAST-NUCES\n\
         Campus : Peshawar\n\
         Department of Computer Science\n\
         Mr. Hamza Raziq Khan | Instructor\n\
         Mr. Muhammad Mehdi | Instructor\n\
         \n\
         Mr. Shahzad Hassan | Instructor | Sciences and Humanities\n",
    );
    assert_eq!(extraction.records.len(), 3);

    let report = load(&store_for(&server), &extraction.records).await;

    assert!(report.cleared);
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors[0].name, "Mr. Hamza Raziq Khan");
    assert!(report.errors[0].message.contains("400"));
}
