use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Word};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_words_empty() {
    let resp = app().oneshot(empty_request("GET", "/words")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let words: Vec<Word> = body_json(resp).await;
    assert!(words.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_word_lowercases_and_returns_200() {
    let resp = app()
        .oneshot(json_request("POST", "/words", r#"{"word":"Serendipity"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let word: Word = body_json(resp).await;
    assert_eq!(word.word, "serendipity");
    assert_eq!(word.kind, "word");
    assert!(!word.is_learned);
}

#[tokio::test]
async fn create_word_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/words", r#"{"text":"nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- not found ---

#[tokio::test]
async fn update_word_not_found_has_detail() {
    let resp = app()
        .oneshot(json_request("PUT", "/words/42", r#"{"translation":"x"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({"detail": "Word not found"}));
}

#[tokio::test]
async fn toggle_learned_not_found() {
    let resp = app()
        .oneshot(empty_request("PATCH", "/words/42/toggle_learned"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/words/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_has_empty_body() {
    let resp = app().oneshot(empty_request("GET", "/nope")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- full lifecycle ---

#[tokio::test]
async fn word_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    async fn send(
        app: &mut axum::routing::RouterIntoService<String>,
        req: Request<String>,
    ) -> axum::response::Response {
        ServiceExt::ready(app).await.unwrap().call(req).await.unwrap()
    }

    // create a phrasal verb, an idiom and a plain word
    let resp = send(&mut app, json_request("POST", "/words", r#"{"word":"give up"}"#)).await;
    let give_up: Word = body_json(resp).await;
    assert!(give_up.is_phrasal);

    let body = r#"{"word":"spill the beans"}"#;
    let resp = send(&mut app, json_request("POST", "/words", body)).await;
    let idiom: Word = body_json(resp).await;
    assert!(idiom.is_idiom);

    let resp = send(&mut app, json_request("POST", "/words", r#"{"word":"apple"}"#)).await;
    let apple: Word = body_json(resp).await;

    // list: newest first
    let resp = send(&mut app, empty_request("GET", "/words")).await;
    let words: Vec<Word> = body_json(resp).await;
    let ids: Vec<i64> = words.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![apple.id, idiom.id, give_up.id]);

    // toggle learned: apple sinks to the end
    let uri = format!("/words/{}/toggle_learned", apple.id);
    let resp = send(&mut app, empty_request("PATCH", &uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let toggled: Word = body_json(resp).await;
    assert!(toggled.is_learned);

    let resp = send(&mut app, empty_request("GET", "/words")).await;
    let words: Vec<Word> = body_json(resp).await;
    assert_eq!(words.last().unwrap().id, apple.id);

    // phrasal roots and verbs
    let resp = send(&mut app, empty_request("GET", "/words/phrasal_roots")).await;
    let roots: Vec<String> = body_json(resp).await;
    assert_eq!(roots, vec!["Give"]);

    let resp = send(&mut app, empty_request("GET", "/words/phrasal/GIVE")).await;
    let verbs: Vec<Word> = body_json(resp).await;
    assert_eq!(verbs.len(), 1);
    assert_eq!(verbs[0].id, give_up.id);

    // idioms
    let resp = send(&mut app, empty_request("GET", "/words/idioms")).await;
    let idioms: Vec<Word> = body_json(resp).await;
    assert_eq!(idioms.len(), 1);
    assert_eq!(idioms[0].id, idiom.id);

    // update: partial
    let resp = send(
        &mut app,
        json_request("PUT", &format!("/words/{}", apple.id), r#"{"translation":"яблоко"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Word = body_json(resp).await;
    assert_eq!(updated.translation, "яблоко");
    assert_eq!(updated.word, "apple");
    assert!(updated.is_learned);

    // delete
    let resp = send(&mut app, empty_request("DELETE", &format!("/words/{}", apple.id))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Deleted successfully");

    // delete again: 404
    let resp = send(&mut app, empty_request("DELETE", &format!("/words/{}", apple.id))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&mut app, empty_request("GET", "/words")).await;
    let words: Vec<Word> = body_json(resp).await;
    assert_eq!(words.len(), 2);
}
