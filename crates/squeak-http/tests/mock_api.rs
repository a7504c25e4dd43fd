//! Mock backend tests for the access layer.
//!
//! These tests use wiremock to stand in for the Squeak backend and check the
//! gate's behavior end to end: what reaches the network, with which
//! credentials, and how failures come back.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;
use squeak_core::error::ApiError;
use squeak_core::models::{
    ClassroomContentQuery, CreateClassroomRequest, EvaluateAnswerRequest, ModerateContentRequest,
    SpeechToTextRequest, TextToSpeechRequest, TranslateRequest, UpdateClassroomRequest,
};
use squeak_core::{
    AccessToken, ApiBaseUrl, Error, ErrorCode, ErrorPayload, MemoryIdentityProvider,
    SessionEvent, SessionHolder,
};
use squeak_http::{ClientFactory, SqueakClient};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a base URL from a mock server.
fn mock_base_url(server: &MockServer) -> ApiBaseUrl {
    ApiBaseUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn client_with(server: &MockServer, session: SessionHolder) -> SqueakClient {
    SqueakClient::new(session, ClientFactory::new(mock_base_url(server)).unwrap())
}

fn signed_in(server: &MockServer, token: &str) -> SqueakClient {
    client_with(server, SessionHolder::with_token(AccessToken::new(token)))
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

async fn wait_for_token(client: &SqueakClient, expected: Option<&str>) {
    for _ in 0..200 {
        let current = client.session().token();
        if current.as_ref().map(AccessToken::as_str) == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("session token never became {:?}", expected);
}

// ============================================================================
// Unauthenticated calls
// ============================================================================

#[tokio::test]
async fn test_get_profile_without_session_is_refused() {
    let server = MockServer::start().await;
    let client = client_with(&server, SessionHolder::new());

    let err = client.profile().get_profile().await.unwrap_err();

    assert!(err.is_auth_required());
    assert_eq!(err.code(), Some(ErrorCode::AuthRequired));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_error_returning_call_without_session() {
    let server = MockServer::start().await;
    let client = client_with(&server, SessionHolder::new());

    let result = client.billing().get_billing_account().await;

    assert!(result.data().is_none());
    assert_eq!(result.error(), Some(&ErrorPayload::auth_required()));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_every_accessor_is_gated() {
    let server = MockServer::start().await;
    let client = client_with(&server, SessionHolder::new());

    assert!(client.teacher().verify_teacher().await.is_err());
    assert!(client.student().get_student_status().await.is_err());
    assert!(client.stories().get_story("1", 1).await.is_err());
    assert!(client.news().get_news("1").await.is_err());
    assert!(client.progress().get_streak().await.is_err());
    assert!(client.organization().get_organization().await.error().is_some());
    assert!(client.organization().create_organization().await.error().is_some());

    assert_eq!(request_count(&server).await, 0);
}

// ============================================================================
// Authenticated calls
// ============================================================================

#[tokio::test]
async fn test_get_profile_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "x"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let profile = client.profile().get_profile().await.unwrap();

    assert_eq!(profile.username, "x");
}

#[tokio::test]
async fn test_each_call_refetches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progress/streak"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"streak": 7, "completed_today": true})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let first = client.progress().get_streak().await.unwrap();
    let second = client.progress().get_streak().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.streak, 7);
}

#[tokio::test]
async fn test_billing_account_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/billing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plan": "PRO",
            "expiration": "2025-01-01T00:00:00Z",
            "canceled": false
        })))
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let result = client.billing().get_billing_account().await;

    assert!(result.is_success());
    let account = result.data().unwrap();
    assert_eq!(account.plan, "PRO");
    assert_eq!(
        account.expiration,
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_fetch_content_asks_for_all_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teacher/classroom/content"))
        .and(query_param("content_type", "All"))
        .and(query_param("language", "French"))
        .and(query_param("page", "2"))
        .and(query_param("whitelist", "false"))
        .and(query_param("classroom_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "2479",
            "cefr_level": "B1",
            "content_type": "News",
            "created_at": "2025-02-26T13:01:13.390612Z",
            "date_created": "2025-02-26",
            "language": "French",
            "pages": 10,
            "preview_text": "Un flot de nouveautés",
            "title": "L'actualité musicale en bref",
            "topic": "Music"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let query = ClassroomContentQuery {
        language: "French".to_string(),
        cefr: "B1".to_string(),
        subject: "Music".to_string(),
        page: 2,
        pagesize: 10,
        whitelist: false,
        classroom_id: Some("42".to_string()),
    };
    let items = client.teacher().fetch_content(&query).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "2479");
}

#[tokio::test]
async fn test_increment_progress_sends_amount() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/progress/increment"))
        .and(query_param("amount", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": "123",
            "date": "2025-02-26T00:00:00Z",
            "questions_completed": 5,
            "goal_met": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let progress = client.progress().increment_progress(3).await.unwrap();

    assert_eq!(progress.questions_completed, 5);
    assert!(progress.goal_met);
}

#[tokio::test]
async fn test_evaluate_answer_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/qna/evaluate"))
        .and(body_json(json!({
            "cefr": "B1",
            "content": "Bonjour, comment ça va?",
            "question": "What does 'bonjour' mean?",
            "answer": "Hello"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"evaluation": "PASS", "explanation": "Perfect!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = EvaluateAnswerRequest {
        cefr: "B1".to_string(),
        content: "Bonjour, comment ça va?".to_string(),
        question: "What does 'bonjour' mean?".to_string(),
        answer: "Hello".to_string(),
    };
    let evaluation = client.qna().evaluate_answer(&request).await.unwrap();

    assert_eq!(evaluation.evaluation, "PASS");
}

// ============================================================================
// Backend errors
// ============================================================================

#[tokio::test]
async fn test_update_classroom_reports_error_inline() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/teacher/classroom/update"))
        .and(body_json(json!({"classroom_id": "42", "name": ""})))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"error": "bad name", "code": "VALIDATION"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = UpdateClassroomRequest {
        classroom_id: "42".to_string(),
        name: String::new(),
    };
    let result = client.teacher().update_classroom(&request).await;

    assert!(result.data().is_none());
    assert_eq!(
        result.error(),
        Some(&ErrorPayload::new("bad name", Some(ErrorCode::from("VALIDATION"))))
    );
}

#[tokio::test]
async fn test_throwing_call_rejects_with_same_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/teacher/classroom/accept"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"error": "bad name", "code": "VALIDATION"})),
        )
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = ModerateContentRequest {
        classroom_id: "42".to_string(),
        content_type: "News".to_string(),
        content_id: 7,
    };
    let err = client.teacher().accept_content(&request).await.unwrap_err();

    match err {
        Error::Api(ApiError { status, payload }) => {
            assert_eq!(status, 422);
            assert_eq!(
                payload,
                ErrorPayload::new("bad name", Some(ErrorCode::from("VALIDATION")))
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_known_error_code_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Profile not found",
            "code": "PROFILE_NOT_FOUND"
        })))
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let err = client.profile().get_profile().await.unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::ProfileNotFound));
}

#[tokio::test]
async fn test_non_json_error_body_gets_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organization/join"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = squeak_core::models::JoinOrganizationRequest {
        organization_id: "123".to_string(),
    };
    let result = client.organization().join_organization(&request).await;

    let error = result.error().unwrap();
    assert_eq!(error.error, "request failed with HTTP 502");
    assert_eq!(error.code, None);
}

#[tokio::test]
async fn test_empty_error_code_is_no_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/teacher/classroom/create"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "Failed to get classroom", "code": ""})),
        )
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = CreateClassroomRequest {
        name: "French 101".to_string(),
        students_count: 20,
    };
    let result = client.teacher().create_classroom(&request).await;

    let error = result.error().unwrap();
    assert_eq!(error, &ErrorPayload::new("Failed to get classroom", None));
    assert_eq!(error.to_string(), "Failed to get classroom");
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    let base = ApiBaseUrl::new("http://127.0.0.1:1").unwrap();
    let client = SqueakClient::new(
        SessionHolder::with_token(AccessToken::new("abc")),
        ClientFactory::new(base).unwrap(),
    );

    let err = client.profile().get_profile().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));

    let result = client.billing().get_billing_account().await;
    assert!(result.error().is_some_and(|e| e.code.is_none()));
}

// ============================================================================
// Audio
// ============================================================================

#[tokio::test]
async fn test_missing_transcript_is_reported_inline() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/stt"))
        .and(body_json(json!({
            "audio_content": "UklGRg==",
            "language_code": "fr-FR",
            "premium": false
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Speech-to-text failed",
            "code": "NO_TRANSCRIPT"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = SpeechToTextRequest {
        audio_content: "UklGRg==".to_string(),
        language_code: "fr-FR".to_string(),
        premium: false,
    };
    let result = client.audio().speech_to_text(&request).await;

    assert!(result.data().is_none());
    assert_eq!(
        result.error(),
        Some(&ErrorPayload::new(
            "Speech-to-text failed",
            Some(ErrorCode::NoTranscript)
        ))
    );
}

#[tokio::test]
async fn test_text_to_speech_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/tts"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"audio_content": "SUQzBA=="})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = TextToSpeechRequest {
        text: "Bonjour".to_string(),
        language_code: "fr-FR".to_string(),
        voice_name: "fr-FR-Standard-A".to_string(),
        natural: false,
    };
    let result = client.audio().text_to_speech(&request).await;

    assert_eq!(result.data().unwrap().audio_content, "SUQzBA==");
}

#[tokio::test]
async fn test_translate_failure_is_returned_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/audio/translate"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "Translation failed", "code": ""})),
        )
        .mount(&server)
        .await;

    let client = signed_in(&server, "abc");
    let request = TranslateRequest {
        sentence: "Hello".to_string(),
        source: "en".to_string(),
        target: "fr".to_string(),
    };
    let err = client.audio().translate(&request).await.unwrap_err();

    assert_eq!(err.payload(), ErrorPayload::new("Translation failed", None));
    assert_eq!(err.code(), None);
}

#[tokio::test]
async fn test_audio_without_session_is_refused() {
    let server = MockServer::start().await;
    let client = client_with(&server, SessionHolder::new());

    assert!(client.audio().ping_audio().await.unwrap_err().is_auth_required());
    let request = TextToSpeechRequest {
        text: "Bonjour".to_string(),
        language_code: "fr-FR".to_string(),
        voice_name: "fr-FR-Standard-A".to_string(),
        natural: true,
    };
    let result = client.audio().text_to_speech(&request).await;
    assert_eq!(result.error(), Some(&ErrorPayload::auth_required()));

    assert_eq!(request_count(&server).await, 0);
}

// ============================================================================
// Session changes
// ============================================================================

#[tokio::test]
async fn test_in_flight_call_keeps_its_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"username": "x"}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let session = SessionHolder::with_token(AccessToken::new("abc"));
    let client = client_with(&server, session.clone());

    let profile_api = client.profile();
    let slow = profile_api.get_profile();
    let change_then_call = async {
        for _ in 0..200 {
            if request_count(&server).await >= 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        session.apply(SessionEvent::token_refreshed(AccessToken::new("def")));
        client.profile().get_profile().await
    };

    let (first, second) = tokio::join!(slow, change_then_call);
    assert_eq!(first.unwrap().username, "x");
    assert_eq!(second.unwrap().username, "x");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let auth: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("authorization").unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(auth, vec!["Bearer abc", "Bearer def"]);
}

#[tokio::test]
async fn test_token_change_uses_new_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "x"})))
        .mount(&server)
        .await;

    let provider = MemoryIdentityProvider::with_token(AccessToken::new("abc"));
    let client = SqueakClient::connect(mock_base_url(&server), &provider)
        .await
        .unwrap();

    client.profile().get_profile().await.unwrap();

    provider.refresh(AccessToken::new("def"));
    wait_for_token(&client, Some("def")).await;

    client.profile().get_profile().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let auth = |i: usize| {
        requests[i]
            .headers
            .get("authorization")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    };
    assert_eq!(auth(0), "Bearer abc");
    assert_eq!(auth(1), "Bearer def");
}

#[tokio::test]
async fn test_sign_out_closes_access() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/student"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "student_id": "123",
            "classroom_id": "456",
            "plan": "FREE"
        })))
        .mount(&server)
        .await;

    let provider = MemoryIdentityProvider::with_token(AccessToken::new("abc"));
    let client = SqueakClient::connect(mock_base_url(&server), &provider)
        .await
        .unwrap();

    let status = client.student().get_student_status().await.unwrap();
    assert_eq!(status.classroom_id, "456");

    provider.sign_out();
    wait_for_token(&client, None).await;

    let err = client.student().get_student_status().await.unwrap_err();
    assert!(err.is_auth_required());
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_failed_initial_session_lookup_is_signed_out() {
    let server = MockServer::start().await;

    let provider = MemoryIdentityProvider::with_token(AccessToken::new("abc"));
    provider.fail_initial_fetch();
    let client = SqueakClient::connect(mock_base_url(&server), &provider)
        .await
        .unwrap();

    assert!(!client.is_authenticated());
    assert!(!client.session().is_loading());
    assert!(client.profile().get_profile().await.is_err());
    assert_eq!(request_count(&server).await, 0);

    provider.sign_in(AccessToken::new("later"));
    wait_for_token(&client, Some("later")).await;
    assert!(client.is_authenticated());
}
