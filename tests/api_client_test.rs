//! Contract tests for ApiClient against a mocked GoBarber API.
//!
//! | Method | Path        | Test                 |
//! |--------|-------------|----------------------|
//! | POST   | `/users`    | `create_user_*`      |
//! | POST   | `/sessions` | `create_session_*`   |

use std::sync::Arc;

use gobarber_forms::flow::{sign_up_screen, Navigator, Notifier, SubmitOutcome, Toast};
use gobarber_forms::{forms, ApiClient, ApiConfig, ApiError, Credentials, NewUser};
use parking_lot::Mutex;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(&mock_server.uri()).unwrap().with_timeout_secs(5);
    ApiClient::new(config).unwrap()
}

fn ana() -> NewUser {
    NewUser {
        name: "Ana".into(),
        email: "a@b.com".into(),
        password: "123456".into(),
    }
}

// ── POST /users ─────────────────────────────────────────────────────

#[tokio::test]
async fn create_user_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(serde_json::json!({
            "name": "Ana",
            "email": "a@b.com",
            "password": "123456"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "7f1c",
            "name": "Ana",
            "email": "a@b.com"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.create_user(&ana()).await.unwrap();
}

#[tokio::test]
async fn create_user_ignores_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(client.create_user(&ana()).await.is_ok());
}

#[tokio::test]
async fn create_user_reports_status_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Email address already used."
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.create_user(&ana()).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    match err {
        ApiError::Status { endpoint, body, .. } => {
            assert_eq!(endpoint, "POST /users");
            assert!(body.contains("already used"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_user_reports_transport_errors() {
    // Nothing listens on port 9 on a test machine.
    let config = ApiConfig::new("http://127.0.0.1:9").unwrap().with_timeout_secs(2);
    let client = ApiClient::new(config).unwrap();

    let err = client.create_user(&ana()).await.unwrap_err();
    assert!(matches!(err, ApiError::Http { .. }));
}

// ── POST /sessions ──────────────────────────────────────────────────

#[tokio::test]
async fn create_session_returns_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(serde_json::json!({
            "email": "a@b.com",
            "password": "123456"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {"name": "Ana"},
            "token": "jwt-token"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = client
        .create_session(&Credentials {
            email: "a@b.com".into(),
            password: "123456".into(),
        })
        .await
        .unwrap();

    assert_eq!(session.token, "jwt-token");
    assert_eq!(session.user["name"], "Ana");
}

#[tokio::test]
async fn create_session_rejects_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": {}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .create_session(&Credentials {
            email: "a@b.com".into(),
            password: "123456".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

// ── sign-up screen over HTTP ────────────────────────────────────────

#[derive(Default)]
struct Toasts(Mutex<Vec<Toast>>);

impl Notifier for Toasts {
    fn notify(&self, toast: Toast) {
        self.0.lock().push(toast);
    }
}

struct NoRoutes;

impl Navigator for NoRoutes {
    fn navigate(&self, _route: &str) {}
}

#[tokio::test]
async fn sign_up_screen_server_error_shows_one_toast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let toasts = Arc::new(Toasts::default());
    let mut screen = sign_up_screen(
        Arc::new(forms::sign_up()),
        test_client(&mock_server),
        Arc::clone(&toasts),
        NoRoutes,
    );
    screen.change("name", "Ana");
    screen.change("email", "a@b.com");
    screen.change("password", "123456");

    assert_eq!(screen.submit().await, SubmitOutcome::Failed);
    assert_eq!(toasts.0.lock().len(), 1);
    assert!(screen.state().errors().is_empty());
}
