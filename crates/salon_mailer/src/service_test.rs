use crate::service::{HttpMailer, MailerError};
use salon_common::services::NotificationService;
use salon_config::{AppConfig, MailConfig};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mail_config(api_url: String) -> MailConfig {
    MailConfig {
        api_url,
        api_key: "test-key".to_string(),
        from_address: "turnos@example.com".to_string(),
        from_name: Some("Peluquería Sol".to_string()),
        business_name: None,
    }
}

#[tokio::test]
async fn test_send_email_posts_json_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "from": "Peluquería Sol <turnos@example.com>",
            "to": "ana@example.com",
            "subject": "Turno confirmado",
            "text": "Hola Ana",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "msg-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(mail_config(format!("{}/send", server.uri()))).unwrap();
    let result = mailer
        .send_email("ana@example.com", "Turno confirmado", "Hola Ana")
        .await
        .unwrap();

    assert_eq!(result.id, "msg-1");
    assert_eq!(result.status, "200");
}

#[tokio::test]
async fn test_relay_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid recipient"))
        .mount(&server)
        .await;

    let mailer = HttpMailer::new(mail_config(format!("{}/send", server.uri()))).unwrap();
    let err = mailer
        .send_email("not-an-address", "s", "b")
        .await
        .unwrap_err();

    match err {
        MailerError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 422);
            assert_eq!(message, "invalid recipient");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_relay_is_request_error() {
    // Nothing listens on port 9 on a test host.
    let mailer = HttpMailer::new(mail_config("http://127.0.0.1:9/send".to_string())).unwrap();
    let err = mailer.send_email("a@example.com", "s", "b").await.unwrap_err();
    assert!(matches!(err, MailerError::RequestError(_)));
}

#[test]
fn test_incomplete_config_is_rejected() {
    let mut config = mail_config("http://localhost/send".to_string());
    config.from_address = String::new();
    assert!(matches!(HttpMailer::new(config), Err(MailerError::ConfigError)));
}

#[test]
fn test_from_app_config_respects_switch() {
    let mut app = AppConfig {
        mail: Some(mail_config("http://localhost/send".to_string())),
        ..AppConfig::default()
    };
    assert!(HttpMailer::from_app_config(&app).is_none());

    app.use_mail = true;
    let mailer = HttpMailer::from_app_config(&app).unwrap().unwrap();
    assert_eq!(mailer.business_name(), "Peluquería Sol");
}
