use crate::e2e::helpers;

use std::sync::Arc;

use helpers::stub_server::{StubAuthority, StubSynthesisServer, SynthesisBehavior};
use helpers::{RecordingNavigator, RecordingNotifier, TEST_ACCESS_TOKEN};
use pretty_assertions::assert_eq;
use speakify::domain::session::{AccessToken, GateView, SessionError, SessionEvent, SessionGate};
use speakify::infrastructure::config::{Config, Environment, LogFormat};
use speakify::infrastructure::identity::HostedUiIdentityProvider;
use speakify::{App, SubmitOutcome};

fn hosted_ui(authority: &str, navigator: Arc<RecordingNavigator>) -> Arc<HostedUiIdentityProvider> {
    Arc::new(HostedUiIdentityProvider::new(
        authority.to_string(),
        "speakify-client".to_string(),
        "http://localhost:5173".to_string(),
        navigator,
    ))
}

#[tokio::test]
async fn it_should_navigate_to_the_hosted_login_on_sign_in() {
    let navigator = RecordingNavigator::new();
    let provider = hosted_ui("https://auth.test", navigator.clone());
    let gate = SessionGate::new(provider);
    gate.resolve().await;

    gate.sign_in().await.unwrap();

    assert_eq!(gate.view().await, GateView::Loading);
    assert_eq!(
        navigator.visited(),
        vec![
            "https://auth.test/oauth2/authorize\
             ?client_id=speakify-client\
             &response_type=code\
             &scope=email%20openid%20phone\
             &redirect_uri=http%3A%2F%2Flocalhost%3A5173"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn it_should_complete_sign_in_with_a_token_exchange() {
    let authority = StubAuthority::start(TEST_ACCESS_TOKEN).await;
    let navigator = RecordingNavigator::new();
    let provider = hosted_ui(&authority.url, navigator);
    let gate = SessionGate::new(provider.clone());

    let session = provider.complete_sign_in("test-code").await.unwrap();
    assert_eq!(
        session,
        speakify::Session::Authenticated {
            access_token: AccessToken::new(TEST_ACCESS_TOKEN)
        }
    );

    gate.resolve().await;
    assert_eq!(gate.view().await, GateView::Workspace);

    let exchanges = authority.exchanges();
    assert_eq!(exchanges.len(), 1);
    assert_eq!(
        exchanges[0].get("grant_type").map(String::as_str),
        Some("authorization_code")
    );
    assert_eq!(exchanges[0].get("code").map(String::as_str), Some("test-code"));
    assert_eq!(
        exchanges[0].get("client_id").map(String::as_str),
        Some("speakify-client")
    );
    assert_eq!(
        exchanges[0].get("redirect_uri").map(String::as_str),
        Some("http://localhost:5173")
    );
}

#[tokio::test]
async fn it_should_surface_token_exchange_failures() {
    let authority = StubAuthority::start_failing().await;
    let navigator = RecordingNavigator::new();
    let provider = hosted_ui(&authority.url, navigator);

    let err = provider.complete_sign_in("bad-code").await.unwrap_err();

    match err {
        SessionError::Provider(message) => assert!(message.contains("invalid_grant")),
        other => panic!("expected Provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn it_should_sign_out_locally_without_navigating() {
    let authority = StubAuthority::start(TEST_ACCESS_TOKEN).await;
    let navigator = RecordingNavigator::new();
    let provider = hosted_ui(&authority.url, navigator.clone());
    let gate = SessionGate::new(provider.clone());

    provider.complete_sign_in("test-code").await.unwrap();
    gate.resolve().await;
    assert_eq!(gate.view().await, GateView::Workspace);

    gate.sign_out().await.unwrap();

    assert_eq!(gate.view().await, GateView::SignIn);
    assert!(navigator.visited().is_empty());

    // The provider forgot the user too, not just the gate.
    gate.resolve().await;
    assert_eq!(gate.view().await, GateView::SignIn);
}

#[tokio::test]
async fn it_should_redirect_to_the_hosted_logout_endpoint() {
    let navigator = RecordingNavigator::new();
    let provider = hosted_ui("https://auth.test", navigator.clone());
    let gate = SessionGate::new(provider);

    gate.sign_out_redirect();

    assert_eq!(
        navigator.visited(),
        vec![
            "https://auth.test/logout\
             ?client_id=speakify-client\
             &logout_uri=http%3A%2F%2Flocalhost%3A5173"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn it_should_gate_the_workflow_behind_authentication() {
    let server = StubSynthesisServer::start(SynthesisBehavior::Ok {
        file_url: "https://cdn/x.mp3".to_string(),
    })
    .await;
    let config = Config {
        synthesis_url: server.url.clone(),
        authority: "https://auth.test".to_string(),
        client_id: "speakify-client".to_string(),
        redirect_uri: "http://localhost:5173".to_string(),
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
    };
    let notifier = RecordingNotifier::new();
    let app = App::new(&config, RecordingNavigator::new(), notifier);

    // Nothing reaches the synthesis service before authentication.
    let err = app.convert("Hello world").await.unwrap_err();
    assert!(matches!(err, SessionError::NotAuthenticated));
    assert_eq!(server.hits(), 0);

    app.gate()
        .apply(SessionEvent::Authenticated {
            access_token: AccessToken::new(TEST_ACCESS_TOKEN),
        })
        .await;
    // The gate only accepts the event while loading; it starts there.
    assert_eq!(app.gate().view().await, GateView::Workspace);

    let outcome = app.convert("Hello world").await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Converted(_)));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some(format!("Bearer {}", TEST_ACCESS_TOKEN).as_str())
    );
}
