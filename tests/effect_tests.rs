//! Effect wiring tests: startup action -> reducer -> effect -> client -> action
//!
//! Drives an `EffectStore` the way the runtime does, resolving each declared
//! effect against a wiremock server and dispatching the completion back.

use owm_lookup::{
    action::Action,
    api::WeatherClient,
    config::ClientConfig,
    effect::{resolve_fetch, Effect},
    reducer::reducer,
    state::AppState,
};
use pretty_assertions::assert_eq;
use tui_dispatch::EffectStore;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "wiring-key";

fn lima_body() -> serde_json::Value {
    serde_json::json!({
        "weather": [{"main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {"temp": 18.4, "feels_like": 18.0, "pressure": 1013, "humidity": 72},
        "wind": {"speed": 3.1},
        "sys": {"country": "PE"},
        "name": "Lima"
    })
}

fn fetch_of(effects: Vec<Effect>) -> (u64, String) {
    assert_eq!(effects.len(), 1, "one fetch per submit: {effects:?}");
    match effects.into_iter().next() {
        Some(Effect::FetchWeather { request_id, city }) => (request_id, city),
        None => unreachable!(),
    }
}

#[tokio::test]
async fn test_startup_action_loads_startup_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Lima"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(lima_body()))
        .expect(1)
        .mount(&server)
        .await;
    let client = WeatherClient::new(ClientConfig::new(server.uri(), API_KEY)).unwrap();

    let mut store = EffectStore::new(AppState::new("Lima"), reducer);
    let dispatched = store.dispatch(Action::startup("Lima"));
    assert!(store.state().weather.is_loading());

    let (request_id, city) = fetch_of(dispatched.effects);
    let completion = resolve_fetch(&client, request_id, &city).await;
    assert!(matches!(
        completion,
        Action::WeatherDidLoad { request_id: 1, .. }
    ));

    assert!(store.dispatch(completion).changed);
    let loaded = store.state().weather.data().map(|w| w.name.clone());
    assert_eq!(loaded.as_deref(), Some("Lima"));
}

#[tokio::test]
async fn test_rejected_key_becomes_error_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let client = WeatherClient::new(ClientConfig::new(server.uri(), API_KEY)).unwrap();

    let mut store = EffectStore::new(AppState::default(), reducer);
    let dispatched = store.dispatch(Action::QuerySubmit("Paris".into()));
    let (request_id, city) = fetch_of(dispatched.effects);

    let completion = resolve_fetch(&client, request_id, &city).await;
    assert_eq!(
        completion,
        Action::WeatherDidError {
            request_id,
            message: "Invalid API key. Please check your OpenWeather API key.".into(),
        }
    );

    store.dispatch(completion);
    assert!(store.state().weather.is_failed());
}

#[tokio::test]
async fn test_unreachable_service_message_hides_key() {
    let client =
        WeatherClient::new(ClientConfig::new("http://127.0.0.1:1", "SUPERSECRET")).unwrap();

    let completion = resolve_fetch(&client, 7, "Oslo").await;

    let Action::WeatherDidError { request_id, message } = completion else {
        panic!("expected an error completion, got {completion:?}");
    };
    assert_eq!(request_id, 7);
    assert!(!message.is_empty());
    assert!(!message.contains("SUPERSECRET"), "key leaked: {message}");
}

#[tokio::test]
async fn test_superseded_completion_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(lima_body()))
        .mount(&server)
        .await;
    let client = WeatherClient::new(ClientConfig::new(server.uri(), API_KEY)).unwrap();

    let mut store = EffectStore::new(AppState::default(), reducer);
    let first = fetch_of(store.dispatch(Action::QuerySubmit("Lima".into())).effects);
    let second = fetch_of(store.dispatch(Action::QuerySubmit("Quito".into())).effects);
    assert_eq!(second.0, first.0 + 1);

    let stale = resolve_fetch(&client, first.0, &first.1).await;
    assert!(!store.dispatch(stale).changed);
    assert!(store.state().weather.is_loading());
}
