use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_without_leptos_config() {
    let state = AppState::new(crate::config::ServerConfig::default());
    let _router: Router = api_routes(state);
}
