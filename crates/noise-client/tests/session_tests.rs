//! Session expiry and login flows through gateway, controller and router

use futures::future::join_all;
use noise_client::SessionController;
use noise_core::{
    GuardDecision, MemorySessionStore, RouteTable, Router, SessionCredential, SessionStore,
    LOGIN_PATH,
};
use noise_types::{UserRole, TOKEN_KEY, USER_KEY};
use std::sync::Arc;

mod common;
use common::{admin, store_with_token, StubBackend, FRESH_TOKEN, PASSWORD, STALE_TOKEN};

#[tokio::test]
async fn test_stale_token_clears_session_and_redirects_to_login() {
    let backend = StubBackend::start().await;
    let store = store_with_token(STALE_TOKEN);
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/alerts"));
    assert_eq!(router.current_path(), "/alerts");

    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());
    let listener = tokio::spawn(controller.run(gateway.subscribe()));

    let err = gateway.alerts().get(None).await.unwrap_err();
    assert!(err.is_session_expired());

    drop(gateway);
    listener.await.unwrap();

    assert_eq!(store.get_item(TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get_item(USER_KEY).unwrap(), None);
    assert_eq!(router.current_path(), LOGIN_PATH);
}

#[tokio::test]
async fn test_expiry_on_login_screen_leaves_storage_alone() {
    let backend = StubBackend::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/"));
    assert_eq!(router.current_path(), LOGIN_PATH);

    // A credential appears without any navigation happening
    store
        .set(&SessionCredential::new(admin(), Some(STALE_TOKEN.to_string())))
        .unwrap();

    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());
    let listener = tokio::spawn(controller.run(gateway.subscribe()));

    let err = gateway.alerts().get(None).await.unwrap_err();
    assert!(err.is_session_expired());

    drop(gateway);
    listener.await.unwrap();

    assert_eq!(store.token().unwrap().as_deref(), Some(STALE_TOKEN));
    assert!(store.profile().unwrap().is_some());
    assert_eq!(router.current_path(), LOGIN_PATH);
}

#[tokio::test]
async fn test_concurrent_expiries_are_handled_once() {
    let backend = StubBackend::start().await;
    let store = store_with_token(STALE_TOKEN);
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/dashboard"));

    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());
    let listener = tokio::spawn(controller.run(gateway.subscribe()));

    let calls = (0..5).map(|_| {
        let gateway = gateway.clone();
        async move { gateway.alerts().get(None).await }
    });
    let results = join_all(calls).await;
    assert!(results
        .iter()
        .all(|r| matches!(r, Err(e) if e.is_session_expired())));

    drop(gateway);
    listener.await.unwrap();

    assert!(store.is_empty());
    assert_eq!(router.current_path(), LOGIN_PATH);
}

#[tokio::test]
async fn test_login_then_navigate_then_authorized_call() {
    let backend = StubBackend::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/login"));
    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());

    let user = controller.login(&gateway, "admin", PASSWORD).await.unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(user.responsible_regions, vec!["市中心".to_string()]);
    assert!(user.last_login.is_some());
    assert_eq!(store.token().unwrap().as_deref(), Some(FRESH_TOKEN));

    let nav = router.navigate("/noise-data");
    assert_eq!(nav.decision, GuardDecision::Proceed);
    assert_eq!(router.current_path(), "/noise-data");

    let body = gateway.alerts().get(None).await.unwrap();
    assert_eq!(body["alerts"][0]["alert_id"], 7);

    // Back on the login screen an authenticated user is sent home
    let nav = router.navigate("/login");
    assert_eq!(nav.decision, GuardDecision::RedirectToRoot);
    assert_eq!(nav.path, "/dashboard");
}

#[tokio::test]
async fn test_rejected_login_stores_nothing() {
    let backend = StubBackend::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/login"));
    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());
    let listener = tokio::spawn(controller.clone().run(gateway.subscribe()));

    let err = controller
        .login(&gateway, "admin", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.body().unwrap()["message"], "用户名或密码错误");

    drop(gateway);
    listener.await.unwrap();

    assert!(store.is_empty());
    assert_eq!(router.current_path(), LOGIN_PATH);
}

#[tokio::test]
async fn test_mistyped_password_keeps_signed_in_session() {
    let backend = StubBackend::start().await;
    let store = store_with_token(FRESH_TOKEN);
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/"));
    assert_eq!(router.current_path(), "/dashboard");

    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());
    let listener = tokio::spawn(controller.clone().run(gateway.subscribe()));

    let err = controller
        .login(&gateway, "admin", "typo")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));

    drop(gateway);
    listener.await.unwrap();

    assert_eq!(store.token().unwrap().as_deref(), Some(FRESH_TOKEN));
    assert_eq!(store.profile().unwrap().map(|u| u.username), Some("admin".to_string()));
    assert_eq!(router.current_path(), "/dashboard");
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let backend = StubBackend::start().await;
    let store = Arc::new(MemorySessionStore::new());
    let router = Arc::new(Router::new(RouteTable::default(), store.clone(), "/login"));
    let gateway = backend.gateway(store.clone());
    let controller = SessionController::new(store.clone(), router.clone());

    controller.login(&gateway, "admin", PASSWORD).await.unwrap();
    router.navigate("/reports");
    assert_eq!(router.current_path(), "/reports");

    controller.logout().unwrap();

    assert!(store.is_empty());
    assert_eq!(router.current_path(), LOGIN_PATH);
    assert_eq!(router.navigate("/map").path, LOGIN_PATH);
}
