mod support;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;

use isekai_api::bootstrap::app_context::{AppContext, AppServices};
use isekai_api::bootstrap::application::{ApplicationError, StartupError};
use isekai_api::bootstrap::config::Config;
use isekai_api::infrastructure::db::{Database, PoolSettings};

use support::{full_application, get, send, unreachable_database};

fn local_addr() -> std::net::SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

/// Integration database, when one is configured for the run.
fn test_database() -> Option<Arc<Database>> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    Some(Arc::new(Database::new(PoolSettings {
        database_url: url,
        max_connections: 4,
        min_connections: 1,
        acquire_timeout: Duration::from_secs(5),
        run_migrations: true,
    })))
}

#[tokio::test]
async fn serve_refuses_to_start_without_a_database() {
    let database = unreachable_database();
    let ctx = AppContext::new(Config::default(), AppServices::sqlx(database.clone()));
    let app = full_application(database.clone());

    let result = app
        .serve(local_addr(), ctx, std::future::ready(()))
        .await;
    assert!(matches!(
        result,
        Err(ApplicationError::Startup(StartupError::Database(_)))
    ));
    assert!(!database.is_connected());
    assert_eq!(database.open_connections(), 0);
}

#[tokio::test]
async fn stop_after_failed_start_is_harmless() {
    let app = full_application(unreachable_database());
    assert!(app.on_start().await.is_err());
    app.on_stop().await;
    app.on_stop().await;
    assert_eq!(app.database().open_connections(), 0);
}

#[tokio::test]
async fn concurrent_starts_against_a_dead_database_keep_no_pool() {
    let app = full_application(unreachable_database());
    let (a, b) = tokio::join!(app.on_start(), app.on_start());
    assert!(matches!(a, Err(StartupError::Database(_))));
    assert!(matches!(b, Err(StartupError::Database(_))));
    assert!(!app.database().is_connected());
    assert_eq!(app.database().open_connections(), 0);
}

#[tokio::test]
async fn mounted_routers_are_recorded_in_order() {
    let app = full_application(unreachable_database());
    assert_eq!(
        app.mounted(),
        ["root", "genders", "species", "strata", "stats", "health"]
    );
    assert!(app.routes().contains(&http::Method::GET, "/"));
    assert!(app.routes().contains(&http::Method::DELETE, "/genders/:id"));
}

#[tokio::test]
async fn start_is_idempotent_and_stop_releases_the_pool() {
    let Some(database) = test_database() else {
        return;
    };
    let app = full_application(database.clone());

    app.on_start().await.unwrap();
    let first = database.pool().unwrap();
    app.on_start().await.unwrap();
    let second = database.pool().unwrap();
    assert!(database.is_connected());

    app.on_stop().await;
    assert!(first.is_closed());
    assert!(second.is_closed());
    assert_eq!(database.open_connections(), 0);
    assert!(!database.is_connected());
}

#[tokio::test]
async fn seeded_catalogs_are_served_from_postgres() {
    let Some(database) = test_database() else {
        return;
    };
    let app = full_application(database.clone());
    app.on_start().await.unwrap();

    let ctx = AppContext::new(Config::default(), AppServices::sqlx(database.clone()));
    let router = app.router(ctx);

    let (status, body) = send(&router, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Bienvenido a la API Isekai de otro mundo");

    let (status, body) = send(&router, get("/genders")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());

    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    app.on_stop().await;
    let (status, _) = send(&router, get("/genders")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
