use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod auth;
pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::{
    auth::JwtService,
    config::Config,
    database::Database,
    errors::Result,
    handlers::{resources, AppState},
    models::{Lambda, NoSqlDatabase, SqlDatabase, VirtualMachine},
    services::MetricsService,
};

/// Builds the full router. Registration, sign-in, the catalog, health and
/// metrics are public; everything under the resource prefixes needs a token.
pub fn create_app(database: Database, config: Config) -> Result<Router> {
    let state = AppState {
        database,
        jwt: JwtService::new(&config.jwt_secret, config.token_ttl_hours),
        metrics: Arc::new(MetricsService::new()?),
    };

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/resources", get(handlers::catalog::list_available))
        .route("/register", post(handlers::auth::register))
        .route("/signin", post(handlers::auth::signin))
        .route("/metrics", get(handlers::metrics::metrics_handler))
        .nest("/lambdas", resources::routes::<Lambda>())
        .nest("/virtual-machines", resources::routes::<VirtualMachine>())
        .nest("/sql-databases", resources::routes::<SqlDatabase>())
        .nest("/nosql-databases", resources::routes::<NoSqlDatabase>())
        .route_layer(from_fn_with_state(state.clone(), middleware::metrics_middleware))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state);

    Ok(app)
}

pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
