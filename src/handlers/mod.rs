use crate::{auth::JwtService, database::Database, services::metrics::MetricsService};
use std::sync::Arc;

pub mod auth;
pub mod catalog;
pub mod health;
pub mod metrics;
pub mod resources;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub jwt: JwtService,
    pub metrics: Arc<MetricsService>,
}
