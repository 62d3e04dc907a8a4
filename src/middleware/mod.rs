pub mod auth;
pub mod metrics;
pub mod validation;

pub use auth::*;
pub use metrics::*;
pub use validation::*;
