pub mod credentials;
pub mod metrics;

pub use credentials::*;
pub use metrics::*;
