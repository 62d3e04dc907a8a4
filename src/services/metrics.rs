use std::time::{Duration, Instant};

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use crate::errors::{AppError, Result};

/// Prometheus registry shared by the request middleware and the resource handlers.
pub struct MetricsService {
    registry: Registry,
    requests: IntCounterVec,
    request_duration: HistogramVec,
    resource_operations: IntCounterVec,
}

impl MetricsService {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by route and status"),
            &["method", "path", "status"],
        )
        .map_err(metrics_error)?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency"),
            &["method", "path"],
        )
        .map_err(metrics_error)?;
        let resource_operations = IntCounterVec::new(
            Opts::new("resource_operations_total", "Successful resource repository operations"),
            &["kind", "operation"],
        )
        .map_err(metrics_error)?;

        registry.register(Box::new(requests.clone())).map_err(metrics_error)?;
        registry.register(Box::new(request_duration.clone())).map_err(metrics_error)?;
        registry.register(Box::new(resource_operations.clone())).map_err(metrics_error)?;

        Ok(Self { registry, requests, request_duration, resource_operations })
    }

    pub fn record_request(&self, method: &str, path: &str, status: u16, duration: Duration) {
        self.requests
            .with_label_values(&[method, path, &status.to_string()])
            .inc();
        self.request_duration
            .with_label_values(&[method, path])
            .observe(duration.as_secs_f64());
    }

    pub fn record_operation(&self, kind: &str, operation: &str) {
        self.resource_operations.with_label_values(&[kind, operation]).inc();
    }

    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(metrics_error)?;
        String::from_utf8(buffer).map_err(|e| AppError::Internal(e.into()))
    }
}

fn metrics_error(e: prometheus::Error) -> AppError {
    AppError::Internal(anyhow::anyhow!("metrics error: {}", e))
}

pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
