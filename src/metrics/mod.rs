// Remote metrics API module.
// Provides the authenticated client for the athlete metrics endpoint.

pub mod client;

pub use client::MetricsClient;
