//! HTTP client module
//!
//! The shared base transport used by every service operation.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Authentication**: Integration with auth module

mod client;
mod rate_limit;

pub use client::{
    DetailedResponse, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
