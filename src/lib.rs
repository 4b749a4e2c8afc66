//! LaunchDarkly blocks - declarative workflow blocks for the LaunchDarkly REST API
//!
//! Each block wraps one `/api/v2` endpoint: it declares an input schema and an
//! output schema, and its handler performs a single request through the shared
//! request helper in [`client`], returning the response body unchanged.

pub mod categories;
pub mod client;
pub mod config;
pub mod core;
pub mod runtime;
mod tests;

// Re-export commonly used types
pub use categories::{BlockCategory, EndpointBlock};
pub use client::{make_api_request, ApiClient, ApiError, Credentials, HttpMethod, RequestOptions};
pub use config::Config;
pub use core::{filter_defined_params, Block, BlockRegistry, EndpointDescriptor, OutputEvent};
pub use runtime::BlockRuntime;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
