//! Block trait and related types
//!
//! This module defines the Block trait every catalogue entry implements, along
//! with block metadata, the per-invocation execution context, the output event
//! handed back to the host, and block errors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::parameter::Inputs;
use super::schema::{ConfigField, FieldKind};
use crate::categories::BlockCategory;
use crate::client::{ApiClient, ApiError, HttpMethod};

/// Core block trait that all blocks must implement
#[async_trait]
pub trait Block: Send + Sync {
    /// Get block metadata
    fn metadata(&self) -> &BlockMetadata;

    /// Get the input fields the host collects before invocation
    fn input_schema(&self) -> &[ConfigField];

    /// Get the shape of the output payload
    fn output_schema(&self) -> &FieldKind;

    /// Check the block definition is consistent
    fn validate(&self) -> Result<(), BlockError>;

    /// Run the block once against the given inputs
    async fn execute(&self, context: ExecutionContext) -> Result<OutputEvent, BlockError>;
}

/// Block metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Unique block identifier
    pub id: String,
    /// Human-readable block name
    pub name: String,
    /// Resource group the block belongs to
    pub category: BlockCategory,
    /// Brief description of the block
    pub description: String,
    /// HTTP method of the underlying endpoint
    pub method: HttpMethod,
    /// URL template of the underlying endpoint
    pub path: String,
}

/// Unique identifier for one block invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvocationId(pub Uuid);

impl InvocationId {
    /// Generate a new random invocation ID
    pub fn new() -> Self {
        InvocationId(Uuid::new_v4())
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Block execution context
pub struct ExecutionContext {
    pub invocation_id: InvocationId,
    /// Caller-supplied inputs, keyed by field name
    pub inputs: Inputs,
    /// Request helper bound to the application's credentials
    pub client: ApiClient,
}

impl ExecutionContext {
    pub fn new(client: ApiClient, inputs: Inputs) -> Self {
        Self {
            invocation_id: InvocationId::new(),
            inputs,
            client,
        }
    }
}

/// Event emitted to the host when a block completes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputEvent {
    pub invocation_id: InvocationId,
    pub block_id: String,
    /// Response body exactly as the API returned it; `None` for empty responses
    pub payload: Option<Value>,
}

/// Block errors
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// A path parameter was not supplied
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter had an unusable value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The block definition is inconsistent
    #[error("Invalid block definition: {0}")]
    InvalidDefinition(String),

    /// The API request failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl BlockError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            BlockError::MissingParameter(_) => "MISSING_PARAMETER",
            BlockError::InvalidParameter(_) => "INVALID_PARAMETER",
            BlockError::InvalidDefinition(_) => "INVALID_DEFINITION",
            BlockError::Api(e) => e.code(),
        }
    }
}
