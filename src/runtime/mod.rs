//! Block runtime
//!
//! A thin invocation surface over the registry: look a block up, hand it the
//! shared request helper and the caller's inputs, and return its output event.
//! Invocations share no mutable state and may run concurrently.

use tracing::warn;

use crate::client::ApiClient;
use crate::core::block::{BlockError, ExecutionContext, OutputEvent};
use crate::core::parameter::Inputs;
use crate::core::registry::{BlockRegistry, RegistryError};

/// Errors from a runtime invocation
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Block(#[from] BlockError),
}

impl RuntimeError {
    /// HTTP status when the failure was an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            RuntimeError::Block(BlockError::Api(e)) => e.status(),
            _ => None,
        }
    }
}

/// Block runtime execution engine
#[derive(Clone)]
pub struct BlockRuntime {
    registry: BlockRegistry,
    client: ApiClient,
}

impl BlockRuntime {
    pub fn new(registry: BlockRegistry, client: ApiClient) -> Self {
        Self { registry, client }
    }

    /// Runtime over the full LaunchDarkly catalogue
    pub fn with_catalogue(client: ApiClient) -> Result<Self, RegistryError> {
        Ok(Self::new(BlockRegistry::with_catalogue()?, client))
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Invoke one block with the given inputs
    pub async fn invoke(&self, block_id: &str, inputs: Inputs) -> Result<OutputEvent, RuntimeError> {
        let block = self.registry.get_block(block_id)?;
        let context = ExecutionContext::new(self.client.clone(), inputs);
        let invocation_id = context.invocation_id;

        block.execute(context).await.map_err(|e| {
            warn!(
                block = block_id,
                invocation = %invocation_id,
                code = e.code(),
                "Block invocation failed: {}",
                e
            );
            RuntimeError::Block(e)
        })
    }
}
