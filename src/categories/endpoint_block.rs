//! Endpoint Block
//!
//! The one [`Block`] implementation behind every catalogue entry: it pairs an
//! [`EndpointDescriptor`] with a single request-helper call and forwards the
//! response body untouched as the output event payload.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::core::block::{Block, BlockError, BlockMetadata, ExecutionContext, OutputEvent};
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::{ConfigField, FieldKind};

pub struct EndpointBlock {
    metadata: BlockMetadata,
    inputs: Vec<ConfigField>,
    descriptor: EndpointDescriptor,
}

impl EndpointBlock {
    pub fn new(descriptor: EndpointDescriptor) -> Self {
        Self {
            metadata: BlockMetadata {
                id: descriptor.id.clone(),
                name: descriptor.name.clone(),
                category: descriptor.category,
                description: descriptor.description.clone(),
                method: descriptor.method,
                path: descriptor.path_template.clone(),
            },
            inputs: descriptor.input_schema(),
            descriptor,
        }
    }

    pub fn descriptor(&self) -> &EndpointDescriptor {
        &self.descriptor
    }
}

#[async_trait]
impl Block for EndpointBlock {
    fn metadata(&self) -> &BlockMetadata {
        &self.metadata
    }

    fn input_schema(&self) -> &[ConfigField] {
        &self.inputs
    }

    fn output_schema(&self) -> &FieldKind {
        &self.descriptor.output
    }

    fn validate(&self) -> Result<(), BlockError> {
        self.descriptor.validate()
    }

    async fn execute(&self, context: ExecutionContext) -> Result<OutputEvent, BlockError> {
        let prepared = self.descriptor.prepare(&context.inputs)?;

        info!(
            block = %self.metadata.id,
            invocation = %context.invocation_id,
            method = %prepared.options.method,
            path = %prepared.path,
            "Invoking LaunchDarkly block"
        );

        let payload = context
            .client
            .request(&prepared.path, prepared.options)
            .await?;

        debug!(
            block = %self.metadata.id,
            invocation = %context.invocation_id,
            empty = payload.is_none(),
            "LaunchDarkly block completed"
        );

        Ok(OutputEvent {
            invocation_id: context.invocation_id,
            block_id: self.metadata.id.clone(),
            payload,
        })
    }
}
