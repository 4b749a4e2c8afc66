//! Core block abstractions and types
//!
//! This module defines the block trait, endpoint descriptors, field schemas,
//! parameter handling and the block registry.

pub mod block;
pub mod endpoint;
pub mod parameter;
pub mod registry;
pub mod schema;

pub use block::{Block, BlockError, BlockMetadata, ExecutionContext, InvocationId, OutputEvent};
pub use endpoint::{EndpointDescriptor, EndpointParam, ParamLocation, PreparedRequest};
pub use parameter::{filter_defined_params, Inputs};
pub use registry::{BlockManifest, BlockRegistry, RegistryError};
pub use schema::{ConfigField, FieldKind, PrimitiveType};
