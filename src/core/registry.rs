//! Block Registry - Central registry for managing all available blocks
//!
//! This module provides a thread-safe registry for registering, discovering, and
//! describing blocks. It supports:
//! - Block registration and unregistration
//! - Block discovery by ID, category, or search query
//! - Validation on registration
//! - Manifest export for host-side registration

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::block::{Block, BlockError};
use super::schema::{ConfigField, FieldKind};
use crate::categories::BlockCategory;
use crate::client::HttpMethod;

/// Block registry for managing all available blocks
///
/// Uses `Arc<RwLock<HashMap>>` so clones share one set of blocks; lookups take
/// the read lock only.
#[derive(Clone)]
pub struct BlockRegistry {
    blocks: Arc<RwLock<HashMap<String, Arc<dyn Block>>>>,
}

impl BlockRegistry {
    /// Create a new empty block registry
    ///
    /// # Example
    /// ```
    /// use launchdarkly_blocks::core::registry::BlockRegistry;
    ///
    /// let registry = BlockRegistry::new();
    /// assert_eq!(registry.count(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            blocks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry holding every block in the LaunchDarkly catalogue
    pub fn with_catalogue() -> Result<Self, RegistryError> {
        let registry = Self::new();
        crate::categories::register_catalogue(&registry)?;
        Ok(registry)
    }

    /// Register a new block in the registry
    ///
    /// # Returns
    /// * `Ok(())` if registration succeeds
    /// * `Err(RegistryError)` if the block ID already exists or validation fails
    pub fn register(&self, block: Arc<dyn Block>) -> Result<(), RegistryError> {
        block.validate().map_err(RegistryError::Validation)?;

        let id = block.metadata().id.clone();
        if block.metadata().name.is_empty() {
            return Err(RegistryError::Validation(BlockError::InvalidDefinition(
                format!("{}: block name cannot be empty", id),
            )));
        }

        let mut blocks = self.blocks.write();
        if blocks.contains_key(&id) {
            return Err(RegistryError::DuplicateBlock(id));
        }

        blocks.insert(id, block);
        Ok(())
    }

    /// Unregister a block from the registry
    pub fn unregister(&self, block_id: &str) -> Result<(), RegistryError> {
        let mut blocks = self.blocks.write();

        blocks
            .remove(block_id)
            .ok_or_else(|| RegistryError::BlockNotFound(block_id.to_string()))?;

        Ok(())
    }

    /// Get a block by its ID
    pub fn get_block(&self, id: &str) -> Result<Arc<dyn Block>, RegistryError> {
        let blocks = self.blocks.read();

        blocks
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::BlockNotFound(id.to_string()))
    }

    /// Get all registered blocks, sorted by ID
    pub fn get_all_blocks(&self) -> Vec<Arc<dyn Block>> {
        let blocks = self.blocks.read();
        let mut all: Vec<_> = blocks.values().cloned().collect();
        all.sort_by(|a, b| a.metadata().id.cmp(&b.metadata().id));
        all
    }

    /// Get blocks in the given category, sorted by ID
    pub fn get_blocks_by_category(&self, category: BlockCategory) -> Vec<Arc<dyn Block>> {
        self.get_all_blocks()
            .into_iter()
            .filter(|b| b.metadata().category == category)
            .collect()
    }

    /// Search for blocks by query string
    ///
    /// Matches case-insensitively against block ID, name, description and path.
    pub fn search_blocks(&self, query: &str) -> Vec<Arc<dyn Block>> {
        let query = query.to_lowercase();

        self.get_all_blocks()
            .into_iter()
            .filter(|b| {
                let meta = b.metadata();
                meta.id.to_lowercase().contains(&query)
                    || meta.name.to_lowercase().contains(&query)
                    || meta.description.to_lowercase().contains(&query)
                    || meta.path.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Get the number of registered blocks
    pub fn count(&self) -> usize {
        self.blocks.read().len()
    }

    /// Check if a block with the given ID exists
    pub fn contains(&self, id: &str) -> bool {
        self.blocks.read().contains_key(id)
    }

    /// Clear all registered blocks
    pub fn clear(&self) {
        self.blocks.write().clear();
    }

    /// Describe every registered block for host-side registration
    pub fn manifest(&self) -> Vec<BlockManifest> {
        self.get_all_blocks()
            .iter()
            .map(|b| BlockManifest::from_block(b.as_ref()))
            .collect()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable description of one block: what a host needs to register it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockManifest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: BlockCategory,
    pub method: HttpMethod,
    pub path: String,
    pub inputs: Vec<ConfigField>,
    pub output: FieldKind,
}

impl BlockManifest {
    pub fn from_block(block: &dyn Block) -> Self {
        let meta = block.metadata();
        Self {
            id: meta.id.clone(),
            name: meta.name.clone(),
            description: meta.description.clone(),
            category: meta.category,
            method: meta.method,
            path: meta.path.clone(),
            inputs: block.input_schema().to_vec(),
            output: block.output_schema().clone(),
        }
    }
}

/// Registry errors
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Block with this ID already exists
    #[error("Block already registered: {0}")]
    DuplicateBlock(String),

    /// Block not found
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    /// Block failed validation
    #[error("Block validation failed: {0}")]
    Validation(#[source] BlockError),
}
