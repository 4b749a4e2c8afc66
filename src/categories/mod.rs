//! Block categories and the endpoint catalogue
//!
//! Each submodule declares the endpoints of one LaunchDarkly resource group as
//! [`EndpointDescriptor`]s. [`register_catalogue`] wraps every descriptor in an
//! [`EndpointBlock`] and registers it.

pub mod access_tokens;
pub mod audit_log;
pub mod contexts;
pub mod custom_roles;
pub mod endpoint_block;
pub mod environments;
pub mod flags;
pub mod members;
pub mod metrics;
pub mod projects;
pub mod segments;
pub mod teams;
pub mod webhooks;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::endpoint::EndpointDescriptor;
use crate::core::registry::{BlockRegistry, RegistryError};

pub use endpoint_block::EndpointBlock;

/// LaunchDarkly resource group a block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    AccessTokens,
    AuditLog,
    Contexts,
    CustomRoles,
    Environments,
    FeatureFlags,
    Members,
    Metrics,
    Projects,
    Segments,
    Teams,
    Webhooks,
}

impl BlockCategory {
    pub const ALL: [BlockCategory; 12] = [
        BlockCategory::AccessTokens,
        BlockCategory::AuditLog,
        BlockCategory::Contexts,
        BlockCategory::CustomRoles,
        BlockCategory::Environments,
        BlockCategory::FeatureFlags,
        BlockCategory::Members,
        BlockCategory::Metrics,
        BlockCategory::Projects,
        BlockCategory::Segments,
        BlockCategory::Teams,
        BlockCategory::Webhooks,
    ];

    /// Get a human-readable name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockCategory::AccessTokens => "Access tokens",
            BlockCategory::AuditLog => "Audit log",
            BlockCategory::Contexts => "Contexts",
            BlockCategory::CustomRoles => "Custom roles",
            BlockCategory::Environments => "Environments",
            BlockCategory::FeatureFlags => "Feature flags",
            BlockCategory::Members => "Account members",
            BlockCategory::Metrics => "Metrics",
            BlockCategory::Projects => "Projects",
            BlockCategory::Segments => "Segments",
            BlockCategory::Teams => "Teams",
            BlockCategory::Webhooks => "Webhooks",
        }
    }

    /// Snake-case identifier, as used in serialized manifests
    pub fn slug(&self) -> &'static str {
        match self {
            BlockCategory::AccessTokens => "access_tokens",
            BlockCategory::AuditLog => "audit_log",
            BlockCategory::Contexts => "contexts",
            BlockCategory::CustomRoles => "custom_roles",
            BlockCategory::Environments => "environments",
            BlockCategory::FeatureFlags => "feature_flags",
            BlockCategory::Members => "members",
            BlockCategory::Metrics => "metrics",
            BlockCategory::Projects => "projects",
            BlockCategory::Segments => "segments",
            BlockCategory::Teams => "teams",
            BlockCategory::Webhooks => "webhooks",
        }
    }

    /// Endpoint descriptors of this category
    pub fn descriptors(&self) -> Vec<EndpointDescriptor> {
        match self {
            BlockCategory::AccessTokens => access_tokens::descriptors(),
            BlockCategory::AuditLog => audit_log::descriptors(),
            BlockCategory::Contexts => contexts::descriptors(),
            BlockCategory::CustomRoles => custom_roles::descriptors(),
            BlockCategory::Environments => environments::descriptors(),
            BlockCategory::FeatureFlags => flags::descriptors(),
            BlockCategory::Members => members::descriptors(),
            BlockCategory::Metrics => metrics::descriptors(),
            BlockCategory::Projects => projects::descriptors(),
            BlockCategory::Segments => segments::descriptors(),
            BlockCategory::Teams => teams::descriptors(),
            BlockCategory::Webhooks => webhooks::descriptors(),
        }
    }
}

impl std::fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for BlockCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        BlockCategory::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| format!("Unknown block category '{}'", s))
    }
}

/// Every endpoint descriptor in the catalogue, grouped by category
pub fn all_descriptors() -> Vec<EndpointDescriptor> {
    BlockCategory::ALL
        .iter()
        .flat_map(|category| category.descriptors())
        .collect()
}

/// Register one [`EndpointBlock`] per catalogue descriptor
pub fn register_catalogue(registry: &BlockRegistry) -> Result<(), RegistryError> {
    for descriptor in all_descriptors() {
        registry.register(Arc::new(EndpointBlock::new(descriptor)))?;
    }
    Ok(())
}
