//! Configuration file handling for Claudex
//!
//! This module contains data structures for:
//! - `claudex.yaml` - Validator limits (optional, repository root)
//! - `.claude-plugin/marketplace.json` - Typed view of the plugin registry

pub mod marketplace;
pub mod validator;

// Re-export commonly used types
pub use marketplace::MarketplaceManifest;
pub use validator::ValidatorConfig;

/// Location of the marketplace registry relative to the repository root
pub const MARKETPLACE_JSON: &str = ".claude-plugin/marketplace.json";

/// Location of the validator configuration relative to the repository root
pub const CONFIG_FILE: &str = "claudex.yaml";
