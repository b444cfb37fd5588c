// trafficlens-config/src/lib.rs
// ============================================================================
// Module: Traffic Lens Config Library
// Description: Public API surface for Traffic Lens host configuration.
// Purpose: Expose the configuration model, loading, and validation.
// Dependencies: crate::config
// ============================================================================

//! ## Overview
//! Host configuration for the Traffic Lens toolbar engine: server feature
//! gates and gateway-wizard defaults, loaded from a TOML file with strict
//! size limits and fail-closed validation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::FeaturesConfig;
pub use config::ToolbarConfig;
pub use config::WizardConfig;
