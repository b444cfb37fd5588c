// trafficlens-toolbar/src/core/mod.rs
// ============================================================================
// Module: Traffic Lens Core Types
// Description: Canonical toolbar data model: settings, tags, capabilities.
// Purpose: Provide stable, serializable types for toolbar state and wizards.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the closed vocabulary of toolbar settings, the tag-set
//! members with their toggle-group structure, the telemetry capability
//! flags reported by the backing service, and the gateway wizard context.
//! These types are the canonical source of truth for any derived surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod capability;
pub mod gateway;
pub mod settings;
pub mod tags;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use capability::CapabilitySet;
pub use gateway::GatewayContext;
pub use settings::FeatureGates;
pub use settings::SettingId;
pub use settings::SettingKind;
pub use settings::SettingValue;
pub use tags::Tag;
pub use tags::TagSet;
pub use tags::ToggleGroup;
pub use tags::group_for_child;
pub use tags::group_for_header;
