// trafficlens-toolbar/src/core/gateway.rs
// ============================================================================
// Module: Traffic Lens Gateway Context
// Description: Cross-field validation context for the gateway wizard.
// Purpose: Capture the ephemeral flags evaluated by gateway validation.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The gateway context is recomputed on every wizard field change and owned
//! exclusively by the active form session. It carries no persistence and is
//! destroyed when the form closes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Gateway Context
// ============================================================================

/// Cross-field flags for gateway/mesh/host-wildcard validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayContext {
    /// A gateway is attached to the route.
    pub gateway_enabled: bool,
    /// The mesh gateway is included alongside the gateway.
    pub mesh_enabled: bool,
    /// A new gateway is being created rather than an existing one selected.
    pub using_new_gateway: bool,
    /// The syntactic host-shape check passed for the entered hosts.
    pub host_pattern_valid: bool,
    /// The virtual-service hosts include the wildcard host.
    pub vs_hosts_contain_wildcard: bool,
    /// The new gateway's hosts include the wildcard host.
    pub new_gateway_hosts_contain_wildcard: bool,
}
