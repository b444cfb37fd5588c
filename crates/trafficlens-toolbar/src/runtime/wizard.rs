// trafficlens-toolbar/src/runtime/wizard.rs
// ============================================================================
// Module: Traffic Lens Wizard Forms
// Description: Ephemeral form state for the gateway and fault wizards.
// Purpose: Normalize field input and recompute validity on every change.
// Dependencies: crate::core, crate::runtime::{codec, gateway}
// ============================================================================

//! ## Overview
//! Wizard forms are ephemeral: owned by the active form session, recomputed
//! on every keystroke or toggle, and destroyed when the form closes. Field
//! input is absorbed rather than rejected — numeric text is clamped to the
//! valid range and malformed text maps to the lower bound.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::GatewayContext;
use crate::runtime::codec;
use crate::runtime::gateway::gateway_valid;
use crate::runtime::gateway::hosts_shape_valid;
use crate::runtime::gateway::mesh_routing_valid;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default port exposed by a newly created gateway.
pub const DEFAULT_GATEWAY_PORT: u16 = 80;
/// Default host list for a newly created gateway.
pub const DEFAULT_GATEWAY_HOSTS: &str = "*";
/// Default fault percentage applied to matching requests.
const DEFAULT_FAULT_PERCENT: u32 = 100;

// ============================================================================
// SECTION: Input Normalization
// ============================================================================

/// Clamps raw percentage text to the 0-100 range.
///
/// Malformed or negative input maps to 0; values above 100 map to 100.
#[must_use]
pub fn clamp_percent(raw: &str) -> u32 {
    codec::parse_u32(raw).map_or(0, |value| value.min(100))
}

// ============================================================================
// SECTION: Gateway Form
// ============================================================================

/// Ephemeral gateway wizard state.
///
/// Mirrors the gateway selector screen: attach a gateway or not, include
/// the mesh gateway, and either select an existing gateway or create a new
/// one with a port and host list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayForm {
    /// A gateway is attached to the route.
    gateway_enabled: bool,
    /// The mesh gateway is included alongside the gateway.
    mesh_enabled: bool,
    /// A new gateway is being created rather than an existing one selected.
    using_new_gateway: bool,
    /// Selected existing gateway, empty when none are available.
    selected_gateway: String,
    /// Host list entered for a new gateway.
    gateway_hosts: String,
    /// Cached result of the syntactic host-shape check.
    hosts_valid: bool,
    /// Port entered for a new gateway.
    port: u16,
    /// Existing gateways offered for selection.
    available_gateways: Vec<String>,
    /// Virtual-service hosts of the route under edit.
    vs_hosts: Vec<String>,
}

impl GatewayForm {
    /// Creates the initial form state for a route.
    ///
    /// The gateway switch starts from the route's current attachment, a new
    /// gateway is preselected only when no existing gateways are available,
    /// and the current gateway (or the first available one) is preselected
    /// otherwise.
    #[must_use]
    pub fn new(
        has_gateway: bool,
        current_gateway: &str,
        is_mesh: bool,
        available_gateways: Vec<String>,
        vs_hosts: Vec<String>,
    ) -> Self {
        Self::with_defaults(
            has_gateway,
            current_gateway,
            is_mesh,
            available_gateways,
            vs_hosts,
            DEFAULT_GATEWAY_PORT,
            DEFAULT_GATEWAY_HOSTS,
        )
    }

    /// Creates the initial form state with configured wizard defaults.
    #[must_use]
    pub fn with_defaults(
        has_gateway: bool,
        current_gateway: &str,
        is_mesh: bool,
        available_gateways: Vec<String>,
        vs_hosts: Vec<String>,
        default_port: u16,
        default_hosts: &str,
    ) -> Self {
        let selected_gateway = if available_gateways.is_empty() {
            String::new()
        } else if current_gateway.is_empty() {
            available_gateways[0].clone()
        } else {
            current_gateway.to_string()
        };
        Self {
            gateway_enabled: has_gateway,
            mesh_enabled: is_mesh,
            using_new_gateway: available_gateways.is_empty(),
            selected_gateway,
            gateway_hosts: default_hosts.to_string(),
            hosts_valid: hosts_shape_valid(default_hosts),
            port: default_port,
            available_gateways,
            vs_hosts,
        }
    }

    /// Flips the gateway attachment switch.
    pub const fn toggle_gateway(&mut self) {
        self.gateway_enabled = !self.gateway_enabled;
    }

    /// Flips the mesh gateway inclusion checkbox.
    pub const fn toggle_mesh(&mut self) {
        self.mesh_enabled = !self.mesh_enabled;
    }

    /// Chooses between creating a new gateway and selecting an existing one.
    pub const fn choose_new_gateway(&mut self, create: bool) {
        self.using_new_gateway = create;
    }

    /// Selects an existing gateway by name.
    pub fn select_gateway(&mut self, gateway: &str) {
        self.selected_gateway = gateway.to_string();
    }

    /// Replaces the new-gateway host list and recomputes its shape check.
    pub fn set_hosts(&mut self, hosts: &str) {
        self.gateway_hosts = hosts.to_string();
        self.hosts_valid = hosts_shape_valid(hosts);
    }

    /// Replaces the new-gateway port; malformed or out-of-range text keeps
    /// the previous port.
    pub fn set_port(&mut self, raw: &str) {
        if let Some(port) = codec::parse_u32(raw).and_then(|value| u16::try_from(value).ok())
            && port != 0
        {
            self.port = port;
        }
    }

    /// Returns the selected existing gateway, empty when none.
    #[must_use]
    pub fn selected_gateway(&self) -> &str {
        &self.selected_gateway
    }

    /// Returns the new-gateway host list as entered.
    #[must_use]
    pub fn hosts(&self) -> &str {
        &self.gateway_hosts
    }

    /// Returns the new-gateway port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the existing gateways offered for selection.
    #[must_use]
    pub fn available_gateways(&self) -> &[String] {
        &self.available_gateways
    }

    /// Builds the cross-field validation context for the current state.
    #[must_use]
    pub fn context(&self) -> GatewayContext {
        GatewayContext {
            gateway_enabled: self.gateway_enabled,
            mesh_enabled: self.mesh_enabled,
            using_new_gateway: self.using_new_gateway,
            host_pattern_valid: self.hosts_valid,
            vs_hosts_contain_wildcard: self.vs_hosts.iter().any(|host| host == "*"),
            new_gateway_hosts_contain_wildcard: self
                .gateway_hosts
                .split(',')
                .any(|host| host == "*"),
        }
    }

    /// Returns whether the mesh/wildcard cross-field rules currently hold.
    #[must_use]
    pub fn mesh_rules_hold(&self) -> bool {
        mesh_routing_valid(&self.context())
    }

    /// Returns the overall validity gating the wizard submit action.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        gateway_valid(&self.context())
    }
}

// ============================================================================
// SECTION: Fault Injection Form
// ============================================================================

/// Ephemeral fault-injection percentages for the request-fault wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultInjectionForm {
    /// Percentage of requests aborted.
    abort_percentage: u32,
    /// Percentage of requests delayed.
    delay_percentage: u32,
}

impl Default for FaultInjectionForm {
    fn default() -> Self {
        Self {
            abort_percentage: DEFAULT_FAULT_PERCENT,
            delay_percentage: DEFAULT_FAULT_PERCENT,
        }
    }
}

impl FaultInjectionForm {
    /// Creates a form with default fault percentages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the abort percentage from raw field text, clamped to 0-100.
    pub fn set_abort_percentage(&mut self, raw: &str) {
        self.abort_percentage = clamp_percent(raw);
    }

    /// Sets the delay percentage from raw field text, clamped to 0-100.
    pub fn set_delay_percentage(&mut self, raw: &str) {
        self.delay_percentage = clamp_percent(raw);
    }

    /// Returns the abort percentage.
    #[must_use]
    pub const fn abort_percentage(&self) -> u32 {
        self.abort_percentage
    }

    /// Returns the delay percentage.
    #[must_use]
    pub const fn delay_percentage(&self) -> u32 {
        self.delay_percentage
    }
}
