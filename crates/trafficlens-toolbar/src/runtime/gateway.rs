// trafficlens-toolbar/src/runtime/gateway.rs
// ============================================================================
// Module: Traffic Lens Gateway Validation
// Description: Pure cross-field validity rules for the gateway wizard.
// Purpose: Gate the wizard submit action on a deterministic decision.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Gateway validation is a pure decision function with no side effects,
//! recomputed synchronously on every relevant field change. Routing through
//! the mesh — implicitly when no gateway is attached, or explicitly when the
//! mesh gateway is included — forbids wildcard hosts; gateway-only routing
//! has no wildcard restriction. The syntactic host-shape check is evaluated
//! independently and combined at the end.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::GatewayContext;

// ============================================================================
// SECTION: Host Shape
// ============================================================================

/// Checks the shape of a comma-separated host list.
///
/// Every token must be exactly the wildcard host or contain at least one
/// domain separator.
#[must_use]
pub fn hosts_shape_valid(hosts: &str) -> bool {
    hosts.split(',').all(|host| host == "*" || host.contains('.'))
}

// ============================================================================
// SECTION: Validity Lattice
// ============================================================================

/// Evaluates the mesh/gateway/wildcard cross-field rules.
#[must_use]
pub const fn mesh_routing_valid(ctx: &GatewayContext) -> bool {
    if ctx.gateway_enabled {
        if ctx.mesh_enabled {
            if ctx.using_new_gateway {
                // A newly created gateway used with mesh cannot declare a
                // wildcard host.
                return !ctx.new_gateway_hosts_contain_wildcard;
            }
            // An existing gateway used with mesh forbids wildcard
            // virtual-service hosts.
            return !ctx.vs_hosts_contain_wildcard;
        }
        return true;
    }
    // No gateway means mesh routing by default, which forbids wildcard
    // virtual-service hosts.
    !ctx.vs_hosts_contain_wildcard
}

/// Returns the overall gateway validity consumed by the wizard form.
///
/// The syntactic host check is applied last; callers disable their submit
/// action while this returns false.
#[must_use]
pub const fn gateway_valid(ctx: &GatewayContext) -> bool {
    mesh_routing_valid(ctx) && ctx.host_pattern_valid
}
