// crates/trafficlens-toolbar/examples/minimal.rs
// ============================================================================
// Module: Traffic Lens Minimal Example
// Description: Minimal end-to-end toolbar session using in-memory adapters.
// Purpose: Demonstrate reconciliation, capability stripping, and validation.
// Dependencies: trafficlens-toolbar
// ============================================================================

//! ## Overview
//! Boots a toolbar engine from a shared query string, applies a capability
//! probe result, toggles a few settings, and validates a gateway form.

#![allow(
    clippy::print_stdout,
    clippy::use_debug,
    reason = "Example output is intended for the console."
)]

use trafficlens_toolbar::CapabilityProbe;
use trafficlens_toolbar::CapabilitySet;
use trafficlens_toolbar::FeatureGates;
use trafficlens_toolbar::GatewayForm;
use trafficlens_toolbar::ProbeError;
use trafficlens_toolbar::QueryStringParamStore;
use trafficlens_toolbar::SettingId;
use trafficlens_toolbar::Tag;
use trafficlens_toolbar::ToolbarEngine;

/// Probe reporting that percentile response times are unavailable.
struct DemoProbe;

impl CapabilityProbe for DemoProbe {
    fn fetch(&self) -> Result<CapabilitySet, ProbeError> {
        Ok(CapabilitySet {
            response_time_percentiles: true,
            ..CapabilitySet::default()
        })
    }
}

/// Runs the demo session.
fn main() {
    // A shared view: animation on, 95th percentile response-time labels.
    let params = QueryStringParamStore::from_query("animation=true&edges=responseTime%2Crt95");
    let mut engine = ToolbarEngine::new(params, FeatureGates::default());
    engine.init();
    println!("booted:     {:?}", engine.settings().edge_labels);

    // The probe strips the percentile selection but keeps the family active.
    engine.resolve_capabilities(&DemoProbe);
    println!("probed:     {:?}", engine.settings().edge_labels);

    // Switching to the average child realigns the shared query.
    engine.select_exclusive_child(SettingId::EdgeLabels, Tag::ResponseTimeAverage);
    engine.toggle_setting(SettingId::IdleEdges);
    println!("query:      {}", engine.params().to_query());
    println!("journal:    {:?}", engine.journal());

    // Gateway wizard: a wildcard host is rejected once mesh is included.
    let mut form = GatewayForm::new(false, "", false, Vec::new(), Vec::new());
    form.toggle_gateway();
    form.toggle_mesh();
    println!("gateway ok: {}", form.is_valid());
    form.set_hosts("productpage.example.com");
    println!("gateway ok: {}", form.is_valid());
}
