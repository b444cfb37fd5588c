// crates/trafficlens-toolbar/tests/engine.rs
// ============================================================================
// Module: Toolbar Engine Tests
// Description: Facade-level tests for the sequential toolbar engine.
// Purpose: Ensure the caller-facing surface composes the runtime correctly.
// Dependencies: trafficlens-toolbar
// ============================================================================

//! ## Overview
//! Validates initialization write-through, typed accessors, menu gating by
//! feature gates, and sequential event application.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use trafficlens_toolbar::FeatureGates;
use trafficlens_toolbar::InMemoryParamStore;
use trafficlens_toolbar::ParamStore;
use trafficlens_toolbar::SettingId;
use trafficlens_toolbar::SettingValue;
use trafficlens_toolbar::Tag;
use trafficlens_toolbar::ToolbarEngine;
use trafficlens_toolbar::ToolbarEvent;
use trafficlens_toolbar::ToolbarSettings;

// ============================================================================
// SECTION: Initialization
// ============================================================================

/// Verifies a programmatic non-default state is written through at init.
#[test]
fn init_makes_programmatic_state_shareable() {
    let settings = ToolbarSettings {
        security_badges: true,
        service_nodes: false,
        ..ToolbarSettings::default()
    };
    let mut engine =
        ToolbarEngine::with_settings(settings, InMemoryParamStore::new(), FeatureGates::default());

    engine.init();

    assert_eq!(engine.params().get("badgeSecurity").as_deref(), Some("true"));
    assert_eq!(engine.params().get("injectServiceNodes").as_deref(), Some("false"));
    assert_eq!(engine.params().len(), 2);
}

/// Verifies a second init is a no-op once state and mirror agree.
#[test]
fn init_is_idempotent() {
    let mut params = InMemoryParamStore::new();
    params.set("rank", "true");
    let mut engine = ToolbarEngine::new(params, FeatureGates::default());

    engine.init();
    let settings = engine.settings().clone();
    let snapshot = engine.params().snapshot();
    let journal_len = engine.journal().len();

    engine.init();

    assert_eq!(engine.settings(), &settings);
    assert_eq!(engine.params().snapshot(), snapshot);
    assert_eq!(engine.journal().len(), journal_len);
}

// ============================================================================
// SECTION: Accessors
// ============================================================================

/// Verifies the typed value accessor reflects mutations.
#[test]
fn value_accessor_tracks_mutations() {
    let mut engine = ToolbarEngine::new(InMemoryParamStore::new(), FeatureGates::default());
    engine.init();

    assert_eq!(engine.value(SettingId::BoxByCluster), SettingValue::Bool(true));

    engine.toggle_setting(SettingId::BoxByCluster);
    assert_eq!(engine.value(SettingId::BoxByCluster), SettingValue::Bool(false));
}

/// Verifies toggling a tag-set setting through the boolean path is inert.
#[test]
fn boolean_toggle_ignores_tag_settings() {
    let mut engine = ToolbarEngine::new(InMemoryParamStore::new(), FeatureGates::default());
    engine.init();

    engine.toggle_setting(SettingId::EdgeLabels);

    assert_eq!(engine.value(SettingId::EdgeLabels), SettingId::EdgeLabels.default_value());
    assert!(engine.journal().is_empty());
}

// ============================================================================
// SECTION: Menu Gating
// ============================================================================

/// Verifies the waypoint setting is offered only under ambient mesh.
#[test]
fn waypoints_offered_only_with_ambient() {
    let closed = ToolbarEngine::new(InMemoryParamStore::new(), FeatureGates::default());
    assert!(!closed.offered_settings().contains(&SettingId::Waypoints));
    assert_eq!(closed.offered_settings().len(), SettingId::ALL.len() - 1);

    let ambient = ToolbarEngine::new(
        InMemoryParamStore::new(),
        FeatureGates {
            ambient_enabled: true,
        },
    );
    assert!(ambient.offered_settings().contains(&SettingId::Waypoints));
}

/// Verifies a gated setting still reconciles from shared parameters.
#[test]
fn gated_setting_still_reconciles() {
    let mut params = InMemoryParamStore::new();
    params.set("waypoints", "true");
    let mut engine = ToolbarEngine::new(params, FeatureGates::default());

    engine.init();

    assert!(engine.settings().waypoints);
}

// ============================================================================
// SECTION: Event Queue
// ============================================================================

/// Verifies a realistic event sequence lands in the expected state.
#[test]
fn event_sequence_applies_in_order() {
    let mut engine = ToolbarEngine::new(InMemoryParamStore::new(), FeatureGates::default());
    engine.init();

    let events = [
        ToolbarEvent::SettingToggled(SettingId::IdleEdges),
        ToolbarEvent::GroupMemberToggled(SettingId::EdgeLabels, Tag::ResponseTimeGroup),
        ToolbarEvent::ExclusiveChildSelected(SettingId::EdgeLabels, Tag::ResponseTimeP50),
        ToolbarEvent::GroupMemberToggled(SettingId::RankBy, Tag::OutboundEdges),
    ];
    for event in events {
        engine.apply(event);
    }

    assert!(engine.settings().idle_edges);
    assert_eq!(
        engine.params().get("edges").as_deref(),
        Some("responseTime,rt50")
    );
    assert_eq!(engine.params().get("rankBy").as_deref(), Some("outboundEdges"));
}
