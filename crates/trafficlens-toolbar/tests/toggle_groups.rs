// crates/trafficlens-toolbar/tests/toggle_groups.rs
// ============================================================================
// Module: Toggle Group Tests
// Description: Grouped toggle semantics tests.
// Purpose: Ensure header/child coupling and exclusivity invariants hold.
// Dependencies: trafficlens-toolbar
// ============================================================================

//! ## Overview
//! Validates header-add default-child pairing, header-remove family
//! stripping, radio-within-checkbox exclusivity, and plain-member toggling.

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

use trafficlens_toolbar::CapabilitySet;
use trafficlens_toolbar::FeatureGates;
use trafficlens_toolbar::InMemoryParamStore;
use trafficlens_toolbar::SettingId;
use trafficlens_toolbar::Tag;
use trafficlens_toolbar::TagSet;
use trafficlens_toolbar::ToolbarEngine;
use trafficlens_toolbar::runtime::groups;

/// Builds a tag set from a list of tags.
fn tags(list: &[Tag]) -> TagSet {
    list.iter().copied().collect()
}

/// Builds an engine with default settings over an in-memory store.
fn engine() -> ToolbarEngine<InMemoryParamStore> {
    let mut engine = ToolbarEngine::new(InMemoryParamStore::new(), FeatureGates::default());
    engine.init();
    engine
}

// ============================================================================
// SECTION: Header Toggling
// ============================================================================

/// Verifies adding a header also picks the deterministic default child.
#[test]
fn header_add_pairs_default_child() {
    let mut engine = engine();
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::ResponseTimeGroup);

    assert_eq!(
        engine.settings().edge_labels,
        tags(&[Tag::ResponseTimeGroup, Tag::ResponseTimeP95])
    );
}

/// Verifies removing a header strips every child of its family.
#[test]
fn header_remove_strips_family() {
    let mut engine = engine();
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::ResponseTimeGroup);
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::TrafficRate);
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::ResponseTimeGroup);

    assert_eq!(engine.settings().edge_labels, tags(&[Tag::TrafficRate]));
}

/// Verifies the throughput family behaves like the response-time family.
#[test]
fn throughput_header_add_pairs_request_child() {
    let mut engine = engine();
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::ThroughputGroup);

    assert_eq!(engine.settings().edge_labels, tags(&[Tag::ThroughputGroup, Tag::ThroughputRequest]));
}

// ============================================================================
// SECTION: Exclusive Children
// ============================================================================

/// Verifies selecting a new child supersedes the previous child.
#[test]
fn exclusive_child_selection_supersedes_sibling() {
    let mut engine = engine();
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::ResponseTimeGroup);
    engine.select_exclusive_child(SettingId::EdgeLabels, Tag::ResponseTimeAverage);
    engine.select_exclusive_child(SettingId::EdgeLabels, Tag::ResponseTimeP50);

    assert_eq!(
        engine.settings().edge_labels,
        tags(&[Tag::ResponseTimeGroup, Tag::ResponseTimeP50])
    );
}

/// Verifies selecting a child keeps the header even when it was absent.
#[test]
fn exclusive_child_selection_restores_header() {
    let mut engine = engine();
    engine.select_exclusive_child(SettingId::EdgeLabels, Tag::ResponseTimeP99);

    assert_eq!(
        engine.settings().edge_labels,
        tags(&[Tag::ResponseTimeGroup, Tag::ResponseTimeP99])
    );
}

/// Verifies a non-child tag is rejected by exclusive selection.
#[test]
fn exclusive_child_selection_ignores_non_children() {
    let mut engine = engine();
    engine.select_exclusive_child(SettingId::EdgeLabels, Tag::TrafficRate);

    assert!(engine.settings().edge_labels.is_empty());
}

// ============================================================================
// SECTION: Plain Members
// ============================================================================

/// Verifies plain members toggle independently of any group.
#[test]
fn plain_member_toggles_independently() {
    let mut engine = engine();
    engine.toggle_group_member(SettingId::EdgeLabels, Tag::TrafficDistribution);
    engine.toggle_group_member(SettingId::RankBy, Tag::InboundEdges);
    engine.toggle_group_member(SettingId::RankBy, Tag::OutboundEdges);
    engine.toggle_group_member(SettingId::RankBy, Tag::InboundEdges);

    assert_eq!(engine.settings().edge_labels, tags(&[Tag::TrafficDistribution]));
    assert_eq!(engine.settings().rank_by, tags(&[Tag::OutboundEdges]));
}

/// Verifies a member owned by another setting is a silent no-op.
#[test]
fn foreign_member_is_ignored() {
    let mut engine = engine();
    engine.toggle_group_member(SettingId::RankBy, Tag::TrafficRate);

    assert!(engine.settings().rank_by.is_empty());
}

/// Verifies toggling a child directly removes only that child.
#[test]
fn child_toggle_removes_only_child() {
    let selection = tags(&[Tag::ResponseTimeGroup, Tag::ResponseTimeP95]);
    let next = groups::toggle_member(&selection, Tag::ResponseTimeP95, CapabilitySet::default());

    assert_eq!(next, tags(&[Tag::ResponseTimeGroup]));
}

// ============================================================================
// SECTION: Capability-Aware Defaults
// ============================================================================

/// Verifies the default child pick skips capability-disabled children.
#[test]
fn default_child_pick_skips_disabled_children() {
    let caps = CapabilitySet {
        response_time_percentiles: true,
        ..CapabilitySet::default()
    };
    let next = groups::toggle_member(&TagSet::new(), Tag::ResponseTimeGroup, caps);

    assert_eq!(next, tags(&[Tag::ResponseTimeGroup, Tag::ResponseTimeAverage]));
}

/// Verifies the throughput default falls back when request size is missing.
#[test]
fn throughput_default_falls_back_to_response() {
    let caps = CapabilitySet {
        request_size: true,
        ..CapabilitySet::default()
    };
    let next = groups::toggle_member(&TagSet::new(), Tag::ThroughputGroup, caps);

    assert_eq!(next, tags(&[Tag::ThroughputGroup, Tag::ThroughputResponse]));
}

/// Verifies a capability-disabled member never toggles on.
#[test]
fn disabled_member_toggle_is_noop() {
    let caps = CapabilitySet {
        response_time: true,
        ..CapabilitySet::default()
    };
    let next = groups::toggle_member(&TagSet::new(), Tag::ResponseTimeGroup, caps);

    assert!(next.is_empty());
}
