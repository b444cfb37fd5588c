// crates/trafficlens-toolbar/tests/proptest_settings.rs
// ============================================================================
// Module: Settings Property-Based Tests
// Description: Property tests for reconciliation and filtering invariants.
// Purpose: Detect invariant violations across wide input ranges.
// ============================================================================

//! Property-based tests for round-trip stability, align idempotence, and
//! capability-filter commutativity.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use proptest::prelude::*;
use trafficlens_toolbar::CapabilitySet;
use trafficlens_toolbar::InMemoryParamStore;
use trafficlens_toolbar::SettingId;
use trafficlens_toolbar::SettingValue;
use trafficlens_toolbar::Tag;
use trafficlens_toolbar::TagSet;
use trafficlens_toolbar::ToolbarSettings;
use trafficlens_toolbar::runtime::groups;
use trafficlens_toolbar::runtime::reconcile;

/// Strategy over all setting identifiers.
fn setting_strategy() -> impl Strategy<Value = SettingId> {
    prop::sample::select(SettingId::ALL.to_vec())
}

/// Strategy over tags owned by the given setting.
fn owned_tag_strategy(setting: SettingId) -> impl Strategy<Value = Tag> {
    let owned: Vec<Tag> = Tag::ALL.into_iter().filter(|tag| tag.owner() == setting).collect();
    prop::sample::select(owned)
}

/// Strategy over values matching the setting's declared kind.
fn value_strategy(setting: SettingId) -> BoxedStrategy<SettingValue> {
    match setting {
        SettingId::EdgeLabels | SettingId::RankBy => {
            prop::collection::btree_set(owned_tag_strategy(setting), 0 .. 5)
                .prop_map(SettingValue::Tags)
                .boxed()
        }
        _ => any::<bool>().prop_map(SettingValue::Bool).boxed(),
    }
}

/// Strategy over (setting, matching value) pairs.
fn setting_value_strategy() -> impl Strategy<Value = (SettingId, SettingValue)> {
    setting_strategy().prop_flat_map(|setting| {
        value_strategy(setting).prop_map(move |value| (setting, value))
    })
}

/// Strategy over arbitrary capability sets.
fn caps_strategy() -> impl Strategy<Value = CapabilitySet> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(rt, avg, pct, req, resp)| CapabilitySet {
            response_time: rt,
            response_time_average: avg,
            response_time_percentiles: pct,
            request_size: req,
            response_size: resp,
        },
    )
}

/// Strategy over edge-label selections.
fn edge_selection_strategy() -> impl Strategy<Value = TagSet> {
    prop::collection::btree_set(owned_tag_strategy(SettingId::EdgeLabels), 0 .. 6)
}

proptest! {
    /// Align followed by pull on a fresh state reproduces the value exactly,
    /// for all values including the default.
    #[test]
    fn align_then_pull_round_trips((setting, value) in setting_value_strategy()) {
        let mut params = InMemoryParamStore::new();
        reconcile::align(setting, &setting.default_value(), &value, &mut params);

        let mut fresh = ToolbarSettings::default();
        reconcile::pull(setting, &mut fresh, &mut params);

        prop_assert_eq!(fresh.value(setting), value);
    }

    /// Writing the default never leaves a persisted footprint.
    #[test]
    fn default_values_are_elided((setting, value) in setting_value_strategy()) {
        let mut params = InMemoryParamStore::new();
        reconcile::align(setting, &setting.default_value(), &value, &mut params);
        reconcile::align(setting, &value, &setting.default_value(), &mut params);

        prop_assert!(params.is_empty());
    }

    /// A second align with an unchanged value never mutates storage.
    #[test]
    fn align_is_idempotent((setting, value) in setting_value_strategy()) {
        let mut params = InMemoryParamStore::new();
        reconcile::align(setting, &setting.default_value(), &value, &mut params);
        let before = params.snapshot();

        let op = reconcile::align(setting, &value, &value, &mut params);

        prop_assert_eq!(op, None);
        prop_assert_eq!(params.snapshot(), before);
    }

    /// Pull is idempotent: a second pull observes an aligned pair.
    #[test]
    fn pull_is_idempotent((setting, value) in setting_value_strategy()) {
        let mut params = InMemoryParamStore::new();
        reconcile::align(setting, &setting.default_value(), &value, &mut params);

        let mut settings = ToolbarSettings::default();
        reconcile::pull(setting, &mut settings, &mut params);
        let state_snapshot = settings.clone();
        let param_snapshot = params.snapshot();

        let op = reconcile::pull(setting, &mut settings, &mut params);

        prop_assert_eq!(op, None);
        prop_assert_eq!(settings, state_snapshot);
        prop_assert_eq!(params.snapshot(), param_snapshot);
    }

    /// Capability filtering is idempotent.
    #[test]
    fn strip_disabled_is_idempotent(selection in edge_selection_strategy(), caps in caps_strategy()) {
        let once = groups::strip_disabled(&selection, caps);
        let twice = groups::strip_disabled(&once, caps);

        prop_assert_eq!(once, twice);
    }

    /// Capability filtering commutes with member toggling.
    #[test]
    fn strip_disabled_commutes_with_toggles(
        selection in edge_selection_strategy(),
        member in owned_tag_strategy(SettingId::EdgeLabels),
        caps in caps_strategy(),
    ) {
        let toggle_then_strip =
            groups::strip_disabled(&groups::toggle_member(&selection, member, caps), caps);
        let strip_then_toggle =
            groups::toggle_member(&groups::strip_disabled(&selection, caps), member, caps);

        prop_assert_eq!(toggle_then_strip, strip_then_toggle);
    }
}
