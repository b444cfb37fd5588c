// trafficlens-toolbar/src/runtime/engine.rs
// ============================================================================
// Module: Traffic Lens Toolbar Engine
// Description: Sequential mutation facade over settings and parameters.
// Purpose: Execute toolbar operations with mutate-then-align discipline.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The engine is the single canonical execution path for toolbar mutations.
//! Every operation runs on the caller's sequential event queue: mutate the
//! in-memory state, then align the parameter mirror for the touched setting,
//! journaling the effect. The capability probe result enters the same queue
//! as an ordinary event, so its application commutes with user toggles
//! regardless of arrival order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::CapabilitySet;
use crate::core::FeatureGates;
use crate::core::SettingId;
use crate::core::SettingValue;
use crate::core::Tag;
use crate::core::TagSet;
use crate::interfaces::CapabilityProbe;
use crate::interfaces::ParamStore;
use crate::runtime::groups;
use crate::runtime::reconcile;
use crate::runtime::reconcile::ParamOp;
use crate::runtime::store::ToolbarSettings;

// ============================================================================
// SECTION: Events
// ============================================================================

/// A toolbar mutation on the sequential event queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarEvent {
    /// Flip a boolean setting.
    SettingToggled(SettingId),
    /// Toggle a tag-set member with group semantics.
    GroupMemberToggled(SettingId, Tag),
    /// Select a group child exclusively.
    ExclusiveChildSelected(SettingId, Tag),
    /// The capability probe resolved.
    CapabilitiesResolved(CapabilitySet),
}

// ============================================================================
// SECTION: Toolbar Engine
// ============================================================================

/// Sequential toolbar engine owning the settings state and its mirror.
#[derive(Debug, Clone)]
pub struct ToolbarEngine<S> {
    /// Canonical in-memory settings state.
    settings: ToolbarSettings,
    /// Persisted parameter mirror.
    params: S,
    /// Capability set, unknown until the probe resolves.
    capabilities: Option<CapabilitySet>,
    /// Server-derived menu gates.
    gates: FeatureGates,
    /// Journal of reconciliation effects, in application order.
    journal: Vec<ParamOp>,
}

impl<S: ParamStore> ToolbarEngine<S> {
    /// Creates an engine with default settings over the given mirror.
    #[must_use]
    pub fn new(params: S, gates: FeatureGates) -> Self {
        Self::with_settings(ToolbarSettings::default(), params, gates)
    }

    /// Creates an engine with a programmatic initial state.
    ///
    /// Non-default initial values become shareable at [`Self::init`] time.
    #[must_use]
    pub const fn with_settings(settings: ToolbarSettings, params: S, gates: FeatureGates) -> Self {
        Self {
            settings,
            params,
            capabilities: None,
            gates,
            journal: Vec::new(),
        }
    }

    /// Pulls every setting from the parameter mirror at initialization.
    ///
    /// Stored values win over in-memory values; non-default in-memory values
    /// without a stored counterpart are written through. Idempotent.
    pub fn init(&mut self) {
        for setting in SettingId::ALL {
            if let Some(op) = reconcile::pull(setting, &mut self.settings, &mut self.params) {
                self.journal.push(op);
            }
        }
    }

    /// Returns the current value of a setting.
    #[must_use]
    pub fn value(&self, setting: SettingId) -> SettingValue {
        self.settings.value(setting)
    }

    /// Returns the canonical settings state.
    #[must_use]
    pub const fn settings(&self) -> &ToolbarSettings {
        &self.settings
    }

    /// Returns the parameter mirror.
    #[must_use]
    pub const fn params(&self) -> &S {
        &self.params
    }

    /// Returns the capability set, if the probe has resolved.
    #[must_use]
    pub const fn capabilities(&self) -> Option<CapabilitySet> {
        self.capabilities
    }

    /// Returns the journal of reconciliation effects so far.
    #[must_use]
    pub fn journal(&self) -> &[ParamOp] {
        &self.journal
    }

    /// Returns the settings offered in the toolbar menu.
    #[must_use]
    pub fn offered_settings(&self) -> Vec<SettingId> {
        SettingId::ALL.into_iter().filter(|setting| self.gates.offers(*setting)).collect()
    }

    /// Sets a boolean setting and aligns its parameter.
    pub fn set_bool(&mut self, setting: SettingId, value: bool) {
        self.mutate(setting, SettingValue::Bool(value));
    }

    /// Flips a boolean setting and aligns its parameter.
    ///
    /// Tag-set settings are left unchanged.
    pub fn toggle_setting(&mut self, setting: SettingId) {
        let previous = self.settings.toggle(setting);
        self.align_after(setting, &previous);
    }

    /// Replaces a tag-set setting and aligns its parameter.
    pub fn set_tags(&mut self, setting: SettingId, tags: TagSet) {
        self.mutate(setting, SettingValue::Tags(tags));
    }

    /// Toggles a tag-set member with group semantics, then aligns.
    ///
    /// A member owned by a different setting, or disabled by the current
    /// capability set, is a silent no-op.
    pub fn toggle_group_member(&mut self, setting: SettingId, member: Tag) {
        if member.owner() != setting {
            return;
        }
        if let SettingValue::Tags(current) = self.settings.value(setting) {
            let next = groups::toggle_member(&current, member, self.active_capabilities());
            self.mutate(setting, SettingValue::Tags(next));
        }
    }

    /// Selects a group child exclusively, then aligns.
    pub fn select_exclusive_child(&mut self, setting: SettingId, child: Tag) {
        if child.owner() != setting {
            return;
        }
        if let SettingValue::Tags(current) = self.settings.value(setting) {
            let next = groups::select_exclusive_child(&current, child, self.active_capabilities());
            self.mutate(setting, SettingValue::Tags(next));
        }
    }

    /// Applies a resolved capability set, stripping now-invalid selections.
    ///
    /// Idempotent and commutative with prior toggle operations.
    pub fn apply_capabilities(&mut self, caps: CapabilitySet) {
        self.capabilities = Some(caps);
        for setting in [SettingId::EdgeLabels, SettingId::RankBy] {
            if let SettingValue::Tags(current) = self.settings.value(setting) {
                let next = groups::strip_disabled(&current, caps);
                self.mutate(setting, SettingValue::Tags(next));
            }
        }
    }

    /// Drives a capability probe and applies its result.
    ///
    /// Probe failure is absorbed: the capability set stays unknown and every
    /// capability is treated as available.
    pub fn resolve_capabilities(&mut self, probe: &impl CapabilityProbe) {
        if let Ok(caps) = probe.fetch() {
            self.apply_capabilities(caps);
        }
    }

    /// Applies one event from the sequential queue.
    pub fn apply(&mut self, event: ToolbarEvent) {
        match event {
            ToolbarEvent::SettingToggled(setting) => self.toggle_setting(setting),
            ToolbarEvent::GroupMemberToggled(setting, member) => {
                self.toggle_group_member(setting, member);
            }
            ToolbarEvent::ExclusiveChildSelected(setting, child) => {
                self.select_exclusive_child(setting, child);
            }
            ToolbarEvent::CapabilitiesResolved(caps) => self.apply_capabilities(caps),
        }
    }

    /// Returns the capability set in effect for toggle decisions.
    fn active_capabilities(&self) -> CapabilitySet {
        self.capabilities.unwrap_or_default()
    }

    /// Mutates one setting and aligns its parameter, journaling the effect.
    fn mutate(&mut self, setting: SettingId, next: SettingValue) {
        let previous = self.settings.set_value(setting, next);
        self.align_after(setting, &previous);
    }

    /// Aligns one setting's parameter after a mutation, journaling the effect.
    fn align_after(&mut self, setting: SettingId, previous: &SettingValue) {
        let current = self.settings.value(setting);
        if let Some(op) = reconcile::align(setting, previous, &current, &mut self.params) {
            self.journal.push(op);
        }
    }
}
