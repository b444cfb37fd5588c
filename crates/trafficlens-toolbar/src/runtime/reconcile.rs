// trafficlens-toolbar/src/runtime/reconcile.rs
// ============================================================================
// Module: Traffic Lens Reconciliation
// Description: Pull/align synchronization between parameters and state.
// Purpose: Keep the persisted parameter mirror consistent with live state.
// Dependencies: crate::{core, interfaces}, crate::runtime::{codec, store}
// ============================================================================

//! ## Overview
//! Reconciliation is the only component that writes to the in-memory state
//! and the parameter store in the same operation. Both algorithms are
//! per-setting, order-independent across settings, idempotent, and
//! infallible: reads default to absent rather than raising.
//!
//! Pull runs once at initialization: a stored value wins over the in-memory
//! value, and a non-default in-memory value with no stored counterpart is
//! written through so a programmatic initial state becomes shareable
//! immediately. Align runs after every state change: an unchanged value is
//! a no-op, a default value removes the entry, anything else writes it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::SettingId;
use crate::core::SettingValue;
use crate::interfaces::ParamStore;
use crate::runtime::codec;
use crate::runtime::store::ToolbarSettings;

// ============================================================================
// SECTION: Journal Records
// ============================================================================

/// Record of a reconciliation effect, retained in the engine journal.
///
/// No-op reconciliations produce no record; two consecutive aligns with the
/// same value therefore leave both the store and the journal untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "setting")]
pub enum ParamOp {
    /// A stored value was adopted into memory at initialization.
    Adopted(SettingId),
    /// A non-default value was written through to the parameter store.
    Wrote(SettingId),
    /// A default-valued entry was removed from the parameter store.
    Removed(SettingId),
}

// ============================================================================
// SECTION: Pull
// ============================================================================

/// Pulls one setting from the parameter store at initialization.
///
/// A present stored value overrides the in-memory value; an absent one
/// causes a non-default in-memory value to be written through. Returns the
/// journal record for the effect, if any.
pub fn pull<S: ParamStore>(
    setting: SettingId,
    settings: &mut ToolbarSettings,
    params: &mut S,
) -> Option<ParamOp> {
    let current = settings.value(setting);
    match codec::read(params, setting) {
        Some(stored) => {
            if stored == current {
                return None;
            }
            settings.set_value(setting, stored);
            Some(ParamOp::Adopted(setting))
        }
        None => {
            if current == setting.default_value() {
                return None;
            }
            codec::write(params, setting, &current);
            Some(ParamOp::Wrote(setting))
        }
    }
}

// ============================================================================
// SECTION: Align
// ============================================================================

/// Aligns the parameter store with one setting after a state change.
///
/// Comparing previous against current makes spurious triggers harmless: an
/// unchanged value never mutates storage. Returns the journal record for
/// the effect, if any.
pub fn align<S: ParamStore>(
    setting: SettingId,
    previous: &SettingValue,
    current: &SettingValue,
    params: &mut S,
) -> Option<ParamOp> {
    if previous == current {
        return None;
    }
    if *current == setting.default_value() {
        codec::remove(params, setting);
        return Some(ParamOp::Removed(setting));
    }
    codec::write(params, setting, current);
    Some(ParamOp::Wrote(setting))
}
