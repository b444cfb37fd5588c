// trafficlens-toolbar/src/runtime/codec.rs
// ============================================================================
// Module: Traffic Lens Parameter Codec
// Description: Textual encoding and decoding of setting values.
// Purpose: Keep parameter-key and token knowledge at one boundary.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The codec translates between typed setting values and their persisted
//! textual forms. Parsing never fails: a malformed boolean or number, an
//! unknown tag token, or an empty tag list is treated as absent, and the
//! declared default applies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::SettingId;
use crate::core::SettingKind;
use crate::core::SettingValue;
use crate::core::Tag;
use crate::core::TagSet;
use crate::interfaces::ParamStore;

// ============================================================================
// SECTION: Scalar Parsing
// ============================================================================

/// Parses a canonical boolean literal; any other text is absent.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Returns the canonical textual form of a boolean.
#[must_use]
pub const fn encode_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Parses an unsigned decimal number; any other text is absent.
#[must_use]
pub fn parse_u32(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

// ============================================================================
// SECTION: Tag-Set Parsing
// ============================================================================

/// Parses a comma-separated tag list owned by the given setting.
///
/// Unknown tokens and tags owned by other settings are dropped; a list that
/// parses to the empty set is absent.
#[must_use]
pub fn parse_tags(setting: SettingId, raw: &str) -> Option<TagSet> {
    let tags: TagSet = raw
        .split(',')
        .filter_map(|token| Tag::from_token(token.trim()))
        .filter(|tag| tag.owner() == setting)
        .collect();
    if tags.is_empty() { None } else { Some(tags) }
}

/// Serializes a tag set as comma-separated tokens in canonical order.
#[must_use]
pub fn encode_tags(tags: &TagSet) -> String {
    let tokens: Vec<&'static str> = tags.iter().map(|tag| tag.as_token()).collect();
    tokens.join(",")
}

// ============================================================================
// SECTION: Store Access
// ============================================================================

/// Reads a setting's stored value, if present and well-formed.
#[must_use]
pub fn read<S: ParamStore>(params: &S, setting: SettingId) -> Option<SettingValue> {
    let raw = params.get(setting.param_key())?;
    match setting.kind() {
        SettingKind::Boolean => parse_bool(&raw).map(SettingValue::Bool),
        SettingKind::TagSet => parse_tags(setting, &raw).map(SettingValue::Tags),
    }
}

/// Writes a setting value in its canonical textual form.
///
/// Callers are responsible for the default-elision rule: a value equal to
/// the declared default must be removed instead of written.
pub fn write<S: ParamStore>(params: &mut S, setting: SettingId, value: &SettingValue) {
    match value {
        SettingValue::Bool(flag) => params.set(setting.param_key(), encode_bool(*flag)),
        SettingValue::Tags(tags) => params.set(setting.param_key(), &encode_tags(tags)),
    }
}

/// Removes a setting's stored entry.
pub fn remove<S: ParamStore>(params: &mut S, setting: SettingId) {
    params.remove(setting.param_key());
}
