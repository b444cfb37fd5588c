// trafficlens-toolbar/src/core/capability.rs
// ============================================================================
// Module: Traffic Lens Capability Set
// Description: Server-reported disabled-telemetry flags.
// Purpose: Map capability flags to the tags they disable.
// Dependencies: crate::core::tags, serde
// ============================================================================

//! ## Overview
//! The backing service reports which telemetry features are unavailable for
//! the current deployment. The capability set arrives asynchronously, at
//! most once per session unless explicitly re-fetched, and is intersected
//! against the current selection to strip now-invalid tags. An unknown
//! (not-yet-resolved) capability set is treated as "nothing disabled".

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::tags::Tag;

// ============================================================================
// SECTION: Capability Set
// ============================================================================

/// Disabled-telemetry flags reported by the backing service.
///
/// Each flag marks a telemetry source as unavailable; the default is fully
/// capable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// Response-time telemetry is unavailable entirely.
    #[serde(default)]
    pub response_time: bool,
    /// Average response-time aggregation is unavailable.
    #[serde(default)]
    pub response_time_average: bool,
    /// Percentile response-time aggregation is unavailable.
    #[serde(default)]
    pub response_time_percentiles: bool,
    /// Request-size telemetry is unavailable.
    #[serde(default)]
    pub request_size: bool,
    /// Response-size telemetry is unavailable.
    #[serde(default)]
    pub response_size: bool,
}

impl CapabilitySet {
    /// Returns whether the capability flags disable the given tag.
    ///
    /// A group header is disabled exactly when every child of its group is
    /// disabled, so a single filtering pass over selected tags also clears
    /// headers left without any selectable child.
    #[must_use]
    pub const fn disables(self, tag: Tag) -> bool {
        match tag {
            Tag::ResponseTimeGroup => {
                self.response_time
                    || (self.response_time_average && self.response_time_percentiles)
            }
            Tag::ResponseTimeAverage => self.response_time || self.response_time_average,
            Tag::ResponseTimeP50 | Tag::ResponseTimeP95 | Tag::ResponseTimeP99 => {
                self.response_time || self.response_time_percentiles
            }
            Tag::ThroughputGroup => self.request_size && self.response_size,
            Tag::ThroughputRequest => self.request_size,
            Tag::ThroughputResponse => self.response_size,
            Tag::TrafficDistribution
            | Tag::TrafficRate
            | Tag::InboundEdges
            | Tag::OutboundEdges => false,
        }
    }
}
