// trafficlens-toolbar/src/core/tags.rs
// ============================================================================
// Module: Traffic Lens Tag Vocabulary
// Description: Tag-set members and toggle-group declarations.
// Purpose: Provide the closed tag vocabulary with stable token forms.
// Dependencies: crate::core::settings, serde
// ============================================================================

//! ## Overview
//! Tags are the members of the tag-set settings. Edge-label tags form two
//! toggle groups (response time, throughput): a group-header tag marks the
//! family as active and a single mutually-exclusive child picks the concrete
//! variant. Rank tags are plain members without group structure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::settings::SettingId;

// ============================================================================
// SECTION: Tags
// ============================================================================

/// An order-irrelevant set of tags; iteration follows declaration order.
pub type TagSet = BTreeSet<Tag>;

/// A tag-set member with a stable persisted token form.
///
/// # Invariants
/// - Declaration order is the canonical serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tag {
    /// Response-time family header.
    ResponseTimeGroup,
    /// Average request response time.
    ResponseTimeAverage,
    /// Median (50th percentile) response time.
    ResponseTimeP50,
    /// 95th percentile response time.
    ResponseTimeP95,
    /// 99th percentile response time.
    ResponseTimeP99,
    /// Throughput family header.
    ThroughputGroup,
    /// HTTP request throughput.
    ThroughputRequest,
    /// HTTP response throughput.
    ThroughputResponse,
    /// Traffic percentage distribution per edge.
    TrafficDistribution,
    /// Traffic rate per edge.
    TrafficRate,
    /// Rank nodes by inbound edge count.
    InboundEdges,
    /// Rank nodes by outbound edge count.
    OutboundEdges,
}

impl Tag {
    /// All tags, in canonical declaration order.
    pub const ALL: [Self; 12] = [
        Self::ResponseTimeGroup,
        Self::ResponseTimeAverage,
        Self::ResponseTimeP50,
        Self::ResponseTimeP95,
        Self::ResponseTimeP99,
        Self::ThroughputGroup,
        Self::ThroughputRequest,
        Self::ThroughputResponse,
        Self::TrafficDistribution,
        Self::TrafficRate,
        Self::InboundEdges,
        Self::OutboundEdges,
    ];

    /// Returns the stable token used in persisted parameters.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::ResponseTimeGroup => "responseTime",
            Self::ResponseTimeAverage => "avg",
            Self::ResponseTimeP50 => "rt50",
            Self::ResponseTimeP95 => "rt95",
            Self::ResponseTimeP99 => "rt99",
            Self::ThroughputGroup => "throughput",
            Self::ThroughputRequest => "throughputRequest",
            Self::ThroughputResponse => "throughputResponse",
            Self::TrafficDistribution => "trafficDistribution",
            Self::TrafficRate => "trafficRate",
            Self::InboundEdges => "inboundEdges",
            Self::OutboundEdges => "outboundEdges",
        }
    }

    /// Parses a persisted token into a tag; unknown tokens yield `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_token() == token)
    }

    /// Returns the tag-set setting that owns this tag.
    #[must_use]
    pub const fn owner(self) -> SettingId {
        match self {
            Self::InboundEdges | Self::OutboundEdges => SettingId::RankBy,
            _ => SettingId::EdgeLabels,
        }
    }
}

// ============================================================================
// SECTION: Toggle Groups
// ============================================================================

/// A toggle group: a header tag owning mutually-exclusive child tags.
///
/// # Invariants
/// - At most one child of a group is selected at any time.
/// - `priority` lists the same children as `children`, ordered by
///   default-pick preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleGroup {
    /// Group-header tag marking the family as active.
    pub header: Tag,
    /// Child tags, in display order.
    pub children: &'static [Tag],
    /// Child tags, in default-pick priority order.
    pub priority: &'static [Tag],
}

/// Toggle-group declarations for the edge-label setting.
pub const TOGGLE_GROUPS: [ToggleGroup; 2] = [
    ToggleGroup {
        header: Tag::ResponseTimeGroup,
        children: &[
            Tag::ResponseTimeAverage,
            Tag::ResponseTimeP50,
            Tag::ResponseTimeP95,
            Tag::ResponseTimeP99,
        ],
        priority: &[
            Tag::ResponseTimeP95,
            Tag::ResponseTimeAverage,
            Tag::ResponseTimeP50,
            Tag::ResponseTimeP99,
        ],
    },
    ToggleGroup {
        header: Tag::ThroughputGroup,
        children: &[Tag::ThroughputRequest, Tag::ThroughputResponse],
        priority: &[Tag::ThroughputRequest, Tag::ThroughputResponse],
    },
];

/// Returns the group declared under the given header tag.
#[must_use]
pub fn group_for_header(tag: Tag) -> Option<&'static ToggleGroup> {
    TOGGLE_GROUPS.iter().find(|group| group.header == tag)
}

/// Returns the group declaring the given tag as a child.
#[must_use]
pub fn group_for_child(tag: Tag) -> Option<&'static ToggleGroup> {
    TOGGLE_GROUPS.iter().find(|group| group.children.contains(&tag))
}
