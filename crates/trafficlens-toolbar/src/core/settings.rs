// trafficlens-toolbar/src/core/settings.rs
// ============================================================================
// Module: Traffic Lens Setting Identifiers
// Description: Closed enumeration of toolbar settings with kinds and defaults.
// Purpose: Eliminate stringly-typed setting dispatch; param keys stay at the codec boundary.
// Dependencies: crate::core::tags, serde
// ============================================================================

//! ## Overview
//! Every toolbar setting is a variant of [`SettingId`], statically associated
//! with its persisted parameter key, its kind, and its default value. The
//! default is never persisted: a parameter entry equal to the default is an
//! invariant violation that reconciliation actively prevents.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::tags::TagSet;

// ============================================================================
// SECTION: Setting Identifiers
// ============================================================================

/// Identifier for a single toolbar setting.
///
/// # Invariants
/// - Variants are stable for serialization and parameter-key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingId {
    /// Animate edges to reflect traffic load.
    TrafficAnimation,
    /// Show mTLS lock badges on secured edges.
    SecurityBadges,
    /// Show badges on workloads missing a mesh proxy.
    OutOfMeshBadges,
    /// Show virtual-service badges on routed nodes.
    VirtualServiceBadges,
    /// Box nodes belonging to the same cluster.
    BoxByCluster,
    /// Box nodes belonging to the same namespace.
    BoxByNamespace,
    /// Include edges that carried no traffic in the period.
    IdleEdges,
    /// Include service nodes that never received traffic.
    IdleNodes,
    /// Inject request-classification operation nodes.
    OperationNodes,
    /// Rank nodes by configurable graph criteria.
    Rank,
    /// Inject destination service nodes into the graph.
    ServiceNodes,
    /// Include waypoint proxy telemetry in the graph.
    Waypoints,
    /// Edge label selection (grouped multi-select).
    EdgeLabels,
    /// Rank scoring criteria selection (multi-select).
    RankBy,
}

/// Declared kind of a setting's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKind {
    /// A single on/off flag.
    Boolean,
    /// An order-irrelevant set of enum tags.
    TagSet,
}

/// A typed setting value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingValue {
    /// Boolean setting value.
    Bool(bool),
    /// Tag-set setting value.
    Tags(TagSet),
}

impl SettingId {
    /// All settings, in canonical declaration order.
    pub const ALL: [Self; 14] = [
        Self::TrafficAnimation,
        Self::SecurityBadges,
        Self::OutOfMeshBadges,
        Self::VirtualServiceBadges,
        Self::BoxByCluster,
        Self::BoxByNamespace,
        Self::IdleEdges,
        Self::IdleNodes,
        Self::OperationNodes,
        Self::Rank,
        Self::ServiceNodes,
        Self::Waypoints,
        Self::EdgeLabels,
        Self::RankBy,
    ];

    /// Returns the persisted parameter key for this setting.
    #[must_use]
    pub const fn param_key(self) -> &'static str {
        match self {
            Self::TrafficAnimation => "animation",
            Self::SecurityBadges => "badgeSecurity",
            Self::OutOfMeshBadges => "badgeSidecars",
            Self::VirtualServiceBadges => "badgeVS",
            Self::BoxByCluster => "boxCluster",
            Self::BoxByNamespace => "boxNamespace",
            Self::IdleEdges => "idleEdges",
            Self::IdleNodes => "idleNodes",
            Self::OperationNodes => "operationNodes",
            Self::Rank => "rank",
            Self::ServiceNodes => "injectServiceNodes",
            Self::Waypoints => "waypoints",
            Self::EdgeLabels => "edges",
            Self::RankBy => "rankBy",
        }
    }

    /// Returns the declared kind of this setting.
    #[must_use]
    pub const fn kind(self) -> SettingKind {
        match self {
            Self::EdgeLabels | Self::RankBy => SettingKind::TagSet,
            _ => SettingKind::Boolean,
        }
    }

    /// Returns the declared default for this setting.
    #[must_use]
    pub fn default_value(self) -> SettingValue {
        match self {
            Self::OutOfMeshBadges
            | Self::VirtualServiceBadges
            | Self::BoxByCluster
            | Self::BoxByNamespace
            | Self::ServiceNodes => SettingValue::Bool(true),
            Self::TrafficAnimation
            | Self::SecurityBadges
            | Self::IdleEdges
            | Self::IdleNodes
            | Self::OperationNodes
            | Self::Rank
            | Self::Waypoints => SettingValue::Bool(false),
            Self::EdgeLabels | Self::RankBy => SettingValue::Tags(TagSet::new()),
        }
    }
}

// ============================================================================
// SECTION: Feature Gates
// ============================================================================

/// Server-derived gates controlling which settings are offered in the menu.
///
/// Gating affects the offered menu only: reconciliation still processes a
/// gated setting so stale shared parameters remain harmless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureGates {
    /// Ambient mesh support; offers the waypoint-proxy setting when true.
    pub ambient_enabled: bool,
}

impl FeatureGates {
    /// Returns whether a setting is offered in the toolbar menu.
    #[must_use]
    pub const fn offers(self, setting: SettingId) -> bool {
        match setting {
            SettingId::Waypoints => self.ambient_enabled,
            _ => true,
        }
    }
}
