// trafficlens-toolbar/src/runtime/store.rs
// ============================================================================
// Module: Traffic Lens Stores
// Description: In-memory settings state and parameter store implementations.
// Purpose: Provide the canonical runtime state and deterministic mirrors.
// Dependencies: crate::{core, interfaces}, url
// ============================================================================

//! ## Overview
//! [`ToolbarSettings`] is the single runtime source of truth for view
//! settings. The parameter stores mirror it: [`InMemoryParamStore`] backs
//! tests and local state, [`QueryStringParamStore`] backs the shareable-URL
//! representation. No setting is coupled to another inside the state itself;
//! group coupling lives in the toggle-group engine.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use url::form_urlencoded;

use crate::core::SettingId;
use crate::core::SettingValue;
use crate::core::TagSet;
use crate::interfaces::ParamStore;

// ============================================================================
// SECTION: Toolbar Settings
// ============================================================================

/// Canonical in-memory toolbar state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarSettings {
    /// Animate edges to reflect traffic load.
    pub traffic_animation: bool,
    /// Show mTLS lock badges on secured edges.
    pub security_badges: bool,
    /// Show badges on workloads missing a mesh proxy.
    pub out_of_mesh_badges: bool,
    /// Show virtual-service badges on routed nodes.
    pub virtual_service_badges: bool,
    /// Box nodes belonging to the same cluster.
    pub box_by_cluster: bool,
    /// Box nodes belonging to the same namespace.
    pub box_by_namespace: bool,
    /// Include edges that carried no traffic in the period.
    pub idle_edges: bool,
    /// Include service nodes that never received traffic.
    pub idle_nodes: bool,
    /// Inject request-classification operation nodes.
    pub operation_nodes: bool,
    /// Rank nodes by configurable graph criteria.
    pub rank: bool,
    /// Inject destination service nodes into the graph.
    pub service_nodes: bool,
    /// Include waypoint proxy telemetry in the graph.
    pub waypoints: bool,
    /// Edge label selection.
    pub edge_labels: TagSet,
    /// Rank scoring criteria selection.
    pub rank_by: TagSet,
}

impl Default for ToolbarSettings {
    fn default() -> Self {
        // Field defaults mirror SettingId::default_value; agreement is
        // asserted by the reconciliation round-trip tests.
        Self {
            traffic_animation: false,
            security_badges: false,
            out_of_mesh_badges: true,
            virtual_service_badges: true,
            box_by_cluster: true,
            box_by_namespace: true,
            idle_edges: false,
            idle_nodes: false,
            operation_nodes: false,
            rank: false,
            service_nodes: true,
            waypoints: false,
            edge_labels: TagSet::new(),
            rank_by: TagSet::new(),
        }
    }
}

impl ToolbarSettings {
    /// Returns the current value of a setting.
    #[must_use]
    pub fn value(&self, setting: SettingId) -> SettingValue {
        match setting {
            SettingId::TrafficAnimation => SettingValue::Bool(self.traffic_animation),
            SettingId::SecurityBadges => SettingValue::Bool(self.security_badges),
            SettingId::OutOfMeshBadges => SettingValue::Bool(self.out_of_mesh_badges),
            SettingId::VirtualServiceBadges => SettingValue::Bool(self.virtual_service_badges),
            SettingId::BoxByCluster => SettingValue::Bool(self.box_by_cluster),
            SettingId::BoxByNamespace => SettingValue::Bool(self.box_by_namespace),
            SettingId::IdleEdges => SettingValue::Bool(self.idle_edges),
            SettingId::IdleNodes => SettingValue::Bool(self.idle_nodes),
            SettingId::OperationNodes => SettingValue::Bool(self.operation_nodes),
            SettingId::Rank => SettingValue::Bool(self.rank),
            SettingId::ServiceNodes => SettingValue::Bool(self.service_nodes),
            SettingId::Waypoints => SettingValue::Bool(self.waypoints),
            SettingId::EdgeLabels => SettingValue::Tags(self.edge_labels.clone()),
            SettingId::RankBy => SettingValue::Tags(self.rank_by.clone()),
        }
    }

    /// Replaces the value of a setting, returning the previous value.
    ///
    /// A value whose kind does not match the setting's declared kind leaves
    /// the state unchanged; the codec only ever reads by declared kind.
    pub fn set_value(&mut self, setting: SettingId, value: SettingValue) -> SettingValue {
        let previous = self.value(setting);
        match (setting, value) {
            (SettingId::TrafficAnimation, SettingValue::Bool(flag)) => {
                self.traffic_animation = flag;
            }
            (SettingId::SecurityBadges, SettingValue::Bool(flag)) => self.security_badges = flag,
            (SettingId::OutOfMeshBadges, SettingValue::Bool(flag)) => {
                self.out_of_mesh_badges = flag;
            }
            (SettingId::VirtualServiceBadges, SettingValue::Bool(flag)) => {
                self.virtual_service_badges = flag;
            }
            (SettingId::BoxByCluster, SettingValue::Bool(flag)) => self.box_by_cluster = flag,
            (SettingId::BoxByNamespace, SettingValue::Bool(flag)) => self.box_by_namespace = flag,
            (SettingId::IdleEdges, SettingValue::Bool(flag)) => self.idle_edges = flag,
            (SettingId::IdleNodes, SettingValue::Bool(flag)) => self.idle_nodes = flag,
            (SettingId::OperationNodes, SettingValue::Bool(flag)) => self.operation_nodes = flag,
            (SettingId::Rank, SettingValue::Bool(flag)) => self.rank = flag,
            (SettingId::ServiceNodes, SettingValue::Bool(flag)) => self.service_nodes = flag,
            (SettingId::Waypoints, SettingValue::Bool(flag)) => self.waypoints = flag,
            (SettingId::EdgeLabels, SettingValue::Tags(tags)) => self.edge_labels = tags,
            (SettingId::RankBy, SettingValue::Tags(tags)) => self.rank_by = tags,
            _ => {}
        }
        previous
    }

    /// Flips a boolean setting, returning the previous value.
    ///
    /// Tag-set settings are left unchanged.
    pub fn toggle(&mut self, setting: SettingId) -> SettingValue {
        let previous = self.value(setting);
        if let SettingValue::Bool(flag) = previous {
            self.set_value(setting, SettingValue::Bool(!flag));
        }
        previous
    }
}

// ============================================================================
// SECTION: In-Memory Parameter Store
// ============================================================================

/// In-memory parameter store for tests and local state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryParamStore {
    /// Stored entries keyed by parameter name.
    entries: BTreeMap<String, String>,
}

impl InMemoryParamStore {
    /// Creates an empty in-memory parameter store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a snapshot of all stored entries.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }
}

impl ParamStore for InMemoryParamStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// ============================================================================
// SECTION: Query-String Parameter Store
// ============================================================================

/// Parameter store backed by a form-urlencoded query string.
///
/// This is the shareable representation: a bookmarked or shared view is the
/// query string produced by [`QueryStringParamStore::to_query`]. Keys absent
/// from the query use declared defaults, so default sessions produce an
/// empty query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryStringParamStore {
    /// Decoded entries keyed by parameter name.
    entries: BTreeMap<String, String>,
}

impl QueryStringParamStore {
    /// Creates an empty query-string store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parses a form-urlencoded query string into a store.
    ///
    /// Duplicate keys keep the last occurrence.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let entries = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self {
            entries,
        }
    }

    /// Serializes the store as a form-urlencoded query string.
    ///
    /// Keys are emitted in lexicographic order so equal states produce
    /// byte-identical queries.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }

    /// Returns whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParamStore for QueryStringParamStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
