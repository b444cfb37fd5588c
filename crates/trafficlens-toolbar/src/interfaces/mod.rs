// trafficlens-toolbar/src/interfaces/mod.rs
// ============================================================================
// Module: Traffic Lens Interfaces
// Description: Backend-agnostic interfaces for parameter storage and probing.
// Purpose: Define the contract surfaces used by the toolbar runtime.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the toolbar engine integrates with its host without
//! embedding backend-specific details. The parameter store is a flat string
//! map mutated only from the single event-processing thread, so its
//! operations are infallible; the capability probe crosses the process
//! boundary and may fail, in which case the capability set simply stays
//! unknown.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::CapabilitySet;

// ============================================================================
// SECTION: Parameter Store
// ============================================================================

/// Flat string-keyed parameter store mirroring the in-memory settings.
///
/// Absence of a key means "use the declared default". A stored value equal
/// to the default is an invariant violation that reconciliation actively
/// prevents.
pub trait ParamStore {
    /// Returns the stored value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes the entry for a key, if present.
    fn remove(&mut self, key: &str);
}

// ============================================================================
// SECTION: Capability Probe
// ============================================================================

/// Capability probe errors.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe could not reach or parse the capability endpoint.
    #[error("capability probe error: {0}")]
    Unavailable(String),
}

/// Asynchronous capability probe reporting disabled-telemetry flags.
///
/// Called at most once per session unless explicitly re-invoked by the
/// caller. A failed or never-resolving probe leaves the capability set
/// unknown, which the engine treats as "nothing disabled".
pub trait CapabilityProbe {
    /// Fetches the capability set from the backing service.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] when the capability set cannot be fetched.
    fn fetch(&self) -> Result<CapabilitySet, ProbeError>;
}
