// trafficlens-toolbar/src/runtime/groups.rs
// ============================================================================
// Module: Traffic Lens Toggle Groups
// Description: Grouped toggle semantics over tag-set selections.
// Purpose: Enforce header/child coupling and capability filtering.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A group-header tag marks a feature family as active; its children are
//! mutually exclusive ("radio within checkbox"). Adding a header also picks
//! a deterministic default child so the group is never user-enabled without
//! a concrete selection; removing a header strips all of its children.
//! Capability filtering is a single pass removing every selected tag whose
//! disable rule holds; because a header's rule is equivalent to "all
//! children disabled", the pass also clears headers with no selectable
//! child left, which makes it commutative with any prior toggles.
//!
//! All operations are pure: they take the current selection and return the
//! next one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::CapabilitySet;
use crate::core::Tag;
use crate::core::TagSet;
use crate::core::ToggleGroup;
use crate::core::group_for_child;
use crate::core::group_for_header;

// ============================================================================
// SECTION: Member Toggling
// ============================================================================

/// Toggles a tag-set member, honoring group-header semantics.
///
/// A member disabled by the capability set is a silent no-op. Removing a
/// header removes every child declared under it; adding a header also adds
/// the first capability-enabled child in declared priority order, unless an
/// enabled child is already selected. Adding a declared group child
/// supersedes any selected sibling so a group never holds two children.
#[must_use]
pub fn toggle_member(selection: &TagSet, member: Tag, caps: CapabilitySet) -> TagSet {
    if caps.disables(member) {
        return selection.clone();
    }
    if selection.contains(&member) {
        return group_for_header(member).map_or_else(
            || {
                let mut next = selection.clone();
                next.remove(&member);
                next
            },
            |group| remove_family(selection, group),
        );
    }
    let mut next = selection.clone();
    if let Some(group) = group_for_child(member) {
        for sibling in group.children {
            next.remove(sibling);
        }
    }
    next.insert(member);
    if let Some(group) = group_for_header(member)
        && !has_enabled_child(&next, group, caps)
        && let Some(child) = default_child(group, caps)
    {
        next.insert(child);
    }
    next
}

/// Selects a group child exclusively, superseding any sibling.
///
/// The owning group's header is preserved (and added if missing) so the
/// family stays active; every other child of the same group is removed. A
/// disabled child or a tag that is not a declared group child is a silent
/// no-op.
#[must_use]
pub fn select_exclusive_child(selection: &TagSet, child: Tag, caps: CapabilitySet) -> TagSet {
    let Some(group) = group_for_child(child) else {
        return selection.clone();
    };
    if caps.disables(child) {
        return selection.clone();
    }
    let mut next: TagSet = selection
        .iter()
        .copied()
        .filter(|tag| !group.children.contains(tag))
        .collect();
    next.insert(group.header);
    next.insert(child);
    next
}

// ============================================================================
// SECTION: Capability Filtering
// ============================================================================

/// Removes every selected tag disabled by the capability set, in one pass.
///
/// Applying the same capability set twice is a no-op, and the result does
/// not depend on whether the capabilities arrived before or after the
/// toggles that produced the selection.
#[must_use]
pub fn strip_disabled(selection: &TagSet, caps: CapabilitySet) -> TagSet {
    selection.iter().copied().filter(|tag| !caps.disables(*tag)).collect()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Removes a group's header and all of its children from a selection.
fn remove_family(selection: &TagSet, group: &ToggleGroup) -> TagSet {
    selection
        .iter()
        .copied()
        .filter(|tag| *tag != group.header && !group.children.contains(tag))
        .collect()
}

/// Picks the first capability-enabled child in priority order.
fn default_child(group: &ToggleGroup, caps: CapabilitySet) -> Option<Tag> {
    group.priority.iter().copied().find(|child| !caps.disables(*child))
}

/// Returns whether the selection already holds an enabled child of a group.
fn has_enabled_child(selection: &TagSet, group: &ToggleGroup, caps: CapabilitySet) -> bool {
    group
        .children
        .iter()
        .any(|child| selection.contains(child) && !caps.disables(*child))
}
