//! The staged diff-and-apply engine behind `WaterUI` attribute modifiers.
//!
//! Every visual attribute of a component lives in an [`AttributeSlot`]. During
//! a re-render, setters only *stage* values into the component's
//! [`SlotTable`]. Once the render settles, [`SlotTable::commit_all`] compares
//! each staged value with the one last pushed to the native side and forwards
//! only real changes through a [`PeerBinding`]:
//!
//! - a burst of setter calls for one attribute collapses to a single peer call,
//! - re-supplying an equal value is free,
//! - unsetting an attribute resets it natively and drops its slot.
//!
//! Equality is pluggable per attribute. See [`equality`] for the building
//! blocks and [`ReferenceCompare`] / [`KeyedCompare`] for the two slot
//! flavours.

pub mod equality;
mod error;
mod identity;
mod peer;
mod slot;
mod table;

/// Test doubles for slot and table tests.
#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use error::{CommitError, PeerError};
pub use identity::AttributeId;
pub use peer::{NodeHandle, PeerBinding, PeerCall, PeerValue};
pub use slot::{
    Attribute, AttributeSlot, Commit, KeyedCompare, KeyedSlot, ReferenceCompare, ReferenceSlot,
    SlotFactory, Staged,
};
pub use table::{CommitReport, SlotTable};
pub use waterui_resource::{AsResource, Resource, ResourceParam, ResourceParams};
