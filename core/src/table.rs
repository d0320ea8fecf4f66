//! Per-component slot tables and the commit pass.

use std::{
    any::Any,
    collections::{BTreeMap, btree_map::Entry},
    panic::{self, AssertUnwindSafe},
};

use tracing::{debug, debug_span, error, warn};

use crate::{
    AttributeId, AttributeSlot, Commit, CommitError, KeyedCompare, KeyedSlot, NodeHandle,
    PeerBinding, ReferenceCompare, ReferenceSlot, SlotFactory,
};

/// All attribute slots of one component instance.
///
/// Setters stage into the table during a re-render; [`SlotTable::commit_all`]
/// then reconciles every slot with the peer in a single pass. Slots that
/// resolve to their default are dropped, so the table only ever holds
/// attributes with a non-default value.
#[derive(Debug, Default)]
pub struct SlotTable {
    slots: BTreeMap<AttributeId, Box<dyn AttributeSlot>>,
}

/// Summary of one [`SlotTable::commit_all`] pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommitReport {
    /// Slots whose value was pushed to the peer.
    pub applied: usize,
    /// Slots whose staged value matched the committed one.
    pub unchanged: usize,
    /// Identities removed from the table by this pass.
    pub expired: Vec<AttributeId>,
    /// Per-slot failures. The remaining slots were still committed.
    pub errors: Vec<CommitError>,
}

impl CommitReport {
    /// Returns `true` if no slot failed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl SlotTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `value` into the slot of type `S`, creating the slot if needed.
    ///
    /// `None` stages an unset. Repeated calls before a commit keep only the
    /// last value.
    pub fn get_or_create<S: SlotFactory>(&mut self, value: Option<S::Value>) {
        match self.slots.entry(S::ID) {
            Entry::Vacant(entry) => {
                entry.insert(Box::new(S::create(value)));
            }
            Entry::Occupied(mut entry) => {
                if let Some(slot) = entry.get_mut().as_any_mut().downcast_mut::<S>() {
                    slot.stage(value);
                } else {
                    error!(
                        attribute = %S::ID,
                        existing = ?entry.get(),
                        "attribute identity reused by a different slot type; replacing slot"
                    );
                    entry.insert(Box::new(S::create(value)));
                }
            }
        }
    }

    /// Stages a value for a [`KeyedCompare`] attribute.
    pub fn stage_keyed<A: KeyedCompare>(&mut self, value: Option<A::Value>) {
        self.get_or_create::<KeyedSlot<A>>(value);
    }

    /// Stages a value for a [`ReferenceCompare`] attribute.
    pub fn stage_reference<A: ReferenceCompare>(&mut self, value: Option<A::Value>) {
        self.get_or_create::<ReferenceSlot<A>>(value);
    }

    /// Commits every slot against `node`, then drops the expired ones.
    ///
    /// A failing or panicking slot is reported in the returned
    /// [`CommitReport`] and does not stop the pass. Failed changes are not
    /// retried.
    pub fn commit_all(&mut self, peer: &mut dyn PeerBinding, node: NodeHandle) -> CommitReport {
        let span = debug_span!("commit_all", %node, slots = self.slots.len());
        let _enter = span.enter();

        let mut report = CommitReport::default();
        let mut expiring = Vec::new();

        for (&id, slot) in &mut self.slots {
            match commit_isolated(slot.as_mut(), peer, node) {
                Ok(Commit::Idle) => {}
                Ok(Commit::Unchanged) => report.unchanged += 1,
                Ok(Commit::Applied) => report.applied += 1,
                Ok(Commit::Expired) => expiring.push(id),
                Err(err) => {
                    warn!(attribute = %id, error = %err, "attribute commit failed");
                    if slot.is_vacant() {
                        expiring.push(id);
                    }
                    report.errors.push(err);
                }
            }
        }

        for id in &expiring {
            self.slots.remove(id);
        }
        report.expired = expiring;

        debug!(
            applied = report.applied,
            unchanged = report.unchanged,
            expired = report.expired.len(),
            failed = report.errors.len(),
            "commit pass finished"
        );
        report
    }

    /// Number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the table holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if a slot exists for `id`.
    #[must_use]
    pub fn contains(&self, id: AttributeId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Identities of the live slots, in table order.
    pub fn identities(&self) -> impl Iterator<Item = AttributeId> + '_ {
        self.slots.keys().copied()
    }

    /// Borrows the slot of type `S`, if present.
    #[must_use]
    pub fn slot<S: SlotFactory>(&self) -> Option<&S> {
        self.slots
            .get(&S::ID)
            .and_then(|slot| slot.as_any().downcast_ref::<S>())
    }
}

fn commit_isolated(
    slot: &mut dyn AttributeSlot,
    peer: &mut dyn PeerBinding,
    node: NodeHandle,
) -> Result<Commit, CommitError> {
    let id = slot.identity();
    panic::catch_unwind(AssertUnwindSafe(|| slot.commit(peer, node))).unwrap_or_else(|payload| {
        Err(CommitError::Panicked {
            id,
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
