//! Test doubles for exercising slots without a native peer.

use std::collections::BTreeSet;

use crate::{AttributeId, NodeHandle, PeerBinding, PeerCall, PeerError, PeerValue};

/// A [`PeerBinding`] that journals every call.
///
/// Calls are recorded before any injected failure fires, so tests can assert
/// that an attempt happened even when it failed.
#[derive(Debug, Default)]
pub struct RecordingPeer {
    calls: Vec<PeerCall>,
    failing: BTreeSet<AttributeId>,
    panicking: BTreeSet<AttributeId>,
}

impl RecordingPeer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call for `id` return [`PeerError::Rejected`].
    pub fn fail_on(&mut self, id: AttributeId) {
        self.failing.insert(id);
    }

    /// Makes every call for `id` panic.
    pub fn panic_on(&mut self, id: AttributeId) {
        self.panicking.insert(id);
    }

    /// Removes all injected failures.
    pub fn clear_failures(&mut self) {
        self.failing.clear();
        self.panicking.clear();
    }

    /// The calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> &[PeerCall] {
        &self.calls
    }

    /// Drains the recorded calls.
    pub fn take_calls(&mut self) -> Vec<PeerCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of `apply` calls recorded for `id`.
    #[must_use]
    pub fn applies(&self, id: AttributeId) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PeerCall::Apply { id: called, .. } if *called == id))
            .count()
    }

    /// Number of `reset` calls recorded for `id`.
    #[must_use]
    pub fn resets(&self, id: AttributeId) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PeerCall::Reset { id: called, .. } if *called == id))
            .count()
    }

    /// The arguments of the most recent `apply` for `id`.
    #[must_use]
    pub fn last_args(&self, id: AttributeId) -> Option<&[PeerValue]> {
        self.calls.iter().rev().find_map(|call| match call {
            PeerCall::Apply { id: called, args, .. } if *called == id => Some(args.as_slice()),
            _ => None,
        })
    }

    fn outcome(&self, id: AttributeId) -> Result<(), PeerError> {
        assert!(
            !self.panicking.contains(&id),
            "injected panic while writing `{id}`"
        );
        if self.failing.contains(&id) {
            return Err(PeerError::Rejected {
                id,
                reason: "injected failure".into(),
            });
        }
        Ok(())
    }
}

impl PeerBinding for RecordingPeer {
    fn apply(
        &mut self,
        node: NodeHandle,
        id: AttributeId,
        args: &[PeerValue],
    ) -> Result<(), PeerError> {
        self.calls.push(PeerCall::Apply {
            node,
            id,
            args: args.to_vec(),
        });
        self.outcome(id)
    }

    fn reset(&mut self, node: NodeHandle, id: AttributeId) -> Result<(), PeerError> {
        self.calls.push(PeerCall::Reset { node, id });
        self.outcome(id)
    }
}
