//! In-memory native peer for `WaterUI` attribute modifiers.
//!
//! [`HeadlessPeer`] materializes attributes into a plain map instead of a
//! platform toolkit. Hosts use it to run the modifier pipeline without a
//! display, and tests use its journal and read-back API to observe exactly
//! what a commit pass sent.

use std::collections::BTreeMap;

use tracing::trace;
use waterui_modifier_common::state::{UiState, UiStatePeer};
use waterui_modifier_core::{AttributeId, NodeHandle, PeerBinding, PeerCall, PeerError, PeerValue};

#[derive(Debug, Default)]
struct NodeEntry {
    attributes: BTreeMap<AttributeId, Vec<PeerValue>>,
    supported: UiState,
    state: UiState,
}

/// A [`PeerBinding`] backed by an in-memory node arena.
#[derive(Debug, Default)]
pub struct HeadlessPeer {
    nodes: BTreeMap<NodeHandle, NodeEntry>,
    next: u64,
    journal: Vec<PeerCall>,
}

impl HeadlessPeer {
    /// Creates a peer with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new native node.
    pub fn create_node(&mut self) -> NodeHandle {
        self.next += 1;
        let node = NodeHandle::new(self.next);
        self.nodes.insert(node, NodeEntry::default());
        node
    }

    /// Destroys a node. Later calls against it fail.
    pub fn remove_node(&mut self, node: NodeHandle) -> bool {
        self.nodes.remove(&node).is_some()
    }

    /// Returns `true` if `node` is alive.
    #[must_use]
    pub fn contains_node(&self, node: NodeHandle) -> bool {
        self.nodes.contains_key(&node)
    }

    /// The arguments currently materialized for `id` on `node`.
    #[must_use]
    pub fn attribute(&self, node: NodeHandle, id: AttributeId) -> Option<&[PeerValue]> {
        self.nodes
            .get(&node)
            .and_then(|entry| entry.attributes.get(&id))
            .map(Vec::as_slice)
    }

    /// Identities materialized on `node`, in identity order.
    pub fn attributes(&self, node: NodeHandle) -> impl Iterator<Item = AttributeId> + '_ {
        self.nodes
            .get(&node)
            .into_iter()
            .flat_map(|entry| entry.attributes.keys().copied())
    }

    /// Every call received so far.
    #[must_use]
    pub fn journal(&self) -> &[PeerCall] {
        &self.journal
    }

    /// Drains the journal.
    pub fn take_journal(&mut self) -> Vec<PeerCall> {
        std::mem::take(&mut self.journal)
    }

    /// Moves `node` into `state`, as the platform would on user input.
    ///
    /// # Errors
    ///
    /// Returns [`PeerError::UnknownNode`] if the node does not exist.
    pub fn set_ui_state(&mut self, node: NodeHandle, state: UiState) -> Result<(), PeerError> {
        self.entry_mut(node)?.state = state;
        Ok(())
    }

    /// The states `node` declared styles for.
    #[must_use]
    pub fn supported_ui_state(&self, node: NodeHandle) -> Option<UiState> {
        self.nodes.get(&node).map(|entry| entry.supported)
    }

    fn entry_mut(&mut self, node: NodeHandle) -> Result<&mut NodeEntry, PeerError> {
        self.nodes
            .get_mut(&node)
            .ok_or(PeerError::UnknownNode(node))
    }
}

impl PeerBinding for HeadlessPeer {
    fn apply(
        &mut self,
        node: NodeHandle,
        id: AttributeId,
        args: &[PeerValue],
    ) -> Result<(), PeerError> {
        trace!(%node, attribute = %id, ?args, "headless apply");
        self.journal.push(PeerCall::Apply {
            node,
            id,
            args: args.to_vec(),
        });
        self.entry_mut(node)?.attributes.insert(id, args.to_vec());
        Ok(())
    }

    fn reset(&mut self, node: NodeHandle, id: AttributeId) -> Result<(), PeerError> {
        trace!(%node, attribute = %id, "headless reset");
        self.journal.push(PeerCall::Reset { node, id });
        self.entry_mut(node)?.attributes.remove(&id);
        Ok(())
    }
}

impl UiStatePeer for HeadlessPeer {
    fn set_supported_ui_state(
        &mut self,
        node: NodeHandle,
        states: UiState,
    ) -> Result<(), PeerError> {
        self.entry_mut(node)?.supported = states;
        Ok(())
    }

    fn ui_state(&self, node: NodeHandle) -> Result<UiState, PeerError> {
        self.nodes
            .get(&node)
            .map(|entry| entry.state)
            .ok_or(PeerError::UnknownNode(node))
    }
}

#[cfg(test)]
mod tests {
    use waterui_modifier_common::{Component, Inset, state::StateStyles};

    use super::*;

    #[test]
    fn test_apply_then_reset_materializes() {
        let mut peer = HeadlessPeer::new();
        let node = peer.create_node();
        peer.apply(node, AttributeId::Width, &[PeerValue::Number(4.0)])
            .unwrap();
        assert_eq!(
            peer.attribute(node, AttributeId::Width),
            Some(&[PeerValue::Number(4.0)][..])
        );

        peer.reset(node, AttributeId::Width).unwrap();
        assert_eq!(peer.attribute(node, AttributeId::Width), None);
        assert_eq!(peer.take_journal().len(), 2);
        assert!(peer.journal().is_empty());
    }

    #[test]
    fn test_unknown_node_is_rejected() {
        let mut peer = HeadlessPeer::new();
        let node = peer.create_node();
        assert!(peer.remove_node(node));
        assert_eq!(
            peer.reset(node, AttributeId::Opacity),
            Err(PeerError::UnknownNode(node))
        );
        assert_eq!(peer.ui_state(node), Err(PeerError::UnknownNode(node)));
    }

    #[test]
    fn test_component_round_trip() {
        let mut peer = HeadlessPeer::new();
        let mut c = Component::new(peer.create_node());
        c.width(10.0).padding(Inset::all(2.0));
        assert!(c.apply_modifier_patch(&mut peer).is_clean());
        assert_eq!(
            peer.attributes(c.node()).collect::<Vec<_>>(),
            vec![AttributeId::Width, AttributeId::Padding]
        );

        c.unset(AttributeId::Width);
        c.apply_modifier_patch(&mut peer);
        assert_eq!(
            peer.attributes(c.node()).collect::<Vec<_>>(),
            vec![AttributeId::Padding]
        );
    }

    #[test]
    fn test_removed_node_fails_every_slot() {
        let mut peer = HeadlessPeer::new();
        let mut c = Component::new(peer.create_node());
        peer.remove_node(c.node());
        c.width(10.0).opacity(0.5);
        let report = c.apply_modifier_patch(&mut peer);
        assert_eq!(report.errors.len(), 2);
        assert!(c.slots().is_empty());
    }

    #[test]
    fn test_state_styles_follow_ui_state() {
        let mut peer = HeadlessPeer::new();
        let mut c = Component::new(peer.create_node());
        peer.set_ui_state(c.node(), UiState::SELECTED).unwrap();
        let styles = StateStyles::new()
            .normal(|c| {
                c.opacity(1.0);
            })
            .selected(|c| {
                c.opacity(0.4);
            });

        styles.apply(&mut peer, &mut c).unwrap();
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.supported_ui_state(c.node()), Some(UiState::SELECTED));
        assert_eq!(
            peer.attribute(c.node(), AttributeId::Opacity),
            Some(&[PeerValue::Number(0.4)][..])
        );
    }
}
