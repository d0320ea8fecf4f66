//! Interaction-state styles.
//!
//! A [`StateStyles`] carries one optional style closure per interaction
//! state. Applying it declares to the peer which states the component styles,
//! asks for the node's current state, and stages the matching styles on top of
//! the normal one. Closures only stage; the caller decides when to commit.

use core::fmt;

use bitflags::bitflags;
use tracing::debug;
use waterui_modifier_core::{NodeHandle, PeerBinding, PeerError};

use crate::Component;

bitflags! {
    /// Interaction states a native node can be in. The empty set is normal.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UiState: u32 {
        /// Being pressed.
        const PRESSED = 1;
        /// Holding focus.
        const FOCUSED = 1 << 1;
        /// Disabled.
        const DISABLED = 1 << 2;
        /// Selected.
        const SELECTED = 1 << 3;
    }
}

/// A peer that tracks interaction state for its nodes.
pub trait UiStatePeer: PeerBinding {
    /// Declares the states `node` has styles for.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is unknown to the peer.
    fn set_supported_ui_state(&mut self, node: NodeHandle, states: UiState)
    -> Result<(), PeerError>;

    /// Reads the current state of `node`.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is unknown to the peer.
    fn ui_state(&self, node: NodeHandle) -> Result<UiState, PeerError>;
}

type StyleFn = Box<dyn Fn(&mut Component)>;

/// Per-state style closures.
#[derive(Default)]
pub struct StateStyles {
    normal: Option<StyleFn>,
    pressed: Option<StyleFn>,
    focused: Option<StyleFn>,
    disabled: Option<StyleFn>,
    selected: Option<StyleFn>,
}

impl fmt::Debug for StateStyles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStyles")
            .field("normal", &self.normal.is_some())
            .field("supported", &self.supported())
            .finish()
    }
}

impl StateStyles {
    /// Creates an empty set of styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style applied in every state.
    #[must_use]
    pub fn normal(mut self, style: impl Fn(&mut Component) + 'static) -> Self {
        self.normal = Some(Box::new(style));
        self
    }

    /// Style applied while pressed.
    #[must_use]
    pub fn pressed(mut self, style: impl Fn(&mut Component) + 'static) -> Self {
        self.pressed = Some(Box::new(style));
        self
    }

    /// Style applied while focused.
    #[must_use]
    pub fn focused(mut self, style: impl Fn(&mut Component) + 'static) -> Self {
        self.focused = Some(Box::new(style));
        self
    }

    /// Style applied while disabled.
    #[must_use]
    pub fn disabled(mut self, style: impl Fn(&mut Component) + 'static) -> Self {
        self.disabled = Some(Box::new(style));
        self
    }

    /// Style applied while selected.
    #[must_use]
    pub fn selected(mut self, style: impl Fn(&mut Component) + 'static) -> Self {
        self.selected = Some(Box::new(style));
        self
    }

    /// The states this set has a style for.
    #[must_use]
    pub fn supported(&self) -> UiState {
        self.by_state()
            .into_iter()
            .filter(|(_, style)| style.is_some())
            .fold(UiState::empty(), |acc, (state, _)| acc | state)
    }

    /// Stages the styles matching the node's current state onto `component`.
    ///
    /// Returns the state the styles were resolved against.
    ///
    /// # Errors
    ///
    /// Returns an error if the peer does not know the component's node.
    pub fn apply<P>(&self, peer: &mut P, component: &mut Component) -> Result<UiState, PeerError>
    where
        P: UiStatePeer + ?Sized,
    {
        let node = component.node();
        peer.set_supported_ui_state(node, self.supported())?;
        let current = peer.ui_state(node)?;
        debug!(%node, ?current, "applying state styles");

        if let Some(normal) = &self.normal {
            normal(component);
        }
        for (state, style) in self.by_state() {
            if let Some(style) = style.as_ref().filter(|_| current.contains(state)) {
                style(component);
            }
        }
        Ok(current)
    }

    const fn by_state(&self) -> [(UiState, &Option<StyleFn>); 4] {
        [
            (UiState::PRESSED, &self.pressed),
            (UiState::FOCUSED, &self.focused),
            (UiState::DISABLED, &self.disabled),
            (UiState::SELECTED, &self.selected),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use waterui_modifier_core::{AttributeId, PeerValue, testing::RecordingPeer};

    use super::*;
    use crate::{Inset, ResourceColor};

    #[derive(Debug, Default)]
    struct StatePeer {
        inner: RecordingPeer,
        supported: BTreeMap<NodeHandle, UiState>,
        current: UiState,
    }

    impl PeerBinding for StatePeer {
        fn apply(
            &mut self,
            node: NodeHandle,
            id: AttributeId,
            args: &[PeerValue],
        ) -> Result<(), PeerError> {
            self.inner.apply(node, id, args)
        }

        fn reset(&mut self, node: NodeHandle, id: AttributeId) -> Result<(), PeerError> {
            self.inner.reset(node, id)
        }
    }

    impl UiStatePeer for StatePeer {
        fn set_supported_ui_state(
            &mut self,
            node: NodeHandle,
            states: UiState,
        ) -> Result<(), PeerError> {
            self.supported.insert(node, states);
            Ok(())
        }

        fn ui_state(&self, _node: NodeHandle) -> Result<UiState, PeerError> {
            Ok(self.current)
        }
    }

    fn styles() -> StateStyles {
        StateStyles::new()
            .normal(|c| {
                c.background_color(ResourceColor::Argb(1));
            })
            .pressed(|c| {
                c.background_color(ResourceColor::Argb(2));
            })
            .disabled(|c| {
                c.padding(Inset::all(4.0));
            })
    }

    #[test]
    fn test_supported_states_are_declared() {
        let mut peer = StatePeer::default();
        let mut c = Component::new(NodeHandle::new(1));
        styles().apply(&mut peer, &mut c).unwrap();
        assert_eq!(
            peer.supported[&NodeHandle::new(1)],
            UiState::PRESSED | UiState::DISABLED
        );
    }

    #[test]
    fn test_normal_state_only_runs_normal() {
        let mut peer = StatePeer::default();
        let mut c = Component::new(NodeHandle::new(1));
        assert_eq!(styles().apply(&mut peer, &mut c), Ok(UiState::empty()));
        c.apply_modifier_patch(&mut peer);
        assert_eq!(
            peer.inner.last_args(AttributeId::BackgroundColor),
            Some(&[PeerValue::Int(1)][..])
        );
        assert_eq!(peer.inner.applies(AttributeId::Padding), 0);
    }

    #[test]
    fn test_pressed_overrides_normal_within_one_pass() {
        let mut peer = StatePeer {
            current: UiState::PRESSED | UiState::DISABLED,
            ..StatePeer::default()
        };
        let mut c = Component::new(NodeHandle::new(1));
        styles().apply(&mut peer, &mut c).unwrap();
        c.apply_modifier_patch(&mut peer);

        // Normal and pressed both staged a color; only the last one is sent.
        assert_eq!(peer.inner.applies(AttributeId::BackgroundColor), 1);
        assert_eq!(
            peer.inner.last_args(AttributeId::BackgroundColor),
            Some(&[PeerValue::Int(2)][..])
        );
        assert_eq!(peer.inner.applies(AttributeId::Padding), 1);
    }

    #[test]
    fn test_focused_without_style_is_ignored() {
        let mut peer = StatePeer {
            current: UiState::FOCUSED,
            ..StatePeer::default()
        };
        let mut c = Component::new(NodeHandle::new(1));
        styles().apply(&mut peer, &mut c).unwrap();
        assert_eq!(c.slots().len(), 1);
    }
}
