//! A component's attribute surface.

use std::rc::Rc;

use waterui_modifier_core::{AttributeId, CommitReport, NodeHandle, PeerBinding, SlotTable};

use crate::{
    attributes::{
        BackgroundColorModifier, BorderColorModifier, BorderRadiusModifier, BorderWidthModifier,
        FocusableModifier, FontModifier, HeightModifier, HoverEffectModifier,
        LayoutWeightModifier, LinearGradientModifier, MarginModifier, OpacityModifier,
        PaddingModifier, PositionModifier, ResponseRegionModifier, SharedTransitionModifier,
        TouchableModifier, TransformModifier, VisibilityModifier, WidthModifier, ZIndexModifier,
    },
    values::{
        BorderRadiuses, EdgeColors, EdgeWidths, Font, HoverEffect, Inset, Length, LinearGradient,
        Matrix, NumberInput, Position, Rect, ResourceColor, ResourceNumber, SharedTransition,
        Visibility,
    },
};

/// A native node together with its attribute slots.
///
/// Setters only stage values and can be chained freely during a re-render:
///
/// ```
/// use waterui_modifier_common::{Component, Inset};
/// use waterui_modifier_core::NodeHandle;
///
/// let mut button = Component::new(NodeHandle::new(1));
/// button.width(120.0).padding(Inset::all(8.0)).opacity(0.5);
/// assert_eq!(button.slots().len(), 3);
/// ```
///
/// Nothing reaches the native side until [`Component::apply_modifier_patch`].
#[derive(Debug)]
pub struct Component {
    node: NodeHandle,
    slots: SlotTable,
}

impl Component {
    /// Creates a component bound to `node` with no attributes.
    #[must_use]
    pub fn new(node: NodeHandle) -> Self {
        Self {
            node,
            slots: SlotTable::new(),
        }
    }

    /// The native node this component renders into.
    #[must_use]
    pub const fn node(&self) -> NodeHandle {
        self.node
    }

    /// The live attribute slots.
    #[must_use]
    pub const fn slots(&self) -> &SlotTable {
        &self.slots
    }

    /// Reconciles every staged attribute with `peer`.
    pub fn apply_modifier_patch(&mut self, peer: &mut dyn PeerBinding) -> CommitReport {
        self.slots.commit_all(peer, self.node)
    }

    /// Stages an unset: the attribute returns to its native default on the
    /// next commit and its slot is dropped.
    pub fn unset(&mut self, id: AttributeId) -> &mut Self {
        let slots = &mut self.slots;
        match id {
            AttributeId::Width => slots.stage_keyed::<WidthModifier>(None),
            AttributeId::Height => slots.stage_keyed::<HeightModifier>(None),
            AttributeId::LayoutWeight => slots.stage_keyed::<LayoutWeightModifier>(None),
            AttributeId::Padding => slots.stage_keyed::<PaddingModifier>(None),
            AttributeId::Margin => slots.stage_keyed::<MarginModifier>(None),
            AttributeId::BackgroundColor => slots.stage_keyed::<BackgroundColorModifier>(None),
            AttributeId::Opacity => slots.stage_keyed::<OpacityModifier>(None),
            AttributeId::BorderWidth => slots.stage_keyed::<BorderWidthModifier>(None),
            AttributeId::BorderColor => slots.stage_keyed::<BorderColorModifier>(None),
            AttributeId::BorderRadius => slots.stage_keyed::<BorderRadiusModifier>(None),
            AttributeId::Position => slots.stage_keyed::<PositionModifier>(None),
            AttributeId::ZIndex => slots.stage_keyed::<ZIndexModifier>(None),
            AttributeId::Visibility => slots.stage_keyed::<VisibilityModifier>(None),
            AttributeId::Transform => slots.stage_keyed::<TransformModifier>(None),
            AttributeId::LinearGradient => slots.stage_keyed::<LinearGradientModifier>(None),
            AttributeId::Font => slots.stage_keyed::<FontModifier>(None),
            AttributeId::ResponseRegion => slots.stage_keyed::<ResponseRegionModifier>(None),
            AttributeId::Touchable => slots.stage_keyed::<TouchableModifier>(None),
            AttributeId::Focusable => slots.stage_keyed::<FocusableModifier>(None),
            AttributeId::HoverEffect => slots.stage_reference::<HoverEffectModifier>(None),
            AttributeId::SharedTransition => {
                slots.stage_reference::<SharedTransitionModifier>(None);
            }
        }
        self
    }

    /// Sets the preferred width.
    pub fn width(&mut self, value: impl Into<Length>) -> &mut Self {
        self.slots.stage_keyed::<WidthModifier>(Some(value.into()));
        self
    }

    /// Sets the preferred height.
    pub fn height(&mut self, value: impl Into<Length>) -> &mut Self {
        self.slots.stage_keyed::<HeightModifier>(Some(value.into()));
        self
    }

    /// Sets the layout weight. Text that does not hold a number unsets it.
    pub fn layout_weight(&mut self, value: impl Into<NumberInput>) -> &mut Self {
        let weight = value.into().layout_weight();
        self.slots.stage_keyed::<LayoutWeightModifier>(weight);
        self
    }

    /// Sets the inner spacing, either uniform or per side.
    pub fn padding(&mut self, value: impl Into<Inset>) -> &mut Self {
        self.slots.stage_keyed::<PaddingModifier>(Some(value.into()));
        self
    }

    /// Sets the outer spacing, either uniform or per side.
    pub fn margin(&mut self, value: impl Into<Inset>) -> &mut Self {
        self.slots.stage_keyed::<MarginModifier>(Some(value.into()));
        self
    }

    /// Sets the background color.
    pub fn background_color(&mut self, value: impl Into<ResourceColor>) -> &mut Self {
        self.slots
            .stage_keyed::<BackgroundColorModifier>(Some(value.into()));
        self
    }

    /// Sets the opacity.
    pub fn opacity(&mut self, value: impl Into<ResourceNumber>) -> &mut Self {
        self.slots.stage_keyed::<OpacityModifier>(Some(value.into()));
        self
    }

    /// Sets the border width, either uniform or per edge.
    pub fn border_width(&mut self, value: impl Into<EdgeWidths>) -> &mut Self {
        self.slots.stage_keyed::<BorderWidthModifier>(Some(value.into()));
        self
    }

    /// Sets the border color, either uniform or per edge.
    pub fn border_color(&mut self, value: impl Into<EdgeColors>) -> &mut Self {
        self.slots.stage_keyed::<BorderColorModifier>(Some(value.into()));
        self
    }

    /// Sets the corner radius, either uniform or per corner.
    pub fn border_radius(&mut self, value: impl Into<BorderRadiuses>) -> &mut Self {
        self.slots
            .stage_keyed::<BorderRadiusModifier>(Some(value.into()));
        self
    }

    /// Sets the offset from the parent's origin.
    pub fn position(&mut self, value: Position) -> &mut Self {
        self.slots.stage_keyed::<PositionModifier>(Some(value));
        self
    }

    /// Sets the stacking order. Text stacks at 0.
    pub fn z_index(&mut self, value: impl Into<NumberInput>) -> &mut Self {
        let z = value.into().z_index();
        self.slots.stage_keyed::<ZIndexModifier>(Some(z));
        self
    }

    /// Sets the visibility.
    pub fn visibility(&mut self, value: Visibility) -> &mut Self {
        self.slots.stage_keyed::<VisibilityModifier>(Some(value));
        self
    }

    /// Sets the transform matrix.
    pub fn transform(&mut self, value: Matrix) -> &mut Self {
        self.slots.stage_keyed::<TransformModifier>(Some(value));
        self
    }

    /// Sets a linear gradient fill.
    pub fn linear_gradient(&mut self, value: LinearGradient) -> &mut Self {
        self.slots.stage_keyed::<LinearGradientModifier>(Some(value));
        self
    }

    /// Sets the font.
    pub fn font(&mut self, value: Font) -> &mut Self {
        self.slots.stage_keyed::<FontModifier>(Some(value));
        self
    }

    /// Sets the hit-test rectangles.
    pub fn response_region(&mut self, value: impl IntoIterator<Item = Rect>) -> &mut Self {
        self.slots
            .stage_keyed::<ResponseRegionModifier>(Some(value.into_iter().collect()));
        self
    }

    /// Sets whether the node receives touch events. `None` unsets it.
    pub fn touchable(&mut self, value: impl Into<Option<bool>>) -> &mut Self {
        self.slots.stage_keyed::<TouchableModifier>(value.into());
        self
    }

    /// Sets whether the node can take focus. `None` unsets it.
    pub fn focusable(&mut self, value: impl Into<Option<bool>>) -> &mut Self {
        self.slots.stage_keyed::<FocusableModifier>(value.into());
        self
    }

    /// Sets the hover feedback.
    pub fn hover_effect(&mut self, value: HoverEffect) -> &mut Self {
        self.slots.stage_reference::<HoverEffectModifier>(Some(value));
        self
    }

    /// Sets the shared element transition.
    pub fn shared_transition(&mut self, value: Rc<SharedTransition>) -> &mut Self {
        self.slots
            .stage_reference::<SharedTransitionModifier>(Some(value));
        self
    }
}

#[cfg(test)]
mod tests {
    use waterui_modifier_core::{PeerValue, testing::RecordingPeer};
    use waterui_resource::Resource;

    use super::*;
    use crate::values::{FontWeight, TransitionOptions};

    fn component() -> Component {
        Component::new(NodeHandle::new(3))
    }

    #[test]
    fn test_padding_marshals_top_right_bottom_left() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.padding(Inset {
            top: Some(1.0.into()),
            right: Some(Length::Px(2.0)),
            bottom: None,
            left: Some(Length::Percent(4.0)),
        });
        c.apply_modifier_patch(&mut peer);
        assert_eq!(
            peer.last_args(AttributeId::Padding),
            Some(
                &[
                    PeerValue::Number(1.0),
                    PeerValue::Str("2px".into()),
                    PeerValue::Undefined,
                    PeerValue::Str("4%".into()),
                ][..]
            )
        );
    }

    #[test]
    fn test_border_width_marshals_left_right_top_bottom() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.border_width(EdgeWidths {
            left: Some(1.0.into()),
            right: Some(2.0.into()),
            top: Some(3.0.into()),
            bottom: Some(4.0.into()),
        });
        c.apply_modifier_patch(&mut peer);
        let expected: Vec<PeerValue> = [1.0, 2.0, 3.0, 4.0].map(PeerValue::Number).into();
        assert_eq!(peer.last_args(AttributeId::BorderWidth), Some(&expected[..]));
    }

    #[test]
    fn test_border_radius_corner_order() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.border_radius(BorderRadiuses {
            top_left: Some(1.0.into()),
            top_right: Some(2.0.into()),
            bottom_left: Some(3.0.into()),
            bottom_right: Some(4.0.into()),
        });
        c.apply_modifier_patch(&mut peer);
        let expected: Vec<PeerValue> = [1.0, 2.0, 3.0, 4.0].map(PeerValue::Number).into();
        assert_eq!(peer.last_args(AttributeId::BorderRadius), Some(&expected[..]));
    }

    #[test]
    fn test_uniform_border_color_expands() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.border_color(0xFF11_2233_u32);
        c.apply_modifier_patch(&mut peer);
        let args = peer.last_args(AttributeId::BorderColor).unwrap();
        assert_eq!(args.len(), 4);
        assert!(args.iter().all(|arg| *arg == PeerValue::Int(0xFF11_2233)));
    }

    #[test]
    fn test_restaging_same_values_makes_no_calls() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        let stage = |c: &mut Component| {
            c.width(100.0)
                .padding(8.0)
                .background_color(Resource::new("app", "entry", 7))
                .font(Font::size(14.0).weight(FontWeight::Bold))
                .visibility(Visibility::Hidden)
                .touchable(true)
                .hover_effect(HoverEffect::Scale);
        };
        stage(&mut c);
        let first = c.apply_modifier_patch(&mut peer);
        assert_eq!(first.applied, 7);

        peer.take_calls();
        stage(&mut c);
        let second = c.apply_modifier_patch(&mut peer);
        assert_eq!(second.unchanged, 7);
        assert!(peer.calls().is_empty());
    }

    #[test]
    fn test_layout_weight_bad_text_unsets() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.layout_weight("2");
        c.apply_modifier_patch(&mut peer);
        assert_eq!(
            peer.last_args(AttributeId::LayoutWeight),
            Some(&[PeerValue::Number(2.0)][..])
        );

        c.layout_weight("heavy");
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.resets(AttributeId::LayoutWeight), 1);
        assert!(!c.slots().contains(AttributeId::LayoutWeight));
    }

    #[test]
    fn test_z_index_defaults_text_to_zero() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.z_index("front");
        c.apply_modifier_patch(&mut peer);
        assert_eq!(
            peer.last_args(AttributeId::ZIndex),
            Some(&[PeerValue::Number(0.0)][..])
        );
    }

    #[test]
    fn test_unset_every_attribute() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        for id in AttributeId::ALL {
            c.unset(id);
        }
        let report = c.apply_modifier_patch(&mut peer);
        assert_eq!(report.expired.len(), AttributeId::ALL.len());
        assert!(c.slots().is_empty());
        for id in AttributeId::ALL {
            assert_eq!(peer.resets(id), 1, "{id}");
        }
    }

    #[test]
    fn test_shared_transition_equal_by_id_and_options() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.shared_transition(SharedTransition::new("hero"));
        c.apply_modifier_patch(&mut peer);
        c.shared_transition(SharedTransition::new("hero"));
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::SharedTransition), 1);

        c.shared_transition(SharedTransition::with_options(
            "hero",
            TransitionOptions {
                duration_ms: 300,
                ..TransitionOptions::default()
            },
        ));
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::SharedTransition), 2);
    }

    #[test]
    fn test_response_region_compares_rectangles() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.response_region([Rect::new(0.0, 0.0, 10.0, 10.0)]);
        c.apply_modifier_patch(&mut peer);
        c.response_region([Rect::new(0.0, 0.0, 10.0, 10.0)]);
        let report = c.apply_modifier_patch(&mut peer);
        assert_eq!(report.unchanged, 1);
        assert_eq!(peer.applies(AttributeId::ResponseRegion), 1);

        c.response_region([
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 0.0, 10.0, 10.0),
        ]);
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::ResponseRegion), 2);
        assert_eq!(
            peer.last_args(AttributeId::ResponseRegion).map(|args| args[1].clone()),
            Some(PeerValue::Int(8))
        );

        c.response_region([
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 0.0, 12.0, 10.0),
        ]);
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::ResponseRegion), 3);
    }

    #[test]
    fn test_restaging_equal_scalars_makes_no_calls() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.layout_weight(2).z_index(5);
        assert_eq!(c.apply_modifier_patch(&mut peer).applied, 2);
        peer.take_calls();

        c.layout_weight(2).z_index(5);
        let report = c.apply_modifier_patch(&mut peer);
        assert_eq!(report.unchanged, 2);
        assert!(peer.calls().is_empty());

        c.layout_weight("3").z_index(5);
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::LayoutWeight), 1);
        assert_eq!(peer.applies(AttributeId::ZIndex), 0);
    }

    #[test]
    fn test_resource_width_vs_literal_is_changed() {
        let mut peer = RecordingPeer::new();
        let mut c = component();
        c.width(Resource::new("app", "entry", 12));
        c.apply_modifier_patch(&mut peer);
        c.width(Resource::new("app", "entry", 12));
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::Width), 1);

        c.width(12.0);
        c.apply_modifier_patch(&mut peer);
        assert_eq!(peer.applies(AttributeId::Width), 2);
    }
}
