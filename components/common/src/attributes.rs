//! The common attribute catalog.
//!
//! Each marker type binds an [`AttributeId`] to a value shape, its native
//! marshalling and its diff predicate. Components stage into them through
//! [`Component`](crate::Component) setters.

use std::rc::Rc;

use waterui_modifier_core::{
    Attribute, AttributeId, KeyedCompare, NodeHandle, PeerBinding, PeerError, PeerValue,
    ReferenceCompare,
    equality::{DeepEq, PrimitiveEq, base_or_resource_eq},
};

use crate::values::{
    BorderRadiuses, EdgeColors, EdgeWidths, Font, HoverEffect, Inset, Length, LinearGradient,
    Marshal, Matrix, Position, Rect, ResourceColor, ResourceNumber, SharedTransition, Visibility,
    fields_changed,
};

macro_rules! modifier {
    (
        $(#[$meta:meta])*
        $name:ident($value:ty) => $id:ident,
        |$peer:ident, $node:ident, $v:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl Attribute for $name {
            type Value = $value;
            const ID: AttributeId = AttributeId::$id;

            fn apply(
                $peer: &mut dyn PeerBinding,
                $node: NodeHandle,
                $v: &$value,
            ) -> Result<(), PeerError> {
                $body
            }
        }
    };
}

modifier!(
    /// Preferred width.
    WidthModifier(Length) => Width,
    |peer, node, v| peer.apply(node, Self::ID, &[v.marshal()])
);

impl KeyedCompare for WidthModifier {
    fn check_diff(staged: &Length, committed: &Length) -> bool {
        !base_or_resource_eq(staged, committed)
    }
}

modifier!(
    /// Preferred height.
    HeightModifier(Length) => Height,
    |peer, node, v| peer.apply(node, Self::ID, &[v.marshal()])
);

impl KeyedCompare for HeightModifier {
    fn check_diff(staged: &Length, committed: &Length) -> bool {
        !base_or_resource_eq(staged, committed)
    }
}

modifier!(
    /// Share of the remaining space along the parent's main axis.
    LayoutWeightModifier(f64) => LayoutWeight,
    |peer, node, v| peer.apply(node, Self::ID, &[PeerValue::Number(*v)])
);

impl KeyedCompare for LayoutWeightModifier {
    fn check_diff(staged: &f64, committed: &f64) -> bool {
        !staged.primitive_eq(committed)
    }
}

fn apply_sides(
    peer: &mut dyn PeerBinding,
    node: NodeHandle,
    id: AttributeId,
    sides: [&Option<impl Marshal>; 4],
) -> Result<(), PeerError> {
    peer.apply(node, id, &sides.map(|side| side.marshal()))
}

modifier!(
    /// Inner spacing, applied top, right, bottom, left.
    PaddingModifier(Inset) => Padding,
    |peer, node, v| apply_sides(peer, node, Self::ID, v.in_apply_order())
);

impl KeyedCompare for PaddingModifier {
    fn check_diff(staged: &Inset, committed: &Inset) -> bool {
        fields_changed(&staged.in_apply_order(), &committed.in_apply_order())
    }
}

modifier!(
    /// Outer spacing, applied top, right, bottom, left.
    MarginModifier(Inset) => Margin,
    |peer, node, v| apply_sides(peer, node, Self::ID, v.in_apply_order())
);

impl KeyedCompare for MarginModifier {
    fn check_diff(staged: &Inset, committed: &Inset) -> bool {
        fields_changed(&staged.in_apply_order(), &committed.in_apply_order())
    }
}

modifier!(
    /// Background fill color.
    BackgroundColorModifier(ResourceColor) => BackgroundColor,
    |peer, node, v| peer.apply(node, Self::ID, &[v.marshal()])
);

impl KeyedCompare for BackgroundColorModifier {
    fn check_diff(staged: &ResourceColor, committed: &ResourceColor) -> bool {
        !base_or_resource_eq(staged, committed)
    }
}

modifier!(
    /// Opacity in `0.0..=1.0`.
    OpacityModifier(ResourceNumber) => Opacity,
    |peer, node, v| peer.apply(node, Self::ID, &[v.marshal()])
);

impl KeyedCompare for OpacityModifier {
    fn check_diff(staged: &ResourceNumber, committed: &ResourceNumber) -> bool {
        !base_or_resource_eq(staged, committed)
    }
}

modifier!(
    /// Border widths, applied left, right, top, bottom.
    BorderWidthModifier(EdgeWidths) => BorderWidth,
    |peer, node, v| apply_sides(peer, node, Self::ID, v.in_apply_order())
);

impl KeyedCompare for BorderWidthModifier {
    fn check_diff(staged: &EdgeWidths, committed: &EdgeWidths) -> bool {
        fields_changed(&staged.in_apply_order(), &committed.in_apply_order())
    }
}

modifier!(
    /// Border colors, applied left, right, top, bottom.
    BorderColorModifier(EdgeColors) => BorderColor,
    |peer, node, v| apply_sides(peer, node, Self::ID, v.in_apply_order())
);

impl KeyedCompare for BorderColorModifier {
    fn check_diff(staged: &EdgeColors, committed: &EdgeColors) -> bool {
        fields_changed(&staged.in_apply_order(), &committed.in_apply_order())
    }
}

modifier!(
    /// Corner radii, applied top-left, top-right, bottom-left, bottom-right.
    BorderRadiusModifier(BorderRadiuses) => BorderRadius,
    |peer, node, v| apply_sides(peer, node, Self::ID, v.in_apply_order())
);

impl KeyedCompare for BorderRadiusModifier {
    fn check_diff(staged: &BorderRadiuses, committed: &BorderRadiuses) -> bool {
        fields_changed(&staged.in_apply_order(), &committed.in_apply_order())
    }
}

modifier!(
    /// Offset from the parent's origin.
    PositionModifier(Position) => Position,
    |peer, node, v| peer.apply(node, Self::ID, &[v.x.marshal(), v.y.marshal()])
);

impl KeyedCompare for PositionModifier {
    fn check_diff(staged: &Position, committed: &Position) -> bool {
        fields_changed(&[&staged.x, &staged.y], &[&committed.x, &committed.y])
    }
}

modifier!(
    /// Stacking order among siblings.
    ZIndexModifier(f64) => ZIndex,
    |peer, node, v| peer.apply(node, Self::ID, &[PeerValue::Number(*v)])
);

impl KeyedCompare for ZIndexModifier {
    fn check_diff(staged: &f64, committed: &f64) -> bool {
        !staged.primitive_eq(committed)
    }
}

modifier!(
    /// Layout and drawing participation.
    VisibilityModifier(Visibility) => Visibility,
    |peer, node, v| peer.apply(node, Self::ID, &[PeerValue::Int(*v as i64)])
);

impl KeyedCompare for VisibilityModifier {
    fn check_diff(staged: &Visibility, committed: &Visibility) -> bool {
        !staged.primitive_eq(committed)
    }
}

modifier!(
    /// Full 4x4 transform.
    TransformModifier(Matrix) => Transform,
    |peer, node, v| peer.apply(node, Self::ID, &[v.marshal()])
);

impl KeyedCompare for TransformModifier {
    fn check_diff(staged: &Matrix, committed: &Matrix) -> bool {
        !staged.deep_eq(committed)
    }
}

modifier!(
    /// Linear gradient fill, applied angle, direction, stops, repeating.
    LinearGradientModifier(LinearGradient) => LinearGradient,
    |peer, node, v| {
        let stops = v
            .colors
            .iter()
            .map(|(color, offset)| PeerValue::List(vec![color.marshal(), PeerValue::Number(*offset)]))
            .collect();
        peer.apply(
            node,
            Self::ID,
            &[
                v.angle.into(),
                v.direction.map_or(PeerValue::Undefined, |d| PeerValue::Int(d as i64)),
                PeerValue::List(stops),
                PeerValue::Bool(v.repeating),
            ],
        )
    }
);

impl KeyedCompare for LinearGradientModifier {
    fn check_diff(staged: &LinearGradient, committed: &LinearGradient) -> bool {
        staged.differs_from(committed)
    }
}

modifier!(
    /// Font of the component's own text, applied size, weight, family, style.
    FontModifier(Font) => Font,
    |peer, node, v| {
        peer.apply(
            node,
            Self::ID,
            &[
                v.size.marshal(),
                v.weight.map(|w| i64::from(w.value())).into(),
                v.family.clone().into(),
                v.style.map_or(PeerValue::Undefined, |s| PeerValue::Int(s as i64)),
            ],
        )
    }
);

impl KeyedCompare for FontModifier {
    fn check_diff(staged: &Font, committed: &Font) -> bool {
        staged.differs_from(committed)
    }
}

modifier!(
    /// Hit-test rectangles, flattened as x, y, width, height per rectangle
    /// and followed by the flattened length.
    ResponseRegionModifier(Vec<Rect>) => ResponseRegion,
    |peer, node, v| {
        let mut flat = Vec::with_capacity(v.len() * 4);
        for rect in v {
            rect.marshal_into(&mut flat);
        }
        let len = i64::try_from(flat.len()).unwrap_or(i64::MAX);
        peer.apply(node, Self::ID, &[PeerValue::List(flat), PeerValue::Int(len)])
    }
);

impl KeyedCompare for ResponseRegionModifier {
    fn check_diff(staged: &Vec<Rect>, committed: &Vec<Rect>) -> bool {
        staged.len() != committed.len()
            || staged
                .iter()
                .zip(committed)
                .any(|(staged, committed)| staged.differs_from(committed))
    }
}

modifier!(
    /// Whether the node receives touch events.
    TouchableModifier(bool) => Touchable,
    |peer, node, v| peer.apply(node, Self::ID, &[PeerValue::Bool(*v)])
);

impl KeyedCompare for TouchableModifier {
    fn check_diff(staged: &bool, committed: &bool) -> bool {
        !staged.primitive_eq(committed)
    }
}

modifier!(
    /// Whether the node can take focus.
    FocusableModifier(bool) => Focusable,
    |peer, node, v| peer.apply(node, Self::ID, &[PeerValue::Bool(*v)])
);

impl KeyedCompare for FocusableModifier {
    fn check_diff(staged: &bool, committed: &bool) -> bool {
        !staged.primitive_eq(committed)
    }
}

modifier!(
    /// Hover feedback.
    HoverEffectModifier(HoverEffect) => HoverEffect,
    |peer, node, v| peer.apply(node, Self::ID, &[PeerValue::Int(*v as i64)])
);

impl ReferenceCompare for HoverEffectModifier {}

modifier!(
    /// Shared element transition, applied id, duration, delay, z-index.
    SharedTransitionModifier(Rc<SharedTransition>) => SharedTransition,
    |peer, node, v| {
        peer.apply(
            node,
            Self::ID,
            &[
                PeerValue::Str(v.id.clone()),
                v.options.duration_ms.into(),
                v.options.delay_ms.into(),
                v.options.z_index.into(),
            ],
        )
    }
);

impl ReferenceCompare for SharedTransitionModifier {
    fn is_equal(staged: &Rc<SharedTransition>, committed: &Rc<SharedTransition>) -> bool {
        staged.id == committed.id && staged.options == committed.options
    }
}
