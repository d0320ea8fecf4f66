//! Stable identities for every attribute kind.

use core::fmt;

/// Identifies one attribute kind within a component.
///
/// Slot tables are keyed by this value, so every attribute in the catalog
/// owns exactly one variant and variants are never shared between unrelated
/// attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AttributeId {
    /// Layout width.
    Width,
    /// Layout height.
    Height,
    /// Share of the remaining main-axis space.
    LayoutWeight,
    /// Inner spacing on the four sides.
    Padding,
    /// Outer spacing on the four sides.
    Margin,
    /// Fill color behind the content.
    BackgroundColor,
    /// Node opacity.
    Opacity,
    /// Border stroke width.
    BorderWidth,
    /// Border stroke color.
    BorderColor,
    /// Corner radii.
    BorderRadius,
    /// Absolute position offset.
    Position,
    /// Stacking order among siblings.
    ZIndex,
    /// Visibility mode.
    Visibility,
    /// 4x4 transform matrix.
    Transform,
    /// Linear gradient fill.
    LinearGradient,
    /// Label font.
    Font,
    /// Regions that accept touch input.
    ResponseRegion,
    /// Whether the node receives touch input.
    Touchable,
    /// Whether the node can take focus.
    Focusable,
    /// Hover feedback effect.
    HoverEffect,
    /// Shared element transition.
    SharedTransition,
}

impl AttributeId {
    /// Every identity, in table order.
    pub const ALL: [Self; 21] = [
        Self::Width,
        Self::Height,
        Self::LayoutWeight,
        Self::Padding,
        Self::Margin,
        Self::BackgroundColor,
        Self::Opacity,
        Self::BorderWidth,
        Self::BorderColor,
        Self::BorderRadius,
        Self::Position,
        Self::ZIndex,
        Self::Visibility,
        Self::Transform,
        Self::LinearGradient,
        Self::Font,
        Self::ResponseRegion,
        Self::Touchable,
        Self::Focusable,
        Self::HoverEffect,
        Self::SharedTransition,
    ];

    /// The stable attribute name used in logs and by peers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::LayoutWeight => "layoutWeight",
            Self::Padding => "padding",
            Self::Margin => "margin",
            Self::BackgroundColor => "backgroundColor",
            Self::Opacity => "opacity",
            Self::BorderWidth => "borderWidth",
            Self::BorderColor => "borderColor",
            Self::BorderRadius => "borderRadius",
            Self::Position => "position",
            Self::ZIndex => "zIndex",
            Self::Visibility => "visibility",
            Self::Transform => "transform",
            Self::LinearGradient => "linearGradient",
            Self::Font => "font",
            Self::ResponseRegion => "responseRegion",
            Self::Touchable => "touchable",
            Self::Focusable => "focusable",
            Self::HoverEffect => "hoverEffect",
            Self::SharedTransition => "sharedTransition",
        }
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
