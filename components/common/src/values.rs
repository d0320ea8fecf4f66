//! Value shapes accepted by the common modifiers.
//!
//! Setters normalize loose input into these shapes before staging, so every
//! diff predicate compares like with like. Each shape also knows how to
//! marshal itself into the flat argument list the native setter expects.

use std::rc::Rc;

use waterui_modifier_core::{
    PeerValue,
    equality::{DeepEq, PrimitiveEq, base_or_resource_eq},
};
use waterui_resource::{AsResource, Resource};

/// Conversion into a single peer argument.
pub(crate) trait Marshal {
    fn marshal(&self) -> PeerValue;
}

impl<T: Marshal> Marshal for Option<T> {
    fn marshal(&self) -> PeerValue {
        self.as_ref().map_or(PeerValue::Undefined, Marshal::marshal)
    }
}

/// Returns `true` if any field pair differs under base-or-resource equality.
pub(crate) fn fields_changed<T>(staged: &[&Option<T>], committed: &[&Option<T>]) -> bool
where
    T: AsResource + PrimitiveEq,
{
    staged
        .iter()
        .zip(committed)
        .any(|(staged, committed)| !base_or_resource_eq(*staged, *committed))
}

/// A length in one of the supported units, or a dimension resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    /// Virtual pixels. Plain numbers use this unit.
    Vp(f64),
    /// Physical pixels.
    Px(f64),
    /// Percentage of the parent's size.
    Percent(f64),
    /// A dimension resource resolved by the peer.
    Resource(Resource),
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Vp(value)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self::Vp(value.into())
    }
}

impl From<Resource> for Length {
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}

impl AsResource for Length {
    fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(r) => Some(r),
            _ => None,
        }
    }
}

impl PrimitiveEq for Length {
    fn primitive_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Vp(a), Self::Vp(b))
            | (Self::Px(a), Self::Px(b))
            | (Self::Percent(a), Self::Percent(b)) => a.primitive_eq(b),
            _ => false,
        }
    }
}

impl Marshal for Length {
    fn marshal(&self) -> PeerValue {
        match self {
            Self::Vp(v) => PeerValue::Number(*v),
            Self::Px(v) => PeerValue::Str(format!("{v}px")),
            Self::Percent(v) => PeerValue::Str(format!("{v}%")),
            Self::Resource(r) => PeerValue::Resource(r.clone()),
        }
    }
}

/// A color literal or a color resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceColor {
    /// Packed `0xAARRGGBB`.
    Argb(u32),
    /// A named or hex string color, such as `"#FF0000"`.
    Named(String),
    /// A color resource resolved by the peer.
    Resource(Resource),
}

impl From<u32> for ResourceColor {
    fn from(value: u32) -> Self {
        Self::Argb(value)
    }
}

impl From<&str> for ResourceColor {
    fn from(value: &str) -> Self {
        Self::Named(value.to_owned())
    }
}

impl From<Resource> for ResourceColor {
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}

impl AsResource for ResourceColor {
    fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(r) => Some(r),
            _ => None,
        }
    }
}

impl PrimitiveEq for ResourceColor {
    fn primitive_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Argb(a), Self::Argb(b)) => a == b,
            (Self::Named(a), Self::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl DeepEq for ResourceColor {
    fn deep_eq(&self, other: &Self) -> bool {
        base_or_resource_eq(self, other)
    }
}

impl Marshal for ResourceColor {
    fn marshal(&self) -> PeerValue {
        match self {
            Self::Argb(argb) => PeerValue::from(*argb),
            Self::Named(name) => PeerValue::Str(name.clone()),
            Self::Resource(r) => PeerValue::Resource(r.clone()),
        }
    }
}

/// A plain number or a numeric resource.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceNumber {
    /// A literal value.
    Value(f64),
    /// A numeric resource resolved by the peer.
    Resource(Resource),
}

impl From<f64> for ResourceNumber {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

impl From<Resource> for ResourceNumber {
    fn from(value: Resource) -> Self {
        Self::Resource(value)
    }
}

impl AsResource for ResourceNumber {
    fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(r) => Some(r),
            Self::Value(_) => None,
        }
    }
}

impl PrimitiveEq for ResourceNumber {
    fn primitive_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.primitive_eq(b),
            _ => false,
        }
    }
}

impl Marshal for ResourceNumber {
    fn marshal(&self) -> PeerValue {
        match self {
            Self::Value(v) => PeerValue::Number(*v),
            Self::Resource(r) => PeerValue::Resource(r.clone()),
        }
    }
}

/// A number that may arrive as text, as produced by loosely typed callers.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// A number.
    Number(f64),
    /// Text that may or may not hold a number.
    Text(String),
}

impl NumberInput {
    /// Layout weight: numbers pass through. Numeric text contributes its
    /// leading integer (`"3.9"` is 3, `"1e3"` is 1, `"0x10"` is 16), anything
    /// else is rejected.
    pub(crate) fn layout_weight(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) if is_numeric_text(text) => leading_integer(text),
            Self::Text(_) => None,
        }
    }

    /// Z order: anything that is not a number stacks at 0.
    pub(crate) const fn z_index(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(_) => 0.0,
        }
    }
}

/// Whether `text` reads as a single number: decimal with optional exponent,
/// `0x`/`0o`/`0b` integers, signed `Infinity`, or blank.
fn is_numeric_text(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return true;
    }
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lower = text.get(..2).map(str::to_ascii_lowercase);
        if lower.as_deref() == Some(prefix) {
            let digits = &text[2..];
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }
    // `f64::from_str` also takes "inf" and "nan", which are not numbers here.
    unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
        && text.parse::<f64>().is_ok()
}

/// The integer at the start of `text`, read in base 10 or base 16 after a
/// `0x` prefix. Trailing characters are ignored.
fn leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(radix)).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .into_iter()
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));
    Some(if negative { -magnitude } else { magnitude })
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for NumberInput {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Per-side insets used by padding and margin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inset {
    /// Top inset.
    pub top: Option<Length>,
    /// Right inset.
    pub right: Option<Length>,
    /// Bottom inset.
    pub bottom: Option<Length>,
    /// Left inset.
    pub left: Option<Length>,
}

impl Inset {
    /// The same inset on every side.
    pub fn all(length: impl Into<Length>) -> Self {
        let length = length.into();
        Self {
            top: Some(length.clone()),
            right: Some(length.clone()),
            bottom: Some(length.clone()),
            left: Some(length),
        }
    }

    /// Sides in native argument order: top, right, bottom, left.
    pub(crate) const fn in_apply_order(&self) -> [&Option<Length>; 4] {
        [&self.top, &self.right, &self.bottom, &self.left]
    }
}

impl From<Length> for Inset {
    fn from(value: Length) -> Self {
        Self::all(value)
    }
}

impl From<f64> for Inset {
    fn from(value: f64) -> Self {
        Self::all(value)
    }
}

/// Per-edge border widths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeWidths {
    /// Left edge.
    pub left: Option<Length>,
    /// Right edge.
    pub right: Option<Length>,
    /// Top edge.
    pub top: Option<Length>,
    /// Bottom edge.
    pub bottom: Option<Length>,
}

impl EdgeWidths {
    /// Edges in native argument order: left, right, top, bottom.
    pub(crate) const fn in_apply_order(&self) -> [&Option<Length>; 4] {
        [&self.left, &self.right, &self.top, &self.bottom]
    }
}

impl From<Length> for EdgeWidths {
    fn from(value: Length) -> Self {
        Self {
            left: Some(value.clone()),
            right: Some(value.clone()),
            top: Some(value.clone()),
            bottom: Some(value),
        }
    }
}

impl From<f64> for EdgeWidths {
    fn from(value: f64) -> Self {
        Length::from(value).into()
    }
}

/// Per-edge border colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeColors {
    /// Left edge.
    pub left: Option<ResourceColor>,
    /// Right edge.
    pub right: Option<ResourceColor>,
    /// Top edge.
    pub top: Option<ResourceColor>,
    /// Bottom edge.
    pub bottom: Option<ResourceColor>,
}

impl EdgeColors {
    /// Edges in native argument order: left, right, top, bottom.
    pub(crate) const fn in_apply_order(&self) -> [&Option<ResourceColor>; 4] {
        [&self.left, &self.right, &self.top, &self.bottom]
    }
}

impl From<ResourceColor> for EdgeColors {
    fn from(value: ResourceColor) -> Self {
        Self {
            left: Some(value.clone()),
            right: Some(value.clone()),
            top: Some(value.clone()),
            bottom: Some(value),
        }
    }
}

impl From<u32> for EdgeColors {
    fn from(value: u32) -> Self {
        ResourceColor::from(value).into()
    }
}

/// Per-corner border radii.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderRadiuses {
    /// Top-left corner.
    pub top_left: Option<Length>,
    /// Top-right corner.
    pub top_right: Option<Length>,
    /// Bottom-left corner.
    pub bottom_left: Option<Length>,
    /// Bottom-right corner.
    pub bottom_right: Option<Length>,
}

impl BorderRadiuses {
    /// Corners in native argument order.
    pub(crate) const fn in_apply_order(&self) -> [&Option<Length>; 4] {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_left,
            &self.bottom_right,
        ]
    }
}

impl From<Length> for BorderRadiuses {
    fn from(value: Length) -> Self {
        Self {
            top_left: Some(value.clone()),
            top_right: Some(value.clone()),
            bottom_left: Some(value.clone()),
            bottom_right: Some(value),
        }
    }
}

impl From<f64> for BorderRadiuses {
    fn from(value: f64) -> Self {
        Length::from(value).into()
    }
}

/// An offset relative to the parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Position {
    /// Horizontal offset.
    pub x: Option<Length>,
    /// Vertical offset.
    pub y: Option<Length>,
}

impl Position {
    /// Creates a position from both axes.
    pub fn new(x: impl Into<Length>, y: impl Into<Length>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
        }
    }
}

/// Whether and how a node takes part in layout and drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Drawn and laid out.
    #[default]
    Visible,
    /// Laid out but not drawn.
    Hidden,
    /// Neither laid out nor drawn.
    None,
}

impl PrimitiveEq for Visibility {
    fn primitive_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// A 4x4 transform matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(pub [[f64; 4]; 4]);

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// A translation.
    #[must_use]
    pub const fn translate(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.0[3][0] = x;
        m.0[3][1] = y;
        m.0[3][2] = z;
        m
    }

    /// A scale around the origin.
    #[must_use]
    pub const fn scale(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0][0] = x;
        m.0[1][1] = y;
        m.0[2][2] = z;
        m
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DeepEq for Matrix {
    fn deep_eq(&self, other: &Self) -> bool {
        self.0.deep_eq(&other.0)
    }
}

impl Marshal for Matrix {
    fn marshal(&self) -> PeerValue {
        PeerValue::List(
            self.0
                .iter()
                .flatten()
                .copied()
                .map(PeerValue::Number)
                .collect(),
        )
    }
}

/// Direction of a linear gradient when no angle is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// Towards the left edge.
    Left,
    /// Towards the top edge.
    Top,
    /// Towards the right edge.
    Right,
    /// Towards the bottom edge.
    Bottom,
    /// Towards the top-left corner.
    LeftTop,
    /// Towards the bottom-left corner.
    LeftBottom,
    /// Towards the top-right corner.
    RightTop,
    /// Towards the bottom-right corner.
    RightBottom,
    /// No direction.
    None,
}

/// A linear gradient fill.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Angle in degrees. Takes precedence over `direction`.
    pub angle: Option<f64>,
    /// Direction, used when no angle is given.
    pub direction: Option<GradientDirection>,
    /// Color stops as `(color, offset)` with offsets in `0.0..=1.0`.
    pub colors: Vec<(ResourceColor, f64)>,
    /// Whether the gradient repeats.
    pub repeating: bool,
}

impl LinearGradient {
    /// A gradient through `colors` with default angle and direction.
    #[must_use]
    pub const fn new(colors: Vec<(ResourceColor, f64)>) -> Self {
        Self {
            angle: None,
            direction: None,
            colors,
            repeating: false,
        }
    }

    /// Sets the angle in degrees.
    #[must_use]
    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets the direction.
    #[must_use]
    pub fn direction(mut self, direction: GradientDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Makes the gradient repeat.
    #[must_use]
    pub fn repeating(mut self, repeating: bool) -> Self {
        self.repeating = repeating;
        self
    }

    pub(crate) fn differs_from(&self, other: &Self) -> bool {
        !(self.angle.primitive_eq(&other.angle)
            && self.direction == other.direction
            && self.repeating == other.repeating
            && self.colors.deep_eq(&other.colors))
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Thin weight (100).
    Thin,
    /// Light weight (300).
    Light,
    /// Normal weight (400).
    #[default]
    Normal,
    /// Medium weight (500).
    Medium,
    /// Bold weight (700).
    Bold,
    /// Black weight (900).
    Black,
}

impl FontWeight {
    /// The numeric CSS-style weight.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Thin => 100,
            Self::Light => 300,
            Self::Normal => 400,
            Self::Medium => 500,
            Self::Bold => 700,
            Self::Black => 900,
        }
    }
}

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

/// Font used for a component's own text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// Font size.
    pub size: Option<Length>,
    /// Font weight.
    pub weight: Option<FontWeight>,
    /// Comma separated family list.
    pub family: Option<String>,
    /// Font slant.
    pub style: Option<FontStyle>,
}

impl Font {
    /// A font of the given size.
    pub fn size(size: impl Into<Length>) -> Self {
        Self {
            size: Some(size.into()),
            ..Self::default()
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the family list.
    #[must_use]
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Sets the slant.
    #[must_use]
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub(crate) fn differs_from(&self, other: &Self) -> bool {
        !(base_or_resource_eq(&self.size, &other.size)
            && self.weight == other.weight
            && self.family == other.family
            && self.style == other.style)
    }
}

/// Sent in place of a rectangle field that was left unset.
pub const RECT_PLACEHOLDER: &str = "PLACEHOLDER";

/// A hit-test rectangle relative to the node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    /// Left offset.
    pub x: Option<Length>,
    /// Top offset.
    pub y: Option<Length>,
    /// Width.
    pub width: Option<Length>,
    /// Height.
    pub height: Option<Length>,
}

impl Rect {
    /// A rectangle with all four fields set.
    pub fn new(
        x: impl Into<Length>,
        y: impl Into<Length>,
        width: impl Into<Length>,
        height: impl Into<Length>,
    ) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            width: Some(width.into()),
            height: Some(height.into()),
        }
    }

    const fn fields(&self) -> [&Option<Length>; 4] {
        [&self.x, &self.y, &self.width, &self.height]
    }

    /// Compares the four fields under base-or-resource equality.
    pub(crate) fn differs_from(&self, other: &Self) -> bool {
        fields_changed(&self.fields(), &other.fields())
    }

    /// Appends x, y, width and height. Missing fields are sent as
    /// [`RECT_PLACEHOLDER`] so the peer keeps its own default for them.
    pub(crate) fn marshal_into(&self, out: &mut Vec<PeerValue>) {
        out.extend(self.fields().into_iter().map(|field| {
            field
                .as_ref()
                .map_or_else(|| PeerValue::Str(RECT_PLACEHOLDER.into()), Marshal::marshal)
        }));
    }
}

/// Hover feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverEffect {
    /// Platform default.
    #[default]
    Auto,
    /// Scale up while hovered.
    Scale,
    /// Highlight while hovered.
    Highlight,
    /// No feedback.
    None,
}

impl PrimitiveEq for HoverEffect {
    fn primitive_eq(&self, other: &Self) -> bool {
        self == other
    }
}

/// Options of a shared element transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionOptions {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// Delay in milliseconds.
    pub delay_ms: u32,
    /// Z order during the transition.
    pub z_index: Option<i32>,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            delay_ms: 0,
            z_index: None,
        }
    }
}

/// A shared element transition between pages.
///
/// Staged behind an `Rc`, so two separately built transitions are only
/// treated as equal through an explicit id and options comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedTransition {
    /// Identifier matched across pages.
    pub id: String,
    /// Animation options.
    pub options: TransitionOptions,
}

impl SharedTransition {
    /// A transition with default options.
    pub fn new(id: impl Into<String>) -> Rc<Self> {
        Self::with_options(id, TransitionOptions::default())
    }

    /// A transition with explicit options.
    pub fn with_options(id: impl Into<String>, options: TransitionOptions) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_marshalling() {
        assert_eq!(Length::Vp(10.0).marshal(), PeerValue::Number(10.0));
        assert_eq!(Length::Px(10.0).marshal(), PeerValue::Str("10px".into()));
        assert_eq!(Length::Percent(50.0).marshal(), PeerValue::Str("50%".into()));
        assert_eq!(None::<Length>.marshal(), PeerValue::Undefined);
    }

    #[test]
    fn test_length_units_are_not_interchangeable() {
        assert!(Length::Vp(1.0).primitive_eq(&Length::Vp(1.0)));
        assert!(!Length::Vp(1.0).primitive_eq(&Length::Px(1.0)));
    }

    #[test]
    fn test_layout_weight_parsing() {
        assert_eq!(NumberInput::from(2.5).layout_weight(), Some(2.5));
        assert_eq!(NumberInput::from("3").layout_weight(), Some(3.0));
        assert_eq!(NumberInput::from("3.9").layout_weight(), Some(3.0));
        assert_eq!(NumberInput::from("wide").layout_weight(), None);
        assert_eq!(NumberInput::from("").layout_weight(), None);
    }

    #[test]
    fn test_layout_weight_takes_leading_integer() {
        assert_eq!(NumberInput::from("1e3").layout_weight(), Some(1.0));
        assert_eq!(NumberInput::from("0x10").layout_weight(), Some(16.0));
        assert_eq!(NumberInput::from(" -7.5 ").layout_weight(), Some(-7.0));
        assert_eq!(NumberInput::from("Infinity").layout_weight(), None);
        assert_eq!(NumberInput::from("inf").layout_weight(), None);
        assert_eq!(NumberInput::from("nan").layout_weight(), None);
        assert_eq!(NumberInput::from("3px").layout_weight(), None);
    }

    #[test]
    fn test_rect_marks_missing_fields() {
        let rect = Rect {
            x: Some(Length::Vp(1.0)),
            height: Some(Length::Percent(50.0)),
            ..Rect::default()
        };
        let mut out = Vec::new();
        rect.marshal_into(&mut out);
        let placeholder = PeerValue::Str(RECT_PLACEHOLDER.into());
        assert_eq!(
            out,
            vec![
                PeerValue::Number(1.0),
                placeholder.clone(),
                placeholder,
                PeerValue::Str("50%".into()),
            ]
        );
    }

    #[test]
    fn test_rect_diff_per_field() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.differs_from(&Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(a.differs_from(&Rect::new(0.0, 0.0, 10.0, 11.0)));
        assert!(a.differs_from(&Rect {
            width: None,
            ..a.clone()
        }));
    }

    #[test]
    fn test_z_index_of_text_is_zero() {
        assert!(NumberInput::from("top").z_index().abs() < f64::EPSILON);
        assert!((NumberInput::from(4).z_index() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uniform_inset_expands_to_four_sides() {
        let inset = Inset::from(8.0);
        assert!(inset.in_apply_order().iter().all(|side| **side == Some(Length::Vp(8.0))));
    }

    #[test]
    fn test_fields_changed_mixed_resource() {
        let res = Some(Length::Resource(Resource::new("app", "entry", 3)));
        let lit = Some(Length::Vp(3.0));
        assert!(fields_changed(&[&res], &[&lit]));
        assert!(!fields_changed(&[&res], &[&res.clone()]));
        assert!(!fields_changed::<Length>(&[&None], &[&None]));
    }

    #[test]
    fn test_gradient_stops_compare_deeply() {
        let a = LinearGradient::new(vec![(0xFF00_0000_u32.into(), 0.0), (0xFFFF_FFFF_u32.into(), 1.0)]);
        let b = a.clone();
        let c = a.clone().repeating(true);
        let d = LinearGradient::new(vec![(0xFF00_0000_u32.into(), 0.0)]);
        assert!(!a.differs_from(&b));
        assert!(a.differs_from(&c));
        assert!(a.differs_from(&d));
    }

    #[test]
    fn test_font_diff_on_identifying_fields() {
        let a = Font::size(14.0).weight(FontWeight::Bold).family("sans");
        assert!(!a.differs_from(&a.clone()));
        assert!(a.differs_from(&a.clone().style(FontStyle::Italic)));
    }

    #[test]
    fn test_matrix_marshals_sixteen_numbers() {
        let PeerValue::List(values) = Matrix::translate(1.0, 2.0, 3.0).marshal() else {
            panic!("matrix must marshal to a list");
        };
        assert_eq!(values.len(), 16);
        assert_eq!(values[12], PeerValue::Number(1.0));
    }
}
