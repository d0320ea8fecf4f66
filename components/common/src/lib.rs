//! Common attribute modifiers for `WaterUI` components.
//!
//! This crate turns the generic slot engine of `waterui-modifier-core` into
//! the everyday attribute surface of a component: size, spacing, colors,
//! borders, placement, effects and behaviour flags. [`Component`] exposes one
//! chainable setter per attribute, and [`state::StateStyles`] layers
//! interaction-state styles on top.

pub mod attributes;
mod component;
pub mod state;
mod values;

pub use component::Component;
pub use values::{
    BorderRadiuses, EdgeColors, EdgeWidths, Font, FontStyle, FontWeight, GradientDirection,
    HoverEffect, Inset, Length, LinearGradient, Matrix, NumberInput, Position, RECT_PLACEHOLDER,
    Rect, ResourceColor, ResourceNumber, SharedTransition, TransitionOptions, Visibility,
};
