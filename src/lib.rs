#![doc = include_str!("../README.md")]

pub mod config;
pub mod logging;

#[doc(inline)]
pub use waterui_modifier_common as common;
#[doc(inline)]
pub use waterui_modifier_core as engine;
#[cfg(feature = "headless")]
#[doc(inline)]
pub use waterui_headless as headless;

pub use config::{Config, ConfigError, LogConfig};
pub use logging::install_tracing;
pub use waterui_modifier_common::{Component, state::StateStyles};
pub use waterui_modifier_core::{
    AttributeId, CommitError, CommitReport, NodeHandle, PeerBinding, PeerError, PeerValue,
    SlotTable,
};
pub use waterui_resource::Resource;

pub mod prelude {
    //! Commonly used types for building and committing component attributes.
    //!
    //! ```
    //! use waterui_modifier::prelude::*;
    //!
    //! let mut card = Component::new(NodeHandle::new(1));
    //! card.width(200.0).border_radius(12.0).visibility(Visibility::Visible);
    //! assert_eq!(card.slots().len(), 3);
    //! ```
    pub use waterui_modifier_common::{
        BorderRadiuses, EdgeColors, EdgeWidths, Font, FontStyle, FontWeight, HoverEffect, Inset,
        Length, LinearGradient, Matrix, Position, Rect, ResourceColor, ResourceNumber,
        SharedTransition, Visibility,
        state::{StateStyles, UiState, UiStatePeer},
    };
    pub use waterui_modifier_core::{
        AttributeId, CommitReport, NodeHandle, PeerBinding, PeerError, PeerValue,
    };

    pub use crate::Component;
    pub use waterui_resource::Resource;
}
