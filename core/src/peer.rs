//! The contract between attribute slots and the native rendering peer.
//!
//! Slots never talk to a platform toolkit directly. A commit pass hands every
//! slot a [`PeerBinding`] together with the [`NodeHandle`] of the native node,
//! and each changed attribute is forwarded as a flat list of [`PeerValue`]s in
//! the order its native setter expects.

use core::fmt;

use waterui_resource::Resource;

use crate::{AttributeId, PeerError};

/// Opaque reference to a native node.
///
/// Handles are resolved by the host and passed into every commit pass. Slots
/// never keep one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(u64);

impl NodeHandle {
    /// Wraps a raw native handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw native handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A marshalled argument of a native attribute setter.
#[derive(Debug, Clone, PartialEq)]
pub enum PeerValue {
    /// An absent optional argument.
    Undefined,
    /// A boolean flag.
    Bool(bool),
    /// An integer, also used for enum discriminants and packed colors.
    Int(i64),
    /// A floating point number.
    Number(f64),
    /// A string, such as a unit-suffixed length.
    Str(String),
    /// A resource reference resolved by the peer.
    Resource(Resource),
    /// A nested list of arguments.
    List(Vec<PeerValue>),
}

impl PeerValue {
    /// Returns `true` for [`PeerValue::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

macro_rules! peer_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PeerValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

peer_value_from!(
    bool => Bool,
    i32 => Int,
    i64 => Int,
    u32 => Int,
    f32 => Number,
    f64 => Number,
    String => Str,
    &str => Str,
    Resource => Resource,
    Vec<PeerValue> => List,
);

impl<T: Into<PeerValue>> From<Option<T>> for PeerValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// The native module that renders attributes.
///
/// Implementations are expected to serialize their own side effects. The
/// engine only looks at the result to isolate and report failures.
pub trait PeerBinding {
    /// Writes `args` to attribute `id` of `node`.
    ///
    /// # Errors
    ///
    /// Returns an error if the peer cannot apply the value.
    fn apply(&mut self, node: NodeHandle, id: AttributeId, args: &[PeerValue])
    -> Result<(), PeerError>;

    /// Restores attribute `id` of `node` to its built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if the peer cannot reset the attribute.
    fn reset(&mut self, node: NodeHandle, id: AttributeId) -> Result<(), PeerError>;
}

impl<P: PeerBinding + ?Sized> PeerBinding for &mut P {
    fn apply(
        &mut self,
        node: NodeHandle,
        id: AttributeId,
        args: &[PeerValue],
    ) -> Result<(), PeerError> {
        (**self).apply(node, id, args)
    }

    fn reset(&mut self, node: NodeHandle, id: AttributeId) -> Result<(), PeerError> {
        (**self).reset(node, id)
    }
}

impl<P: PeerBinding + ?Sized> PeerBinding for Box<P> {
    fn apply(
        &mut self,
        node: NodeHandle,
        id: AttributeId,
        args: &[PeerValue],
    ) -> Result<(), PeerError> {
        (**self).apply(node, id, args)
    }

    fn reset(&mut self, node: NodeHandle, id: AttributeId) -> Result<(), PeerError> {
        (**self).reset(node, id)
    }
}

/// One call observed at a peer boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PeerCall {
    /// An `apply` call with its marshalled arguments.
    Apply {
        /// Target node.
        node: NodeHandle,
        /// Target attribute.
        id: AttributeId,
        /// Arguments in contracted order.
        args: Vec<PeerValue>,
    },
    /// A `reset` call.
    Reset {
        /// Target node.
        node: NodeHandle,
        /// Target attribute.
        id: AttributeId,
    },
}

impl PeerCall {
    /// The attribute this call targets.
    #[must_use]
    pub const fn identity(&self) -> AttributeId {
        match self {
            Self::Apply { id, .. } | Self::Reset { id, .. } => *id,
        }
    }

    /// The node this call targets.
    #[must_use]
    pub const fn node(&self) -> NodeHandle {
        match self {
            Self::Apply { node, .. } | Self::Reset { node, .. } => *node,
        }
    }
}
