//! Errors raised while reconciling attributes with a peer.

use thiserror::Error;

use crate::{AttributeId, NodeHandle};

/// Failure reported by a [`PeerBinding`](crate::PeerBinding).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeerError {
    /// The peer refused the marshalled arguments for an attribute.
    #[error("peer rejected `{id}`: {reason}")]
    Rejected {
        /// The attribute being written.
        id: AttributeId,
        /// Peer-provided explanation.
        reason: String,
    },
    /// The node handle does not refer to a live native node.
    #[error("unknown native node {0}")]
    UnknownNode(NodeHandle),
    /// Any other peer failure.
    #[error("{0}")]
    Other(String),
}

/// Failure of a single slot during a commit pass.
///
/// A commit pass collects these instead of stopping, so one broken attribute
/// never prevents its siblings from reaching the peer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The peer failed to apply a changed value.
    #[error("failed to apply `{id}`: {source}")]
    Apply {
        /// The attribute being applied.
        id: AttributeId,
        /// Underlying peer failure.
        #[source]
        source: PeerError,
    },
    /// The peer failed to reset an attribute to its default.
    #[error("failed to reset `{id}`: {source}")]
    Reset {
        /// The attribute being reset.
        id: AttributeId,
        /// Underlying peer failure.
        #[source]
        source: PeerError,
    },
    /// A diff predicate or peer call panicked.
    #[error("commit of `{id}` panicked: {message}")]
    Panicked {
        /// The attribute being committed.
        id: AttributeId,
        /// The panic payload, when it was a string.
        message: String,
    },
}

impl CommitError {
    /// The attribute this failure belongs to.
    #[must_use]
    pub const fn identity(&self) -> AttributeId {
        match self {
            Self::Apply { id, .. } | Self::Reset { id, .. } | Self::Panicked { id, .. } => *id,
        }
    }
}
