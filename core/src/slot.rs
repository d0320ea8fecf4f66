//! Attribute slots: the per-attribute staged/committed state machine.
//!
//! A slot buffers the value most recently requested for one attribute
//! (`staged`) next to the value last reconciled with the peer (`committed`).
//! Committing a slot resolves the staged value:
//!
//! ```text
//!            stage                commit(unset)
//!  Empty ───────────> Staged ─────────────────────> Expired (slot removed)
//!                      │  ^
//!     commit(defined)  │  │ stage
//!                      v  │
//!                    Committed   (peer apply only when the value changed)
//! ```
//!
//! Staging never touches the peer and never queues: a second `stage` before a
//! commit overwrites the first.
//!
//! Two flavours decide whether a staged value changed:
//!
//! - [`ReferenceSlot`] for [`ReferenceCompare`] attributes compares with
//!   [`PrimitiveEq`], so scalars compare by value and distinct compound values
//!   are different unless [`ReferenceCompare::is_equal`] says otherwise.
//! - [`KeyedSlot`] for [`KeyedCompare`] attributes always asks
//!   [`KeyedCompare::check_diff`], which defaults to "changed".

use core::{any::Any, fmt};

use tracing::trace;

use crate::{AttributeId, CommitError, NodeHandle, PeerBinding, PeerError, equality::PrimitiveEq};

/// One attribute kind: its identity, value shape and native marshalling.
pub trait Attribute: 'static {
    /// The normalized value staged by setters.
    type Value: Clone + fmt::Debug + 'static;

    /// The identity this attribute occupies in a [`SlotTable`](crate::SlotTable).
    const ID: AttributeId;

    /// Marshals `value` and forwards it to the peer.
    ///
    /// # Errors
    ///
    /// Returns the peer's error unchanged.
    fn apply(
        peer: &mut dyn PeerBinding,
        node: NodeHandle,
        value: &Self::Value,
    ) -> Result<(), PeerError>;

    /// Restores the attribute to its built-in default.
    ///
    /// # Errors
    ///
    /// Returns the peer's error unchanged.
    fn reset(peer: &mut dyn PeerBinding, node: NodeHandle) -> Result<(), PeerError> {
        peer.reset(node, Self::ID)
    }
}

/// Attributes compared by primitive/reference equality.
pub trait ReferenceCompare: Attribute<Value: PrimitiveEq> {
    /// Explicit equality override for compound values that are not
    /// primitive-equal. Defaults to `false`.
    fn is_equal(_staged: &Self::Value, _committed: &Self::Value) -> bool {
        false
    }
}

/// Attributes compared by a field-level diff predicate.
pub trait KeyedCompare: Attribute {
    /// Returns `true` when `staged` differs meaningfully from `committed`.
    ///
    /// Without an override every staged value counts as changed.
    fn check_diff(_staged: &Self::Value, _committed: &Self::Value) -> bool {
        true
    }
}

/// A pending value waiting for the next commit.
#[derive(Debug, Clone, PartialEq)]
pub enum Staged<T> {
    /// A defined value to reconcile.
    Value(T),
    /// The attribute was unset and must return to its default.
    Unset,
}

impl<T> From<Option<T>> for Staged<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

/// Result of committing a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Nothing was staged.
    Idle,
    /// The staged value matched the committed one; the peer was not called.
    Unchanged,
    /// The staged value was pushed to the peer.
    Applied,
    /// The attribute was reset; the slot must be removed from its table.
    Expired,
}

impl Commit {
    /// Returns `true` for [`Commit::Expired`].
    #[must_use]
    pub const fn is_expired(self) -> bool {
        matches!(self, Self::Expired)
    }
}

/// Object-safe view of a slot, as stored in a [`SlotTable`](crate::SlotTable).
pub trait AttributeSlot: fmt::Debug + 'static {
    /// The identity of the attribute this slot holds.
    fn identity(&self) -> AttributeId;

    /// Resolves the staged value against the peer.
    ///
    /// Makes at most one peer call.
    ///
    /// # Errors
    ///
    /// Returns an error if the peer failed. The staged value is dropped either
    /// way; after a failed apply the committed value is left untouched.
    fn commit(
        &mut self,
        peer: &mut dyn PeerBinding,
        node: NodeHandle,
    ) -> Result<Commit, CommitError>;

    /// Returns `true` when the slot holds neither a staged nor a committed value.
    fn is_vacant(&self) -> bool;

    /// Upcasts for downcasting to the concrete slot type.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts for downcasting to the concrete slot type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Slot types a [`SlotTable`](crate::SlotTable) can construct lazily.
pub trait SlotFactory: AttributeSlot + Sized {
    /// The value accepted by [`SlotFactory::stage`].
    type Value;

    /// The identity the slot is stored under.
    const ID: AttributeId;

    /// Creates a slot with `value` staged and nothing committed.
    fn create(value: Option<Self::Value>) -> Self;

    /// Replaces the pending value. `None` stages an unset.
    fn stage(&mut self, value: Option<Self::Value>);
}

struct SlotState<T> {
    staged: Option<Staged<T>>,
    committed: Option<T>,
}

impl<T: fmt::Debug> SlotState<T> {
    fn new(value: Option<T>) -> Self {
        Self {
            staged: Some(value.into()),
            committed: None,
        }
    }

    fn stage(&mut self, value: Option<T>) {
        self.staged = Some(value.into());
    }

    const fn is_vacant(&self) -> bool {
        self.staged.is_none() && self.committed.is_none()
    }

    fn resolve<A>(
        &mut self,
        peer: &mut dyn PeerBinding,
        node: NodeHandle,
        changed: impl FnOnce(&T, &T) -> bool,
    ) -> Result<Commit, CommitError>
    where
        A: Attribute<Value = T>,
    {
        let Some(staged) = self.staged.take() else {
            return Ok(Commit::Idle);
        };

        let value = match staged {
            Staged::Value(value) => value,
            Staged::Unset => {
                self.committed = None;
                trace!(attribute = %A::ID, %node, "reset");
                A::reset(peer, node).map_err(|source| CommitError::Reset { id: A::ID, source })?;
                return Ok(Commit::Expired);
            }
        };

        let changed = self
            .committed
            .as_ref()
            .is_none_or(|committed| changed(&value, committed));
        if changed {
            trace!(attribute = %A::ID, %node, ?value, "apply");
            A::apply(peer, node, &value)
                .map_err(|source| CommitError::Apply { id: A::ID, source })?;
        }
        self.committed = Some(value);

        Ok(if changed {
            Commit::Applied
        } else {
            Commit::Unchanged
        })
    }
}

macro_rules! slot_type {
    ($(#[$meta:meta])* $name:ident, $bound:ident) => {
        $(#[$meta])*
        pub struct $name<A: $bound> {
            state: SlotState<A::Value>,
        }

        impl<A: $bound> $name<A> {
            /// The value waiting for the next commit, if any.
            #[must_use]
            pub const fn staged(&self) -> Option<&Staged<A::Value>> {
                self.state.staged.as_ref()
            }

            /// The value last reconciled with the peer, if any.
            #[must_use]
            pub const fn committed(&self) -> Option<&A::Value> {
                self.state.committed.as_ref()
            }
        }

        impl<A: $bound> fmt::Debug for $name<A> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("id", &A::ID)
                    .field("staged", &self.state.staged)
                    .field("committed", &self.state.committed)
                    .finish()
            }
        }

        impl<A: $bound> SlotFactory for $name<A> {
            type Value = A::Value;
            const ID: AttributeId = A::ID;

            fn create(value: Option<A::Value>) -> Self {
                Self {
                    state: SlotState::new(value),
                }
            }

            fn stage(&mut self, value: Option<A::Value>) {
                self.state.stage(value);
            }
        }
    };
}

slot_type!(
    /// Slot for a [`ReferenceCompare`] attribute.
    ReferenceSlot,
    ReferenceCompare
);

slot_type!(
    /// Slot for a [`KeyedCompare`] attribute.
    KeyedSlot,
    KeyedCompare
);

impl<A: ReferenceCompare> AttributeSlot for ReferenceSlot<A> {
    fn identity(&self) -> AttributeId {
        A::ID
    }

    fn commit(
        &mut self,
        peer: &mut dyn PeerBinding,
        node: NodeHandle,
    ) -> Result<Commit, CommitError> {
        self.state.resolve::<A>(peer, node, |staged, committed| {
            !(staged.primitive_eq(committed) || A::is_equal(staged, committed))
        })
    }

    fn is_vacant(&self) -> bool {
        self.state.is_vacant()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<A: KeyedCompare> AttributeSlot for KeyedSlot<A> {
    fn identity(&self) -> AttributeId {
        A::ID
    }

    fn commit(
        &mut self,
        peer: &mut dyn PeerBinding,
        node: NodeHandle,
    ) -> Result<Commit, CommitError> {
        self.state.resolve::<A>(peer, node, A::check_diff)
    }

    fn is_vacant(&self) -> bool {
        self.state.is_vacant()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
