//! Comparison building blocks for attribute diff predicates.
//!
//! Concrete attributes compose three primitives:
//!
//! - [`PrimitiveEq`] - value equality for scalars and identity for shared
//!   compound values (`Rc`). Two separately built compound values are never
//!   primitive-equal, even when their contents match.
//! - [`base_or_resource_eq`] - resource descriptors compare by their
//!   identifying fields, literals by [`PrimitiveEq`], and a resource never
//!   equals a literal.
//! - [`deep_sequence_eq`] - element-wise comparison of ordered sequences,
//!   recursing into nested sequences.

use std::rc::Rc;

use waterui_resource::{AsResource, Resource};

/// Primitive or reference equality.
pub trait PrimitiveEq {
    /// Returns `true` when both values are the same primitive value or the
    /// same shared allocation.
    fn primitive_eq(&self, other: &Self) -> bool;
}

macro_rules! primitive_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrimitiveEq for $ty {
                #[allow(clippy::float_cmp)]
                fn primitive_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl DeepEq for $ty {
                fn deep_eq(&self, other: &Self) -> bool {
                    self.primitive_eq(other)
                }
            }
        )*
    };
}

primitive_by_value!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, str, String,
);

impl<T: ?Sized> PrimitiveEq for Rc<T> {
    fn primitive_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: PrimitiveEq> PrimitiveEq for Option<T> {
    fn primitive_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.primitive_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Scalar/primitive equality.
pub fn primitive_eq<T: PrimitiveEq + ?Sized>(a: &T, b: &T) -> bool {
    a.primitive_eq(b)
}

/// Descriptor equality: namespace, module, id and parameter bag all match.
///
/// The parameter bag is compared by identity, not element by element.
#[must_use]
pub fn resource_eq(a: &Resource, b: &Resource) -> bool {
    a.namespace() == b.namespace()
        && a.module() == b.module()
        && a.id() == b.id()
        && a.params() == b.params()
}

/// Base-or-resource equality.
///
/// Two resources compare with [`resource_eq`]; two literals compare with
/// [`PrimitiveEq`]; a resource and a literal are always unequal.
pub fn base_or_resource_eq<T>(a: &T, b: &T) -> bool
where
    T: AsResource + PrimitiveEq + ?Sized,
{
    match (a.as_resource(), b.as_resource()) {
        (Some(a), Some(b)) => resource_eq(a, b),
        (None, None) => a.primitive_eq(b),
        _ => false,
    }
}

/// Structural equality that recurses through sequences.
pub trait DeepEq {
    /// Returns `true` when both values are structurally equal.
    fn deep_eq(&self, other: &Self) -> bool;
}

impl<T: DeepEq> DeepEq for [T] {
    fn deep_eq(&self, other: &Self) -> bool {
        deep_sequence_eq(self, other)
    }
}

impl<T: DeepEq> DeepEq for Vec<T> {
    fn deep_eq(&self, other: &Self) -> bool {
        deep_sequence_eq(self, other)
    }
}

impl<T: DeepEq, const N: usize> DeepEq for [T; N] {
    fn deep_eq(&self, other: &Self) -> bool {
        deep_sequence_eq(self, other)
    }
}

impl<T: DeepEq> DeepEq for Option<T> {
    fn deep_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.deep_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: DeepEq, B: DeepEq> DeepEq for (A, B) {
    fn deep_eq(&self, other: &Self) -> bool {
        self.0.deep_eq(&other.0) && self.1.deep_eq(&other.1)
    }
}

/// Deep sequence equality: same length and pairwise [`DeepEq`].
pub fn deep_sequence_eq<T: DeepEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.deep_eq(b))
}

/// A sequence element that is either a leaf or a nested sequence.
///
/// Leaves compare with [`PrimitiveEq`]; a leaf never equals a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    /// A single value.
    Item(T),
    /// A nested sequence.
    Seq(Vec<Nested<T>>),
}

impl<T: PrimitiveEq> DeepEq for Nested<T> {
    fn deep_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Item(a), Self::Item(b)) => a.primitive_eq(b),
            (Self::Seq(a), Self::Seq(b)) => deep_sequence_eq(a, b),
            _ => false,
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(value: Vec<Nested<T>>) -> Self {
        Self::Seq(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waterui_resource::{ResourceParam, ResourceParams};

    #[derive(Debug, Clone, PartialEq)]
    enum Dimension {
        Vp(f64),
        Res(Resource),
    }

    impl AsResource for Dimension {
        fn as_resource(&self) -> Option<&Resource> {
            match self {
                Self::Res(r) => Some(r),
                Self::Vp(_) => None,
            }
        }
    }

    impl PrimitiveEq for Dimension {
        fn primitive_eq(&self, other: &Self) -> bool {
            match (self, other) {
                (Self::Vp(a), Self::Vp(b)) => a.primitive_eq(b),
                _ => false,
            }
        }
    }

    fn app_resource(id: i64) -> Dimension {
        Dimension::Res(Resource::new("app", "entry", id))
    }

    #[test]
    fn test_scalars_compare_by_value() {
        assert!(primitive_eq(&1.5_f64, &1.5));
        assert!(!primitive_eq(&f64::NAN, &f64::NAN));
        assert!(primitive_eq("a", "a"));
    }

    #[test]
    fn test_rc_compares_by_identity() {
        let a = Rc::new(vec![1, 2]);
        let b = Rc::new(vec![1, 2]);
        assert!(a.primitive_eq(&a.clone()));
        assert!(!a.primitive_eq(&b));
    }

    #[test]
    fn test_base_or_resource_both_resources() {
        assert!(base_or_resource_eq(&app_resource(101), &app_resource(101)));
        assert!(!base_or_resource_eq(&app_resource(101), &app_resource(102)));
    }

    #[test]
    fn test_base_or_resource_literals() {
        assert!(base_or_resource_eq(&Dimension::Vp(4.0), &Dimension::Vp(4.0)));
        assert!(!base_or_resource_eq(&Dimension::Vp(4.0), &Dimension::Vp(5.0)));
    }

    #[test]
    fn test_base_or_resource_mixed_is_unequal() {
        assert!(!base_or_resource_eq(&app_resource(101), &Dimension::Vp(101.0)));
        assert!(!base_or_resource_eq(&Dimension::Vp(101.0), &app_resource(101)));
    }

    #[test]
    fn test_resource_params_not_compared_deeply() {
        let shared = ResourceParams::new([ResourceParam::Number(1.0)]);
        let a = Resource::new("app", "entry", 9).with_params(shared.clone());
        let b = Resource::new("app", "entry", 9).with_params(shared);
        let c = Resource::new("app", "entry", 9)
            .with_params(ResourceParams::new([ResourceParam::Number(1.0)]));
        assert!(resource_eq(&a, &b));
        assert!(!resource_eq(&a, &c));
    }

    #[test]
    fn test_deep_sequence_flat() {
        let base: &[f64] = &[1.0, 2.0];
        assert!(deep_sequence_eq(base, &[1.0, 2.0]));
        assert!(!deep_sequence_eq(base, &[1.0]));
        assert!(!deep_sequence_eq(base, &[1.0, 3.0]));
    }

    #[test]
    fn test_deep_sequence_nested() {
        let a = vec![vec![1, 2], vec![3]];
        let b = vec![vec![1, 2], vec![3]];
        let c = vec![vec![1, 2], vec![3, 4]];
        assert!(deep_sequence_eq(&a, &b));
        assert!(!deep_sequence_eq(&a, &c));
    }

    #[test]
    fn test_nested_mixed_depth() {
        let a = vec![Nested::Item(1), Nested::Seq(vec![Nested::Item(2)])];
        let b = vec![Nested::Item(1), Nested::Seq(vec![Nested::Item(2)])];
        let c = vec![Nested::Item(1), Nested::Item(2)];
        assert!(deep_sequence_eq(&a, &b));
        assert!(!deep_sequence_eq(&a, &c));
    }

    #[test]
    fn test_empty_sequences_are_equal() {
        let empty: [u8; 0] = [];
        assert!(deep_sequence_eq(&empty, &empty));
    }
}
