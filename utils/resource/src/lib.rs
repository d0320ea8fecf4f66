#![no_std]
//! # Resource Descriptors
//!
//! A [`Resource`] is a structured reference to an asset stored outside the
//! component tree, such as a themed color or a dimension declared by the
//! application package. It is resolved by the native side, so the Rust side
//! only needs to carry and compare its identifying fields:
//!
//! - `namespace` - the package (bundle) the asset belongs to,
//! - `module` - the module inside that package,
//! - `id` - the numeric asset id,
//! - `params` - an optional parameter bag used by formatted resources.
//!
//! Two descriptors are equal when all four fields match. The parameter bag is
//! shared behind an `Rc` and compared by identity, never element by element.
//!
//! ```
//! use waterui_resource::Resource;
//!
//! let accent = Resource::new("app", "entry", 101);
//! assert_eq!(accent, Resource::new("app", "entry", 101));
//! assert_ne!(accent, Resource::new("app", "entry", 102));
//! ```

extern crate alloc;

use alloc::{rc::Rc, string::String, vec::Vec};
use core::fmt;

/// A reference to an externally stored asset.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    namespace: String,
    module: String,
    id: i64,
    params: Option<ResourceParams>,
}

impl Resource {
    /// Creates a descriptor without parameters.
    pub fn new(namespace: impl Into<String>, module: impl Into<String>, id: i64) -> Self {
        Self {
            namespace: namespace.into(),
            module: module.into(),
            id,
            params: None,
        }
    }

    /// Attaches a parameter bag to this descriptor.
    #[must_use]
    pub fn with_params(mut self, params: ResourceParams) -> Self {
        self.params = Some(params);
        self
    }

    /// The package the asset belongs to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The module inside the package.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The numeric asset id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// The parameter bag, if any.
    #[must_use]
    pub const fn params(&self) -> Option<&ResourceParams> {
        self.params.as_ref()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$r({}:{}/{})", self.namespace, self.module, self.id)
    }
}

/// A single argument inside a [`ResourceParams`] bag.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceParam {
    /// A string argument.
    Str(String),
    /// A numeric argument.
    Number(f64),
}

impl From<&str> for ResourceParam {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for ResourceParam {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for ResourceParam {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Shared parameter bag of a [`Resource`].
///
/// Equality is identity: two bags are equal only when they are the same
/// allocation. Cloning a bag keeps it equal to the original.
#[derive(Debug, Clone)]
pub struct ResourceParams(Rc<[ResourceParam]>);

impl ResourceParams {
    /// Creates a bag from a list of arguments.
    pub fn new(params: impl IntoIterator<Item = ResourceParam>) -> Self {
        Self(params.into_iter().collect::<Vec<_>>().into())
    }

    /// Borrows the arguments.
    #[must_use]
    pub fn as_slice(&self) -> &[ResourceParam] {
        &self.0
    }

    /// Number of arguments in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag holds no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for ResourceParams {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Classifies values that may carry a [`Resource`] instead of a literal.
///
/// Attribute value shapes such as lengths or colors accept either a literal
/// or a resource; this trait lets comparison code tell the two apart.
pub trait AsResource {
    /// Returns the descriptor when this value is a resource reference.
    fn as_resource(&self) -> Option<&Resource>;

    /// Returns `true` if this value is a resource reference.
    fn is_resource(&self) -> bool {
        self.as_resource().is_some()
    }
}

impl AsResource for Resource {
    fn as_resource(&self) -> Option<&Resource> {
        Some(self)
    }
}

impl<T: AsResource> AsResource for Option<T> {
    fn as_resource(&self) -> Option<&Resource> {
        self.as_ref().and_then(AsResource::as_resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_descriptor_equality() {
        let a = Resource::new("app", "entry", 101);
        let b = Resource::new("app", "entry", 101);
        assert_eq!(a, b);
        assert_ne!(a, Resource::new("app", "other", 101));
        assert_ne!(a, Resource::new("sys", "entry", 101));
    }

    #[test]
    fn test_params_compare_by_identity() {
        let params = ResourceParams::new(vec![ResourceParam::from("name")]);
        let a = Resource::new("app", "entry", 7).with_params(params.clone());
        let b = Resource::new("app", "entry", 7).with_params(params);
        assert_eq!(a, b);

        let fresh = ResourceParams::new(vec![ResourceParam::from("name")]);
        let c = Resource::new("app", "entry", 7).with_params(fresh);
        assert_ne!(a, c);
    }

    #[test]
    fn test_params_absent_vs_present() {
        let params = ResourceParams::new(vec![ResourceParam::Number(1.0)]);
        let a = Resource::new("app", "entry", 7);
        let b = Resource::new("app", "entry", 7).with_params(params);
        assert_ne!(a, b);
    }

    #[test]
    fn test_as_resource_option() {
        let none: Option<Resource> = None;
        assert!(!none.is_resource());
        assert!(Some(Resource::new("app", "entry", 1)).is_resource());
    }

    #[test]
    fn test_display() {
        use alloc::string::ToString;
        let r = Resource::new("app", "entry", 101);
        assert_eq!(r.to_string(), "$r(app:entry/101)");
    }
}
