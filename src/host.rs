//! The host object-model seam.
//!
//! `HostEnv` describes the dynamic lookup-and-invoke surface the typed
//! wrappers are built on: resolve a class by name, resolve operation
//! identifiers against it, and forward typed calls to opaque host objects.
//! Backends implement it: the `android` feature binds it to a real JNI
//! environment, the `mockhost` feature to an in-memory host runtime.

use crate::Result;

/// Argument passed through to a host operation.
///
/// Mirrors the host calling convention: a 32-bit integer, an opaque object
/// reference, or an explicit null reference.
#[derive(Debug, Clone, Copy)]
pub enum Arg<O> {
    Int(i32),
    Object(O),
    Null,
}

/// The call surface a host runtime exposes to this bridge.
///
/// Handle types are opaque and `Copy`: they are borrowed identifiers whose
/// validity is governed by the host's own reference rules, not owned
/// resources. Lookups return `None` when the host cannot resolve a name
/// (the binding layer turns that into a typed lookup error); calls return
/// `Err` carrying whatever fault the host raised, unmodified.
pub trait HostEnv {
    /// Resolved class reference
    type Class: Copy;
    /// Cached instance-method identifier
    type Method: Copy;
    /// Cached static-method identifier
    type StaticMethod: Copy;
    /// Cached static-field identifier
    type Field: Copy;
    /// Borrowed object reference
    type Object: Copy;

    /// Resolve a class by its fully qualified name ('/' separators).
    fn find_class(&self, name: &str) -> Option<Self::Class>;

    /// Resolve an instance method by name and signature.
    fn method_id(&self, class: Self::Class, name: &str, sig: &str) -> Option<Self::Method>;

    /// Resolve a static method by name and signature.
    fn static_method_id(
        &self,
        class: Self::Class,
        name: &str,
        sig: &str,
    ) -> Option<Self::StaticMethod>;

    /// Resolve a static field by name and signature.
    fn static_field_id(&self, class: Self::Class, name: &str, sig: &str) -> Option<Self::Field>;

    /// Call an instance method returning a 32-bit integer.
    fn call_int(
        &self,
        recv: Self::Object,
        method: Self::Method,
        args: &[Arg<Self::Object>],
    ) -> Result<i32>;

    /// Call an instance method returning nothing.
    fn call_void(
        &self,
        recv: Self::Object,
        method: Self::Method,
        args: &[Arg<Self::Object>],
    ) -> Result<()>;

    /// Call an instance method returning an object reference.
    fn call_object(
        &self,
        recv: Self::Object,
        method: Self::Method,
        args: &[Arg<Self::Object>],
    ) -> Result<Self::Object>;

    /// Call a static method returning an object reference.
    fn call_static_object(
        &self,
        class: Self::Class,
        method: Self::StaticMethod,
        args: &[Arg<Self::Object>],
    ) -> Result<Self::Object>;

    /// Read a static object field.
    fn static_object_field(&self, class: Self::Class, field: Self::Field) -> Result<Self::Object>;

    /// Construct a host object through the given constructor.
    fn new_object(
        &self,
        class: Self::Class,
        ctor: Self::Method,
        args: &[Arg<Self::Object>],
    ) -> Result<Self::Object>;

    /// Create a host string object from UTF-8 text.
    fn new_string(&self, value: &str) -> Result<Self::Object>;

    /// Allocate a host int array of the given length.
    fn new_int_array(&self, len: i32) -> Result<Self::Object>;

    /// Copy the leading elements of a host int array into `buf`.
    fn int_array_region(&self, array: Self::Object, buf: &mut [i32]) -> Result<()>;
}
