//! Class resolution and eager operation binding.
//!
//! `ClassBinding` is the base every typed wrapper builds on: it resolves a
//! host class (by name or from a pre-resolved reference) and looks up the
//! operation identifiers the wrapper caches. A failed lookup is fatal to
//! the construction that requested it; no partially bound wrapper escapes.

use log::debug;

use crate::host::HostEnv;
use crate::{Error, Result};

/// A resolved host class plus the environment it was resolved against.
///
/// Non-owning on both counts: the environment is borrowed for `'e` and the
/// class reference stays valid only as long as the host keeps it valid.
pub struct ClassBinding<'e, E: HostEnv> {
    env: &'e E,
    class: E::Class,
    name: String,
}

impl<'e, E: HostEnv> ClassBinding<'e, E> {
    /// Resolve a class by its fully qualified name.
    pub fn resolve(env: &'e E, name: &str) -> Result<Self> {
        let class = env
            .find_class(name)
            .ok_or_else(|| Error::ClassNotFound(name.to_string()))?;
        debug!("resolved host class {}", name);
        Ok(Self {
            env,
            class,
            name: name.to_string(),
        })
    }

    /// Wrap a class reference the caller already holds. `name` is only used
    /// for error context in later operation lookups.
    pub fn from_class(env: &'e E, class: E::Class, name: &str) -> Self {
        Self {
            env,
            class,
            name: name.to_string(),
        }
    }

    pub fn env(&self) -> &'e E {
        self.env
    }

    pub fn class(&self) -> E::Class {
        self.class
    }

    /// Look up an instance method by name and signature.
    pub fn method(&self, name: &str, sig: &str) -> Result<E::Method> {
        self.env
            .method_id(self.class, name, sig)
            .ok_or_else(|| Error::MethodNotFound {
                class: self.name.clone(),
                name: name.to_string(),
                sig: sig.to_string(),
            })
    }

    /// Look up a static method by name and signature.
    pub fn static_method(&self, name: &str, sig: &str) -> Result<E::StaticMethod> {
        self.env
            .static_method_id(self.class, name, sig)
            .ok_or_else(|| Error::MethodNotFound {
                class: self.name.clone(),
                name: name.to_string(),
                sig: sig.to_string(),
            })
    }

    /// Look up a static field by name and signature.
    pub fn static_field(&self, name: &str, sig: &str) -> Result<E::Field> {
        self.env
            .static_field_id(self.class, name, sig)
            .ok_or_else(|| Error::FieldNotFound {
                class: self.name.clone(),
                name: name.to_string(),
                sig: sig.to_string(),
            })
    }
}
