//! Wrapper over the host's parcel file descriptor type.

use crate::bind::ClassBinding;
use crate::host::HostEnv;
use crate::Result;

const CLASS: &str = "android/os/ParcelFileDescriptor";

/// Borrowed handle to an open host file descriptor.
///
/// The integer descriptor belongs to the host; this layer performs no
/// cleanup on it.
pub struct ParcelFileDescriptor<'e, E: HostEnv> {
    binding: ClassBinding<'e, E>,
    object: E::Object,
    get_fd: E::Method,
}

impl<'e, E: HostEnv> ParcelFileDescriptor<'e, E> {
    /// Wrap an existing descriptor object.
    pub fn from_object(env: &'e E, object: E::Object) -> Result<Self> {
        let binding = ClassBinding::resolve(env, CLASS)?;
        let get_fd = binding.method("getFd", "()I")?;
        Ok(Self {
            binding,
            object,
            get_fd,
        })
    }

    /// The host's integer descriptor.
    pub fn fd(&self) -> Result<i32> {
        self.binding.env().call_int(self.object, self.get_fd, &[])
    }

    /// The borrowed host object backing this wrapper.
    pub fn object(&self) -> E::Object {
        self.object
    }
}
