//! Wrapper over the host's content resolver.

use crate::bind::ClassBinding;
use crate::host::{Arg, HostEnv};
use crate::platform::ParcelFileDescriptor;
use crate::Result;

const CLASS: &str = "android/content/ContentResolver";
const OPEN_SIG: &str = "(Landroid/net/Uri;Ljava/lang/String;)Landroid/os/ParcelFileDescriptor;";

/// Borrowed handle to the host content resolver.
pub struct ContentResolver<'e, E: HostEnv> {
    binding: ClassBinding<'e, E>,
    object: E::Object,
    open_file_descriptor: E::Method,
}

impl<'e, E: HostEnv> ContentResolver<'e, E> {
    pub fn from_object(env: &'e E, object: E::Object) -> Result<Self> {
        let binding = ClassBinding::resolve(env, CLASS)?;
        let open_file_descriptor = binding.method("openFileDescriptor", OPEN_SIG)?;
        Ok(Self {
            binding,
            object,
            open_file_descriptor,
        })
    }

    /// Open a descriptor for a URI given as text. The host decides whether
    /// the URI resolves; a missing or unreadable target surfaces as a host
    /// fault from this call.
    pub fn open_file_descriptor(
        &self,
        uri: &str,
        mode: &str,
    ) -> Result<ParcelFileDescriptor<'e, E>> {
        let uri = self.binding.env().new_string(uri)?;
        self.open_file_descriptor_obj(uri, mode)
    }

    /// Open a descriptor for a URI the caller already holds as a host object.
    pub fn open_file_descriptor_obj(
        &self,
        uri: E::Object,
        mode: &str,
    ) -> Result<ParcelFileDescriptor<'e, E>> {
        let env = self.binding.env();
        let mode = env.new_string(mode)?;
        let descriptor = env.call_object(
            self.object,
            self.open_file_descriptor,
            &[Arg::Object(uri), Arg::Object(mode)],
        )?;
        ParcelFileDescriptor::from_object(env, descriptor)
    }

    pub fn object(&self) -> E::Object {
        self.object
    }
}
