//! Wrapper over the host context object the call chain starts from.

use crate::bind::ClassBinding;
use crate::host::HostEnv;
use crate::platform::ContentResolver;
use crate::Result;

const CLASS: &str = "android/content/Context";

/// Borrowed handle to the host context (on Android, the activity instance
/// handed to the native entry point).
pub struct Context<'e, E: HostEnv> {
    binding: ClassBinding<'e, E>,
    object: E::Object,
    get_content_resolver: E::Method,
}

impl<'e, E: HostEnv> Context<'e, E> {
    pub fn from_object(env: &'e E, object: E::Object) -> Result<Self> {
        let binding = ClassBinding::resolve(env, CLASS)?;
        let get_content_resolver =
            binding.method("getContentResolver", "()Landroid/content/ContentResolver;")?;
        Ok(Self {
            binding,
            object,
            get_content_resolver,
        })
    }

    /// Ask the context for its content resolver.
    pub fn content_resolver(&self) -> Result<ContentResolver<'e, E>> {
        let env = self.binding.env();
        let resolver = env.call_object(self.object, self.get_content_resolver, &[])?;
        ContentResolver::from_object(env, resolver)
    }

    pub fn object(&self) -> E::Object {
        self.object
    }
}
