//! Error types for the bridge layer

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while binding to or calling into the host runtime
#[derive(Error, Debug)]
pub enum Error {
    /// The host runtime could not locate a class by name
    #[error("host class not found: {0}")]
    ClassNotFound(String),

    /// The host runtime could not locate a method on a resolved class
    #[error("host method not found: {class}.{name}{sig}")]
    MethodNotFound {
        class: String,
        name: String,
        sig: String,
    },

    /// The host runtime could not locate a field on a resolved class
    #[error("host field not found: {class}.{name}: {sig}")]
    FieldNotFound {
        class: String,
        name: String,
        sig: String,
    },

    /// A fault raised by the host while executing a forwarded call.
    /// The host's own message is carried through unmodified.
    #[error("host fault: {0}")]
    HostFault(String),

    /// The render pipeline observed a value the host contract rules out
    #[error("render failed: {0}")]
    Render(String),
}

#[cfg(feature = "android")]
impl From<jni::errors::Error> for Error {
    fn from(err: jni::errors::Error) -> Self {
        Error::HostFault(err.to_string())
    }
}
