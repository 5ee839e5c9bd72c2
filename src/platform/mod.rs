//! Platform API surface: typed wrappers over the host's document-rendering
//! object model.
//!
//! One module per host type. Each wrapper borrows the environment and one
//! host object, and eagerly resolves the operation identifiers it needs at
//! construction time; call-throughs after that perform no further lookups.
//! Arguments are forwarded unvalidated: an out-of-range page index, for
//! example, reaches the host and whatever fault it raises propagates
//! unmodified.

pub mod bitmap;
pub mod context;
pub mod descriptor;
pub mod renderer;
pub mod resolver;

pub use bitmap::Bitmap;
pub use context::Context;
pub use descriptor::ParcelFileDescriptor;
pub use renderer::{Page, PdfRenderer};
pub use resolver::ContentResolver;
