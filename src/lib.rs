//! pdfbridge
//!
//! A bridge layer that lets a managed host runtime render pages of a
//! bundled PDF document through its own document-rendering API and hand the
//! pixels back to native code as an owned buffer.
//!
//! # Features
//!
//! - **Android Backend** (`android`): binds the wrappers to a real JNI
//!   environment and exports the native entry point symbol
//! - **Mock Host** (`mockhost`, default): in-memory host runtime with a
//!   deterministic document model, used by tests and benches
//! - **Modular Design**: adapter-based architecture; the wrappers are
//!   generic over the [`HostEnv`] seam, so backends are swappable
//!
//! # Example
//!
//! ```
//! use pdfbridge::mockhost::{MockHost, PageSpec};
//! use pdfbridge::{render_page, BridgeConfig};
//!
//! # fn main() -> pdfbridge::Result<()> {
//! let host = MockHost::new();
//! host.register_asset("file:///android_asset/test.pdf", vec![PageSpec::LETTER]);
//!
//! let pixmap = render_page(&host, host.activity(), &BridgeConfig::default())?;
//! assert_eq!(
//!     pixmap.data.len(),
//!     pixmap.width as usize * 4 * pixmap.height as usize
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod bind;
pub mod host;

// Typed wrappers over the host's document-rendering object model
pub mod platform;

// The fixed render sequence and the exported entry point's library half
pub mod pipeline;

// JNI-backed production host (requires an Android target to be useful)
#[cfg(feature = "android")]
pub mod android;

// In-memory host runtime for tests and benches
#[cfg(feature = "mockhost")]
pub mod mockhost;

pub use host::{Arg, HostEnv};
pub use pipeline::{render_page, run_demo, GREETING};

/// Configuration for the render pipeline
///
/// The defaults reproduce the fixed demo sequence: the bundled asset opened
/// read-only, page zero, 72 DPI. The exported native entry point always
/// runs with these defaults; the struct exists so library callers and tests
/// can point the pipeline elsewhere.
///
/// # Examples
///
/// ```
/// let cfg = pdfbridge::BridgeConfig::default();
/// assert_eq!(cfg.page_index, 0);
/// assert_eq!(cfg.dpi, 72);
/// ```
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// URI of the document to open through the content resolver
    pub asset_uri: String,
    /// Open mode forwarded to the host ("r" for read-only)
    pub open_mode: String,
    /// Page to render
    pub page_index: i32,
    /// Render resolution in dots per inch
    pub dpi: i32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            asset_uri: "file:///android_asset/test.pdf".to_string(),
            open_mode: "r".to_string(),
            page_index: 0,
            dpi: 72,
        }
    }
}

/// An owned RGBA pixel buffer copied out of a host bitmap
///
/// `data` holds exactly `width * 4 * height` bytes, row-major, four bytes
/// per pixel, no padding. Unlike a host bitmap the buffer is plain memory:
/// it is returned to the caller and released by drop.
#[derive(Debug, Clone)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Pixmap {
    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }
}
