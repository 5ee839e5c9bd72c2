//! The fixed render sequence.
//!
//! One straight line: resolve the content accessor, open the configured
//! document read-only, construct a renderer over the descriptor, open the
//! configured page, render it, copy the pixels out. No branching beyond
//! error propagation, no loop.

use log::{debug, warn};

use crate::host::HostEnv;
use crate::platform::{Context, PdfRenderer};
use crate::{BridgeConfig, Pixmap, Result};

/// The constant text the exported entry point returns. Independent of
/// whether the render sequence succeeds.
pub const GREETING: &str = "Hello from Rust";

/// Run the render sequence against `env`, starting from the host context
/// object the entry point was invoked with, and return the rendered page.
pub fn render_page<E: HostEnv>(
    env: &E,
    context: E::Object,
    config: &BridgeConfig,
) -> Result<Pixmap> {
    let context = Context::from_object(env, context)?;
    let resolver = context.content_resolver()?;
    let descriptor = resolver.open_file_descriptor(&config.asset_uri, &config.open_mode)?;
    let renderer = PdfRenderer::new(env, &descriptor)?;
    let page = renderer.open_page(config.page_index)?;
    let bitmap = page.render(config.dpi)?;
    bitmap.pixels()
}

/// Entry-point body: run the default render sequence, log the outcome, and
/// return the greeting either way. The string contract is part of the
/// exported surface and does not depend on the rendering work above it.
pub fn run_demo<E: HostEnv>(env: &E, context: E::Object) -> &'static str {
    match render_page(env, context, &BridgeConfig::default()) {
        Ok(pixmap) => debug!(
            "rendered page 0: {}x{} ({} bytes)",
            pixmap.width,
            pixmap.height,
            pixmap.data.len()
        ),
        Err(e) => warn!("render sequence failed: {}", e),
    }
    GREETING
}

#[cfg(test)]
#[cfg(feature = "mockhost")]
mod tests {
    use super::*;
    use crate::mockhost::{MockHost, PageSpec};

    #[test]
    fn demo_greeting_is_constant_on_success_and_failure() {
        // host with the bundled asset present
        let host = MockHost::new();
        host.register_asset("file:///android_asset/test.pdf", vec![PageSpec::LETTER]);
        assert_eq!(run_demo(&host, host.activity()), GREETING);

        // host with nothing registered: the open call faults, the greeting
        // does not change
        let empty = MockHost::new();
        assert_eq!(run_demo(&empty, empty.activity()), GREETING);
    }
}
