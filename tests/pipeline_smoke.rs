#![cfg(feature = "mockhost")]

use anyhow::Result;

use pdfbridge::mockhost::{MockHost, PageSpec};
use pdfbridge::platform::{Context, PdfRenderer};
use pdfbridge::{render_page, BridgeConfig};

const ASSET: &str = "file:///android_asset/test.pdf";

fn demo_host() -> MockHost {
    let host = MockHost::new();
    host.register_asset(
        ASSET,
        vec![
            PageSpec::LETTER,
            PageSpec::A4,
            PageSpec {
                width_pts: 144,
                height_pts: 72,
            },
        ],
    );
    host
}

#[test]
fn rendered_buffer_is_exactly_width_times_4_times_height() -> Result<()> {
    let host = demo_host();
    let pixmap = render_page(&host, host.activity(), &BridgeConfig::default())?;
    assert_eq!(pixmap.width, 612);
    assert_eq!(pixmap.height, 792);
    assert_eq!(pixmap.data.len(), 612 * 4 * 792);
    assert_eq!(pixmap.stride(), 612 * 4);
    Ok(())
}

#[test]
fn high_dpi_render_scales_the_buffer() -> Result<()> {
    let host = demo_host();
    let config = BridgeConfig {
        page_index: 2,
        dpi: 300,
        ..Default::default()
    };
    let pixmap = render_page(&host, host.activity(), &config)?;
    // 144x72 points at 300 dpi
    assert_eq!(pixmap.width, 600);
    assert_eq!(pixmap.height, 300);
    assert_eq!(pixmap.data.len(), 600 * 4 * 300);
    Ok(())
}

#[test]
fn every_page_in_range_opens_with_positive_dimensions() -> Result<()> {
    // walk the chain the pipeline takes, one wrapper at a time
    let host = demo_host();
    let context = Context::from_object(&host, host.activity())?;
    let resolver = context.content_resolver()?;
    let descriptor = resolver.open_file_descriptor(ASSET, "r")?;
    assert!(descriptor.fd()? > 0);

    let renderer = PdfRenderer::new(&host, &descriptor)?;
    assert_eq!(renderer.page_count()?, 3);
    for index in 0..renderer.page_count()? {
        let page = renderer.open_page(index)?;
        for dpi in [1, 72, 300] {
            assert!(page.width(dpi)? > 0, "page {} at {} dpi", index, dpi);
            assert!(page.height(dpi)? > 0, "page {} at {} dpi", index, dpi);
        }
    }
    Ok(())
}
