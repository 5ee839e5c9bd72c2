#![cfg(feature = "mockhost")]

use pdfbridge::mockhost::{MockHost, PageSpec};
use pdfbridge::platform::{Bitmap, Context, PdfRenderer};

const ASSET: &str = "file:///android_asset/test.pdf";

#[test]
fn bitmap_calls_after_binding_do_no_lookups() {
    let host = MockHost::new();
    let bitmap = Bitmap::create(&host, 16, 16).expect("create bitmap");

    let bound = host.lookup_count();
    for _ in 0..10 {
        assert_eq!(bitmap.width().unwrap(), 16);
        assert_eq!(bitmap.height().unwrap(), 16);
    }
    assert_eq!(host.lookup_count(), bound);
}

#[test]
fn page_calls_after_binding_do_no_lookups() {
    let host = MockHost::new();
    host.register_asset(ASSET, vec![PageSpec::LETTER]);

    let context = Context::from_object(&host, host.activity()).unwrap();
    let resolver = context.content_resolver().unwrap();
    let descriptor = resolver.open_file_descriptor(ASSET, "r").unwrap();
    let renderer = PdfRenderer::new(&host, &descriptor).unwrap();
    let page = renderer.open_page(0).unwrap();

    let bound = host.lookup_count();
    for dpi in [72, 150, 300] {
        assert!(page.width(dpi).unwrap() > 0);
        assert!(page.height(dpi).unwrap() > 0);
    }
    assert_eq!(renderer.page_count().unwrap(), 1);
    assert_eq!(host.lookup_count(), bound);
}
