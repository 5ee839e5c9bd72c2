#![cfg(feature = "mockhost")]

use pdfbridge::bind::ClassBinding;
use pdfbridge::mockhost::{MockHost, PageSpec};
use pdfbridge::platform::{Context, PdfRenderer};
use pdfbridge::Error;

const ASSET: &str = "file:///android_asset/test.pdf";

#[test]
fn unknown_class_yields_class_not_found() {
    let host = MockHost::new();
    let err = match ClassBinding::resolve(&host, "android/graphics/pdf/LosslessRenderer") {
        Ok(_) => panic!("lookup should fail"),
        Err(e) => e,
    };
    match err {
        Error::ClassNotFound(name) => assert_eq!(name, "android/graphics/pdf/LosslessRenderer"),
        other => panic!("expected ClassNotFound, got {}", other),
    }
}

#[test]
fn unknown_method_yields_method_not_found() {
    let host = MockHost::new();
    let binding = ClassBinding::resolve(&host, "android/graphics/pdf/PdfRenderer").unwrap();
    let err = binding.method("getDpi", "()I").unwrap_err();
    match err {
        Error::MethodNotFound { class, name, sig } => {
            assert_eq!(class, "android/graphics/pdf/PdfRenderer");
            assert_eq!(name, "getDpi");
            assert_eq!(sig, "()I");
        }
        other => panic!("expected MethodNotFound, got {}", other),
    }
}

#[test]
fn signature_mismatch_yields_method_not_found() {
    let host = MockHost::new();
    let binding = ClassBinding::resolve(&host, "android/os/ParcelFileDescriptor").unwrap();
    // the method exists, the signature does not
    assert!(binding.method("getFd", "()I").is_ok());
    assert!(matches!(
        binding.method("getFd", "()J"),
        Err(Error::MethodNotFound { .. })
    ));
}

fn open_renderer(host: &MockHost) -> PdfRenderer<'_, MockHost> {
    let context = Context::from_object(host, host.activity()).unwrap();
    let resolver = context.content_resolver().unwrap();
    let descriptor = resolver.open_file_descriptor(ASSET, "r").unwrap();
    PdfRenderer::new(host, &descriptor).unwrap()
}

#[test]
fn out_of_range_page_fault_passes_through_unmodified() {
    let host = MockHost::new();
    host.register_asset(ASSET, vec![PageSpec::LETTER, PageSpec::LETTER]);
    let renderer = open_renderer(&host);

    match renderer.open_page(7) {
        Ok(_) => panic!("page 7 should not open"),
        Err(Error::HostFault(text)) => assert_eq!(text, "Invalid page index: 7"),
        Err(other) => panic!("expected HostFault, got {}", other),
    }

    match renderer.open_page(-1) {
        Ok(_) => panic!("page -1 should not open"),
        Err(Error::HostFault(text)) => assert_eq!(text, "Invalid page index: -1"),
        Err(other) => panic!("expected HostFault, got {}", other),
    }
}

#[test]
fn missing_asset_fault_passes_through_unmodified() {
    let host = MockHost::new();
    let context = Context::from_object(&host, host.activity()).unwrap();
    let resolver = context.content_resolver().unwrap();
    match resolver.open_file_descriptor("file:///android_asset/absent.pdf", "r") {
        Ok(_) => panic!("missing asset should not open"),
        Err(Error::HostFault(text)) => assert_eq!(
            text,
            "java.io.FileNotFoundException: file:///android_asset/absent.pdf"
        ),
        Err(other) => panic!("expected HostFault, got {}", other),
    }
}
