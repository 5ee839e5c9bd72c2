use criterion::{criterion_group, criterion_main, Criterion};

// Benchmarks exercise the public binding and render paths when the
// `mockhost` feature is enabled. Run with:
//    cargo bench --features mockhost
//
// Each iteration gets a fresh host: the mock's object table only grows, so
// reusing one across iterations would measure its growth instead.

fn bench_bind_bitmap(c: &mut Criterion) {
    #[cfg(feature = "mockhost")]
    {
        use pdfbridge::mockhost::MockHost;
        use pdfbridge::platform::Bitmap;

        c.bench_function("bind_bitmap_wrapper", |b| {
            b.iter(|| {
                let host = MockHost::new();
                Bitmap::create(&host, 8, 8).unwrap();
            })
        });
    }
    #[cfg(not(feature = "mockhost"))]
    let _ = c;
}

fn bench_cached_call(c: &mut Criterion) {
    #[cfg(feature = "mockhost")]
    {
        use pdfbridge::mockhost::MockHost;
        use pdfbridge::platform::Bitmap;

        let host = MockHost::new();
        let bitmap = Bitmap::create(&host, 8, 8).unwrap();
        c.bench_function("cached_width_call", |b| b.iter(|| bitmap.width().unwrap()));
    }
    #[cfg(not(feature = "mockhost"))]
    let _ = c;
}

fn bench_render_page(c: &mut Criterion) {
    #[cfg(feature = "mockhost")]
    {
        use pdfbridge::mockhost::{MockHost, PageSpec};
        use pdfbridge::{render_page, BridgeConfig};

        let config = BridgeConfig::default();
        c.bench_function("render_letter_page", |b| {
            b.iter(|| {
                let host = MockHost::new();
                host.register_asset("file:///android_asset/test.pdf", vec![PageSpec::LETTER]);
                render_page(&host, host.activity(), &config).unwrap()
            })
        });
    }
    #[cfg(not(feature = "mockhost"))]
    let _ = c;
}

criterion_group!(benches, bench_bind_bitmap, bench_cached_call, bench_render_page);
criterion_main!(benches);
