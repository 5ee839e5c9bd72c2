#![cfg(feature = "mockhost")]

use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use pdfbridge::mockhost::{MockHost, PageSpec};
use pdfbridge::{render_page, BridgeConfig, Pixmap};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn render_demo_page() -> Pixmap {
    let host = MockHost::new();
    host.register_asset("file:///android_asset/test.pdf", vec![PageSpec::LETTER]);
    render_page(&host, host.activity(), &BridgeConfig::default()).expect("render demo page")
}

#[test]
fn render_is_deterministic() {
    let first = render_demo_page();
    let second = render_demo_page();
    assert_eq!(first.data, second.data);
}

#[test]
fn golden_digest_matches_fixture() {
    let pixmap = render_demo_page();
    let digest = hex::encode(Sha256::digest(&pixmap.data));

    let expected_path = golden_path("page0.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim());
}
