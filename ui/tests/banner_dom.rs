//! Browser smoke tests for the DOM-facing pieces of the banner.
//!
//! Run with `wasm-pack test --headless --chrome ui`. The pure logic
//! (heuristic, gate, resolvers, suppression TTL) is covered by native unit
//! tests; these only exercise the live-document adapters.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use ui::components::banner_view::{BannerContent, BannerView};
use ui::services::config::InsertPosition;
use ui::services::suppression::{LocalRecordStore, RecordStore, SuppressionRecord};

wasm_bindgen_test_configure!(run_in_browser);

fn content() -> BannerContent<'static> {
    BannerContent {
        theme: "android",
        icon: None,
        title: "Example App",
        author: "Example Inc.",
        in_store: "FREE - In Google Play",
        button: "OPEN",
    }
}

#[wasm_bindgen_test]
fn banner_view_inserts_and_removes_the_element() {
    let document = web_sys::window().unwrap().document().unwrap();

    let view = BannerView::create(
        &content(),
        InsertPosition::Append,
        Box::new(|| {}),
        Box::new(|| {}),
    )
    .unwrap();

    assert!(document.query_selector(".smartbanner").unwrap().is_some());
    assert!(document
        .document_element()
        .unwrap()
        .class_list()
        .contains("smartbanner-show"));

    drop(view);

    assert!(document.query_selector(".smartbanner").unwrap().is_none());
    assert!(!document
        .document_element()
        .unwrap()
        .class_list()
        .contains("smartbanner-show"));
}

#[wasm_bindgen_test]
fn banner_view_hide_keeps_the_element_in_the_dom() {
    let document = web_sys::window().unwrap().document().unwrap();

    let view = BannerView::create(
        &content(),
        InsertPosition::Prepend,
        Box::new(|| {}),
        Box::new(|| {}),
    )
    .unwrap();

    view.hide();
    assert!(document.query_selector(".smartbanner").unwrap().is_some());
    assert!(!document
        .document_element()
        .unwrap()
        .class_list()
        .contains("smartbanner-show"));
}

#[wasm_bindgen_test]
fn local_record_store_round_trips_records() {
    let store = LocalRecordStore;
    let record = SuppressionRecord {
        expires_at_ms: 42.0,
    };

    store.write("smartbanner-test-record", &record);
    assert_eq!(store.read("smartbanner-test-record"), Some(record));
    assert_eq!(store.read("smartbanner-test-missing"), None);
}
