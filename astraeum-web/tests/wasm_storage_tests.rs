#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use astraeum_web::auth_store;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn token_round_trips_through_storage() {
    auth_store::clear_token();
    auth_store::save_token("aaa.bbb.ccc").expect("persist token");
    assert_eq!(auth_store::load_token().as_deref(), Some("aaa.bbb.ccc"));

    auth_store::clear_token();
    assert!(auth_store::load_token().is_none());
}

#[wasm_bindgen_test]
fn malformed_stored_token_is_discarded() {
    auth_store::save_token("not-a-bearer-token").expect("persist token");
    // Dropped on load, and the stored value is gone with it.
    assert!(auth_store::load_token().is_none());
    assert!(auth_store::load_token().is_none());
}
