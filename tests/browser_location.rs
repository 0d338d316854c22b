#![cfg(target_arch = "wasm32")]

use fund_tracker_wasm::domain::routes::Route;
use fund_tracker_wasm::infrastructure::ui::location_route;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_runner_page_maps_to_home() {
    // the runner page is never the register screen
    assert_eq!(location_route(), Route::Home);
}
