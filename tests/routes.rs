use fund_tracker_wasm::domain::routes::Route;
use rstest::rstest;

#[rstest]
#[case("/", Route::Home)]
#[case("", Route::Home)]
#[case("/register", Route::Register)]
#[case("/register/", Route::Register)]
#[case("/login", Route::Home)]
#[case("/funds/119551", Route::Home)]
fn paths_map_to_routes(#[case] path: &str, #[case] expected: Route) {
    assert_eq!(Route::from_path(path), expected);
}

#[test]
fn route_paths_round_trip() {
    for route in [Route::Home, Route::Register] {
        assert_eq!(Route::from_path(route.path()), route);
    }
}
