use fund_tracker_wasm::domain::funds::{MutualFund, SchemeCode};
use serde_json::json;

#[test]
fn keeps_unknown_attributes_for_display() {
    let fund: MutualFund = serde_json::from_value(json!({
        "schemeCode": 118989,
        "schemeName": "HDFC Mid-Cap Opportunities Fund - Growth",
        "fundHouse": "HDFC Mutual Fund",
        "category": "Equity Scheme - Mid Cap Fund",
        "nav": 187.42,
        "isinGrowth": null,
        "meta": {"launched": "2007"}
    }))
    .unwrap();

    assert_eq!(fund.key(), &SchemeCode::from(118989));
    assert_eq!(fund.display_name(), "HDFC Mid-Cap Opportunities Fund - Growth");
    assert_eq!(
        fund.display_attributes(),
        vec![
            ("category".to_string(), "Equity Scheme - Mid Cap Fund".to_string()),
            ("fundHouse".to_string(), "HDFC Mutual Fund".to_string()),
            ("nav".to_string(), "187.42".to_string()),
        ]
    );
}

#[test]
fn missing_name_falls_back_to_code() {
    let fund: MutualFund = serde_json::from_value(json!({"schemeCode": "100027"})).unwrap();
    assert_eq!(fund.display_name(), "Scheme 100027");
    assert!(fund.display_attributes().is_empty());
}

#[test]
fn fund_without_code_is_rejected() {
    let result = serde_json::from_value::<MutualFund>(json!({"schemeName": "Nameless"}));
    assert!(result.is_err());
}

#[test]
fn odd_numeric_codes_do_not_fail_the_whole_response() {
    let funds = fund_tracker_wasm::infrastructure::http::fund_api_client::parse_funds_body(
        r#"[{"schemeCode":119551,"schemeName":"Axis Bluechip Fund"},
            {"schemeCode":1.5,"schemeName":"Legacy Plan"},
            {"schemeCode":-5,"schemeName":"Test Scheme"}]"#,
    )
    .unwrap();

    let keys: Vec<&str> = funds.iter().map(|fund| fund.key().value()).collect();
    assert_eq!(keys, ["119551", "1.5", "-5"]);
}
