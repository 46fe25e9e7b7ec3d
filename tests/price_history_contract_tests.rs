use price_chart::ChartError;
use price_chart::api::PriceHistory;

#[test]
fn parses_endpoint_payload() {
    let history = PriceHistory::from_json_str(
        r#"{"prices":[187.2,188.9,186.4,190.1],"percentChange":1.55,"currentPrice":190.1,"ticker":"AAPL"}"#,
    )
    .expect("payload");

    assert_eq!(history.prices.as_deref(), Some(&[187.2, 188.9, 186.4, 190.1][..]));
    assert_eq!(history.percent_change, Some(1.55));
    assert_eq!(history.current_price, Some(190.1));
    assert_eq!(history.to_series().expect("series").len(), 4);
}

#[test]
fn missing_or_null_prices_mean_nothing_to_draw() {
    for payload in [r#"{}"#, r#"{"prices":null}"#, r#"{"prices":[]}"#] {
        let history = PriceHistory::from_json_str(payload).expect("payload");
        assert!(history.to_series().expect("series").is_empty());
    }
}

#[test]
fn malformed_payload_is_invalid_data() {
    let err = PriceHistory::from_json_str(r#"{"prices":"soon"}"#).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PriceHistory::from_json_str("not json").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn effective_values_fall_back_to_series() {
    let history = PriceHistory::from_json_str(r#"{"prices":[50.0,55.0]}"#).expect("payload");

    let change = history.effective_percent_change().expect("derived change");
    assert!((change - 10.0).abs() <= 1e-12);
    assert_eq!(history.effective_current_price(), Some(55.0));
}

#[test]
fn reported_values_win_over_derived_ones() {
    let history = PriceHistory::new(vec![50.0, 55.0])
        .with_percent_change(-2.0)
        .with_current_price(54.0);

    assert_eq!(history.effective_percent_change(), Some(-2.0));
    assert_eq!(history.effective_current_price(), Some(54.0));
}

#[test]
fn non_finite_prices_are_rejected_when_building_series() {
    let history = PriceHistory::new(vec![1.0, f64::INFINITY]);
    let err = history.to_series().expect_err("must fail");
    assert!(matches!(err, ChartError::NonFinitePrice { index: 1, .. }));
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = PriceHistory::new(vec![1.0])
        .with_percent_change(0.5)
        .to_json_string()
        .expect("json");

    assert_eq!(json, r#"{"prices":[1.0],"percentChange":0.5}"#);
}
