use approx::assert_relative_eq;
use price_chart::ChartError;
use price_chart::core::PriceSeries;
use rust_decimal::Decimal;

#[test]
fn series_reports_extremes_and_endpoints() {
    let series = PriceSeries::new(vec![12.0, 9.5, 14.25, 11.0]).expect("series");

    assert_eq!(series.len(), 4);
    assert!(!series.is_empty());
    assert_eq!(series.first(), Some(12.0));
    assert_eq!(series.last(), Some(11.0));
    assert_eq!(series.min_max(), Some((9.5, 14.25)));
}

#[test]
fn empty_series_has_no_extremes() {
    let series = PriceSeries::empty();

    assert!(series.is_empty());
    assert_eq!(series.min_max(), None);
    assert_eq!(series.percent_change(), None);
    assert_eq!(series, PriceSeries::default());
}

#[test]
fn non_finite_sample_is_rejected() {
    let err = PriceSeries::new(vec![1.0, 2.0, f64::NAN]).expect_err("nan must fail");
    match err {
        ChartError::NonFinitePrice { index, value } => {
            assert_eq!(index, 2);
            assert!(value.is_nan());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn percent_change_uses_first_and_last_sample() {
    let series = PriceSeries::new(vec![100.0, 120.0, 90.0, 110.0]).expect("series");
    assert_relative_eq!(series.percent_change().expect("change"), 10.0, epsilon = 1e-12);

    let falling = PriceSeries::new(vec![50.0, 40.0]).expect("series");
    assert_relative_eq!(falling.percent_change().expect("change"), -20.0, epsilon = 1e-12);
}

#[test]
fn percent_change_is_undefined_for_short_or_zero_based_series() {
    assert_eq!(
        PriceSeries::new(vec![10.0]).expect("series").percent_change(),
        None
    );
    assert_eq!(
        PriceSeries::new(vec![0.0, 5.0])
            .expect("series")
            .percent_change(),
        None
    );
}

#[test]
fn decimal_prices_convert_to_series() {
    let prices = [
        Decimal::new(18_950, 2),
        Decimal::new(19_025, 2),
        Decimal::new(18_875, 2),
    ];
    let series = PriceSeries::from_decimals(&prices).expect("series");

    assert_eq!(series.as_slice(), &[189.5, 190.25, 188.75]);
}

#[test]
fn clones_share_samples() {
    let series = PriceSeries::new(vec![1.0, 2.0, 3.0]).expect("series");
    let clone = series.clone();

    assert_eq!(series.as_slice().as_ptr(), clone.as_slice().as_ptr());
}

#[test]
fn series_serializes_as_plain_array() {
    let series = PriceSeries::new(vec![1.5, 2.5]).expect("series");
    let json = serde_json::to_string(&series).expect("serialize");
    assert_eq!(json, "[1.5,2.5]");

    let restored: PriceSeries = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, series);
}
