use approx::assert_abs_diff_eq;
use price_chart::core::{CanvasLayout, IndexScale, PriceScale};

#[test]
fn price_scale_inverts_vertical_axis() {
    let canvas = CanvasLayout::canonical();
    let scale = PriceScale::from_prices(&[10.0, 20.0, 15.0, 25.0]).expect("scale");

    assert_eq!(scale.min(), 10.0);
    assert_eq!(scale.range(), 15.0);
    assert_abs_diff_eq!(scale.price_to_y(10.0, canvas), 290.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.price_to_y(17.5, canvas), 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.price_to_y(25.0, canvas), 10.0, epsilon = 1e-9);
}

#[test]
fn price_scale_from_empty_prices_is_none() {
    assert!(PriceScale::from_prices(&[]).is_none());
}

#[test]
fn zero_range_scale_is_finite() {
    let canvas = CanvasLayout::canonical();
    let scale = PriceScale::from_prices(&[7.0, 7.0]).expect("scale");

    assert_eq!(scale.range(), 1.0);
    let y = scale.price_to_y(7.0, canvas);
    assert!(y.is_finite());
    assert_eq!(y, canvas.baseline_y());
}

#[test]
fn index_scale_divides_width_evenly() {
    let scale = IndexScale::new(5, 1000.0);

    assert_eq!(scale.count(), 5);
    let xs: Vec<f64> = (0..5).map(|i| scale.index_to_x(i)).collect();
    assert_eq!(xs, vec![0.0, 250.0, 500.0, 750.0, 1000.0]);
}

#[test]
fn index_scale_degenerate_counts_map_to_left_edge() {
    assert_eq!(IndexScale::new(0, 1000.0).index_to_x(0), 0.0);
    assert_eq!(IndexScale::new(1, 1000.0).index_to_x(0), 0.0);
}
