use price_chart::ChartError;
use price_chart::api::{ChartPalette, PriceChartConfig};
use price_chart::core::CanvasLayout;

#[test]
fn empty_json_yields_defaults() {
    let config = PriceChartConfig::from_json_str("{}").expect("config");

    assert_eq!(config, PriceChartConfig::default());
    assert_eq!(config.canvas, CanvasLayout::canonical());
    assert_eq!(config.line_stroke_width, 3.0);
    assert_eq!(config.grid_line_count, 5);
    assert!(config.show_price_label);
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = PriceChartConfig::from_json_str(
        r#"{"line_stroke_width":2.0,"grid_line_count":3,"show_price_label":false}"#,
    )
    .expect("config");

    assert_eq!(config.line_stroke_width, 2.0);
    assert_eq!(config.grid_line_positions(), vec![0.0, 150.0, 300.0]);
    assert!(!config.show_price_label);
    assert_eq!(config.palette, ChartPalette::default());
}

#[test]
fn config_round_trips_through_json() {
    let config = PriceChartConfig::new(CanvasLayout::new(640.0, 200.0, 8.0, 8.0).expect("canvas"))
        .with_grid_line_count(0)
        .with_line_stroke_width(1.5);

    let json = config.to_json_pretty().expect("json");
    let restored = PriceChartConfig::from_json_str(&json).expect("restore");
    assert_eq!(restored.canvas, config.canvas);
    assert_eq!(restored.line_stroke_width, 1.5);
    assert_eq!(restored.grid_line_count, 0);
    assert!((restored.palette.rising_fill.alpha - 0.1).abs() <= 1e-12);
    assert!(restored.grid_line_positions().is_empty());
}

#[test]
fn invalid_values_are_rejected() {
    assert!(PriceChartConfig::from_json_str(r#"{"line_stroke_width":0.0}"#).is_err());
    assert!(PriceChartConfig::from_json_str(r#"{"grid_line_count":1}"#).is_err());
    assert!(
        PriceChartConfig::from_json_str(
            r#"{"canvas":{"width":100.0,"height":20.0,"margin_top":10.0,"margin_bottom":10.0}}"#
        )
        .is_err()
    );
    assert!(PriceChartConfig::from_json_str(r#"{"line_stroke_width":"wide"}"#).is_err());
}

#[test]
fn canvas_layout_validation() {
    let canvas = CanvasLayout::canonical();
    assert_eq!(canvas.baseline_y(), 290.0);
    assert_eq!(canvas.draw_height(), 280.0);

    assert!(CanvasLayout::new(0.0, 300.0, 10.0, 10.0).is_err());
    assert!(CanvasLayout::new(1000.0, f64::NAN, 10.0, 10.0).is_err());
    assert!(CanvasLayout::new(1000.0, 300.0, -1.0, 10.0).is_err());
    assert!(CanvasLayout::new(1000.0, 300.0, 150.0, 150.0).is_err());
    assert!(CanvasLayout::new(1000.0, 300.0, 0.0, 0.0).is_ok());
}

#[test]
fn margin_violations_report_invalid_canvas() {
    for (top, bottom) in [(-1.0, 10.0), (150.0, 150.0), (10.0, f64::INFINITY)] {
        let err = CanvasLayout::new(1000.0, 300.0, top, bottom).expect_err("must fail");
        assert!(
            matches!(err, ChartError::InvalidCanvas { width, height, .. } if width == 1000.0 && height == 300.0),
            "margins ({top}, {bottom})"
        );
    }
}
