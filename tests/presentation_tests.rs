use price_chart::api::{ChangeDirection, ChartPalette, format_percent_change, format_price};

#[test]
fn direction_follows_sign_of_change() {
    assert_eq!(ChangeDirection::from_percent_change(Some(0.01)), ChangeDirection::Up);
    assert_eq!(ChangeDirection::from_percent_change(Some(-4.2)), ChangeDirection::Down);
    assert_eq!(ChangeDirection::from_percent_change(Some(0.0)), ChangeDirection::Flat);
    assert_eq!(ChangeDirection::from_percent_change(None), ChangeDirection::Flat);
    assert_eq!(
        ChangeDirection::from_percent_change(Some(f64::NAN)),
        ChangeDirection::Flat
    );
}

#[test]
fn flat_change_draws_with_rising_colors_but_flat_label() {
    let palette = ChartPalette::default();

    assert_eq!(palette.stroke_for(Some(0.0)), palette.rising_stroke);
    assert_eq!(palette.fill_for(Some(0.0)), palette.rising_fill);
    assert_eq!(palette.stroke_for(None), palette.rising_stroke);
    assert_eq!(palette.stroke_for(Some(-0.5)), palette.falling_stroke);
    assert_eq!(palette.fill_for(Some(-0.5)), palette.falling_fill);

    assert_eq!(palette.label_for(ChangeDirection::Flat), palette.flat_label);
    assert_eq!(palette.label_for(ChangeDirection::Up), palette.rising_stroke);
    assert_eq!(palette.label_for(ChangeDirection::Down), palette.falling_stroke);
}

#[test]
fn default_palette_matches_dashboard_colors() {
    let palette = ChartPalette::default();

    assert_eq!(palette.rising_stroke.to_css(), "#22c55e");
    assert_eq!(palette.falling_stroke.to_css(), "#ef4444");
    assert_eq!(palette.rising_fill.to_css(), "rgba(34, 197, 94, 0.1)");
    assert_eq!(palette.falling_fill.to_css(), "rgba(239, 68, 68, 0.1)");
    assert_eq!(palette.grid.to_css(), "#e2e8f0");
    palette.validate().expect("valid palette");
}

#[test]
fn percent_label_drops_sign_and_keeps_two_decimals() {
    assert_eq!(format_percent_change(1.5), "1.50%");
    assert_eq!(format_percent_change(-12.345_6), "12.35%");
    assert_eq!(format_percent_change(0.0), "0.00%");
}

#[test]
fn price_label_uses_dollar_prefix() {
    assert_eq!(format_price(187.5), "$187.50");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(-3.25), "-$3.25");
}

#[test]
fn direction_symbols_are_distinct() {
    let symbols = [
        ChangeDirection::Up.symbol(),
        ChangeDirection::Down.symbol(),
        ChangeDirection::Flat.symbol(),
    ];
    assert_ne!(symbols[0], symbols[1]);
    assert_ne!(symbols[1], symbols[2]);
    assert_ne!(symbols[0], symbols[2]);
}
