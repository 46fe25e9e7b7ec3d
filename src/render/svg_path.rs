use std::fmt::Write;

use crate::core::ChartPoint;

/// Formats vertices as an SVG path `d` attribute.
///
/// Produces `M x,y L x,y ...`, with ` Z` appended for closed paths. An empty
/// point list produces an empty string, which draws nothing.
#[must_use]
pub fn svg_path_data(points: &[ChartPoint], closed: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut data = String::with_capacity(points.len() * 16);
    // Writing into a `String` cannot fail.
    let _ = write!(data, "M{},{}", first.x, first.y);
    for point in rest {
        let _ = write!(data, " L{},{}", point.x, point.y);
    }
    if closed {
        data.push_str(" Z");
    }
    data
}
