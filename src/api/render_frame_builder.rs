use tracing::trace;

use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, PathPrimitive, PathStroke, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{PriceChart, format_price};

const PRICE_LABEL_INSET: f64 = 8.0;

impl<R: Renderer> PriceChart<R> {
    /// Builds the frame for the current snapshot.
    ///
    /// Layer order: grid lines, price line, area fill, current-price label.
    /// Without data only the grid is emitted.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let canvas = self.config.canvas;
        let palette = self.config.palette;
        let mut frame = RenderFrame::new(canvas);

        for y in self.config.grid_line_positions() {
            frame = frame.with_line(LinePrimitive::new(
                0.0,
                y,
                canvas.width(),
                y,
                self.config.grid_stroke_width,
                palette.grid,
            ));
        }

        if !self.geometry.is_empty() {
            let stroke = PathStroke::new(
                self.config.line_stroke_width,
                palette.stroke_for(self.percent_change),
            );
            frame = frame
                .with_path(PathPrimitive::stroked(
                    self.geometry.line_path.clone(),
                    stroke,
                ))
                .with_path(PathPrimitive::filled(
                    self.geometry.area_path.clone(),
                    palette.fill_for(self.percent_change),
                ));

            if let Some(price) = self.current_price.filter(|_| self.config.show_price_label) {
                frame = frame.with_text(TextPrimitive::new(
                    format_price(price),
                    canvas.width() - PRICE_LABEL_INSET,
                    canvas.margin_top() + self.config.price_label_font_size,
                    self.config.price_label_font_size,
                    palette.label,
                    TextHAlign::Right,
                ));
            }
        }

        trace!(
            lines = frame.lines.len(),
            paths = frame.paths.len(),
            texts = frame.texts.len(),
            "build render frame"
        );
        frame.validate()?;
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }
}
