use std::fmt::Write;

use crate::error::ChartResult;
use crate::render::svg_path::svg_path_data;
use crate::render::{PathPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Renders frames into a standalone SVG document.
///
/// The viewBox matches the frame canvas, so the document scales to any
/// container size. Paths without vertices are skipped.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Document produced by the last successful render; empty before that.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut stats = SvgRenderStats::default();
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            frame.canvas.width(),
            frame.canvas.height()
        );

        if !frame.lines.is_empty() {
            out.push_str(r#"<g class="grid">"#);
            for line in &frame.lines {
                let _ = write!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                    line.x1,
                    line.y1,
                    line.x2,
                    line.y2,
                    line.color.to_css(),
                    line.stroke_width
                );
                stats.lines_drawn += 1;
            }
            out.push_str("</g>");
        }

        for path in &frame.paths {
            if path.points.is_empty() {
                continue;
            }
            write_path(&mut out, path);
            stats.paths_drawn += 1;
        }

        for text in &frame.texts {
            write_text(&mut out, text);
            stats.texts_drawn += 1;
        }

        out.push_str("</svg>");
        self.document = out;
        self.last_stats = stats;
        Ok(())
    }
}

fn write_path(out: &mut String, path: &PathPrimitive) {
    let fill = path
        .fill
        .map_or_else(|| "none".to_owned(), |color| color.to_css());
    let _ = write!(
        out,
        r#"<path d="{}" fill="{fill}""#,
        svg_path_data(&path.points, path.closed)
    );
    if let Some(stroke) = path.stroke {
        let _ = write!(
            out,
            r#" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            stroke.color.to_css(),
            stroke.width
        );
    }
    out.push_str("/>");
}

fn write_text(out: &mut String, text: &TextPrimitive) {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}">{}</text>"#,
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_css(),
        escape_xml(&text.text)
    );
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
