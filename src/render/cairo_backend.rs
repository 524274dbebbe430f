use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap};
use pango::FontDescription;

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawCommand, LinePrimitive, LineStrokeStyle, PolylinePrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an externally owned Cairo context, such as a
/// GTK `DrawingArea` draw function.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango renderer backed by an offscreen image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            font_family: "Lato".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface contents as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Clear(region) => {
                    self.clear(context, *region)?;
                    stats.clears += 1;
                }
                DrawCommand::FillRect(rect) => {
                    fill_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::StrokeLine(line) => {
                    stroke_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::StrokePolyline(polyline) => {
                    stroke_polyline(context, polyline)?;
                    stats.polylines_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    self.show_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn clear(&self, context: &Context, region: Rect) -> ChartResult<()> {
        apply_color(context, self.clear_color);
        context.rectangle(region.x, region.y, region.width, region.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to clear region", err))
    }

    fn show_text(&self, context: &Context, text: &TextPrimitive) {
        let layout = pangocairo::functions::create_layout(context);
        let font_description =
            FontDescription::from_string(&format!("{} {}px", self.font_family, text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn fill_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    apply_color(context, rect.fill_color);
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill rectangle", err))
}

fn stroke_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    context.save().map_err(|err| map_backend_error("failed to save state", err))?;
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    if let LineStrokeStyle::Dashed { on_px, off_px } = line.stroke_style {
        context.set_dash(&[on_px, off_px], 0.0);
    }
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err));
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore state", err))?;
    stroked
}

fn stroke_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<()> {
    let Some(((x0, y0), rest)) = polyline.points.split_first() else {
        return Ok(());
    };
    context.save().map_err(|err| map_backend_error("failed to save state", err))?;
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_line_cap(LineCap::Round);
    context.move_to(*x0, *y0);
    for (x, y) in rest {
        context.line_to(*x, *y);
    }
    let stroked = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err));
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore state", err))?;
    stroked
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
