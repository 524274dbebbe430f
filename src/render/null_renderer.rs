use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// Headless renderer that validates frames and records what they contained.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_polyline_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = 0;
        self.last_polyline_count = 0;
        self.last_line_count = 0;
        self.last_text_count = 0;
        for command in &frame.commands {
            match command {
                DrawCommand::Clear(_) => {}
                DrawCommand::FillRect(_) => self.last_rect_count += 1,
                DrawCommand::StrokeLine(_) => self.last_line_count += 1,
                DrawCommand::StrokePolyline(_) => self.last_polyline_count += 1,
                DrawCommand::Text(_) => self.last_text_count += 1,
            }
        }
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
