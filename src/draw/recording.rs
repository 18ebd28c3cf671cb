//! In-memory surface that records every call, for tests without a display.

use super::surface::{DrawError, DrawingSurface, Point, Shadow, StrokeStyle};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceOp {
    Begin(Point, StrokeStyle),
    Extend(Point),
    Finish(Shadow),
    Clear,
    Export,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    pub painted_segments: usize,
    pub fail_export: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.painted_segments == 0
    }
}

impl DrawingSurface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (100, 100)
    }

    fn begin_path(&mut self, at: Point, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::Begin(at, *style));
    }

    fn extend_path(&mut self, to: Point) -> Result<(), DrawError> {
        self.ops.push(SurfaceOp::Extend(to));
        self.painted_segments += 1;
        Ok(())
    }

    fn finish_path(&mut self, shadow: &Shadow) -> Result<(), DrawError> {
        self.ops.push(SurfaceOp::Finish(*shadow));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DrawError> {
        self.ops.push(SurfaceOp::Clear);
        self.painted_segments = 0;
        Ok(())
    }

    fn export_png(&mut self) -> Result<Vec<u8>, DrawError> {
        self.ops.push(SurfaceOp::Export);
        if self.fail_export {
            return Err(DrawError::Png("export disabled".to_string()));
        }
        Ok(vec![137, 80, 78, 71, 13, 10, 26, 10])
    }
}
