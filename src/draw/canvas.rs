//! Offscreen Cairo canvas implementing [`DrawingSurface`].

use super::render;
use super::surface::{DrawError, DrawingSurface, Point, Shadow, StrokeStyle};
use cairo::{Context, Format, ImageSurface};

/// An ARGB32 image surface that strokes are painted onto.
///
/// Starts fully transparent. Only the points of the current path are kept;
/// everything else lives in the pixel buffer.
pub struct CairoCanvas {
    surface: ImageSurface,
    width: u32,
    height: u32,
    style: StrokeStyle,
    path: Vec<Point>,
}

impl std::fmt::Debug for CairoCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CairoCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("path_len", &self.path.len())
            .finish()
    }
}

impl CairoCanvas {
    /// Creates a transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, DrawError> {
        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
        Ok(Self {
            surface,
            width,
            height,
            style: StrokeStyle::default(),
            path: Vec::new(),
        })
    }

    fn context(&self) -> Result<Context, DrawError> {
        Ok(Context::new(&self.surface)?)
    }

    /// Number of points in the current path.
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Returns the native-endian ARGB32 value of one pixel (premultiplied).
    ///
    /// Out-of-bounds coordinates read as transparent.
    pub fn pixel(&mut self, x: u32, y: u32) -> Result<u32, DrawError> {
        if x >= self.width || y >= self.height {
            return Ok(0);
        }
        let stride = self.surface.stride() as usize;
        let data = self
            .surface
            .data()
            .map_err(|e| DrawError::PixelAccess(e.to_string()))?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes = [
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ];
        Ok(u32::from_ne_bytes(bytes))
    }

    /// Alpha channel of one pixel (0 = untouched).
    pub fn alpha(&mut self, x: u32, y: u32) -> Result<u8, DrawError> {
        Ok((self.pixel(x, y)? >> 24) as u8)
    }

    /// True when no pixel has been painted.
    pub fn is_blank(&mut self) -> Result<bool, DrawError> {
        let data = self
            .surface
            .data()
            .map_err(|e| DrawError::PixelAccess(e.to_string()))?;
        Ok(data.iter().all(|byte| *byte == 0))
    }
}

impl DrawingSurface for CairoCanvas {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn begin_path(&mut self, at: Point, style: &StrokeStyle) {
        self.style = *style;
        self.path.clear();
        self.path.push(at);
    }

    fn extend_path(&mut self, to: Point) -> Result<(), DrawError> {
        let Some(&from) = self.path.last() else {
            // No path yet: behave like a move-to.
            self.path.push(to);
            return Ok(());
        };
        self.path.push(to);

        let ctx = self.context()?;
        render::render_segment(&ctx, from, to, self.style.color, self.style.line_width)?;
        Ok(())
    }

    fn finish_path(&mut self, shadow: &Shadow) -> Result<(), DrawError> {
        let ctx = self.context()?;
        render::render_soft_shadow(&ctx, &self.path, self.style.line_width, shadow)?;
        render::render_path(&ctx, &self.path, self.style.color, self.style.line_width)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DrawError> {
        self.path.clear();
        let ctx = self.context()?;
        render::clear_all(&ctx)?;
        Ok(())
    }

    fn export_png(&mut self) -> Result<Vec<u8>, DrawError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface
            .write_to_png(&mut buffer)
            .map_err(|e| DrawError::Png(e.to_string()))?;
        Ok(buffer)
    }
}
