use crate::foundation::config::{BG, GRID, OPAQUE};
use crate::foundation::math::Fnv1a64;

/// Straight (non-premultiplied) RGBA8 pixel. Canvases only ever hold opaque pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque gray of the given level.
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
            a: OPAQUE,
        }
    }

    /// Opaque color from RGB components.
    pub const fn opaque(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: OPAQUE,
        }
    }

    /// Channels as an array, in RGBA order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fixed-size pixel buffer a renderer paints into.
///
/// Coordinates are signed: renderers routinely compute positions left of, above, or past the
/// canvas (log of small values, events outside the time range). Such writes go to a sink pixel and
/// are discarded, so drawing code never needs its own bounds branches.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
    sink: Rgba8,
}

impl Canvas {
    /// Allocate a canvas filled with the background gray.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgba8::gray(BG); len],
            sink: Rgba8::default(),
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Mutable access to the pixel at `(x, y)`.
    ///
    /// Out of bounds, this returns the sink pixel instead: writes through it are discarded and
    /// its contents are meaningless. Read-modify-write the result immediately; never hold on to
    /// it across calls.
    pub fn pixel_mut(&mut self, x: i64, y: i64) -> &mut Rgba8 {
        match self.index(x, y) {
            Some(i) => &mut self.pixels[i],
            None => &mut self.sink,
        }
    }

    /// Checked read of the pixel at `(x, y)`.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: i64, y: i64, c: Rgba8) {
        *self.pixel_mut(x, y) = c;
    }

    /// Draw a vertical grid line at column `x`.
    pub fn draw_x_grid_line(&mut self, x: i64) {
        self.fill_column(x, 0, i64::from(self.height), Rgba8::gray(GRID));
    }

    /// Draw a horizontal grid line at row `y`.
    pub fn draw_y_grid_line(&mut self, y: i64) {
        self.fill_row(y, 0, i64::from(self.width), Rgba8::gray(GRID));
    }

    /// Overwrite rows `y0..y1` of column `x`, clipped to the canvas.
    pub fn fill_column(&mut self, x: i64, y0: i64, y1: i64, c: Rgba8) {
        let y0 = y0.max(0);
        let y1 = y1.min(i64::from(self.height));
        for y in y0..y1 {
            self.set_pixel(x, y, c);
        }
    }

    /// Overwrite columns `x0..x1` of row `y`, clipped to the canvas.
    pub fn fill_row(&mut self, y: i64, x0: i64, x1: i64, c: Rgba8) {
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width));
        for x in x0..x1 {
            self.set_pixel(x, y, c);
        }
    }

    /// Tightly packed RGBA8 bytes, row-major.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Convert into an [`image::RgbaImage`] for encoding.
    pub fn into_rgba_image(self) -> image::RgbaImage {
        let w = self.width as usize;
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(self.pixels[(y as usize) * w + (x as usize)].to_array())
        })
    }

    /// Stable 64-bit digest of dimensions and pixels, for reproducibility checks.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        for p in &self.pixels {
            h.write_bytes(&p.to_array());
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/surface.rs"]
mod tests;
