/// Drawing surface abstraction.
///
/// Game code only talks to a `Surface` in logical canvas coordinates; the
/// terminal mapping lives behind it in `core::canvas`.
use crate::core::raster::Raster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.0, c.1, c.2)
    }
}

/// Rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PxRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl PxRect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgb,
    pub bold: bool,
}

/// The opaque drawing services a frame is built from.
pub trait Surface {
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: PxRect, color: Rgb);

    /// Blit `src` of `raster` scaled into `dst`. Transparent pixels are skipped.
    /// `None` for `src` means the whole raster.
    fn draw(&mut self, raster: &Raster, src: Option<PxRect>, dst: PxRect);

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle);

    /// Like `draw_text`, breaking lines on word boundaries to fit `wrap_width`.
    fn draw_text_wrapped(&mut self, text: &str, at: Point, wrap_width: u32, style: TextStyle);
}
